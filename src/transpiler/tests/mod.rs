//! Transpiler test modules.
//!
//! Tests are organized by category:
//! - `core`: SELECT, UPDATE, DELETE, INSERT and full-statement clause order
//! - `dialects`: MySQL vs ANSI rendering and custom generators
//! - `features`: subqueries, joins, functions, upserts, concurrency
