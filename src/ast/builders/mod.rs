//! Ergonomic builder functions for query AST nodes.
//!
//! # Modules
//!
//! - `conditions` - WHERE/HAVING comparisons and boolean groups
//! - `functions` - Aggregate and scalar function calls (COUNT, MAX, UTC_TIMESTAMP, ...)
//! - `ordering` - ORDER BY directions
//!
//! # Example
//! ```
//! use sqlquery::ast::Query;
//! use sqlquery::ast::builders::*;
//!
//! let query = Query::select(["id"])
//!     .on_table("orders")
//!     .filter([or([cond("status__eq", "paid"), cond("total__gt", 100)])])
//!     .unwrap()
//!     .order_by([desc("created_at")]);
//! ```

pub mod conditions;
pub mod functions;
pub mod ordering;

pub use conditions::{and, compare, cond, or, xor};
pub use functions::{avg, count, function, max, min, sum, unix_timestamp, utcnow};
pub use ordering::{asc, desc};
