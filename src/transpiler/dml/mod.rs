//! DML (Data Manipulation Language) clause generation.
//!
//! One module per statement verb, plus the clauses shared between verbs
//! (JOIN, GROUP BY, ORDER BY, OFFSET, LIMIT).

pub mod clauses;
pub mod delete;
pub mod insert;
pub mod select;
pub mod update;
