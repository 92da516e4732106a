//! Shipped SQL dialect generators.

pub mod ansi;
pub mod mysql;

pub use ansi::AnsiGenerator;
pub use mysql::MySqlGenerator;
