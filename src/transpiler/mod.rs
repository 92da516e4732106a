//! SQL compiler for the query AST.
//!
//! Lowers a [`Query`] into parameterized SQL text plus the positional
//! arguments bound to its placeholders.

pub mod alias;
pub mod compiler;
pub mod conditions;
pub mod dialect;
pub mod dml;
pub mod sql;
pub mod tokens;
pub mod traits;

#[cfg(test)]
mod tests;

use crate::ast::{Query, Value};
use crate::error::QueryResult;

pub use alias::AliasAllocator;
pub use compiler::{Clause, Compiler};
pub use dialect::Dialect;
pub use sql::{AnsiGenerator, MySqlGenerator};
pub use tokens::{Token, serialize_tokens};
pub use traits::SqlGenerator;

/// Query text and its arguments, one argument per placeholder in order.
pub type CompiledQuery = (String, Vec<Value>);

/// Trait for converting AST nodes to SQL.
pub trait ToSql {
    /// Compile with the default (MySQL) dialect.
    fn to_sql(&self) -> QueryResult<CompiledQuery> {
        self.to_sql_with_dialect(Dialect::default())
    }

    fn to_sql_with_dialect(&self, dialect: Dialect) -> QueryResult<CompiledQuery> {
        self.to_sql_with(dialect.generator().as_ref())
    }

    /// Compile with any dialect encoder, including user-provided ones.
    fn to_sql_with(&self, generator: &dyn SqlGenerator) -> QueryResult<CompiledQuery>;
}

impl ToSql for Query {
    fn to_sql_with(&self, generator: &dyn SqlGenerator) -> QueryResult<CompiledQuery> {
        // Fresh allocator per top-level compile; nested subqueries share it.
        let mut aliases = AliasAllocator::new();
        let compiler = Compiler::new(self, generator, &mut aliases)?;
        let clause = compiler.compile(&mut aliases)?;
        let sql = clause.sql();

        tracing::debug!(
            dialect = generator.name(),
            args = clause.args.len(),
            sql = %sql,
            "compiled query"
        );

        Ok((sql, clause.args))
    }
}
