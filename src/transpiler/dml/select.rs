//! SELECT generation.

use crate::ast::Field;
use crate::error::{QueryError, QueryResult};
use crate::transpiler::compiler::{Clause, Compiler};

impl Compiler<'_> {
    /// `SELECT fields FROM table AS alias [join]`
    pub fn select_clause(&self, fields: &[Field]) -> QueryResult<Clause> {
        if fields.is_empty() {
            return Err(QueryError::invalid("select requires at least one field"));
        }

        let mut clause = Clause::keyword("SELECT");
        clause.separated(fields, ", ", |c, field| self.field(field, c))?;
        clause.push("FROM");
        self.aliased_table(self.table, &self.table_alias, &mut clause);
        clause.append(self.join_clause()?);
        Ok(clause)
    }
}
