//! UPDATE generation.

use crate::ast::Row;
use crate::error::{QueryError, QueryResult};
use crate::transpiler::compiler::{Clause, Compiler};

impl Compiler<'_> {
    /// `UPDATE table AS alias [join] SET alias.col = %s, ...`
    ///
    /// Assigned columns always belong to the main table.
    pub fn update_clause(&self, assignments: &Row) -> QueryResult<Clause> {
        if assignments.is_empty() {
            return Err(QueryError::invalid("update requires at least one assignment"));
        }

        let placeholder = self.generator.placeholder();
        let mut clause = Clause::keyword("UPDATE");
        self.aliased_table(self.table, &self.table_alias, &mut clause);
        clause.append(self.join_clause()?);
        clause.push("SET");
        clause.separated(assignments.iter(), ", ", |c, (column, value)| {
            c.push(self.main_field(column));
            c.push("=");
            c.bind(placeholder, value.clone());
            Ok(())
        })?;
        Ok(clause)
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::{Query, Row, Value};
    use crate::transpiler::alias::AliasAllocator;
    use crate::transpiler::compiler::Compiler;
    use crate::transpiler::sql::MySqlGenerator;

    #[test]
    fn test_update_multiple_fields_keeps_order() {
        let query = Query::update(Row::new().set("test", 1).set("test2", "x")).on_table("table");
        let mut aliases = AliasAllocator::new();
        let compiler = Compiler::new(&query, &MySqlGenerator, &mut aliases).unwrap();
        let clause = compiler.statement().unwrap();

        assert_eq!(
            clause.sql(),
            "UPDATE `table` AS `a` SET `a`.`test` = %s, `a`.`test2` = %s"
        );
        assert_eq!(clause.args, vec![Value::Int(1), Value::from("x")]);
    }

    #[test]
    fn test_update_without_assignments_is_invalid() {
        let query = Query::update(Row::new()).on_table("table");
        let mut aliases = AliasAllocator::new();
        let compiler = Compiler::new(&query, &MySqlGenerator, &mut aliases).unwrap();
        assert!(compiler.statement().is_err());
    }
}
