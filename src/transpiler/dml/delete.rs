//! DELETE generation.

use crate::error::QueryResult;
use crate::transpiler::compiler::{Clause, Compiler};

impl Compiler<'_> {
    /// `DELETE FROM table AS alias`, or `DELETE alias FROM table AS alias <join>`
    /// so that only main-table rows are removed.
    pub fn delete_clause(&self) -> QueryResult<Clause> {
        let mut clause = Clause::keyword("DELETE");
        if self.query.join.is_some() {
            clause.push(self.generator.quote_identifier(&self.table_alias));
        }
        clause.push("FROM");
        self.aliased_table(self.table, &self.table_alias, &mut clause);
        clause.append(self.join_clause()?);
        Ok(clause)
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::Query;
    use crate::transpiler::alias::AliasAllocator;
    use crate::transpiler::compiler::Compiler;
    use crate::transpiler::sql::MySqlGenerator;

    fn delete_sql(query: &Query) -> String {
        let mut aliases = AliasAllocator::new();
        let compiler = Compiler::new(query, &MySqlGenerator, &mut aliases).unwrap();
        compiler.delete_clause().unwrap().sql()
    }

    #[test]
    fn test_delete_single_table() {
        assert_eq!(
            delete_sql(&Query::delete().on_table("logs")),
            "DELETE FROM `logs` AS `a`"
        );
    }

    #[test]
    fn test_delete_with_join_names_main_alias() {
        let query = Query::delete().on_table("t1").join("t2", "k");
        assert_eq!(
            delete_sql(&query),
            "DELETE `a` FROM `t1` AS `a` INNER JOIN `t2` AS `b` ON `a`.`k` = `b`.`k`"
        );
    }
}
