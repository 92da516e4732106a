//! Clauses shared between statement verbs.

use crate::ast::Value;
use crate::error::{QueryError, QueryResult};
use crate::transpiler::compiler::{Clause, Compiler};

impl Compiler<'_> {
    /// `<kind> JOIN table AS alias ON main.field = joined.field`
    pub fn join_clause(&self) -> QueryResult<Clause> {
        let (Some(join), Some(alias)) = (&self.query.join, &self.join_alias) else {
            return Ok(Clause::new());
        };

        let joined_field = self
            .join_field(&join.join_field)
            .ok_or_else(|| QueryError::invalid("joined table has no alias"))?;

        let mut clause = Clause::keyword(self.generator.encode_join_type(join.kind)?);
        self.aliased_table(&join.table, alias, &mut clause);
        clause.push("ON");
        clause.push(self.main_field(&join.main_field));
        clause.push("=");
        clause.push(joined_field);
        Ok(clause)
    }

    pub fn group_by_clause(&self) -> QueryResult<Clause> {
        if self.query.group_by.is_empty() {
            return Ok(Clause::new());
        }
        let mut clause = Clause::keyword("GROUP BY");
        clause.separated(&self.query.group_by, ", ", |c, field| self.field(field, c))?;
        Ok(clause)
    }

    /// `ORDER BY field [ASC|DESC], ...`; entries without a direction use
    /// the database default.
    pub fn order_by_clause(&self) -> QueryResult<Clause> {
        if self.query.order_by.is_empty() {
            return Ok(Clause::new());
        }
        let mut clause = Clause::keyword("ORDER BY");
        clause.separated(&self.query.order_by, ", ", |c, entry| {
            self.field(&entry.field, c)?;
            if let Some(direction) = entry.direction {
                c.push(self.generator.encode_sort_order(direction));
            }
            Ok(())
        })?;
        Ok(clause)
    }

    pub fn offset_clause(&self) -> Clause {
        self.bound_keyword("OFFSET", self.query.offset)
    }

    pub fn limit_clause(&self) -> Clause {
        self.bound_keyword("LIMIT", self.query.limit)
    }

    fn bound_keyword(&self, keyword: &str, n: Option<i64>) -> Clause {
        match n {
            Some(n) => {
                let mut clause = Clause::keyword(keyword);
                clause.bind(self.generator.placeholder(), Value::Int(n));
                clause
            }
            None => Clause::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::builders::{asc, count, desc};
    use crate::ast::{JoinKind, Query, Value};
    use crate::transpiler::alias::AliasAllocator;
    use crate::transpiler::compiler::Compiler;
    use crate::transpiler::sql::MySqlGenerator;

    #[test]
    fn test_join_on_distinct_fields() {
        let query = Query::select(["x"])
            .on_table("t1")
            .join_with(JoinKind::Left, "t2", "user_id", "id");
        let mut aliases = AliasAllocator::new();
        let compiler = Compiler::new(&query, &MySqlGenerator, &mut aliases).unwrap();
        assert_eq!(
            compiler.join_clause().unwrap().sql(),
            "LEFT JOIN `t2` AS `b` ON `a`.`user_id` = `b`.`id`"
        );
    }

    #[test]
    fn test_group_and_order_by() {
        let query = Query::select([count(None)])
            .on_table("t")
            .group_by(["kind", "t.region"])
            .order_by([asc("kind"), desc("region")]);
        let mut aliases = AliasAllocator::new();
        let compiler = Compiler::new(&query, &MySqlGenerator, &mut aliases).unwrap();
        assert_eq!(
            compiler.group_by_clause().unwrap().sql(),
            "GROUP BY `a`.`kind`, `a`.`region`"
        );
        assert_eq!(
            compiler.order_by_clause().unwrap().sql(),
            "ORDER BY `a`.`kind` ASC, `a`.`region` DESC"
        );
    }

    #[test]
    fn test_order_by_without_direction() {
        let query = Query::select(["x"]).on_table("t").order_by(["x"]);
        let mut aliases = AliasAllocator::new();
        let compiler = Compiler::new(&query, &MySqlGenerator, &mut aliases).unwrap();
        assert_eq!(compiler.order_by_clause().unwrap().sql(), "ORDER BY `a`.`x`");
    }

    #[test]
    fn test_limit_and_offset_bind_arguments() {
        let query = Query::select(["x"])
            .on_table("t")
            .limit(10)
            .unwrap()
            .offset(20)
            .unwrap();
        let mut aliases = AliasAllocator::new();
        let compiler = Compiler::new(&query, &MySqlGenerator, &mut aliases).unwrap();

        let offset = compiler.offset_clause();
        assert_eq!(offset.sql(), "OFFSET %s");
        assert_eq!(offset.args, vec![Value::Int(20)]);

        let limit = compiler.limit_clause();
        assert_eq!(limit.sql(), "LIMIT %s");
        assert_eq!(limit.args, vec![Value::Int(10)]);
    }
}
