//! WHERE / HAVING condition trees.

use crate::ast::{Condition, ConditionValue, Field, LogicalOp, Operator, parse_specifier};
use crate::error::{QueryError, QueryResult};
use crate::transpiler::alias::AliasAllocator;
use crate::transpiler::compiler::{Clause, Compiler};

impl Compiler<'_> {
    /// `WHERE ...`, or nothing when the query has no filter.
    pub fn where_clause(&self, aliases: &mut AliasAllocator) -> QueryResult<Clause> {
        self.predicate_clause("WHERE", self.query.where_clause.as_ref(), aliases)
    }

    /// `HAVING ...`, or nothing when the query has no having filter.
    pub fn having_clause(&self, aliases: &mut AliasAllocator) -> QueryResult<Clause> {
        self.predicate_clause("HAVING", self.query.having.as_ref(), aliases)
    }

    fn predicate_clause(
        &self,
        keyword: &str,
        condition: Option<&Condition>,
        aliases: &mut AliasAllocator,
    ) -> QueryResult<Clause> {
        let Some(condition) = condition else {
            return Ok(Clause::new());
        };
        let mut clause = Clause::keyword(keyword);
        self.condition(condition, &mut clause, aliases)?;
        Ok(clause)
    }

    /// Emit one condition node. Groups are emitted bare; the caller brackets
    /// nested groups. Comparisons always bracket themselves.
    pub(crate) fn condition(
        &self,
        condition: &Condition,
        clause: &mut Clause,
        aliases: &mut AliasAllocator,
    ) -> QueryResult<()> {
        match condition {
            Condition::Group { op, conditions } => self.group(*op, conditions, clause, aliases),
            Condition::Compare { field, op, value } => {
                self.comparison(field, op, value, clause, aliases)
            }
            Condition::Spec { spec, value } => {
                let (field, op) = parse_specifier(spec)?;
                self.comparison(&field, &op, value, clause, aliases)
            }
        }
    }

    fn group(
        &self,
        op: LogicalOp,
        conditions: &[Condition],
        clause: &mut Clause,
        aliases: &mut AliasAllocator,
    ) -> QueryResult<()> {
        if conditions.is_empty() {
            return Err(QueryError::invalid(format!(
                "empty {} group in condition tree",
                self.generator.encode_logical_op(op)
            )));
        }

        let joiner = self.generator.encode_logical_op(op);
        for (index, child) in conditions.iter().enumerate() {
            if index > 0 {
                clause.push(joiner);
            }
            if child.is_group() {
                clause.bracketed(|inner| self.condition(child, inner, aliases))?;
            } else {
                self.condition(child, clause, aliases)?;
            }
        }
        Ok(())
    }

    fn comparison(
        &self,
        field: &Field,
        op: &Operator,
        value: &ConditionValue,
        clause: &mut Clause,
        aliases: &mut AliasAllocator,
    ) -> QueryResult<()> {
        let op = self.generator.encode_operator(op)?;
        clause.bracketed(|inner| {
            self.field(field, inner)?;
            inner.push(op);
            self.condition_value(value, inner, aliases)
        })
    }

    fn condition_value(
        &self,
        value: &ConditionValue,
        clause: &mut Clause,
        aliases: &mut AliasAllocator,
    ) -> QueryResult<()> {
        let placeholder = self.generator.placeholder();
        match value {
            ConditionValue::Literal(value) => {
                clause.bind(placeholder, value.clone());
                Ok(())
            }
            ConditionValue::Null => {
                clause.push(self.generator.encode_null());
                Ok(())
            }
            ConditionValue::List(values) => {
                if values.is_empty() {
                    return Err(QueryError::invalid("IN list must not be empty"));
                }
                clause.bracketed(|inner| {
                    inner.separated(values, ",", |c, value| {
                        c.bind(placeholder, value.clone());
                        Ok(())
                    })
                })
            }
            ConditionValue::Subquery(query) => {
                let subquery = Compiler::new(query, self.generator, aliases)?;
                tracing::trace!(
                    alias = subquery.table_alias(),
                    "compiling nested subquery"
                );
                let compiled = subquery.compile(aliases)?;
                clause.bracketed(|inner| {
                    inner.append(compiled);
                    Ok(())
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Query;
    use crate::ast::builders::{cond, or, xor};
    use crate::transpiler::sql::MySqlGenerator;

    fn where_sql(query: &Query) -> (String, usize) {
        let mut aliases = AliasAllocator::new();
        let compiler = Compiler::new(query, &MySqlGenerator, &mut aliases).unwrap();
        let clause = compiler.where_clause(&mut aliases).unwrap();
        (clause.sql(), clause.args.len())
    }

    #[test]
    fn test_top_level_and_is_not_bracketed() {
        let query = Query::select(["id"])
            .on_table("users")
            .filter([cond("id__eq", 1), cond("name__neq", "x")])
            .unwrap();
        assert_eq!(
            where_sql(&query),
            (
                "WHERE (`a`.`id` <=> %s) AND (`a`.`name` <> %s)".to_string(),
                2
            )
        );
    }

    #[test]
    fn test_nested_groups_are_bracketed() {
        let query = Query::select(["id"])
            .on_table("t")
            .filter([xor([cond("x__eq", 1), cond("y__eq", 2)])])
            .unwrap();
        assert_eq!(
            where_sql(&query).0,
            "WHERE ((`a`.`x` <=> %s) XOR (`a`.`y` <=> %s))"
        );
    }

    #[test]
    fn test_null_binds_no_argument() {
        let query = Query::select(["id"])
            .on_table("t")
            .filter([cond("deleted__is", None::<i64>)])
            .unwrap();
        assert_eq!(where_sql(&query), ("WHERE (`a`.`deleted` IS NULL)".to_string(), 0));
    }

    #[test]
    fn test_in_list_binds_each_element() {
        let query = Query::select(["id"])
            .on_table("t")
            .filter([cond("id__in", vec![1, 2, 3])])
            .unwrap();
        assert_eq!(
            where_sql(&query),
            ("WHERE (`a`.`id` IN (%s,%s,%s))".to_string(), 3)
        );
    }

    #[test]
    fn test_empty_in_list_is_rejected() {
        let query = Query::select(["id"])
            .on_table("t")
            .filter([cond("id__in", Vec::<i64>::new())])
            .unwrap();
        let mut aliases = AliasAllocator::new();
        let compiler = Compiler::new(&query, &MySqlGenerator, &mut aliases).unwrap();
        let err = compiler.where_clause(&mut aliases).unwrap_err();
        assert!(matches!(err, QueryError::InvalidQuery(_)));
    }

    #[test]
    fn test_empty_nested_group_is_rejected() {
        let query = Query::select(["id"])
            .on_table("t")
            .filter([or(Vec::<Condition>::new())])
            .unwrap();
        let mut aliases = AliasAllocator::new();
        let compiler = Compiler::new(&query, &MySqlGenerator, &mut aliases).unwrap();
        assert!(compiler.where_clause(&mut aliases).is_err());
    }

    #[test]
    fn test_no_filter_is_empty_clause() {
        let query = Query::select(["id"]).on_table("t");
        assert_eq!(where_sql(&query), (String::new(), 0));
    }
}
