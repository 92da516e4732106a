//! Query builder methods for Query.
//!
//! Fluent methods: on_table, join, filter, having, order_by, group_by, limit, etc.

use crate::ast::{
    Condition, DuplicateKeyUpdate, Field, JoinKind, JoinSpec, LogicalOp, OrderBy, Query, Row,
    TableRef,
};
use crate::error::{QueryError, QueryResult};

impl Query {
    pub fn on_table(mut self, table: impl Into<TableRef>) -> Self {
        self.table = Some(table.into());
        self
    }

    /// Inner join `table` on `main_field`, using the same field name on both sides.
    pub fn join(self, table: impl Into<TableRef>, main_field: impl Into<String>) -> Self {
        let main_field = main_field.into();
        let join_field = main_field.clone();
        self.join_with(JoinKind::Inner, table, main_field, join_field)
    }

    /// Inner join `table` on `main_field` (this table) = `join_field` (joined table).
    pub fn join_on(
        self,
        table: impl Into<TableRef>,
        main_field: impl Into<String>,
        join_field: impl Into<String>,
    ) -> Self {
        self.join_with(JoinKind::Inner, table, main_field, join_field)
    }

    pub fn join_with(
        mut self,
        kind: JoinKind,
        table: impl Into<TableRef>,
        main_field: impl Into<String>,
        join_field: impl Into<String>,
    ) -> Self {
        self.join = Some(JoinSpec {
            kind,
            table: table.into(),
            main_field: main_field.into(),
            join_field: join_field.into(),
        });
        self
    }

    /// Set the WHERE clause. Top-level conditions are ANDed together.
    pub fn filter<I, C>(mut self, conditions: I) -> QueryResult<Self>
    where
        I: IntoIterator<Item = C>,
        C: Into<Condition>,
    {
        self.where_clause = Some(and_group(conditions, "filter")?);
        Ok(self)
    }

    /// Set the HAVING clause. Top-level conditions are ANDed together.
    pub fn having<I, C>(mut self, conditions: I) -> QueryResult<Self>
    where
        I: IntoIterator<Item = C>,
        C: Into<Condition>,
    {
        self.having = Some(and_group(conditions, "having")?);
        Ok(self)
    }

    pub fn order_by<I, O>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = O>,
        O: Into<OrderBy>,
    {
        self.order_by = entries.into_iter().map(Into::into).collect();
        self
    }

    pub fn group_by<I, F>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = F>,
        F: Into<Field>,
    {
        self.group_by = fields.into_iter().map(Into::into).collect();
        self
    }

    pub fn limit<N: TryInto<i64>>(mut self, n: N) -> QueryResult<Self> {
        self.limit = Some(non_negative(n, "limit")?);
        Ok(self)
    }

    pub fn offset<N: TryInto<i64>>(mut self, n: N) -> QueryResult<Self> {
        self.offset = Some(non_negative(n, "offset")?);
        Ok(self)
    }

    /// On key collision, set every inserted column to its proposed value.
    pub fn on_duplicate_key_update(mut self) -> Self {
        self.on_duplicate_key = Some(DuplicateKeyUpdate::Proposed);
        self
    }

    /// On key collision, set only these columns to the given values.
    /// An empty row behaves like [`on_duplicate_key_update`](Self::on_duplicate_key_update).
    pub fn on_duplicate_key_update_with(mut self, assignments: impl Into<Row>) -> Self {
        let assignments = assignments.into();
        self.on_duplicate_key = Some(if assignments.is_empty() {
            DuplicateKeyUpdate::Proposed
        } else {
            DuplicateKeyUpdate::Assign(assignments)
        });
        self
    }
}

fn and_group<I, C>(conditions: I, clause: &str) -> QueryResult<Condition>
where
    I: IntoIterator<Item = C>,
    C: Into<Condition>,
{
    let conditions: Vec<Condition> = conditions.into_iter().map(Into::into).collect();
    if conditions.is_empty() {
        return Err(QueryError::validation(format!(
            "{} requires at least one condition",
            clause
        )));
    }
    Ok(Condition::Group {
        op: LogicalOp::And,
        conditions,
    })
}

fn non_negative<N: TryInto<i64>>(n: N, clause: &str) -> QueryResult<i64> {
    match n.try_into() {
        Ok(n) if n >= 0 => Ok(n),
        _ => Err(QueryError::validation(format!(
            "{} must be a non-negative integer",
            clause
        ))),
    }
}
