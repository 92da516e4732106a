//! Statement constructors for Query.

use crate::ast::{Action, Field, InsertMode, Query, Row};
use crate::error::{QueryError, QueryResult};

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    /// `SELECT fields...`
    pub fn select<I, F>(fields: I) -> Self
    where
        I: IntoIterator<Item = F>,
        F: Into<Field>,
    {
        Self::new().with_select(fields)
    }

    /// `UPDATE ... SET column = value, ...`
    pub fn update(assignments: impl Into<Row>) -> Self {
        Self::new().with_update(assignments)
    }

    /// `INSERT INTO ... VALUES (...), ...`
    ///
    /// Rows must all declare the same columns; that is checked when the
    /// query is compiled.
    pub fn insert<I, R>(rows: I) -> QueryResult<Self>
    where
        I: IntoIterator<Item = R>,
        R: Into<Row>,
    {
        Self::new().with_insert(rows, InsertMode::Insert)
    }

    /// `INSERT IGNORE INTO ...`
    pub fn insert_ignore<I, R>(rows: I) -> QueryResult<Self>
    where
        I: IntoIterator<Item = R>,
        R: Into<Row>,
    {
        Self::new().with_insert(rows, InsertMode::Ignore)
    }

    /// `REPLACE INTO ...`
    pub fn replace<I, R>(rows: I) -> QueryResult<Self>
    where
        I: IntoIterator<Item = R>,
        R: Into<Row>,
    {
        Self::new().with_insert(rows, InsertMode::Replace)
    }

    pub fn delete() -> Self {
        Self::new().with_delete()
    }

    // Verb setters on an existing query. Setting a verb replaces any previous one.

    pub fn with_select<I, F>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = F>,
        F: Into<Field>,
    {
        self.action = Some(Action::Select(fields.into_iter().map(Into::into).collect()));
        self
    }

    pub fn with_update(mut self, assignments: impl Into<Row>) -> Self {
        self.action = Some(Action::Update(assignments.into()));
        self
    }

    pub fn with_insert<I, R>(mut self, rows: I, mode: InsertMode) -> QueryResult<Self>
    where
        I: IntoIterator<Item = R>,
        R: Into<Row>,
    {
        let rows: Vec<Row> = rows.into_iter().map(Into::into).collect();
        if rows.is_empty() {
            return Err(QueryError::validation("insert requires at least one row"));
        }
        if rows.iter().any(Row::is_empty) {
            return Err(QueryError::validation("insert rows must set at least one column"));
        }
        self.action = Some(Action::Insert { rows, mode });
        Ok(self)
    }

    pub fn with_delete(mut self) -> Self {
        self.action = Some(Action::Delete);
        self
    }
}
