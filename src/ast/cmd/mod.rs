use crate::ast::{Condition, Field, InsertMode, JoinKind, OrderBy, Row};
use serde::{Deserialize, Serialize};

/// The statement verb and its payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Action {
    Select(Vec<Field>),
    Update(Row),
    Insert { rows: Vec<Row>, mode: InsertMode },
    Delete,
}

/// An immutable description of one SQL statement.
///
/// Built through the fluent methods in [`query`](self) and compiled with
/// [`ToSql`](crate::transpiler::ToSql). Every builder method consumes the
/// value and returns a new one; clone first to branch a shared base query.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Query {
    pub action: Option<Action>,
    pub table: Option<TableRef>,
    #[serde(default)]
    pub join: Option<JoinSpec>,
    #[serde(default)]
    pub where_clause: Option<Condition>,
    #[serde(default)]
    pub having: Option<Condition>,
    #[serde(default)]
    pub order_by: Vec<OrderBy>,
    #[serde(default)]
    pub group_by: Vec<Field>,
    #[serde(default)]
    pub limit: Option<i64>,
    #[serde(default)]
    pub offset: Option<i64>,
    #[serde(default)]
    pub on_duplicate_key: Option<DuplicateKeyUpdate>,
}

/// A table name with an optional schema. Aliases are never stored here;
/// they are assigned per compile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRef {
    pub name: String,
    #[serde(default)]
    pub schema: Option<String>,
}

impl TableRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            schema: None,
        }
    }

    pub fn with_schema(mut self, schema: impl Into<String>) -> Self {
        self.schema = Some(schema.into());
        self
    }
}

impl From<&str> for TableRef {
    fn from(name: &str) -> Self {
        TableRef::new(name)
    }
}

impl From<String> for TableRef {
    fn from(name: String) -> Self {
        TableRef::new(name)
    }
}

/// `<kind> JOIN table ON main.main_field = joined.join_field`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JoinSpec {
    pub kind: JoinKind,
    pub table: TableRef,
    pub main_field: String,
    pub join_field: String,
}

/// What an `ON DUPLICATE KEY UPDATE` clause assigns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DuplicateKeyUpdate {
    /// Every inserted column takes its proposed value.
    Proposed,
    /// Only these columns, each bound to a new literal.
    Assign(Row),
}

mod constructors;
mod query;
