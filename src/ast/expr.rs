use crate::ast::SortOrder;
use serde::{Deserialize, Serialize};

/// A field reference in a select list, condition, grouping or ordering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Field {
    /// Column name, optionally prefixed with a table name (`"users.id"`).
    Named(String),
    /// `NAME(arg, ...)`
    Function(FunctionCall),
    /// Emitted verbatim, never quoted or qualified (e.g. the `1` in `COUNT(1)`).
    Raw(String),
}

impl Field {
    pub fn named(name: impl Into<String>) -> Self {
        Field::Named(name.into())
    }

    pub fn raw(text: impl Into<String>) -> Self {
        Field::Raw(text.into())
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Field::Named(name) => write!(f, "{}", name),
            Field::Function(call) => write!(f, "{}", call),
            Field::Raw(text) => write!(f, "{}", text),
        }
    }
}

impl From<&str> for Field {
    fn from(name: &str) -> Self {
        Field::Named(name.to_string())
    }
}

impl From<String> for Field {
    fn from(name: String) -> Self {
        Field::Named(name)
    }
}

impl From<&String> for Field {
    fn from(name: &String) -> Self {
        Field::Named(name.clone())
    }
}

impl From<FunctionCall> for Field {
    fn from(call: FunctionCall) -> Self {
        Field::Function(call)
    }
}

/// A function applied to fields.
///
/// `name` is a dialect lookup key (`"count"`, `"max"`, ...). Names missing
/// from the dialect's table are emitted unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionCall {
    pub name: String,
    pub args: Vec<Field>,
}

impl FunctionCall {
    pub fn new<I, F>(name: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = F>,
        F: Into<Field>,
    {
        Self {
            name: name.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }
}

impl std::fmt::Display for FunctionCall {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}(", self.name)?;
        for (i, arg) in self.args.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", arg)?;
        }
        write!(f, ")")
    }
}

/// ORDER BY entry. A missing direction leaves the database default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderBy {
    pub field: Field,
    pub direction: Option<SortOrder>,
}

impl OrderBy {
    pub fn new(field: impl Into<Field>, direction: Option<SortOrder>) -> Self {
        Self {
            field: field.into(),
            direction,
        }
    }
}

impl From<&str> for OrderBy {
    fn from(name: &str) -> Self {
        OrderBy::new(name, None)
    }
}

impl From<String> for OrderBy {
    fn from(name: String) -> Self {
        OrderBy::new(name, None)
    }
}

impl From<Field> for OrderBy {
    fn from(field: Field) -> Self {
        OrderBy::new(field, None)
    }
}

impl From<FunctionCall> for OrderBy {
    fn from(call: FunctionCall) -> Self {
        OrderBy::new(call, None)
    }
}
