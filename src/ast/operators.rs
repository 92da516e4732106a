use serde::{Deserialize, Serialize};

/// Comparison and arithmetic operators usable in a condition.
///
/// Keys follow the condition specifier grammar (`"<field>__<key>"`).
/// Anything outside the known set parses to [`Operator::Other`] and is left
/// for the dialect to accept or reject.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    Eq,
    Neq,
    Gt,
    Gte,
    Lt,
    Lte,
    Like,
    In,
    NotIn,
    Is,
    IsNot,
    IDiv,
    Div,
    Mult,
    Add,
    Sub,
    Mod,
    Other(String),
}

impl Operator {
    pub fn from_key(key: &str) -> Self {
        match key {
            "eq" => Operator::Eq,
            "neq" => Operator::Neq,
            "gt" => Operator::Gt,
            "gte" => Operator::Gte,
            "lt" => Operator::Lt,
            "lte" => Operator::Lte,
            "like" => Operator::Like,
            "in" => Operator::In,
            "not_in" => Operator::NotIn,
            "is" => Operator::Is,
            "isnot" => Operator::IsNot,
            "idiv" => Operator::IDiv,
            "div" => Operator::Div,
            "mult" => Operator::Mult,
            "add" => Operator::Add,
            "sub" => Operator::Sub,
            "mod" => Operator::Mod,
            other => Operator::Other(other.to_string()),
        }
    }

    pub fn key(&self) -> &str {
        match self {
            Operator::Eq => "eq",
            Operator::Neq => "neq",
            Operator::Gt => "gt",
            Operator::Gte => "gte",
            Operator::Lt => "lt",
            Operator::Lte => "lte",
            Operator::Like => "like",
            Operator::In => "in",
            Operator::NotIn => "not_in",
            Operator::Is => "is",
            Operator::IsNot => "isnot",
            Operator::IDiv => "idiv",
            Operator::Div => "div",
            Operator::Mult => "mult",
            Operator::Add => "add",
            Operator::Sub => "sub",
            Operator::Mod => "mod",
            Operator::Other(key) => key,
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Boolean operator joining the children of a condition group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum LogicalOp {
    #[default]
    And,
    Or,
    Xor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum JoinKind {
    #[default]
    Inner,
    Left,
}

impl std::fmt::Display for JoinKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JoinKind::Inner => write!(f, "inner"),
            JoinKind::Left => write!(f, "left"),
        }
    }
}

/// How an INSERT treats rows that collide with existing keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum InsertMode {
    #[default]
    Insert,
    Ignore,
    Replace,
}

impl std::fmt::Display for InsertMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InsertMode::Insert => write!(f, "insert"),
            InsertMode::Ignore => write!(f, "insert_ignore"),
            InsertMode::Replace => write!(f, "replace"),
        }
    }
}
