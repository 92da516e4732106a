use crate::ast::Query;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A positional argument bound to one placeholder.
///
/// Values are handed to the database client as-is; no conversion is done
/// beyond the `From` impls below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Bytes(Vec<u8>),
    Timestamp(NaiveDateTime),
    Json(serde_json::Value),
}

macro_rules! value_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(n: $ty) -> Self {
                    Value::Int(n as i64)
                }
            }
        )*
    };
}

value_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Value::Float(n as f64)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Vec<u8>> for Value {
    fn from(bytes: Vec<u8>) -> Self {
        Value::Bytes(bytes)
    }
}

impl From<NaiveDateTime> for Value {
    fn from(ts: NaiveDateTime) -> Self {
        Value::Timestamp(ts)
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        Value::Json(json)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(v) => v.into(),
            None => Value::Null,
        }
    }
}

/// Right-hand side of a comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ConditionValue {
    /// One placeholder, one argument.
    Literal(Value),
    /// Expands to a parenthesized placeholder list, one argument each.
    List(Vec<Value>),
    /// Rendered with the dialect's NULL token; binds nothing.
    Null,
    /// Compiled inline as a parenthesized statement.
    Subquery(Box<Query>),
}

impl From<Value> for ConditionValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => ConditionValue::Null,
            other => ConditionValue::Literal(other),
        }
    }
}

macro_rules! condition_value_from {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for ConditionValue {
                fn from(v: $ty) -> Self {
                    ConditionValue::from(Value::from(v))
                }
            }
        )*
    };
}

condition_value_from!(
    i8, i16, i32, i64, u8, u16, u32, bool, f32, f64, &str, String, NaiveDateTime,
    serde_json::Value
);

impl<T: Into<Value>> From<Option<T>> for ConditionValue {
    fn from(opt: Option<T>) -> Self {
        ConditionValue::from(Value::from(opt))
    }
}

impl<T: Into<Value>> From<Vec<T>> for ConditionValue {
    fn from(values: Vec<T>) -> Self {
        ConditionValue::List(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for ConditionValue {
    fn from(values: [T; N]) -> Self {
        ConditionValue::List(values.into_iter().map(Into::into).collect())
    }
}

impl From<Query> for ConditionValue {
    fn from(query: Query) -> Self {
        ConditionValue::Subquery(Box::new(query))
    }
}

/// Ordered column -> value mapping used by INSERT rows and UPDATE assignments.
///
/// Setting a column twice keeps its first position and the last value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Row {
    entries: Vec<(String, Value)>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(column.into(), value.into());
        self
    }

    fn insert(&mut self, column: String, value: Value) {
        match self.entries.iter_mut().find(|(c, _)| *c == column) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((column, value)),
        }
    }

    pub fn get(&self, column: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(c, _)| c == column)
            .map(|(_, v)| v)
    }

    pub fn contains(&self, column: &str) -> bool {
        self.get(column).is_some()
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(c, _)| c.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(c, v)| (c.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True when both rows declare exactly the same column set, in any order.
    pub fn same_columns(&self, other: &Row) -> bool {
        self.len() == other.len() && self.columns().all(|c| other.contains(c))
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Row {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut row = Row::new();
        for (column, value) in iter {
            row.insert(column.into(), value.into());
        }
        row
    }
}

impl<K: Into<String>, V: Into<Value>, const N: usize> From<[(K, V); N]> for Row {
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl<K: Into<String>, V: Into<Value>> From<Vec<(K, V)>> for Row {
    fn from(entries: Vec<(K, V)>) -> Self {
        entries.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_becomes_null_condition() {
        assert_eq!(ConditionValue::from(None::<i64>), ConditionValue::Null);
        assert_eq!(ConditionValue::from(Value::Null), ConditionValue::Null);
    }

    #[test]
    fn test_vec_becomes_list() {
        assert_eq!(
            ConditionValue::from(vec![1, 2, 3]),
            ConditionValue::List(vec![Value::Int(1), Value::Int(2), Value::Int(3)])
        );
    }

    #[test]
    fn test_row_keeps_first_position() {
        let row = Row::new().set("a", 1).set("b", 2).set("a", 3);
        assert_eq!(row.columns().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(row.get("a"), Some(&Value::Int(3)));
    }

    #[test]
    fn test_same_columns_ignores_order() {
        let first = Row::from([("a", 1), ("b", 2)]);
        let second = Row::from([("b", 3), ("a", 4)]);
        let third = Row::from([("a", 1)]);
        assert!(first.same_columns(&second));
        assert!(!first.same_columns(&third));
        assert!(!third.same_columns(&first));
    }
}
