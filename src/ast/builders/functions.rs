//! Function call builders.
//!
//! Names are dialect lookup keys; the dialect decides the SQL spelling.

use crate::ast::{Field, FunctionCall};

/// Any function, including user-defined ones the dialect does not know.
///
/// ```
/// use sqlquery::ast::builders::function;
///
/// let call = function("MOVING_AVG", ["temperature"]);
/// assert_eq!(call.to_string(), "MOVING_AVG(temperature)");
/// ```
pub fn function<I, F>(name: &str, args: I) -> FunctionCall
where
    I: IntoIterator<Item = F>,
    F: Into<Field>,
{
    FunctionCall::new(name, args)
}

/// `COUNT(field)`, or `COUNT(1)` when no field is given.
pub fn count(field: Option<&str>) -> FunctionCall {
    match field {
        Some(name) => FunctionCall::new("count", [Field::named(name)]),
        None => FunctionCall::new("count", [Field::raw("1")]),
    }
}

pub fn max(field: &str) -> FunctionCall {
    FunctionCall::new("max", [field])
}

pub fn min(field: &str) -> FunctionCall {
    FunctionCall::new("min", [field])
}

pub fn sum(field: &str) -> FunctionCall {
    FunctionCall::new("sum", [field])
}

pub fn avg(field: &str) -> FunctionCall {
    FunctionCall::new("avg", [field])
}

/// Current UTC timestamp.
pub fn utcnow() -> FunctionCall {
    FunctionCall::new("utcnow", Vec::<Field>::new())
}

pub fn unix_timestamp() -> FunctionCall {
    FunctionCall::new("unix_timestamp", Vec::<Field>::new())
}
