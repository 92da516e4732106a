use crate::ast::{ConditionValue, Field, FunctionCall, LogicalOp, Operator};
use crate::error::{QueryError, QueryResult};
use nom::{
    IResult,
    branch::alt,
    bytes::complete::{tag, take_until},
    combinator::{all_consuming, rest, verify},
    multi::separated_list1,
};
use serde::{Deserialize, Serialize};

/// A node of a WHERE/HAVING condition tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Condition {
    /// `field <op> value`
    Compare {
        field: Field,
        op: Operator,
        value: ConditionValue,
    },
    /// A comparison written as a `"<field>__<op>"` or `"<field>__<func>__<op>"`
    /// specifier. Parsed when the query is compiled.
    Spec { spec: String, value: ConditionValue },
    /// Children joined by one boolean operator.
    Group {
        op: LogicalOp,
        conditions: Vec<Condition>,
    },
}

impl Condition {
    pub fn is_group(&self) -> bool {
        matches!(self, Condition::Group { .. })
    }
}

impl<V: Into<ConditionValue>> From<(&str, V)> for Condition {
    fn from((spec, value): (&str, V)) -> Self {
        Condition::Spec {
            spec: spec.to_string(),
            value: value.into(),
        }
    }
}

impl<V: Into<ConditionValue>> From<(String, V)> for Condition {
    fn from((spec, value): (String, V)) -> Self {
        Condition::Spec {
            spec,
            value: value.into(),
        }
    }
}

/// One `__`-separated part of a specifier. Empty parts are rejected.
fn segment(input: &str) -> IResult<&str, &str> {
    verify(alt((take_until("__"), rest)), |s: &str| !s.is_empty())(input)
}

fn segments(input: &str) -> IResult<&str, Vec<&str>> {
    all_consuming(separated_list1(tag("__"), segment))(input)
}

/// Split a condition specifier into the field it targets and its operator.
///
/// `"age__gt"` compares `age`; `"age__max__gt"` compares `MAX(age)`.
pub fn parse_specifier(spec: &str) -> QueryResult<(Field, Operator)> {
    let invalid = || QueryError::invalid(format!("Invalid condition specifier <{}>", spec));

    let (_, parts) = segments(spec).map_err(|_| invalid())?;
    match parts.as_slice() {
        [field, op] => Ok((Field::named(*field), Operator::from_key(op))),
        [field, func, op] => Ok((
            Field::Function(FunctionCall::new(*func, [*field])),
            Operator::from_key(op),
        )),
        _ => Err(invalid()),
    }
}
