//! Condition builders for WHERE/HAVING clauses.

use crate::ast::{Condition, ConditionValue, Field, LogicalOp, Operator};

/// Comparison from a `"<field>__<op>"` specifier, e.g. `cond("age__gte", 18)`.
pub fn cond(spec: &str, value: impl Into<ConditionValue>) -> Condition {
    Condition::Spec {
        spec: spec.to_string(),
        value: value.into(),
    }
}

/// Comparison on an explicit field, e.g. `compare(count(Some("id")), Operator::Gt, 1)`.
pub fn compare(
    field: impl Into<Field>,
    op: Operator,
    value: impl Into<ConditionValue>,
) -> Condition {
    Condition::Compare {
        field: field.into(),
        op,
        value: value.into(),
    }
}

fn group<I>(op: LogicalOp, conditions: I) -> Condition
where
    I: IntoIterator,
    I::Item: Into<Condition>,
{
    Condition::Group {
        op,
        conditions: conditions.into_iter().map(Into::into).collect(),
    }
}

pub fn and<I>(conditions: I) -> Condition
where
    I: IntoIterator,
    I::Item: Into<Condition>,
{
    group(LogicalOp::And, conditions)
}

pub fn or<I>(conditions: I) -> Condition
where
    I: IntoIterator,
    I::Item: Into<Condition>,
{
    group(LogicalOp::Or, conditions)
}

/// `a XOR b XOR ...`
pub fn xor<I>(conditions: I) -> Condition
where
    I: IntoIterator,
    I::Item: Into<Condition>,
{
    group(LogicalOp::Xor, conditions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Value;

    #[test]
    fn test_nested_groups() {
        let tree = xor([and([cond("a__eq", 1), cond("b__eq", 2)]), cond("c__eq", 3)]);
        match tree {
            Condition::Group { op, conditions } => {
                assert_eq!(op, LogicalOp::Xor);
                assert!(conditions[0].is_group());
                assert!(!conditions[1].is_group());
            }
            other => panic!("expected group, got {:?}", other),
        }
    }

    #[test]
    fn test_compare_keeps_field() {
        let c = compare("age", Operator::Gte, 18);
        assert_eq!(
            c,
            Condition::Compare {
                field: Field::named("age"),
                op: Operator::Gte,
                value: ConditionValue::Literal(Value::Int(18)),
            }
        );
    }
}
