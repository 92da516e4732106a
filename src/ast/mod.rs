pub mod builders;
pub mod cmd;
pub mod conditions;
pub mod expr;
pub mod operators;
pub mod values;

pub use self::cmd::{Action, DuplicateKeyUpdate, JoinSpec, Query, TableRef};
pub use self::conditions::{Condition, parse_specifier};
pub use self::expr::{Field, FunctionCall, OrderBy};
pub use self::operators::{InsertMode, JoinKind, LogicalOp, Operator, SortOrder};
pub use self::values::{ConditionValue, Row, Value};
