//! # sqlquery
//!
//! Build SQL statements as immutable values and compile them to
//! parameterized text plus positional arguments.
//!
//! ## Quick Example
//!
//! ```
//! use sqlquery::prelude::*;
//!
//! let query = Query::select(["id", "name"])
//!     .on_table("users")
//!     .filter([cond("age__gte", 18)])?
//!     .order_by([desc("name")])
//!     .limit(10)?;
//!
//! let (sql, args) = query.to_sql()?;
//! assert_eq!(
//!     sql,
//!     "SELECT `a`.`id`, `a`.`name` FROM `users` AS `a` \
//!      WHERE (`a`.`age` >= %s) ORDER BY `a`.`name` DESC LIMIT %s"
//! );
//! assert_eq!(args, vec![Value::Int(18), Value::Int(10)]);
//! # Ok::<(), sqlquery::error::QueryError>(())
//! ```
//!
//! ## Condition specifiers
//!
//! | Specifier              | Renders                 |
//! |------------------------|-------------------------|
//! | `age__gte`             | `(a.age >= %s)`         |
//! | `id__in`               | `(a.id IN (%s,%s))`     |
//! | `deleted__is` + `None` | `(a.deleted IS NULL)`   |
//! | `score__max__gt`       | `(MAX(a.score) > %s)`   |

pub mod ast;
pub mod config;
pub mod error;
pub mod transpiler;

pub mod prelude {
    pub use crate::ast::builders::{
        and, asc, avg, compare, cond, count, desc, function, max, min, or, sum, unix_timestamp,
        utcnow, xor,
    };
    pub use crate::ast::{
        Action, Condition, ConditionValue, DuplicateKeyUpdate, Field, FunctionCall, InsertMode,
        JoinKind, JoinSpec, LogicalOp, Operator, OrderBy, Query, Row, SortOrder, TableRef, Value,
        parse_specifier,
    };
    pub use crate::config::Config;
    pub use crate::error::*;
    pub use crate::transpiler::{Dialect, SqlGenerator, ToSql};
}
