use crate::error::QueryError;
use crate::transpiler::sql::{AnsiGenerator, MySqlGenerator};
use crate::transpiler::traits::SqlGenerator;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Shipped SQL dialects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    #[default]
    MySql,
    Ansi,
}

impl Dialect {
    pub fn generator(&self) -> Box<dyn SqlGenerator> {
        match self {
            Dialect::MySql => Box::new(MySqlGenerator),
            Dialect::Ansi => Box::new(AnsiGenerator),
        }
    }
}

impl FromStr for Dialect {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mysql" => Ok(Dialect::MySql),
            "ansi" => Ok(Dialect::Ansi),
            other => Err(QueryError::Config(format!("unknown dialect '{}'", other))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dialect() {
        assert_eq!("mysql".parse::<Dialect>().unwrap(), Dialect::MySql);
        assert_eq!("ANSI".parse::<Dialect>().unwrap(), Dialect::Ansi);
        assert!("oracle".parse::<Dialect>().is_err());
    }

    #[test]
    fn test_generator_quoting() {
        assert_eq!(Dialect::MySql.generator().quote_identifier("t"), "`t`");
        assert_eq!(Dialect::Ansi.generator().quote_identifier("t"), "\"t\"");
    }
}
