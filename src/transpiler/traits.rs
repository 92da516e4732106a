//! Dialect capability trait and the standard lookup tables.

use crate::ast::{InsertMode, JoinKind, LogicalOp, Operator, SortOrder, TableRef};
use crate::error::LookupError;
use crate::transpiler::tokens::Token;

/// Function keys and their SQL spelling.
pub const FUNCTIONS: &[(&str, &str)] = &[
    ("count", "COUNT"),
    ("avg", "AVG"),
    ("max", "MAX"),
    ("min", "MIN"),
    ("sum", "SUM"),
    ("utcnow", "UTC_TIMESTAMP"),
    ("unix_timestamp", "UNIX_TIMESTAMP"),
];

/// Operator spelling shared by the shipped dialects.
pub fn standard_operator(op: &Operator) -> Result<&'static str, LookupError> {
    Ok(match op {
        Operator::Eq => "=",
        Operator::Neq => "<>",
        Operator::Gt => ">",
        Operator::Gte => ">=",
        Operator::Lt => "<",
        Operator::Lte => "<=",
        Operator::Like => "LIKE",
        Operator::In => "IN",
        Operator::NotIn => "NOT IN",
        Operator::Is => "IS",
        Operator::IsNot => "IS NOT",
        Operator::IDiv => "DIV",
        Operator::Div => "/",
        Operator::Mult => "*",
        Operator::Add => "+",
        Operator::Sub => "-",
        Operator::Mod => "%",
        Operator::Other(key) => return Err(LookupError::Operator(key.clone())),
    })
}

/// Wrap `name` in `quote`, doubling embedded quote characters.
/// Already-quoted identifiers are returned unchanged.
pub fn quote_with(name: &str, quote: char) -> String {
    if name.len() >= 2 && name.starts_with(quote) && name.ends_with(quote) {
        return name.to_string();
    }
    let escaped = name.replace(quote, &format!("{quote}{quote}"));
    format!("{quote}{escaped}{quote}")
}

/// Everything that differs between SQL flavors.
///
/// The compiler only talks to this trait, so a new dialect is a new
/// implementor; most methods default to the MySQL-compatible spelling.
pub trait SqlGenerator: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Quote an identifier (table, column, alias or schema name).
    fn quote_identifier(&self, name: &str) -> String;

    /// Parameter marker standing for one positional argument.
    fn placeholder(&self) -> &str {
        "%s"
    }

    fn encode_operator(&self, op: &Operator) -> Result<String, LookupError> {
        standard_operator(op).map(str::to_string)
    }

    /// Unknown names pass through verbatim so user-defined functions work.
    fn encode_function(&self, name: &str) -> Result<String, LookupError> {
        Ok(FUNCTIONS
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, sql)| sql.to_string())
            .unwrap_or_else(|| name.to_string()))
    }

    fn encode_logical_op(&self, op: LogicalOp) -> &'static str {
        match op {
            LogicalOp::And => "AND",
            LogicalOp::Or => "OR",
            LogicalOp::Xor => "XOR",
        }
    }

    fn encode_join_type(&self, kind: JoinKind) -> Result<&'static str, LookupError> {
        Ok(match kind {
            JoinKind::Inner => "INNER JOIN",
            JoinKind::Left => "LEFT JOIN",
        })
    }

    fn encode_sort_order(&self, order: SortOrder) -> &'static str {
        match order {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }

    fn encode_null(&self) -> &str {
        "NULL"
    }

    fn encode_insert_mode(&self, mode: InsertMode) -> Result<&'static str, LookupError> {
        Ok(match mode {
            InsertMode::Insert => "INSERT INTO",
            InsertMode::Ignore => "INSERT IGNORE INTO",
            InsertMode::Replace => "REPLACE INTO",
        })
    }

    fn upsert_keyword(&self) -> &str {
        "ON DUPLICATE KEY UPDATE"
    }

    /// Tokens reading back the value proposed for `column` by the INSERT.
    fn value_reference(&self, column: &str) -> Vec<Token> {
        vec![
            Token::function("VALUES"),
            Token::from("("),
            Token::text(self.quote_identifier(column)),
            Token::from(")"),
        ]
    }

    /// `schema.table`, each part quoted.
    fn table_name(&self, table: &TableRef) -> String {
        match &table.schema {
            Some(schema) => format!(
                "{}.{}",
                self.quote_identifier(schema),
                self.quote_identifier(&table.name)
            ),
            None => self.quote_identifier(&table.name),
        }
    }

    /// `alias.column`, each part quoted.
    fn qualified_field(&self, alias: &str, column: &str) -> String {
        format!(
            "{}.{}",
            self.quote_identifier(alias),
            self.quote_identifier(column)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_is_idempotent() {
        let once = quote_with("users", '`');
        assert_eq!(once, "`users`");
        assert_eq!(quote_with(&once, '`'), once);
    }

    #[test]
    fn test_quote_escapes_embedded_quotes() {
        assert_eq!(quote_with("we\"ird", '"'), "\"we\"\"ird\"");
    }

    #[test]
    fn test_unknown_operator_fails_lookup() {
        let err = standard_operator(&Operator::Other("between".to_string())).unwrap_err();
        assert_eq!(err, LookupError::Operator("between".to_string()));
    }
}
