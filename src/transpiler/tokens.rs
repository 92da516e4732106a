//! Token stream and its whitespace-correct serializer.
//!
//! The compiler never formats whitespace itself; it emits tokens and
//! [`serialize_tokens`] decides where single spaces go.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Keyword, identifier, operator, placeholder or punctuation.
    Text(String),
    /// Function name. Never followed by a space, so `COUNT` + `(` reads `COUNT(`.
    Function(String),
}

impl Token {
    pub fn text(s: impl Into<String>) -> Self {
        Token::Text(s.into())
    }

    pub fn function(name: impl Into<String>) -> Self {
        Token::Function(name.into())
    }

    pub fn as_str(&self) -> &str {
        match self {
            Token::Text(s) | Token::Function(s) => s,
        }
    }

    pub fn is_function(&self) -> bool {
        matches!(self, Token::Function(_))
    }

    pub fn is_space(&self) -> bool {
        self.as_str().trim().is_empty()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<&str> for Token {
    fn from(s: &str) -> Self {
        Token::Text(s.to_string())
    }
}

impl From<String> for Token {
    fn from(s: String) -> Self {
        Token::Text(s)
    }
}

fn skip_space_between(token: &Token, next: &Token) -> bool {
    let (left, right) = (token.as_str(), next.as_str());
    token.is_function()
        || token.is_space()
        || next.is_space()
        || left.ends_with('(')
        || right.starts_with(')')
        || left.ends_with(char::is_whitespace)
        || right.starts_with(char::is_whitespace)
        || left.ends_with(',')
        || right.starts_with(',')
}

/// Join tokens into query text, inserting one space between neighbours
/// unless punctuation or existing whitespace makes it unnecessary.
///
/// Empty tokens are ignored. Whitespace-only tokens at either end of the
/// stream are dropped.
pub fn serialize_tokens(tokens: &[Token]) -> String {
    let tokens: Vec<&Token> = tokens.iter().filter(|t| !t.as_str().is_empty()).collect();
    let mut sql = String::new();
    let last = tokens.len().saturating_sub(1);

    for (index, token) in tokens.iter().enumerate() {
        if token.is_space() && (index == 0 || index == last) {
            continue;
        }

        sql.push_str(token.as_str());

        if let Some(next) = tokens.get(index + 1) {
            if !skip_space_between(token, next) {
                sql.push(' ');
            }
        }
    }

    sql
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(parts: &[&str]) -> Vec<Token> {
        parts.iter().map(|p| Token::from(*p)).collect()
    }

    #[test]
    fn test_words_are_spaced() {
        let tokens = texts(&["SELECT", "`a`.`x`", "FROM", "`t`", "AS", "`a`"]);
        assert_eq!(serialize_tokens(&tokens), "SELECT `a`.`x` FROM `t` AS `a`");
    }

    #[test]
    fn test_brackets_and_commas() {
        let tokens = texts(&["IN", "(", "%s", ",", "%s", ")"]);
        assert_eq!(serialize_tokens(&tokens), "IN (%s,%s)");

        let tokens = texts(&["(", "%s", ", ", "%s", ")", ", ", "(", "%s", ")"]);
        assert_eq!(serialize_tokens(&tokens), "(%s, %s), (%s)");
    }

    #[test]
    fn test_function_marker_is_not_spaced() {
        let tokens = vec![
            Token::function("COUNT"),
            Token::from("("),
            Token::from("1"),
            Token::from(")"),
            Token::from("FROM"),
        ];
        assert_eq!(serialize_tokens(&tokens), "COUNT(1) FROM");
    }

    #[test]
    fn test_edge_whitespace_is_dropped() {
        let tokens = texts(&[" ", "DELETE", " "]);
        assert_eq!(serialize_tokens(&tokens), "DELETE");
    }

    #[test]
    fn test_inner_whitespace_token_suppresses_extra_spaces() {
        let tokens = texts(&["a", " ", "b"]);
        assert_eq!(serialize_tokens(&tokens), "a b");
    }

    #[test]
    fn test_empty_token_adds_no_space() {
        let tokens = texts(&["SELECT", "", "FROM"]);
        assert_eq!(serialize_tokens(&tokens), "SELECT FROM");

        let tokens = texts(&["", "DELETE", ""]);
        assert_eq!(serialize_tokens(&tokens), "DELETE");
    }

    #[test]
    fn test_empty_stream() {
        assert_eq!(serialize_tokens(&[]), "");
    }

    #[test]
    fn test_serialization_is_deterministic() {
        let tokens = texts(&["WHERE", "(", "`a`.`id`", "<=>", "%s", ")"]);
        assert_eq!(serialize_tokens(&tokens), serialize_tokens(&tokens.clone()));
        assert_eq!(serialize_tokens(&tokens), "WHERE (`a`.`id` <=> %s)");
    }
}
