use crate::ast::Operator;
use crate::error::LookupError;
use crate::transpiler::traits::{SqlGenerator, quote_with, standard_operator};

/// MySQL generator: backtick identifiers, null-safe `<=>` equality.
#[derive(Debug, Clone, Copy, Default)]
pub struct MySqlGenerator;

impl MySqlGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl SqlGenerator for MySqlGenerator {
    fn name(&self) -> &'static str {
        "mysql"
    }

    fn quote_identifier(&self, name: &str) -> String {
        quote_with(name, '`')
    }

    fn encode_operator(&self, op: &Operator) -> Result<String, LookupError> {
        match op {
            Operator::Eq => Ok("<=>".to_string()),
            other => standard_operator(other).map(str::to_string),
        }
    }
}
