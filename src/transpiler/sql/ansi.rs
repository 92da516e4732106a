use crate::transpiler::traits::{SqlGenerator, quote_with};

/// ANSI generator: double-quoted identifiers, plain `=` equality.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnsiGenerator;

impl AnsiGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl SqlGenerator for AnsiGenerator {
    fn name(&self) -> &'static str {
        "ansi"
    }

    fn quote_identifier(&self, name: &str) -> String {
        quote_with(name, '"')
    }
}
