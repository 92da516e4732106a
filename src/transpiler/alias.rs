//! Table alias allocation.

/// Hands out table aliases `a`, `b`, ... `z`, `a`, ... for one compile.
///
/// A fresh allocator starts at `a`, so compiling the same query twice
/// yields the same text. Nested subqueries share the outer allocator so
/// their aliases never collide with the enclosing statement's.
#[derive(Debug, Clone, Default)]
pub struct AliasAllocator {
    issued: usize,
}

impl AliasAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_alias(&mut self) -> String {
        let symbol = char::from(b'a' + (self.issued % 26) as u8);
        self.issued += 1;
        symbol.to_string()
    }

    /// Number of aliases handed out so far.
    pub fn issued(&self) -> usize {
        self.issued
    }
}

impl Iterator for AliasAllocator {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        Some(self.next_alias())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_starts_at_a() {
        let mut aliases = AliasAllocator::new();
        assert_eq!(aliases.next_alias(), "a");
        assert_eq!(aliases.next_alias(), "b");
        assert_eq!(aliases.issued(), 2);
    }

    #[test]
    fn test_sequence_cycles() {
        let aliases: Vec<String> = AliasAllocator::new().take(28).collect();
        assert_eq!(aliases[25], "z");
        assert_eq!(aliases[26], "a");
        assert_eq!(aliases[27], "b");
    }
}
