//! Character-level tokenizer for expression input
//!
//! The grammar only ever looks one character ahead, so the tokenizer is a
//! cursor over the input rather than a token stream. All whitespace is removed
//! up front; every later position refers to the stripped text.

/// Cursor over whitespace-stripped input.
///
/// `None` from [`peek`](Tokenizer::peek) or [`advance`](Tokenizer::advance)
/// marks the end of input. The cursor never moves backwards and never passes
/// the end.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    input: Vec<char>,
    position: usize,
}

impl Tokenizer {
    /// Create a tokenizer, dropping every whitespace character from `input`.
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().filter(|c| !c.is_whitespace()).collect(),
            position: 0,
        }
    }

    /// Character under the cursor without consuming it
    pub fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    /// Consume and return the character under the cursor
    pub fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.position += 1;
        Some(ch)
    }

    /// Consume the next character only if it equals `expected`
    pub fn match_char(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.position += 1;
            true
        } else {
            false
        }
    }

    /// Zero-based cursor offset into the stripped text
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn is_at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    /// Text not yet consumed
    pub fn remaining(&self) -> String {
        self.input[self.position..].iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_stripped() {
        let mut tokenizer = Tokenizer::new("  1 +\t{ 2 }\n");
        let mut seen = String::new();
        while let Some(c) = tokenizer.advance() {
            seen.push(c);
        }
        assert_eq!(seen, "1+{2}");
    }

    #[test]
    fn test_peek_does_not_advance() {
        let tokenizer = Tokenizer::new("7");
        assert_eq!(tokenizer.peek(), Some('7'));
        assert_eq!(tokenizer.peek(), Some('7'));
        assert_eq!(tokenizer.position(), 0);
    }

    #[test]
    fn test_advance_stops_at_end() {
        let mut tokenizer = Tokenizer::new("4");
        assert_eq!(tokenizer.advance(), Some('4'));
        assert_eq!(tokenizer.advance(), None);
        assert_eq!(tokenizer.advance(), None);
        assert_eq!(tokenizer.position(), 1);
        assert!(tokenizer.is_at_end());
    }

    #[test]
    fn test_match_char() {
        let mut tokenizer = Tokenizer::new("{3}");
        assert!(!tokenizer.match_char('}'));
        assert_eq!(tokenizer.position(), 0);
        assert!(tokenizer.match_char('{'));
        assert_eq!(tokenizer.position(), 1);
        assert_eq!(tokenizer.remaining(), "3}");
    }

    #[test]
    fn test_empty_input() {
        let mut tokenizer = Tokenizer::new("   ");
        assert!(tokenizer.is_at_end());
        assert_eq!(tokenizer.peek(), None);
        assert!(!tokenizer.match_char('1'));
        assert_eq!(tokenizer.remaining(), "");
    }
}
