/// A position-tracked stream of characters, read one at a time by the [`Reader`](crate::Reader).
///
/// The stream only moves forward.
#[derive(Debug, Clone)]
pub struct CharStream {
    chars: Vec<char>,
    offset: usize,
}

impl CharStream {
    pub fn new(input: impl AsRef<str>) -> Self {
        Self {
            chars: input.as_ref().chars().collect(),
            offset: 0,
        }
    }

    pub fn has_next(&self) -> bool {
        self.offset < self.chars.len()
    }

    pub fn peek(&self) -> Option<char> {
        self.chars.get(self.offset).copied()
    }

    pub fn advance(&mut self) {
        if self.has_next() {
            self.offset += 1;
        }
    }

    /// Consumes the next character if it is `expected`.
    pub fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Number of characters consumed so far.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The characters that have not been consumed.
    pub fn remaining(&self) -> String {
        self.chars[self.offset..].iter().collect()
    }
}

impl Iterator for CharStream {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        let next = self.peek()?;
        self.advance();
        Some(next)
    }
}
