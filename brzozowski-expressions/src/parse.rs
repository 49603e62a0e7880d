use crate::stream::CharStream;
use crate::{ParseError, Regex};
use std::sync::Arc;

pub const EMPTY: char = '∅';
pub const EPSILON: char = 'ε';
pub const UNION: char = '|';
pub const KLEENE_STAR: char = '*';
pub const CONCATENATION: char = '.';
pub const GROUP_OPEN: char = '(';
pub const GROUP_CLOSE: char = ')';

/// Characters that are never read as tokens.
pub const RESERVED: [char; 7] = [
    EMPTY,
    EPSILON,
    UNION,
    KLEENE_STAR,
    CONCATENATION,
    GROUP_OPEN,
    GROUP_CLOSE,
];

pub fn is_reserved(c: char) -> bool {
    RESERVED.contains(&c)
}

type ParseResult<T> = Result<T, ParseError>;

// `None` is an alternative that did not apply, `Err` aborts the whole parse.
type Parsed = ParseResult<Option<Arc<Regex<char>>>>;

/// Recursive-descent reader for regular expressions over characters.
///
/// After an atom, the reader greedily tries to continue the expression, in this order:
///
/// 1. concatenation: an optional `.` followed by a complete expression,
/// 2. union: `|` followed by a complete expression,
/// 3. Kleene star: `*`, wrapping what was read so far.
///
/// Because the right operand of a concatenation or union swallows as much input as it can,
/// binary operators associate to the right, and `ab|c` reads as `a(b|c)`.
///
/// When none of these apply and input remains, the expression read so far is the result and the
/// remainder is left in the stream. The stream is never rewound: an operator consumed by an
/// alternative that then fails stays consumed.
pub struct Reader {
    stream: CharStream,
}

impl Reader {
    pub fn new(stream: CharStream) -> Self {
        Self { stream }
    }

    pub fn stream(&self) -> &CharStream {
        &self.stream
    }

    /// Reads one expression from the stream.
    ///
    /// Returns `Ok(None)` when no expression starts at the current position.
    pub fn parse(&mut self) -> ParseResult<Option<Regex<char>>> {
        let parsed = self.parse_expression()?;
        Ok(parsed.map(|regex| Arc::try_unwrap(regex).unwrap_or_else(|shared| (*shared).clone())))
    }

    fn parse_expression(&mut self) -> Parsed {
        let Some(atom) = self.parse_atom()? else {
            return Ok(None);
        };
        self.parse_operators(atom).map(Some)
    }

    fn parse_atom(&mut self) -> Parsed {
        match self.stream.peek() {
            Some(EMPTY) => {
                self.stream.advance();
                Ok(Some(Regex::Empty.into()))
            }
            Some(EPSILON) => {
                self.stream.advance();
                Ok(Some(Regex::Epsilon.into()))
            }
            Some(GROUP_OPEN) => self.parse_group(),
            Some(c) if !is_reserved(c) => {
                self.stream.advance();
                Ok(Some(Regex::Token(c).into()))
            }
            _ => Ok(None),
        }
    }

    fn parse_group(&mut self) -> Parsed {
        let open = self.stream.offset();
        self.stream.advance();

        let inner = self.parse_expression()?;
        if self.stream.eat(GROUP_CLOSE) {
            return Ok(inner);
        }

        match inner {
            Some(_) => Err(ParseError::UnterminatedGroup { offset: open }),
            None => Ok(None),
        }
    }

    fn parse_operators(&mut self, mut lhs: Arc<Regex<char>>) -> ParseResult<Arc<Regex<char>>> {
        loop {
            lhs = if let Some(regex) = self.parse_concatenation(&lhs)? {
                regex
            } else if let Some(regex) = self.parse_union(&lhs)? {
                regex
            } else if let Some(regex) = self.parse_kleene_star(&lhs) {
                regex
            } else {
                return Ok(lhs);
            };
        }
    }

    fn parse_concatenation(&mut self, lhs: &Arc<Regex<char>>) -> Parsed {
        if !self.stream.has_next() {
            return Ok(None);
        }
        // the operator is optional, adjacent expressions are concatenated too
        self.stream.eat(CONCATENATION);

        let rhs = self.parse_expression()?;
        Ok(rhs.map(|rhs| Regex::Concatenation(lhs.clone(), rhs).into()))
    }

    fn parse_union(&mut self, lhs: &Arc<Regex<char>>) -> Parsed {
        if !self.stream.eat(UNION) {
            return Ok(None);
        }

        let rhs = self.parse_expression()?;
        Ok(rhs.map(|rhs| Regex::Union(lhs.clone(), rhs).into()))
    }

    fn parse_kleene_star(&mut self, lhs: &Arc<Regex<char>>) -> Option<Arc<Regex<char>>> {
        self.stream
            .eat(KLEENE_STAR)
            .then(|| Regex::KleeneStar(lhs.clone()).into())
    }
}
