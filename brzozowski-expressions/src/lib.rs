//! Regular expressions over arbitrary token alphabets, with Brzozowski derivatives.
//!
//! A [`Regex`] is an immutable tree. [`Regex::derive`] computes the expression that matches what
//! may follow a token, and [`Regex::is_nullable`] tells whether an expression matches the empty
//! sequence. Together they decide membership one token at a time:
//!
//! ```
//! # use std::sync::Arc;
//! use brzozowski_expressions::parse_regex;
//!
//! let regex = Arc::new(parse_regex("(a|b)*c").unwrap());
//! assert!(regex.derive_word(&['a', 'b', 'c']).is_nullable());
//! assert!(!regex.derive_word(&['c', 'a']).is_nullable());
//! ```

use thiserror::Error;

mod derive;
mod nullable;
mod parse;
mod regex;
mod stream;

#[cfg(feature = "tgf")]
mod tgf;

pub use parse::{is_reserved, Reader, RESERVED};
pub use regex::Regex;
pub use stream::CharStream;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("no expression at offset {offset}")]
    NoExpression { offset: usize },
    #[error("group opened at offset {offset} is never closed")]
    UnterminatedGroup { offset: usize },
}

/// parse a string to a regular expression over characters
///
/// Input after the first complete expression that cannot continue it is ignored.
pub fn parse_regex(input: impl AsRef<str>) -> Result<Regex<char>, ParseError> {
    let mut reader = Reader::new(CharStream::new(input));
    let regex = reader.parse()?.ok_or(ParseError::NoExpression {
        offset: reader.stream().offset(),
    })?;

    if reader.stream().has_next() {
        log::debug!(
            "ignoring input after offset {}: {:?}",
            reader.stream().offset(),
            reader.stream().remaining()
        );
    }
    log::debug!("parsed {} nodes", regex.size());
    Ok(regex)
}
