//! Configurations: the states of the derivative automaton.

use crate::Regex;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

/// A matching state: the language that remains to be matched against the rest of the input.
///
/// Configurations are never mutated. Equality and hashing are those of the wrapped expression,
/// which are structural, so two configurations reached along different paths are equal exactly
/// when their expressions have the same shape. Use this to deduplicate configurations.
#[derive(Hash, Debug, PartialEq, Eq)]
pub struct Configuration<T> {
    expression: Arc<Regex<T>>,
}

impl<T> Configuration<T> {
    /// Wraps an expression as a configuration.
    pub fn new(expression: impl Into<Arc<Regex<T>>>) -> Self {
        Self {
            expression: expression.into(),
        }
    }

    /// The expression still to be matched.
    pub fn expression(&self) -> &Arc<Regex<T>> {
        &self.expression
    }

    /// Whether the input read so far is accepted, i.e. whether the expression is nullable.
    pub fn is_accepting(&self) -> bool {
        self.expression.is_nullable()
    }

    /// Whether no continuation of the input can ever be accepted from here.
    pub fn is_dead(&self) -> bool {
        self.expression.is_empty_language()
    }
}

// cloning shares the expression, so it does not need `T: Clone`
impl<T> Clone for Configuration<T> {
    fn clone(&self) -> Self {
        Self {
            expression: self.expression.clone(),
        }
    }
}

impl<T: Display> Display for Configuration<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.expression)
    }
}
