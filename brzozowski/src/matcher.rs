//! Contains the [`DerivativeMatcher`], which decides membership one token at a time by walking
//! the [`DerivativeRelation`] of an expression.

use crate::configuration::Configuration;
use crate::semantics::DerivativeRelation;

/// Incremental acceptance of a sequence of tokens.
pub trait RegexMatcher {
    /// The type of tokens accepted.
    type Alphabet;

    /// accepts the specified symbol.
    ///
    /// If no continuation can be accepted anymore, the matcher is [dead](RegexMatcher::is_dead).
    fn accept(&mut self, inp: Self::Alphabet);

    /// accepts all symbols, in order.
    fn accept_many(&mut self, inp: impl IntoIterator<Item = Self::Alphabet>) {
        for i in inp {
            self.accept(i);
        }
    }

    /// Returns true if the regular expression accepts the input iterator
    fn accepts(&mut self, iter: impl IntoIterator<Item = Self::Alphabet>) -> bool {
        for i in iter {
            self.accept(i);
            if self.is_dead() {
                return false;
            }
        }

        self.is_accepting()
    }

    /// Whether the input accepted so far is in the language.
    fn is_accepting(&self) -> bool;

    /// Whether no further input can make the matcher accept.
    fn is_dead(&self) -> bool;
}

/// A matcher that derives its current configuration by each token it accepts.
///
/// Configurations are not simplified, so the current expression grows with the input.
pub struct DerivativeMatcher<'a, T> {
    relation: &'a DerivativeRelation<T>,
    current: Configuration<T>,
    accepting: bool,
}

impl<T> DerivativeRelation<T> {
    /// A fresh matcher, positioned before the first token.
    pub fn matcher(&self) -> DerivativeMatcher<'_, T> {
        let current = self.initial_configuration();
        DerivativeMatcher {
            relation: self,
            accepting: current.is_accepting(),
            current,
        }
    }
}

impl<T> DerivativeMatcher<'_, T> {
    /// The configuration reached by the input accepted so far.
    pub fn configuration(&self) -> &Configuration<T> {
        &self.current
    }
}

impl<T: PartialEq> RegexMatcher for DerivativeMatcher<'_, T> {
    type Alphabet = T;

    fn accept(&mut self, inp: T) {
        let outcome = self.relation.derive(&inp, &self.current);
        self.accepting = outcome.output;
        self.current = outcome.target;
    }

    fn is_accepting(&self) -> bool {
        self.accepting
    }

    fn is_dead(&self) -> bool {
        self.current.is_dead()
    }
}
