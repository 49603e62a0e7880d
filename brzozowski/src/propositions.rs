//! Atomic propositions over configurations, for diagnosis by a host model checker.
//!
//! Propositions can be registered but are not evaluated yet: every proposition is reported
//! false in every configuration.

use crate::configuration::Configuration;
use crate::semantics::Derive;
use crate::Regex;
use std::sync::Arc;
use thiserror::Error;

/// Errors raised while registering atomic propositions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PropositionError {
    /// The text is neither `c` nor `'c` for a single character `c`.
    #[error("unable to parse {0:?} as an atomic proposition")]
    Unparsable(String),
}

/// A parsed atomic proposition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Proposition {
    /// `c`: the token just consumed is `c`.
    Token(char),
    /// `'c`: the token consumed next is `c`.
    NextToken(char),
}

impl Proposition {
    /// Parses `c` or `'c`.
    pub fn parse(code: &str) -> Result<Self, PropositionError> {
        let chars: Vec<char> = code.chars().collect();
        match chars.as_slice() {
            ['\'', c] => Ok(Proposition::NextToken(*c)),
            [c] => Ok(Proposition::Token(*c)),
            _ => Err(PropositionError::Unparsable(code.to_string())),
        }
    }
}

/// Evaluates registered atomic propositions on configurations of a model.
pub struct AtomicPropositionEvaluator<T> {
    model: Arc<Regex<T>>,
    propositions: Vec<Proposition>,
}

impl<T> AtomicPropositionEvaluator<T> {
    /// An evaluator for configurations reached from `model`.
    pub fn new(model: impl Into<Arc<Regex<T>>>) -> Self {
        Self {
            model: model.into(),
            propositions: Vec::new(),
        }
    }

    /// The expression the evaluated configurations derive from.
    pub fn model(&self) -> &Arc<Regex<T>> {
        &self.model
    }

    /// The registered propositions, in registration order.
    pub fn propositions(&self) -> &[Proposition] {
        &self.propositions
    }

    /// Replaces the registered propositions, returning the index of each one.
    ///
    /// Fails without changing the registered propositions if any of them does not parse.
    pub fn register(&mut self, propositions: &[&str]) -> Result<Vec<usize>, PropositionError> {
        let parsed = propositions
            .iter()
            .map(|code| Proposition::parse(code))
            .collect::<Result<Vec<_>, _>>()?;

        if !parsed.is_empty() {
            log::warn!(
                "registered {} atomic propositions, which always evaluate to false",
                parsed.len()
            );
        }
        self.propositions = parsed;
        Ok((0..self.propositions.len()).collect())
    }

    /// The value of every registered proposition in `configuration`.
    pub fn valuations(&self, _configuration: &Configuration<T>) -> Vec<bool> {
        self.propositions.iter().map(|p| self.evaluate(p)).collect()
    }

    /// The value of every registered proposition on a step from `source` to `target`.
    pub fn step_valuations(
        &self,
        _source: &Configuration<T>,
        _action: &Derive,
        _target: &Configuration<T>,
    ) -> Vec<bool> {
        self.propositions.iter().map(|p| self.evaluate(p)).collect()
    }

    // TODO: configurations do not record the token that led to them, which both propositions
    // need before they can be evaluated.
    fn evaluate(&self, proposition: &Proposition) -> bool {
        match proposition {
            Proposition::Token(_) => false,
            Proposition::NextToken(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{AtomicPropositionEvaluator, Proposition, PropositionError};
    use crate::{parse_regex, Derive, DerivativeRelation};

    #[test]
    fn parse_propositions() {
        assert_eq!(Proposition::parse("a"), Ok(Proposition::Token('a')));
        assert_eq!(Proposition::parse("'a"), Ok(Proposition::NextToken('a')));
        assert_eq!(Proposition::parse("ε"), Ok(Proposition::Token('ε')));
        assert_eq!(
            Proposition::parse("index = 3"),
            Err(PropositionError::Unparsable("index = 3".to_string()))
        );
        assert!(Proposition::parse("").is_err());
        assert!(Proposition::parse("'ab").is_err());
    }

    #[test]
    fn everything_is_false() {
        let relation = DerivativeRelation::new("ab", parse_regex("ab").unwrap());
        let mut evaluator = AtomicPropositionEvaluator::new(relation.expression().clone());

        assert_eq!(evaluator.register(&["a", "'b", "b"]).unwrap(), vec![0, 1, 2]);

        let source = relation.initial_configuration();
        let target = relation.derive(&'a', &source).target;
        assert_eq!(evaluator.valuations(&source), vec![false; 3]);
        assert_eq!(
            evaluator.step_valuations(&source, &Derive, &target),
            vec![false; 3]
        );
    }

    #[test]
    fn failed_registration_keeps_previous() {
        let mut evaluator = AtomicPropositionEvaluator::new(parse_regex("a").unwrap());
        evaluator.register(&["a"]).unwrap();
        assert!(evaluator.register(&["a", "not a proposition"]).is_err());
        assert_eq!(evaluator.propositions(), &[Proposition::Token('a')]);
    }
}
