//! The transition relation of a regular expression.
//!
//! A host (a model checker, a matcher, an explorer) drives a [`TransitionRelation`]: it starts
//! from the [initial](TransitionRelation::initial) configurations, asks which actions are
//! [enabled](TransitionRelation::enabled_actions) for the next input, and
//! [steps](TransitionRelation::step) through one of them. Bookkeeping such as visited sets belongs
//! to the host.

use crate::configuration::Configuration;
use crate::Regex;
use std::sync::Arc;

/// The result of firing an action: an output and the configuration that was reached.
#[derive(Hash, Debug, Clone, PartialEq, Eq)]
pub struct Outcome<O, C> {
    /// What the step reports, for regular expressions whether the input so far is accepted.
    pub output: O,
    /// The configuration reached.
    pub target: C,
}

/// An input-driven transition relation.
pub trait TransitionRelation {
    /// The states of the relation.
    type Configuration;
    /// What can be fired from a configuration.
    type Action;
    /// The input consumed by a step.
    type Input;
    /// What a step reports alongside its target.
    type Output;

    /// The configurations the relation starts in.
    fn initial(&self) -> Vec<Self::Configuration>;

    /// The actions enabled in `source` when `input` is read next.
    fn enabled_actions(
        &self,
        input: &Self::Input,
        source: &Self::Configuration,
    ) -> Vec<Self::Action>;

    /// Fires `action` on `input` from `source`.
    fn step(
        &self,
        action: &Self::Action,
        input: &Self::Input,
        source: &Self::Configuration,
    ) -> Vec<Outcome<Self::Output, Self::Configuration>>;
}

/// The only action of a [`DerivativeRelation`]: derive the current expression by the input token.
#[derive(Hash, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Derive;

/// The deterministic transition relation of a regular expression.
///
/// Every configuration has exactly one successor for every token: the derivative of its
/// expression. The output of a step is whether the reached configuration accepts.
#[derive(Debug, Clone)]
pub struct DerivativeRelation<T> {
    name: String,
    expression: Arc<Regex<T>>,
}

impl<T> DerivativeRelation<T> {
    /// Creates the relation of `expression`. `name` identifies it to the host, usually the
    /// name of the file it was read from.
    pub fn new(name: impl Into<String>, expression: impl Into<Arc<Regex<T>>>) -> Self {
        Self {
            name: name.into(),
            expression: expression.into(),
        }
    }

    /// The name of this relation.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The expression the relation starts from.
    pub fn expression(&self) -> &Arc<Regex<T>> {
        &self.expression
    }

    /// The single initial configuration.
    pub fn initial_configuration(&self) -> Configuration<T> {
        Configuration::new(self.expression.clone())
    }
}

impl<T: PartialEq> DerivativeRelation<T> {
    /// Derives `source` by `token`, the one outcome of [`Derive`].
    pub fn derive(&self, token: &T, source: &Configuration<T>) -> Outcome<bool, Configuration<T>> {
        let target = Configuration::new(source.expression().derive(token));
        let accepted = target.is_accepting();
        log::trace!(
            "{}: derived {} nodes into {} nodes, accepting: {}",
            self.name,
            source.expression().size(),
            target.expression().size(),
            accepted
        );
        Outcome {
            output: accepted,
            target,
        }
    }
}

impl<T: PartialEq> TransitionRelation for DerivativeRelation<T> {
    type Configuration = Configuration<T>;
    type Action = Derive;
    type Input = T;
    type Output = bool;

    fn initial(&self) -> Vec<Configuration<T>> {
        vec![self.initial_configuration()]
    }

    fn enabled_actions(&self, _input: &T, _source: &Configuration<T>) -> Vec<Derive> {
        vec![Derive]
    }

    fn step(
        &self,
        _action: &Derive,
        input: &T,
        source: &Configuration<T>,
    ) -> Vec<Outcome<bool, Configuration<T>>> {
        vec![self.derive(input, source)]
    }
}
