//! Bounded exploration of the configurations reachable from a [`DerivativeRelation`].
//!
//! Derivatives are not simplified, so the reachable configurations of most expressions with a
//! Kleene star are infinite. The explorer deduplicates configurations by structural equality and
//! stops at the limits given in [`ExploreSettings`].

use crate::configuration::Configuration;
use crate::semantics::DerivativeRelation;
use crate::Regex;
use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet, VecDeque};
use std::hash::Hash;

/// Index of a state in a [`StateSpace`].
pub type StateID = usize;

/// Limits and alphabet of an exploration.
#[derive(Debug, Clone)]
pub struct ExploreSettings<T> {
    /// Configurations further than this many steps from the initial one are not expanded.
    pub max_depth: usize,
    /// The exploration stops discovering new states once this many are known.
    pub max_states: usize,
    /// The tokens to derive by, in this order. Defaults to the tokens occurring in the
    /// expression, in order of first occurrence.
    pub alphabet: Option<Vec<T>>,
}

impl<T> ExploreSettings<T> {
    /// Sets the maximal depth.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Sets the maximal number of states.
    pub fn with_max_states(mut self, max_states: usize) -> Self {
        self.max_states = max_states;
        self
    }

    /// Derives by exactly these tokens.
    pub fn with_alphabet(mut self, alphabet: impl IntoIterator<Item = T>) -> Self {
        self.alphabet = Some(alphabet.into_iter().collect());
        self
    }
}

impl<T> Default for ExploreSettings<T> {
    fn default() -> Self {
        Self {
            max_depth: 8,
            max_states: 1024,
            alphabet: None,
        }
    }
}

/// A configuration discovered by the explorer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExploredState<T> {
    /// The configuration itself.
    pub configuration: Configuration<T>,
    /// Whether the configuration accepts.
    pub accepting: bool,
    /// Length of the shortest input reaching this configuration.
    pub depth: usize,
    /// Whether the exploration stopped before deriving this configuration.
    pub truncated: bool,
}

/// A derivative step between two explored states.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition<T> {
    /// The state derived.
    pub source: StateID,
    /// The token it was derived by.
    pub token: T,
    /// The derivative.
    pub target: StateID,
    /// Whether the target accepts.
    pub accepted: bool,
}

/// The explored part of the state space of a [`DerivativeRelation`].
///
/// Exploring the same relation with the same settings always gives the same state space.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateSpace<T> {
    /// All discovered states, in breadth-first order.
    pub states: Vec<ExploredState<T>>,
    /// All explored transitions.
    pub transitions: Vec<Transition<T>>,
    /// The initial state.
    pub initial: StateID,
}

impl<T> StateSpace<T> {
    /// Whether some state was left unexpanded because a limit was hit.
    pub fn is_truncated(&self) -> bool {
        self.states.iter().any(|s| s.truncated)
    }

    /// The transitions leaving `state`.
    pub fn successors(&self, state: StateID) -> impl Iterator<Item = &Transition<T>> {
        self.transitions.iter().filter(move |t| t.source == state)
    }
}

// pre-order, each token once, so state ids do not depend on hashing
fn tokens_in_order<T: Hash + Eq + Clone>(regex: &Regex<T>) -> Vec<T> {
    let mut seen = HashSet::new();
    let mut tokens = Vec::new();
    let mut stack = vec![regex];
    while let Some(node) = stack.pop() {
        if let Regex::Token(t) = node {
            if seen.insert(t.clone()) {
                tokens.push(t.clone());
            }
        }
        stack.extend(node.operands().into_iter().rev().map(|o| &**o));
    }
    tokens
}

struct Explorer<'a, T> {
    relation: &'a DerivativeRelation<T>,
    alphabet: Vec<T>,
    max_depth: usize,
    max_states: usize,
    state_ids: HashMap<Configuration<T>, StateID>,
    states: Vec<ExploredState<T>>,
    transitions: Vec<Transition<T>>,
}

impl<'a, T> Explorer<'a, T>
where
    T: Hash + Eq + Clone,
{
    fn new(relation: &'a DerivativeRelation<T>, settings: &ExploreSettings<T>) -> Self {
        let alphabet = settings
            .alphabet
            .clone()
            .unwrap_or_else(|| tokens_in_order(relation.expression()));

        Self {
            relation,
            alphabet,
            max_depth: settings.max_depth,
            max_states: settings.max_states,
            state_ids: HashMap::new(),
            states: Vec::new(),
            transitions: Vec::new(),
        }
    }

    // returns the id of the configuration, and whether it was new
    fn intern(&mut self, configuration: Configuration<T>, depth: usize) -> Option<(StateID, bool)> {
        match self.state_ids.entry(configuration) {
            Entry::Occupied(entry) => Some((*entry.get(), false)),
            Entry::Vacant(_) if self.states.len() >= self.max_states => None,
            Entry::Vacant(entry) => {
                let id = self.states.len();
                self.states.push(ExploredState {
                    accepting: entry.key().is_accepting(),
                    configuration: entry.key().clone(),
                    depth,
                    truncated: false,
                });
                entry.insert(id);
                Some((id, true))
            }
        }
    }

    fn expand(&mut self, state: StateID, work_list: &mut VecDeque<StateID>) {
        let depth = self.states[state].depth;
        if depth >= self.max_depth {
            self.states[state].truncated = true;
            return;
        }

        let source = self.states[state].configuration.clone();
        for token in self.alphabet.clone() {
            let outcome = self.relation.derive(&token, &source);
            let Some((target, new)) = self.intern(outcome.target, depth + 1) else {
                // out of room for states, leave this one partially expanded
                self.states[state].truncated = true;
                continue;
            };

            if new {
                work_list.push_back(target);
            }
            self.transitions.push(Transition {
                source: state,
                token,
                target,
                accepted: outcome.output,
            });
        }
    }

    fn explore(mut self) -> StateSpace<T> {
        let mut work_list = VecDeque::new();
        let initial = self.relation.initial_configuration();
        // the first state always fits, unless no states are allowed at all
        let initial = match self.intern(initial.clone(), 0) {
            Some((id, _)) => id,
            None => {
                self.states.push(ExploredState {
                    accepting: initial.is_accepting(),
                    configuration: initial,
                    depth: 0,
                    truncated: true,
                });
                return self.finish(0);
            }
        };
        work_list.push_back(initial);

        while let Some(state) = work_list.pop_front() {
            self.expand(state, &mut work_list);
        }

        self.finish(initial)
    }

    fn finish(self, initial: StateID) -> StateSpace<T> {
        log::info!(
            "{}: explored {} states and {} transitions",
            self.relation.name(),
            self.states.len(),
            self.transitions.len()
        );

        StateSpace {
            states: self.states,
            transitions: self.transitions,
            initial,
        }
    }
}

impl<T> DerivativeRelation<T>
where
    T: Hash + Eq + Clone,
{
    /// Explores the configurations reachable from the initial one, breadth first, within the
    /// limits of `settings`.
    pub fn explore(&self, settings: &ExploreSettings<T>) -> StateSpace<T> {
        Explorer::new(self, settings).explore()
    }
}
