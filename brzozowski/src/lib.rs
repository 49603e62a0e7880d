#![warn(missing_docs)]
#![doc = include_str!("../README.md")]
//! ## This Documentation
//!
//! * [Configurations](configuration) and the [transition relation](semantics)
//! * [Incremental matching](matcher)
//! * [Bounded exploration](explore) and its [rendering](render)
//! * [Loading expressions from files](language)
#![cfg_attr(docsrs, feature(doc_auto_cfg, doc_cfg))]
#![cfg_attr(not(docsrs), allow(rustdoc::broken_intra_doc_links))]

pub use brzozowski_expressions::*;

pub mod configuration;
pub use configuration::Configuration;

pub mod semantics;
pub use semantics::{Derive, DerivativeRelation, Outcome, TransitionRelation};

pub mod matcher;
pub use matcher::{DerivativeMatcher, RegexMatcher};

pub mod explore;
pub use explore::{ExploreSettings, StateSpace};

#[cfg(feature = "dot")]
pub mod render;
#[cfg(feature = "dot")]
pub use render::RenderSettings;

pub mod propositions;
pub use propositions::{AtomicPropositionEvaluator, Proposition, PropositionError};

pub mod language;
pub use language::{LanguageModule, LoadError, Plugin};
