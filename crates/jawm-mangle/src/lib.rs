//! Wordlist mangling pipeline.
//!
//! A run loads base words into a [`CandidateSet`](jawm_core::CandidateSet)
//! and passes it through a fixed sequence of stages, each of which consumes
//! the set and returns its replacement:
//!
//! - [`loader`] -- base words and their case variants
//! - [`numbers`] -- fixed-width numeric suffixes
//! - [`special`] -- cumulative special-character suffixes
//! - [`length`] -- minimum length filter
//! - [`sink`] -- stream or save the final set
//!
//! [`mangler::Mangler`] assembles the enabled stages from a
//! [`config::MangleConfig`] and drives a complete run.
//!
//! Every expansion stage multiplies the working set. The numeric stage alone
//! produces `|input| * 10^d` candidates, so guarding against memory
//! exhaustion for large digit or pass counts is left to the caller.

pub mod config;
pub mod length;
pub mod loader;
pub mod logger;
pub mod mangler;
pub mod numbers;
pub mod sink;
pub mod special;
pub mod stage;

pub use config::{MangleConfig, OutputTarget};
pub use logger::{MangleLogger, MemoryLogger, VerboseLogger};
pub use mangler::{Emission, Mangler, RunSummary};
pub use stage::Stage;
