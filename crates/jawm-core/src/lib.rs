//! Shared building blocks for the jawm word mangler.
//!
//! - [`case`] -- case policy and case conversion of candidate words
//! - [`charset`] -- digit and special-character alphabets used for suffixes
//! - [`error`] -- error type shared by the pipeline and the CLI

pub mod case;
pub mod charset;
pub mod error;

pub use case::CasePolicy;
pub use error::MangleError;

/// Working set of password candidates.
///
/// Uniqueness is guaranteed by the set; iteration order is unspecified and
/// must not be relied on unless the caller sorts explicitly.
pub type CandidateSet = hashbrown::HashSet<String>;
