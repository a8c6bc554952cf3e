// Stage trait: one set-to-set transform of the pipeline

use jawm_core::CandidateSet;

use crate::logger::MangleLogger;

/// A single deterministic transform over the working candidate set.
///
/// A stage takes ownership of the current set and returns the set that
/// replaces it, so no two stages ever share a working set.
pub trait Stage {
    /// Short name used in diagnostics.
    fn name(&self) -> &'static str;

    /// Transform `candidates`, reporting progress through `logger`.
    fn apply(&self, candidates: CandidateSet, logger: &dyn MangleLogger) -> CandidateSet;
}
