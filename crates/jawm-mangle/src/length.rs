// Length filter stage: drop candidates below a minimum length

use jawm_core::CandidateSet;

use crate::logger::MangleLogger;
use crate::stage::Stage;

/// Remove every candidate with fewer than `min_length` characters.
///
/// Length is counted in Unicode scalar values. Returns the filtered set and
/// the number of candidates removed.
pub fn remove_short(mut candidates: CandidateSet, min_length: usize) -> (CandidateSet, usize) {
    let before = candidates.len();
    candidates.retain(|word| word.chars().count() >= min_length);
    let removed = before - candidates.len();
    (candidates, removed)
}

/// Pipeline stage wrapping [`remove_short`].
#[derive(Debug, Clone, Copy)]
pub struct LengthFilter {
    pub min_length: usize,
}

impl Default for LengthFilter {
    fn default() -> Self {
        Self { min_length: 1 }
    }
}

impl Stage for LengthFilter {
    fn name(&self) -> &'static str {
        "length"
    }

    fn apply(&self, candidates: CandidateSet, logger: &dyn MangleLogger) -> CandidateSet {
        logger.log("Removing short passwords.");
        let (kept, removed) = remove_short(candidates, self.min_length);
        logger.log(&format!("Removed {removed} short passwords."));
        kept
    }
}
