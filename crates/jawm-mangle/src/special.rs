// Special-character stage: cumulative special-character suffixes

use jawm_core::CandidateSet;
use jawm_core::charset::SPECIAL_CHARACTERS;

use crate::logger::MangleLogger;
use crate::stage::Stage;

/// Append special characters to every candidate, `passes` times over.
///
/// Growth is cumulative: each pass extends every member of the accumulated
/// set, including the untouched originals and the results of earlier passes,
/// and all of them stay in the set. After pass `i` the set holds at most
/// `|candidates| * 11^i` entries.
pub fn append_special(candidates: CandidateSet, passes: usize) -> CandidateSet {
    let mut accumulated = candidates;
    for _ in 0..passes {
        let snapshot: Vec<String> = accumulated.iter().cloned().collect();
        accumulated.reserve(snapshot.len() * SPECIAL_CHARACTERS.len());
        for word in &snapshot {
            for &special in &SPECIAL_CHARACTERS {
                let mut candidate = String::with_capacity(word.len() + 1);
                candidate.push_str(word);
                candidate.push(special);
                accumulated.insert(candidate);
            }
        }
    }
    accumulated
}

/// Pipeline stage wrapping [`append_special`].
#[derive(Debug, Clone, Copy)]
pub struct SpecialAppender {
    pub passes: usize,
}

impl Default for SpecialAppender {
    fn default() -> Self {
        Self { passes: 1 }
    }
}

impl Stage for SpecialAppender {
    fn name(&self) -> &'static str {
        "special"
    }

    fn apply(&self, candidates: CandidateSet, logger: &dyn MangleLogger) -> CandidateSet {
        logger.log(&format!("Adding {} special characters to each word.", self.passes));
        append_special(candidates, self.passes)
    }
}
