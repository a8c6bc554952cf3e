// Numeric suffix stage: append every zero-padded d-digit number

use jawm_core::CandidateSet;
use jawm_core::charset::DIGITS;

use crate::logger::MangleLogger;
use crate::stage::Stage;

// ---------------------------------------------------------------------------
// Suffix generation
// ---------------------------------------------------------------------------

/// Iterator over all fixed-width decimal strings of a given width, in
/// ascending numeric order: `"00"`, `"01"`, ..., `"99"` for width 2.
///
/// Works as an odometer over digit positions, so any width is accepted
/// without computing `10^width`. Width 0 yields the empty string once.
#[derive(Debug, Clone)]
pub struct DigitSuffixes {
    positions: Vec<usize>,
    exhausted: bool,
}

impl DigitSuffixes {
    pub fn new(width: usize) -> Self {
        Self {
            positions: vec![0; width],
            exhausted: false,
        }
    }
}

impl Iterator for DigitSuffixes {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.exhausted {
            return None;
        }
        let current: String = self.positions.iter().map(|&d| DIGITS[d]).collect();

        // Advance the odometer from the least significant position.
        let mut i = self.positions.len();
        loop {
            if i == 0 {
                self.exhausted = true;
                break;
            }
            i -= 1;
            if self.positions[i] + 1 < DIGITS.len() {
                self.positions[i] += 1;
                break;
            }
            self.positions[i] = 0;
        }

        Some(current)
    }
}

// ---------------------------------------------------------------------------
// Stage
// ---------------------------------------------------------------------------

/// Replace every candidate with its `10^digits` numbered variants.
///
/// The bare candidates are not kept. `digits == 0` returns the set unchanged.
pub fn append_numbers(candidates: CandidateSet, digits: usize) -> CandidateSet {
    if digits == 0 {
        return candidates;
    }
    let suffixes: Vec<String> = DigitSuffixes::new(digits).collect();

    let mut numbered = CandidateSet::new();
    for word in &candidates {
        for suffix in &suffixes {
            let mut candidate = String::with_capacity(word.len() + suffix.len());
            candidate.push_str(word);
            candidate.push_str(suffix);
            numbered.insert(candidate);
        }
    }
    numbered
}

/// Pipeline stage wrapping [`append_numbers`].
#[derive(Debug, Clone, Copy)]
pub struct NumberAppender {
    pub digits: usize,
}

impl Stage for NumberAppender {
    fn name(&self) -> &'static str {
        "numbers"
    }

    fn apply(&self, candidates: CandidateSet, logger: &dyn MangleLogger) -> CandidateSet {
        logger.log(&format!("Adding {} numbers to each word.", self.digits));
        append_numbers(candidates, self.digits)
    }
}
