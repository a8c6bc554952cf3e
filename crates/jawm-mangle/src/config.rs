// Run configuration for the mangling pipeline

use std::path::PathBuf;

use jawm_core::CasePolicy;

/// Where the final candidate set is emitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum OutputTarget {
    /// One candidate per line on standard output.
    #[default]
    Stdout,
    /// One candidate per line in a newly created file. Existing files are
    /// never overwritten.
    File(PathBuf),
}

/// Immutable description of one mangling run.
///
/// Built once from external input and only read afterwards. A value of
/// `0` for `digits` or `special_passes` disables the corresponding stage;
/// `min_length: None` disables the length filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MangleConfig {
    /// Base wordlist, one word per line.
    pub wordlist: PathBuf,
    /// Case variants inserted by the loader.
    pub case_policy: CasePolicy,
    /// Width of the numeric suffix appended to every candidate.
    pub digits: usize,
    /// Number of cumulative special-character passes.
    pub special_passes: usize,
    /// Candidates shorter than this many characters are dropped.
    pub min_length: Option<usize>,
    /// Destination of the final set.
    pub output: OutputTarget,
    /// Emit candidates in ascending order instead of set order.
    pub sorted: bool,
    /// Print progress messages.
    pub verbose: bool,
}

impl MangleConfig {
    /// Configuration that only loads `wordlist` and prints it back.
    pub fn new(wordlist: impl Into<PathBuf>) -> Self {
        Self {
            wordlist: wordlist.into(),
            case_policy: CasePolicy::None,
            digits: 0,
            special_passes: 0,
            min_length: None,
            output: OutputTarget::Stdout,
            sorted: false,
            verbose: false,
        }
    }

    pub fn with_case_policy(mut self, case_policy: CasePolicy) -> Self {
        self.case_policy = case_policy;
        self
    }

    pub fn with_digits(mut self, digits: usize) -> Self {
        self.digits = digits;
        self
    }

    pub fn with_special_passes(mut self, special_passes: usize) -> Self {
        self.special_passes = special_passes;
        self
    }

    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_length = Some(min_length);
        self
    }

    pub fn with_output(mut self, output: OutputTarget) -> Self {
        self.output = output;
        self
    }

    pub fn with_sorted(mut self, sorted: bool) -> Self {
        self.sorted = sorted;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}
