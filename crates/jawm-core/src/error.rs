// Error type shared by the mangling pipeline and the CLI

use std::io;
use std::path::PathBuf;

/// Errors raised while loading, mangling, or saving a wordlist.
#[derive(Debug, thiserror::Error)]
pub enum MangleError {
    /// The wordlist does not exist.
    #[error("failed to open file '{}'", path.display())]
    InputNotFound { path: PathBuf },

    /// The wordlist exists but could not be opened or read to the end.
    #[error("failed to read file '{}': {source}", path.display())]
    InputUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A numeric option was given a value that is not a non-negative integer.
    #[error("invalid value '{value}' for --{option}")]
    InvalidNumericOption { option: String, value: String },

    /// The output file already exists and was left untouched.
    #[error("failed to write to {}, file already exists", path.display())]
    OutputAlreadyExists { path: PathBuf },

    /// Creating or writing the output file failed part-way.
    #[error("failed saving passwords to {}: {source}", path.display())]
    OutputWriteFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl MangleError {
    /// Fatal errors abort the run; the rest are reported and the run goes on.
    pub fn is_fatal(&self) -> bool {
        !matches!(
            self,
            MangleError::OutputAlreadyExists { .. } | MangleError::OutputWriteFailure { .. }
        )
    }

    /// Whether the error came from a malformed configuration value, in which
    /// case the usage text is shown instead of a bare diagnostic.
    pub fn shows_usage(&self) -> bool {
        matches!(self, MangleError::InvalidNumericOption { .. })
    }
}
