// Sink: stream the final set or save it to a new file

use std::fs::OpenOptions;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use jawm_core::{CandidateSet, MangleError};

/// Candidates in emission order: set order, or ascending when `sorted`.
pub fn ordered(candidates: &CandidateSet, sorted: bool) -> Vec<&str> {
    let mut words: Vec<&str> = candidates.iter().map(String::as_str).collect();
    if sorted {
        words.sort_unstable();
    }
    words
}

/// Write one candidate per line to `out`. Returns the number of lines.
pub fn write_lines<W: Write>(out: &mut W, candidates: &CandidateSet, sorted: bool) -> io::Result<usize> {
    let words = ordered(candidates, sorted);
    for word in &words {
        writeln!(out, "{word}")?;
    }
    out.flush()?;
    Ok(words.len())
}

/// Save the candidates to a file that must not exist yet.
///
/// Creation is atomic with the existence check, so an existing file is
/// never truncated: it is reported as [`MangleError::OutputAlreadyExists`].
pub fn save_to_file(path: &Path, candidates: &CandidateSet, sorted: bool) -> Result<usize, MangleError> {
    let file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|source| match source.kind() {
            io::ErrorKind::AlreadyExists => MangleError::OutputAlreadyExists { path: path.to_path_buf() },
            _ => MangleError::OutputWriteFailure { path: path.to_path_buf(), source },
        })?;
    let mut out = BufWriter::new(file);
    write_lines(&mut out, candidates, sorted)
        .map_err(|source| MangleError::OutputWriteFailure { path: path.to_path_buf(), source })
}
