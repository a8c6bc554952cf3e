// Loader: read base words and insert their case variants

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use jawm_core::{CandidateSet, CasePolicy, MangleError};

/// Build the initial candidate set from base words.
///
/// Each line contributes the forms selected by `policy`; duplicates collapse
/// in the set. Blank lines are kept and yield the empty candidate.
pub fn load_lines<I, S>(lines: I, policy: CasePolicy) -> CandidateSet
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut candidates = CandidateSet::new();
    for line in lines {
        insert_variants(&mut candidates, line.as_ref(), policy);
    }
    candidates
}

/// Read base words from any buffered reader.
///
/// Line terminators (`\n` and `\r\n`) are stripped. Lines that are not
/// valid UTF-8 (Latin-1 entries in leaked wordlists) are decoded lossily,
/// with U+FFFD in place of the bad bytes; only real I/O errors fail.
pub fn load_reader<R: BufRead>(mut reader: R, policy: CasePolicy) -> io::Result<CandidateSet> {
    let mut candidates = CandidateSet::new();
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let line = strip_line_ending(&buf);
        insert_variants(&mut candidates, &String::from_utf8_lossy(line), policy);
    }
    Ok(candidates)
}

fn strip_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

/// Read the wordlist at `path`.
///
/// A missing file is [`MangleError::InputNotFound`]; any other open or read
/// failure is [`MangleError::InputUnreadable`].
pub fn load_file(path: &Path, policy: CasePolicy) -> Result<CandidateSet, MangleError> {
    let file = File::open(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => MangleError::InputNotFound { path: path.to_path_buf() },
        _ => MangleError::InputUnreadable { path: path.to_path_buf(), source },
    })?;
    load_reader(BufReader::new(file), policy)
        .map_err(|source| MangleError::InputUnreadable { path: path.to_path_buf(), source })
}

fn insert_variants(candidates: &mut CandidateSet, line: &str, policy: CasePolicy) {
    for form in policy.forms() {
        candidates.insert(form.apply(line));
    }
}
