// Mangler: assembles the enabled stages and drives a complete run
//
// Stage order is fixed: load, numbers, special characters, length filter,
// then emission. Each stage consumes the working set and hands back its
// replacement; a fatal error stops the run before any later stage.

use std::io::Write;
use std::path::{Path, PathBuf};

use jawm_core::{CandidateSet, MangleError};

use crate::config::{MangleConfig, OutputTarget};
use crate::length::LengthFilter;
use crate::loader;
use crate::logger::MangleLogger;
use crate::numbers::NumberAppender;
use crate::sink;
use crate::special::SpecialAppender;
use crate::stage::Stage;

/// How the final set left the pipeline.
#[derive(Debug)]
pub enum Emission {
    /// Written to the output stream.
    Streamed { count: usize },
    /// Written to a newly created file.
    Saved { path: PathBuf, count: usize },
    /// Emission failed with a recoverable error; nothing was streamed instead.
    Failed(MangleError),
}

/// Outcome of [`Mangler::run`].
#[derive(Debug)]
pub struct RunSummary {
    /// Candidates after loading and case expansion.
    pub loaded: usize,
    /// Candidates after the last transform stage.
    pub generated: usize,
    pub emission: Emission,
}

/// The mangling pipeline for one configuration.
pub struct Mangler {
    config: MangleConfig,
    stages: Vec<Box<dyn Stage>>,
}

impl Mangler {
    /// Build the pipeline, enabling only the stages `config` asks for.
    pub fn new(config: MangleConfig) -> Self {
        let mut stages: Vec<Box<dyn Stage>> = Vec::new();
        if config.digits > 0 {
            stages.push(Box::new(NumberAppender { digits: config.digits }));
        }
        if config.special_passes > 0 {
            stages.push(Box::new(SpecialAppender { passes: config.special_passes }));
        }
        if let Some(min_length) = config.min_length {
            stages.push(Box::new(LengthFilter { min_length }));
        }
        Self { config, stages }
    }

    /// Names of the enabled transform stages, in execution order.
    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|stage| stage.name()).collect()
    }

    /// Run every enabled transform stage over `candidates`.
    pub fn transform(&self, candidates: CandidateSet, logger: &dyn MangleLogger) -> CandidateSet {
        let mut working = candidates;
        for stage in &self.stages {
            log::trace!("enter: stage {} ({} candidates)", stage.name(), working.len());
            working = stage.apply(working, logger);
            log::debug!("stage {} produced {} candidates", stage.name(), working.len());
        }
        working
    }

    /// Load in-memory base words and run the transform stages over them.
    pub fn mangle<I, S>(&self, lines: I, logger: &dyn MangleLogger) -> CandidateSet
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let candidates = loader::load_lines(lines, self.config.case_policy);
        self.transform(candidates, logger)
    }

    /// Execute a full run: read the wordlist, transform, and emit.
    ///
    /// Candidates bound for the output stream are written to `out`. Input
    /// failures are returned as errors; output failures are logged and
    /// reported in the summary instead.
    pub fn run<W: Write>(&self, logger: &dyn MangleLogger, out: &mut W) -> Result<RunSummary, MangleError> {
        log::trace!("enter: run({:?})", self.config);
        let wordlist = &self.config.wordlist;

        let candidates = match loader::load_file(wordlist, self.config.case_policy) {
            Ok(candidates) => candidates,
            Err(err) => {
                match &err {
                    MangleError::InputNotFound { .. } => {
                        logger.log(&format!("Failed to open file '{}'.", wordlist.display()))
                    }
                    _ => logger.log(&format!("Failed to read file '{}'.", wordlist.display())),
                }
                return Err(err);
            }
        };
        let loaded = candidates.len();
        logger.log(&format!("Loaded {loaded} candidates from {}.", wordlist.display()));

        let candidates = self.transform(candidates, logger);
        let generated = candidates.len();
        logger.log(&format!("Generated {generated} unique passwords."));

        let emission = match &self.config.output {
            OutputTarget::File(path) => self.save(path, &candidates, logger),
            OutputTarget::Stdout => match sink::write_lines(out, &candidates, self.config.sorted) {
                Ok(count) => Emission::Streamed { count },
                Err(source) => {
                    logger.log(&format!("Failed writing passwords to standard output: {source}."));
                    Emission::Failed(MangleError::OutputWriteFailure {
                        path: PathBuf::from("<stdout>"),
                        source,
                    })
                }
            },
        };

        log::trace!("exit: run");
        Ok(RunSummary { loaded, generated, emission })
    }

    fn save(&self, path: &Path, candidates: &CandidateSet, logger: &dyn MangleLogger) -> Emission {
        logger.log(&format!("Attempting to write generated passwords to {}.", path.display()));
        match sink::save_to_file(path, candidates, self.config.sorted) {
            Ok(count) => {
                logger.log(&format!("Saved passwords to {}.", path.display()));
                Emission::Saved { path: path.to_path_buf(), count }
            }
            Err(err) => {
                match &err {
                    MangleError::OutputAlreadyExists { .. } => logger.log(&format!(
                        "Failed to write to {}, file already exists.",
                        path.display()
                    )),
                    MangleError::OutputWriteFailure { source, .. } => logger.log(&format!(
                        "Failed saving passwords to {}: {source}.",
                        path.display()
                    )),
                    other => logger.log(&other.to_string()),
                }
                Emission::Failed(err)
            }
        }
    }
}
