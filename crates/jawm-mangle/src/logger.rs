// Progress messages for a mangling run

use std::cell::RefCell;
use std::io::{self, Write};

/// Prefix put in front of every verbose message.
const PREFIX: &str = "[JAWM]";

/// Receiver for user-facing progress messages.
///
/// The pipeline reports each stage through this object, in execution order.
/// Whether anything is shown is up to the implementation.
pub trait MangleLogger {
    fn log(&self, message: &str);
}

/// Prints `[JAWM] <message>` to standard output when enabled, and nothing
/// otherwise.
#[derive(Debug, Clone, Copy, Default)]
pub struct VerboseLogger {
    enabled: bool,
}

impl VerboseLogger {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

impl MangleLogger for VerboseLogger {
    fn log(&self, message: &str) {
        if !self.enabled {
            return;
        }
        let stdout = io::stdout();
        let mut out = stdout.lock();
        // A closed stdout is not worth aborting the run over.
        let _ = writeln!(out, "{PREFIX} {message}");
        let _ = out.flush();
    }
}

/// Keeps every message in memory, in order.
#[derive(Debug, Default)]
pub struct MemoryLogger {
    messages: RefCell<Vec<String>>,
}

impl MemoryLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the messages logged so far.
    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }
}

impl MangleLogger for MemoryLogger {
    fn log(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}
