//! Display collaborators that receive the table's text output.

use alloc::string::{String, ToString};
use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::sync::Mutex;

/// Receives formatted lines such as `Bet 5` or `Deal 7♥, 9♣ vs A♠`.
pub trait Sink: Send + Sync {
    /// Accepts one line of output.
    fn emit(&self, line: &str);
}

impl<S: Sink + ?Sized> Sink for Arc<S> {
    fn emit(&self, line: &str) {
        (**self).emit(line);
    }
}

/// Forwards every line to [`log::info!`].
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl Sink for LogSink {
    fn emit(&self, line: &str) {
        log::info!("{line}");
    }
}

/// Records every line in memory.
#[derive(Default)]
pub struct Transcript {
    lines: Mutex<Vec<String>>,
}

impl Transcript {
    /// Creates an empty transcript.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the recorded lines.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }

    /// Discards the recorded lines.
    pub fn clear(&self) {
        self.lines.lock().clear();
    }
}

impl Sink for Transcript {
    fn emit(&self, line: &str) {
        self.lines.lock().push(line.to_string());
    }
}
