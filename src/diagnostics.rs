//! Diagnostic sink for non-fatal catalog problems.
//!
//! Load and derivation failures are reported here and never change control
//! flow. The default sink forwards to `tracing`; tests install a recorder.

use parking_lot::Mutex;
use tracing::Level;

pub trait DiagnosticSink: Send + Sync {
    fn log(&self, level: Level, message: &str);
}

/// Forwards diagnostics to the `tracing` subscriber.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn log(&self, level: Level, message: &str) {
        match level {
            Level::ERROR => tracing::error!(target: "ringo::catalog", "{message}"),
            Level::WARN => tracing::warn!(target: "ringo::catalog", "{message}"),
            Level::INFO => tracing::info!(target: "ringo::catalog", "{message}"),
            Level::DEBUG => tracing::debug!(target: "ringo::catalog", "{message}"),
            _ => tracing::trace!(target: "ringo::catalog", "{message}"),
        }
    }
}

/// Keeps every diagnostic in memory.
#[derive(Debug, Default)]
pub struct RecordingSink {
    entries: Mutex<Vec<(Level, String)>>,
}

impl RecordingSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn entries(&self) -> Vec<(Level, String)> {
        self.entries.lock().clone()
    }

    /// Messages logged at `level`.
    #[must_use]
    pub fn messages_at(&self, level: Level) -> Vec<String> {
        self.entries
            .lock()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m.clone())
            .collect()
    }
}

impl DiagnosticSink for RecordingSink {
    fn log(&self, level: Level, message: &str) {
        self.entries.lock().push((level, message.to_string()));
    }
}

impl<T: DiagnosticSink + ?Sized> DiagnosticSink for std::sync::Arc<T> {
    fn log(&self, level: Level, message: &str) {
        (**self).log(level, message);
    }
}
