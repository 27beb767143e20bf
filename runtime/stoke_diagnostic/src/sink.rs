//! Diagnostic sinks.
//!
//! A sink only observes: emitting never changes what the loader does next.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::{Diagnostic, Level};

/// Receiver of loader diagnostics.
pub trait DiagnosticSink: Send {
    /// Accept one diagnostic.
    fn emit(&mut self, diagnostic: Diagnostic);
}

/// Forward diagnostics to `tracing` events.
///
/// Events are emitted with target `stoke_loader` so `RUST_LOG=stoke_loader=debug`
/// shows every probe.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn emit(&mut self, diagnostic: Diagnostic) {
        let code = diagnostic.code.map(|c| c.as_str());
        let path = diagnostic.path.as_ref().map(|p| p.display().to_string());
        match diagnostic.level {
            Level::Debug => {
                tracing::debug!(target: "stoke_loader", ?code, ?path, "{}", diagnostic.message);
            }
            Level::Info => {
                tracing::info!(target: "stoke_loader", ?code, ?path, "{}", diagnostic.message);
            }
            Level::Warning => {
                tracing::warn!(target: "stoke_loader", ?code, ?path, "{}", diagnostic.message);
            }
            Level::Error => {
                tracing::error!(target: "stoke_loader", ?code, ?path, "{}", diagnostic.message);
            }
        }
    }
}

/// Discard every diagnostic.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn emit(&mut self, _diagnostic: Diagnostic) {}
}

/// Collecting sink with shared ownership.
///
/// Clones share one buffer: hand one clone to the loader and keep another
/// to inspect or drain what was emitted.
///
/// # Example
///
/// ```text
/// let queue = DiagnosticQueue::new();
/// let loader = Loader::new(config, source, queue.clone());
/// // ... resolve
/// for diag in queue.drain() { ... }
/// ```
#[derive(Clone, Debug, Default)]
pub struct DiagnosticQueue {
    entries: Arc<Mutex<Vec<Diagnostic>>>,
}

impl DiagnosticQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of everything collected so far.
    pub fn snapshot(&self) -> Vec<Diagnostic> {
        self.entries.lock().clone()
    }

    /// Take everything collected so far, leaving the queue empty.
    pub fn drain(&self) -> Vec<Diagnostic> {
        std::mem::take(&mut *self.entries.lock())
    }

    /// Number of collected diagnostics.
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    /// Check if nothing has been collected.
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    /// Number of collected diagnostics at exactly `level`.
    pub fn count_at(&self, level: Level) -> usize {
        self.entries
            .lock()
            .iter()
            .filter(|d| d.level == level)
            .count()
    }

    /// Whether any collected message contains `needle`.
    pub fn contains_message(&self, needle: &str) -> bool {
        self.entries
            .lock()
            .iter()
            .any(|d| d.message.contains(needle))
    }
}

impl DiagnosticSink for DiagnosticQueue {
    fn emit(&mut self, diagnostic: Diagnostic) {
        self.entries.lock().push(diagnostic);
    }
}

impl<A: DiagnosticSink, B: DiagnosticSink> DiagnosticSink for (A, B) {
    fn emit(&mut self, diagnostic: Diagnostic) {
        self.0.emit(diagnostic.clone());
        self.1.emit(diagnostic);
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for Box<S> {
    fn emit(&mut self, diagnostic: Diagnostic) {
        (**self).emit(diagnostic);
    }
}
