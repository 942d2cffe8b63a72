#![deny(missing_docs)]

//! # Diagnostics
//!
//! The reporting boundary between resolution and the host compilation
//! context. Classification failures surface as appended diagnostics rather
//! than unwinding errors, so one bad operation never halts a batch; the host
//! decides at a later stage whether accumulated diagnostics are fatal.

use serde::{Deserialize, Serialize};
use std::sync::Mutex;

/// Diagnostic codes emitted by the engine.
pub mod codes {
    /// An operation declared no response that classifies as a success body.
    pub const EXPECTED_SUCCESS_RESPONSE: &str = "expected-success-response";
}

/// A single reported diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Stable diagnostic code, e.g. `expected-success-response`.
    pub code: String,
    /// Reference to the offending site (the operation identifier).
    pub target: String,
}

impl Diagnostic {
    /// Creates a diagnostic from its code and target site.
    pub fn new(code: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            target: target.into(),
        }
    }
}

/// Append-only sink for diagnostics.
///
/// Implementations must not block and must not fail; reporting is a
/// side-effecting notification, never an unwinding failure.
pub trait DiagnosticSink {
    /// Appends one diagnostic for the given site.
    fn report(&self, code: &str, target: &str);
}

/// A sink that accumulates diagnostics in memory, in report order.
///
/// Shareable across threads: batch resolution may classify many operations
/// concurrently against one sink.
#[derive(Debug, Default)]
pub struct CollectingSink {
    entries: Mutex<Vec<Diagnostic>>,
}

impl CollectingSink {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of diagnostics reported so far.
    pub fn len(&self) -> usize {
        self.entries.lock().map(|entries| entries.len()).unwrap_or(0)
    }

    /// Whether nothing has been reported.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Snapshot of the reported diagnostics, in report order.
    pub fn entries(&self) -> Vec<Diagnostic> {
        self.entries
            .lock()
            .map(|entries| entries.clone())
            .unwrap_or_default()
    }
}

impl DiagnosticSink for CollectingSink {
    fn report(&self, code: &str, target: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.push(Diagnostic::new(code, target));
        }
    }
}
