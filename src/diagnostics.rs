//! Injected diagnostic reporting.
//!
//! Components that recover from data-integrity or timing faults report them
//! here instead of logging through a global, so hosts and tests decide where
//! the reports go.

use std::cell::RefCell;
use std::fmt;

/// A recoverable fault observed by the core.
#[derive(Debug, Clone, PartialEq)]
pub enum Diagnostic {
    /// An unlocked id has no entry in the catalog. The id is not rendered.
    UnknownUnlockedId { id: String },
    /// A timer fired for an animation that was already cancelled or replaced.
    StaleTimer { generation: u64, current: u64 },
    /// An unlock event was enqueued twice in one session.
    DuplicateEnqueue { id: String },
    /// Layout was requested before the container had a usable width.
    LayoutFallback { container_width: f64 },
    /// The start condition was re-observed while the animation was already running.
    ReentrantStart { id: String },
    /// The queue head's cell is not unlocked in the grid snapshot yet. The
    /// presenter waits for a fresher snapshot before animating it.
    HeadNotUnlocked { id: String },
}

impl Diagnostic {
    /// Data-integrity faults are worth a warning; the rest are expected no-ops.
    pub fn is_warning(&self) -> bool {
        matches!(self, Diagnostic::UnknownUnlockedId { .. })
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::UnknownUnlockedId { id } => {
                write!(f, "unlocked id `{}` is not in the catalog", id)
            }
            Diagnostic::StaleTimer {
                generation,
                current,
            } => write!(
                f,
                "dropped timer from animation run {} (current run {})",
                generation, current
            ),
            Diagnostic::DuplicateEnqueue { id } => {
                write!(f, "unlock `{}` already queued this session", id)
            }
            Diagnostic::LayoutFallback { container_width } => write!(
                f,
                "container width {} unusable, using fallback cell size",
                container_width
            ),
            Diagnostic::ReentrantStart { id } => {
                write!(f, "animation for `{}` already started", id)
            }
            Diagnostic::HeadNotUnlocked { id } => {
                write!(f, "waiting for `{}` to appear unlocked in the grid", id)
            }
        }
    }
}

/// Receives diagnostics from the core.
pub trait DiagnosticSink {
    fn report(&self, diagnostic: Diagnostic);
}

/// Forwards diagnostics to the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn report(&self, diagnostic: Diagnostic) {
        if diagnostic.is_warning() {
            log::warn!("{}", diagnostic);
        } else {
            log::debug!("{}", diagnostic);
        }
    }
}

/// Discards every diagnostic.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn report(&self, _diagnostic: Diagnostic) {}
}

/// Keeps diagnostics in memory.
#[derive(Debug, Default)]
pub struct RecordingSink {
    entries: RefCell<Vec<Diagnostic>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<Diagnostic> {
        self.entries.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    /// Removes and returns everything recorded so far.
    pub fn take(&self) -> Vec<Diagnostic> {
        std::mem::take(&mut *self.entries.borrow_mut())
    }
}

impl DiagnosticSink for RecordingSink {
    fn report(&self, diagnostic: Diagnostic) {
        self.entries.borrow_mut().push(diagnostic);
    }
}
