//! Progress events emitted by the pipeline.

use std::fmt;

/// Pipeline phase a progress event belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Resolve,
    Transfer,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Resolve => write!(f, "resolve"),
            Phase::Transfer => write!(f, "transfer"),
        }
    }
}

/// Receiver of progress events. Rendering is up to the implementor.
///
/// `on_progress` is called once per finished item, in completion order.
pub trait ProgressSink: Send + Sync {
    fn on_phase_start(&self, _phase: Phase, _total: usize) {}

    fn on_progress(&self, phase: Phase, completed: usize, total: usize);

    fn on_phase_end(&self, _phase: Phase) {}
}

/// Discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn on_progress(&self, _phase: Phase, _completed: usize, _total: usize) {}
}
