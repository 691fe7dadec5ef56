//! Platform abstraction layer
//!
//! Handles browser/native differences for the repeating tick timer.
//! At most one timer is armed at a time; re-arming always cancels first.

#[cfg(target_arch = "wasm32")]
pub mod interval;

#[cfg(target_arch = "wasm32")]
pub use interval::IntervalScheduler;

/// A single repeating timer
pub trait Scheduler {
    /// Start firing every `interval_ms`, replacing any armed timer
    fn arm(&mut self, interval_ms: u32);
    /// Stop firing. No-op when nothing is armed.
    fn cancel(&mut self);
    /// Interval of the armed timer, if any
    fn armed(&self) -> Option<u32>;
}

/// Scheduler that only records what it was asked to do.
///
/// The native build drives ticks itself while `armed()` is set.
#[derive(Debug, Clone, Default)]
pub struct ManualScheduler {
    armed: Option<u32>,
    /// Every interval passed to `arm`, in order
    pub history: Vec<u32>,
    /// Cancels that stopped an armed timer
    pub cancels: u32,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Scheduler for ManualScheduler {
    fn arm(&mut self, interval_ms: u32) {
        self.armed = Some(interval_ms);
        self.history.push(interval_ms);
    }

    fn cancel(&mut self) {
        if self.armed.take().is_some() {
            self.cancels += 1;
        }
    }

    fn armed(&self) -> Option<u32> {
        self.armed
    }
}
