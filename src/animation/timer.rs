use std::time::Duration;

/// Opaque handle to a running repeating timer, issued by a
/// [`TimerHost`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

impl TimerId {
    /// Construct a handle from a host-assigned value.
    #[must_use]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }
}

/// The host's repeating-timer facility.
///
/// The driver acquires a timer on the first animation request and
/// releases it when the flight completes or is cancelled. It holds at
/// most one handle and never stops the same handle twice; hosts may
/// still treat `stop` as idempotent for robustness.
pub trait TimerHost {
    /// Start a repeating timer firing every `interval`; each firing
    /// must reach the engine as a timer tick.
    fn start_repeating(&mut self, interval: Duration) -> TimerId;

    /// Stop and release a running timer.
    fn stop(&mut self, id: TimerId);
}
