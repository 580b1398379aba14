use std::time::Duration;

use super::timer::{TimerHost, TimerId};
use crate::camera::{Flight, Pose};
use crate::display::DisplaySink;

/// An in-flight interpolation between two poses over a fixed step
/// count. At most one job is live at a time; a new request replaces it.
#[derive(Debug, Clone, Copy)]
struct FlightJob {
    start: Pose,
    end: Pose,
    total_steps: u32,
    current_step: u32,
    timer: Option<TimerId>,
}

/// Timer-driven stepper that advances the live camera flight.
///
/// The driver owns the timer lifecycle: it acquires a repeating timer
/// from the host when a flight begins, steps the interpolation
/// parameter once per tick, and releases the timer exactly once when
/// the flight completes or is cancelled. Stray ticks with no live job
/// are silently ignored.
///
/// Progress is a step counter, not wall-clock time: `t` runs through
/// `1/n, 2/n, .., n/n`, so the final applied frame always lands on
/// `t = 1.0` and the end pose exactly.
#[derive(Debug)]
pub struct FlightDriver {
    job: Option<FlightJob>,
    total_steps: u32,
    tick_interval: Duration,
}

impl FlightDriver {
    /// Create a driver that runs flights over `total_steps` ticks of
    /// `tick_interval` each. A zero step count is clamped to one so a
    /// flight always terminates on its first tick.
    #[must_use]
    pub const fn new(total_steps: u32, tick_interval: Duration) -> Self {
        Self {
            job: None,
            total_steps: if total_steps == 0 { 1 } else { total_steps },
            tick_interval,
        }
    }

    /// Whether a flight is currently live.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.job.is_some()
    }

    /// The repeating interval flights tick at.
    #[must_use]
    pub const fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    /// Begin `flight`, atomically replacing any live job.
    ///
    /// Replacing an in-flight job keeps its already-running timer; the
    /// single-job invariant guarantees at most one repeating timer
    /// exists, so the driver never re-arms a running one.
    pub fn begin(&mut self, flight: Flight, timers: &mut dyn TimerHost) {
        let timer = match self.job.take() {
            Some(previous) => previous.timer,
            None => Some(timers.start_repeating(self.tick_interval)),
        };
        log::debug!(
            "flight started: {} steps toward {}",
            self.total_steps,
            flight.end.position
        );
        self.job = Some(FlightJob {
            start: flight.start,
            end: flight.end,
            total_steps: self.total_steps,
            current_step: 0,
            timer,
        });
    }

    /// Drop the live flight, releasing its timer. The camera freezes at
    /// whatever pose the last tick applied. No-op when idle.
    pub fn cancel(&mut self, timers: &mut dyn TimerHost) {
        if let Some(job) = self.job.take() {
            if let Some(id) = job.timer {
                timers.stop(id);
            }
            log::debug!(
                "flight cancelled at step {}/{}",
                job.current_step,
                job.total_steps
            );
        }
    }

    /// Advance the live flight by one step and push the interpolated
    /// pose through `display`.
    ///
    /// Returns the applied pose so the caller can update the camera
    /// rig's live pose, or `None` for a stray tick with no job. On the
    /// final step the timer is released and the job cleared; logical
    /// zoom state was already committed at request time and is never
    /// touched here.
    pub fn tick(
        &mut self,
        display: &mut dyn DisplaySink,
        timers: &mut dyn TimerHost,
    ) -> Option<Pose> {
        let job = self.job.as_mut()?;

        job.current_step += 1;
        let t = job.current_step as f32 / job.total_steps as f32;
        let pose = job.start.lerp(&job.end, t);
        display.apply_pose(&pose);
        display.reset_clipping_range();
        display.request_redraw();

        if job.current_step >= job.total_steps {
            if let Some(finished) = self.job.take() {
                if let Some(id) = finished.timer {
                    timers.stop(id);
                }
            }
            log::debug!("flight complete at {}", pose.position);
        }

        Some(pose)
    }
}
