//! Shared recording test doubles for the collaborator traits.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use rustc_hash::FxHashMap;

use crate::animation::{TimerHost, TimerId};
use crate::camera::Pose;
use crate::display::{DisplaySink, OverlaySink};
use crate::picking::PickingService;
use crate::scene::BoneId;

/// Everything a [`RecordingDisplay`] observed.
#[derive(Debug, Default)]
pub struct DisplayLog {
    pub poses: Vec<Pose>,
    pub clip_resets: usize,
    pub redraws: usize,
    pub highlights: Vec<Option<BoneId>>,
}

/// Display sink that records every call for later inspection.
#[derive(Clone, Default)]
pub struct RecordingDisplay {
    pub log: Rc<RefCell<DisplayLog>>,
}

impl DisplaySink for RecordingDisplay {
    fn apply_pose(&mut self, pose: &Pose) {
        self.log.borrow_mut().poses.push(*pose);
    }

    fn reset_clipping_range(&mut self) {
        self.log.borrow_mut().clip_resets += 1;
    }

    fn request_redraw(&mut self) {
        self.log.borrow_mut().redraws += 1;
    }

    fn set_highlight(&mut self, bone: Option<BoneId>) {
        self.log.borrow_mut().highlights.push(bone);
    }
}

/// Start/stop history of a [`FakeTimers`] host.
#[derive(Debug, Default)]
pub struct TimerLog {
    pub started: Vec<Duration>,
    pub stopped: Vec<TimerId>,
    next: u64,
}

impl TimerLog {
    /// Timers started but not yet stopped.
    pub fn active(&self) -> usize {
        self.started.len().saturating_sub(self.stopped.len())
    }
}

/// Timer host that hands out sequential ids and records stops.
#[derive(Clone, Default)]
pub struct FakeTimers {
    pub log: Rc<RefCell<TimerLog>>,
}

impl TimerHost for FakeTimers {
    fn start_repeating(&mut self, interval: Duration) -> TimerId {
        let mut log = self.log.borrow_mut();
        log.started.push(interval);
        log.next += 1;
        TimerId::from_raw(log.next)
    }

    fn stop(&mut self, id: TimerId) {
        self.log.borrow_mut().stopped.push(id);
    }
}

/// Everything a [`RecordingOverlay`] observed.
#[derive(Debug, Default)]
pub struct OverlayLog {
    pub hover_texts: Vec<String>,
    pub rotation_hints: Vec<bool>,
    pub notices: Vec<String>,
}

/// Overlay sink that records every call for later inspection.
#[derive(Clone, Default)]
pub struct RecordingOverlay {
    pub log: Rc<RefCell<OverlayLog>>,
}

impl OverlaySink for RecordingOverlay {
    fn set_hover_text(&mut self, text: &str) {
        self.log.borrow_mut().hover_texts.push(text.to_owned());
    }

    fn set_rotation_hint(&mut self, enabled: bool) {
        self.log.borrow_mut().rotation_hints.push(enabled);
    }

    fn notify(&mut self, message: &str) {
        self.log.borrow_mut().notices.push(message.to_owned());
    }
}

/// Picker answering from a fixed coordinate map (coordinates rounded
/// to integers for lookup).
#[derive(Clone, Default)]
pub struct StubPicker {
    hits: FxHashMap<(i32, i32), BoneId>,
}

impl StubPicker {
    /// Register a hit at `(x, y)`.
    #[must_use]
    pub fn with_hit(mut self, x: f32, y: f32, bone: BoneId) -> Self {
        let _ = self.hits.insert((x.round() as i32, y.round() as i32), bone);
        self
    }
}

impl PickingService for StubPicker {
    fn pick(&self, x: f32, y: f32) -> Option<BoneId> {
        self.hits
            .get(&(x.round() as i32, y.round() as i32))
            .copied()
    }
}
