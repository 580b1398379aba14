//! Headless demo driver.
//!
//! Builds a tiny three-bone skeleton, wires the engine to logging
//! collaborators, and replays a scripted interaction (hover, zoom in,
//! blocked reset, zoom out, reset, quit) through the public event
//! surface. Timer ticks are pumped synchronously: each scripted step
//! runs any in-flight animation to completion, exactly as a host event
//! loop would between input events.

use std::time::Duration;

use glam::Vec3;
use osteo::animation::{TimerHost, TimerId};
use osteo::camera::Pose;
use osteo::display::{DisplaySink, OverlaySink};
use osteo::engine::{Platform, ViewerEngine};
use osteo::options::Options;
use osteo::picking::PickingService;
use osteo::scene::{Aabb, BoneId, BoneRegistry};

/// Picker mapping fixed screen regions to bones: a stand-in for real
/// hit testing, good enough to drive the interaction protocol.
struct RegionPicker {
    regions: Vec<((f32, f32, f32, f32), BoneId)>,
}

impl PickingService for RegionPicker {
    fn pick(&self, x: f32, y: f32) -> Option<BoneId> {
        self.regions
            .iter()
            .find(|((x0, y0, x1, y1), _)| {
                x >= *x0 && x < *x1 && y >= *y0 && y < *y1
            })
            .map(|(_, bone)| *bone)
    }
}

/// Display sink that logs pose updates instead of rendering.
#[derive(Default)]
struct LogDisplay {
    applied: usize,
}

impl DisplaySink for LogDisplay {
    fn apply_pose(&mut self, pose: &Pose) {
        self.applied += 1;
        log::debug!(
            "pose #{}: position {} focal {}",
            self.applied,
            pose.position,
            pose.focal_point
        );
    }

    fn reset_clipping_range(&mut self) {}

    fn request_redraw(&mut self) {}

    fn set_highlight(&mut self, bone: Option<BoneId>) {
        log::debug!("highlight: {bone:?}");
    }
}

/// Overlay sink that logs hover labels and notices.
#[derive(Default)]
struct LogOverlay;

impl OverlaySink for LogOverlay {
    fn set_hover_text(&mut self, text: &str) {
        if !text.is_empty() {
            log::info!("{text}");
        }
    }

    fn set_rotation_hint(&mut self, enabled: bool) {
        log::info!("rotation enabled: {enabled}");
    }

    fn notify(&mut self, message: &str) {
        log::warn!("{message}");
    }
}

/// Synchronous stand-in for a platform timer facility. The demo pumps
/// ticks itself, so this only tracks whether a timer is armed.
#[derive(Default)]
struct ManualTimers {
    next: u64,
    active: Option<TimerId>,
}

impl TimerHost for ManualTimers {
    fn start_repeating(&mut self, interval: Duration) -> TimerId {
        self.next += 1;
        let id = TimerId::from_raw(self.next);
        self.active = Some(id);
        log::debug!("timer armed at {interval:?}");
        id
    }

    fn stop(&mut self, id: TimerId) {
        if self.active == Some(id) {
            self.active = None;
            log::debug!("timer released");
        }
    }
}

fn build_skeleton() -> (BoneRegistry, RegionPicker) {
    let mut registry = BoneRegistry::new();
    let skull = registry.insert(
        "skull",
        Aabb::new(Vec3::new(-1.0, 8.0, -1.0), Vec3::new(1.0, 10.0, 1.0)),
    );
    let femur = registry.insert(
        "femur",
        Aabb::new(Vec3::new(4.0, -1.0, -1.0), Vec3::new(6.0, 1.0, 1.0)),
    );
    let tibia = registry.insert(
        "tibia",
        Aabb::new(Vec3::new(-6.0, -1.0, -1.0), Vec3::new(-4.0, 1.0, 1.0)),
    );

    let picker = RegionPicker {
        regions: vec![
            ((300.0, 0.0, 500.0, 200.0), skull),
            ((500.0, 400.0, 700.0, 600.0), femur),
            ((100.0, 400.0, 300.0, 600.0), tibia),
        ],
    };
    (registry, picker)
}

/// Run any in-flight animation to completion, like a host event loop
/// would between scripted input events.
fn pump(engine: &mut ViewerEngine) {
    let mut guard = 0;
    while engine.is_animating() && guard < 10_000 {
        engine.on_timer_tick();
        guard += 1;
    }
}

fn main() {
    env_logger::init();

    let (registry, picker) = build_skeleton();
    let bone_count = registry.len();
    let platform = Platform {
        geometry: Box::new(registry),
        picking: Box::new(picker),
        display: Box::new(LogDisplay::default()),
        overlay: Box::new(LogOverlay),
        timers: Box::new(ManualTimers::default()),
    };

    let home = Pose::new(Vec3::new(0.0, 2.0, 30.0), Vec3::ZERO, Vec3::Y, 30.0);
    let mut engine = ViewerEngine::new(Options::default(), home, platform);
    log::info!("skeleton loaded: {bone_count} bones");

    // Hover over the femur, then click it.
    engine.on_pointer_move(600.0, 500.0);
    engine.on_pointer_down(600.0, 500.0);
    pump(&mut engine);
    log::info!("zoomed on femur: position {}", engine.pose().position);

    // Reset is blocked while zoomed in.
    engine.on_key("KeyF");

    // Retarget straight to the skull, then click empty space to fly
    // back out.
    engine.on_pointer_down(400.0, 100.0);
    pump(&mut engine);
    log::info!("zoomed on skull: position {}", engine.pose().position);

    engine.on_pointer_down(0.0, 0.0);
    pump(&mut engine);
    log::info!("back at overview: position {}", engine.pose().position);

    // Rotation mode, a quarter-turn in 5 degree steps, then reset.
    engine.on_key("KeyR");
    for _ in 0..18 {
        engine.on_key("ArrowRight");
    }
    log::info!("after orbit: position {}", engine.pose().position);
    engine.on_key("KeyR");
    engine.on_key("KeyF");

    engine.on_key("KeyQ");
    if engine.shutdown_requested() {
        log::info!("viewer closed");
    }
}
