use super::command::ViewerCommand;
use crate::animation::{FlightDriver, TimerHost};
use crate::camera::{CameraRig, Pose, ResetOutcome};
use crate::display::{DisplaySink, OverlaySink};
use crate::input::{InputEvent, InteractionRouter, PointerButton};
use crate::options::Options;
use crate::picking::PickingService;
use crate::scene::{BoneId, GeometryProvider};

/// Notice surfaced when a reset is requested while zoomed in.
const RESET_BLOCKED_NOTICE: &str =
    "Cannot reset while zoomed in. Click empty space first.";

/// The host-supplied collaborators the engine drives.
///
/// Boxed trait objects rather than generics: there is exactly one of
/// each per viewer instance and nothing here is hot enough to care
/// about dynamic dispatch.
pub struct Platform {
    /// Bone bounds and names.
    pub geometry: Box<dyn GeometryProvider>,
    /// Screen-coordinate hit testing.
    pub picking: Box<dyn PickingService>,
    /// Render camera and redraw sink.
    pub display: Box<dyn DisplaySink>,
    /// Hover label / hint / notice sink.
    pub overlay: Box<dyn OverlaySink>,
    /// Repeating-timer facility.
    pub timers: Box<dyn TimerHost>,
}

/// The viewer facade: one instance owns the camera rig, the animation
/// driver, and the interaction router, and exposes the event surface
/// the host loop drives (`on_pointer_move` / `on_pointer_down` /
/// `on_key` / `on_timer_tick`).
///
/// All methods run to completion on the caller's thread; the host
/// event loop serializes input events and timer ticks, which is what
/// makes job replacement atomic.
pub struct ViewerEngine {
    rig: CameraRig,
    driver: FlightDriver,
    router: InteractionRouter,
    platform: Platform,
    options: Options,
    shutdown: bool,
}

impl ViewerEngine {
    /// Create an engine whose camera starts at (and resets to) `home`.
    #[must_use]
    pub fn new(options: Options, home: Pose, platform: Platform) -> Self {
        let driver = FlightDriver::new(
            options.animation.steps,
            options.animation.tick_interval(),
        );
        let router =
            InteractionRouter::with_bindings(options.keybindings.clone());
        Self {
            rig: CameraRig::new(home),
            driver,
            router,
            platform,
            options,
            shutdown: false,
        }
    }

    /// Runtime configuration the engine was built with.
    #[must_use]
    pub const fn options(&self) -> &Options {
        &self.options
    }

    /// Current live camera pose.
    #[must_use]
    pub const fn pose(&self) -> Pose {
        self.rig.pose()
    }

    /// Whether the camera is logically zoomed in (true from the moment
    /// a zoom-in is requested, not from its completion).
    #[must_use]
    pub const fn is_zoomed(&self) -> bool {
        self.rig.is_zoomed()
    }

    /// Whether rotation mode is enabled.
    #[must_use]
    pub const fn is_rotation_enabled(&self) -> bool {
        self.rig.is_rotation_enabled()
    }

    /// Whether a camera flight is currently animating.
    #[must_use]
    pub const fn is_animating(&self) -> bool {
        self.driver.is_active()
    }

    /// The bone currently under the cursor, if any.
    #[must_use]
    pub const fn hovered(&self) -> Option<BoneId> {
        self.router.hovered()
    }

    /// Whether a quit was requested; the host owns actual teardown.
    #[must_use]
    pub const fn shutdown_requested(&self) -> bool {
        self.shutdown
    }

    /// Pointer moved to `(x, y)`: picks and updates hover feedback.
    pub fn on_pointer_move(&mut self, x: f32, y: f32) {
        let picked = self.platform.picking.pick(x, y);
        let zoomed = self.rig.is_zoomed();
        if let Some(cmd) =
            self.router
                .route(InputEvent::CursorMoved { x, y }, picked, zoomed)
        {
            self.execute(cmd);
        }
    }

    /// Primary pointer press at `(x, y)`: picks and requests
    /// zoom-in/zoom-out accordingly.
    pub fn on_pointer_down(&mut self, x: f32, y: f32) {
        let picked = self.platform.picking.pick(x, y);
        let zoomed = self.rig.is_zoomed();
        let event = InputEvent::PointerButton {
            button: PointerButton::Primary,
            pressed: true,
        };
        if let Some(cmd) = self.router.route(event, picked, zoomed) {
            self.execute(cmd);
        }
    }

    /// Key press by key-code string (e.g. `"KeyF"`).
    pub fn on_key(&mut self, key: &str) {
        if let Some(cmd) = self.router.route_key(key) {
            self.execute(cmd);
        }
    }

    /// One firing of the repeating animation timer: advances the live
    /// flight and syncs the interpolated pose into the rig. Stray
    /// ticks are ignored.
    pub fn on_timer_tick(&mut self) {
        if let Some(pose) = self
            .driver
            .tick(&mut *self.platform.display, &mut *self.platform.timers)
        {
            self.rig.set_pose(pose);
        }
    }

    /// Execute a viewer command. The single dispatch point for every
    /// interactive operation.
    pub fn execute(&mut self, cmd: ViewerCommand) {
        match cmd {
            ViewerCommand::ZoomToBone(bone) => {
                let center = self.platform.geometry.center_of(bone);
                if let Some(flight) = self.rig.request_zoom_to(bone, center) {
                    self.driver.begin(flight, &mut *self.platform.timers);
                }
            }
            ViewerCommand::ZoomOut => {
                if let Some(flight) = self.rig.request_zoom_out() {
                    self.driver.begin(flight, &mut *self.platform.timers);
                }
            }
            ViewerCommand::SetHover(bone) => self.set_hover(bone),
            ViewerCommand::ToggleRotation => {
                let enabled = self.rig.toggle_rotation();
                self.platform.overlay.set_rotation_hint(enabled);
            }
            ViewerCommand::RotateCamera { axis, degrees } => {
                if self.rig.rotate(axis, degrees) {
                    self.push_pose();
                }
            }
            ViewerCommand::ResetCamera => match self.rig.reset_to_home() {
                ResetOutcome::Reset => {
                    log::info!("camera reset to home pose");
                    self.push_pose();
                }
                ResetOutcome::BlockedWhileZoomed => {
                    self.platform.overlay.notify(RESET_BLOCKED_NOTICE);
                }
            },
            ViewerCommand::CancelFlight => {
                self.driver.cancel(&mut *self.platform.timers);
            }
            ViewerCommand::Quit => {
                log::info!("shutdown requested");
                self.shutdown = true;
            }
        }
    }

    /// Push hover feedback (highlight + label) to the sinks.
    fn set_hover(&mut self, bone: Option<BoneId>) {
        self.platform.display.set_highlight(bone);
        let label = bone
            .and_then(|b| self.platform.geometry.name(b))
            .map(|name| format!("Hovered: {name}"));
        self.platform
            .overlay
            .set_hover_text(label.as_deref().unwrap_or(""));
    }

    /// Apply the rig's live pose to the display (used by the
    /// non-animated mutations: reset and manual rotation).
    fn push_pose(&mut self) {
        let pose = self.rig.pose();
        self.platform.display.apply_pose(&pose);
        self.platform.display.reset_clipping_range();
        self.platform.display.request_redraw();
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::{Platform, ViewerEngine};
    use crate::camera::Pose;
    use crate::options::Options;
    use crate::scene::{Aabb, BoneId, BoneRegistry};
    use crate::testing::{
        FakeTimers, RecordingDisplay, RecordingOverlay, StubPicker,
    };

    const EPS: f32 = 1e-4;
    const STEPS: u32 = 60;

    struct Fixture {
        engine: ViewerEngine,
        display: RecordingDisplay,
        overlay: RecordingOverlay,
        timers: FakeTimers,
        femur: BoneId,
    }

    /// Femur at (100,100) with center (5,0,0); tibia at (200,200) with
    /// center (0,4,0); everything else is empty space.
    fn fixture() -> Fixture {
        let mut registry = BoneRegistry::new();
        let femur = registry.insert(
            "femur",
            Aabb::new(Vec3::new(4.0, -1.0, -1.0), Vec3::new(6.0, 1.0, 1.0)),
        );
        let tibia = registry.insert(
            "tibia",
            Aabb::new(Vec3::new(-1.0, 3.0, -1.0), Vec3::new(1.0, 5.0, 1.0)),
        );
        let picker = StubPicker::default()
            .with_hit(100.0, 100.0, femur)
            .with_hit(200.0, 200.0, tibia);

        let display = RecordingDisplay::default();
        let overlay = RecordingOverlay::default();
        let timers = FakeTimers::default();
        let platform = Platform {
            geometry: Box::new(registry),
            picking: Box::new(picker),
            display: Box::new(display.clone()),
            overlay: Box::new(overlay.clone()),
            timers: Box::new(timers.clone()),
        };

        let engine = ViewerEngine::new(Options::default(), home(), platform);
        Fixture {
            engine,
            display,
            overlay,
            timers,
            femur,
        }
    }

    fn home() -> Pose {
        Pose::new(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO, Vec3::Y, 30.0)
    }

    fn run_flight(fx: &mut Fixture) {
        for _ in 0..STEPS {
            fx.engine.on_timer_tick();
        }
    }

    #[test]
    fn click_bone_flies_to_worked_example_pose() {
        let mut fx = fixture();
        fx.engine.on_pointer_down(100.0, 100.0);

        // Early commit: logically zoomed before any tick runs.
        assert!(fx.engine.is_zoomed());
        assert!(fx.engine.is_animating());

        run_flight(&mut fx);
        assert!(!fx.engine.is_animating());
        assert!(fx
            .engine
            .pose()
            .position
            .abs_diff_eq(Vec3::new(5.0, 0.0, 3.0), EPS));
        assert!(fx
            .engine
            .pose()
            .focal_point
            .abs_diff_eq(Vec3::new(5.0, 0.0, 0.0), EPS));
        assert_eq!(fx.timers.log.borrow().active(), 0);
    }

    #[test]
    fn zoom_in_then_out_round_trips_to_home() {
        let mut fx = fixture();
        fx.engine.on_pointer_down(100.0, 100.0);
        run_flight(&mut fx);

        // Empty-space click while zoomed flies back out.
        fx.engine.on_pointer_down(300.0, 300.0);
        assert!(!fx.engine.is_zoomed());
        run_flight(&mut fx);

        assert!(fx.engine.pose().approx_eq(&home(), EPS));
        assert_eq!(fx.timers.log.borrow().active(), 0);
    }

    #[test]
    fn empty_click_while_not_zoomed_does_nothing() {
        let mut fx = fixture();
        fx.engine.on_pointer_down(300.0, 300.0);
        assert!(!fx.engine.is_animating());
        assert_eq!(fx.timers.log.borrow().started.len(), 0);
    }

    #[test]
    fn repeated_click_on_target_mid_flight_is_idempotent() {
        let mut fx = fixture();
        fx.engine.on_pointer_down(100.0, 100.0);
        for _ in 0..5 {
            fx.engine.on_timer_tick();
        }

        // Double-click race: the in-flight job must survive untouched.
        fx.engine.on_pointer_down(100.0, 100.0);
        assert_eq!(fx.timers.log.borrow().started.len(), 1);

        for _ in 0..(STEPS - 5) {
            fx.engine.on_timer_tick();
        }
        assert!(!fx.engine.is_animating());
        assert_eq!(fx.display.log.borrow().poses.len(), STEPS as usize);
    }

    #[test]
    fn retarget_mid_flight_starts_from_cancellation_pose() {
        let mut fx = fixture();
        fx.engine.on_pointer_down(100.0, 100.0);
        for _ in 0..10 {
            fx.engine.on_timer_tick();
        }
        let at_cancel = fx.engine.pose();

        fx.engine.on_pointer_down(200.0, 200.0);
        assert_eq!(fx.timers.log.borrow().started.len(), 1);

        // First tick of the replacement flight interpolates from the
        // cancellation pose toward the tibia close-up.
        let center = Vec3::new(0.0, 4.0, 0.0);
        let direction = at_cancel.position - at_cancel.focal_point;
        let end_position = center
            + direction.normalize_or_zero() * (0.3 * direction.length());
        let end =
            Pose::new(end_position, center, home().view_up, home().view_angle);
        let expected = at_cancel.lerp(&end, 1.0 / STEPS as f32);

        fx.engine.on_timer_tick();
        assert!(fx.engine.pose().approx_eq(&expected, EPS));
    }

    #[test]
    fn hover_pushes_highlight_and_label_once_per_change() {
        let mut fx = fixture();
        fx.engine.on_pointer_move(100.0, 100.0);
        fx.engine.on_pointer_move(100.0, 100.0);

        assert_eq!(fx.engine.hovered(), Some(fx.femur));
        assert_eq!(
            fx.display.log.borrow().highlights,
            vec![Some(fx.femur)]
        );
        assert_eq!(
            fx.overlay.log.borrow().hover_texts,
            vec!["Hovered: femur".to_owned()]
        );

        fx.engine.on_pointer_move(300.0, 300.0);
        assert_eq!(fx.engine.hovered(), None);
        assert_eq!(
            fx.display.log.borrow().highlights,
            vec![Some(fx.femur), None]
        );
        assert_eq!(
            fx.overlay.log.borrow().hover_texts,
            vec!["Hovered: femur".to_owned(), String::new()]
        );
    }

    #[test]
    fn reset_is_blocked_while_zoomed() {
        let mut fx = fixture();
        fx.engine.on_pointer_down(100.0, 100.0);
        for _ in 0..10 {
            fx.engine.on_timer_tick();
        }
        let before = fx.engine.pose();

        fx.engine.on_key("KeyF");
        assert_eq!(fx.engine.pose(), before);
        assert!(fx.engine.is_zoomed());
        assert_eq!(fx.overlay.log.borrow().notices.len(), 1);
    }

    #[test]
    fn reset_while_idle_hard_cuts_and_redraws() {
        let mut fx = fixture();
        fx.engine.on_key("KeyR");
        fx.engine.on_key("ArrowRight");
        assert!(!fx.engine.pose().approx_eq(&home(), EPS));

        fx.engine.on_key("KeyF");
        assert!(fx.engine.pose().approx_eq(&home(), EPS));
        // Rotation pushed one pose, reset pushed another.
        assert_eq!(fx.display.log.borrow().poses.len(), 2);
        assert_eq!(fx.display.log.borrow().redraws, 2);
    }

    #[test]
    fn rotation_toggle_updates_hint_and_gates_arrows() {
        let mut fx = fixture();
        fx.engine.on_key("ArrowRight");
        assert_eq!(fx.engine.pose(), home());

        fx.engine.on_key("KeyR");
        fx.engine.on_key("KeyR");
        assert_eq!(fx.overlay.log.borrow().rotation_hints, vec![true, false]);
    }

    #[test]
    fn escape_cancels_flight_but_keeps_logical_state() {
        let mut fx = fixture();
        fx.engine.on_pointer_down(100.0, 100.0);
        for _ in 0..5 {
            fx.engine.on_timer_tick();
        }
        let frozen = fx.engine.pose();

        fx.engine.on_key("Escape");
        assert!(!fx.engine.is_animating());
        assert_eq!(fx.timers.log.borrow().active(), 0);
        assert!(fx.engine.is_zoomed());

        // Ticks after cancellation leave the camera frozen mid-flight.
        fx.engine.on_timer_tick();
        assert_eq!(fx.engine.pose(), frozen);

        // An empty-space click still zooms back out from here.
        fx.engine.on_pointer_down(300.0, 300.0);
        run_flight(&mut fx);
        assert!(fx.engine.pose().approx_eq(&home(), EPS));
    }

    #[test]
    fn quit_key_requests_shutdown() {
        let mut fx = fixture();
        assert!(!fx.engine.shutdown_requested());
        fx.engine.on_key("KeyQ");
        assert!(fx.engine.shutdown_requested());
    }
}
