use glam::{Quat, Vec3};

use super::pose::Pose;
use crate::scene::BoneId;

/// Fraction of the current camera-to-focal distance kept when zooming
/// in on a bone: the camera ends up at 30% of its previous distance,
/// measured from the bone's bounds center along the preserved view
/// direction.
pub const ZOOM_DISTANCE_FACTOR: f32 = 0.3;

/// Start/end pose pair describing a requested camera transition.
///
/// Produced by [`CameraRig`] transition requests and consumed by the
/// [`FlightDriver`](crate::animation::FlightDriver), which interpolates
/// between the two poses over a fixed step count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Flight {
    /// Live pose at the moment the transition was requested.
    pub start: Pose,
    /// Target pose the flight converges to.
    pub end: Pose,
}

/// Outcome of a [`CameraRig::reset_to_home`] request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetOutcome {
    /// The live pose was hard-cut to the home pose.
    Reset,
    /// Reset is blocked while zoomed in; the pose was left untouched.
    BlockedWhileZoomed,
}

/// World axis for manual camera orbiting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationAxis {
    /// Orbit up/down around the world X axis.
    X,
    /// Orbit left/right around the world Y axis.
    Y,
}

/// Camera state machine owning the live pose and zoom/rotation state.
///
/// The rig validates transitions and computes interpolation endpoints;
/// it never runs animations itself. Transition requests return a
/// [`Flight`] for the animation driver (or `None` when the request is a
/// documented no-op).
///
/// # Early-commit policy
///
/// The `zoomed` flag and zoom target flip to their new values at
/// *request* time, while the returned flight is still going to be
/// interpolated. A rapid second click during an in-flight zoom-in
/// therefore hits the "already zoomed on this bone" guard instead of
/// racing a concurrent transition; zoom-out symmetrically clears the
/// flags up front. Flight completion never touches logical state.
#[derive(Debug, Clone)]
pub struct CameraRig {
    pose: Pose,
    home: Pose,
    zoomed: bool,
    rotation_enabled: bool,
    target: Option<BoneId>,
    saved_pose: Option<Pose>,
}

impl CameraRig {
    /// Create a rig whose live pose starts at `home`.
    #[must_use]
    pub const fn new(home: Pose) -> Self {
        Self {
            pose: home,
            home,
            zoomed: false,
            rotation_enabled: false,
            target: None,
            saved_pose: None,
        }
    }

    /// Current live pose.
    #[must_use]
    pub const fn pose(&self) -> Pose {
        self.pose
    }

    /// The home (overview) pose used by reset and as the zoom-out
    /// fallback.
    #[must_use]
    pub const fn home(&self) -> Pose {
        self.home
    }

    /// Overwrite the live pose. Called by the animation driver once per
    /// tick so cancellation points always see the latest interpolated
    /// pose.
    pub fn set_pose(&mut self, pose: Pose) {
        self.pose = pose;
    }

    /// Whether the rig is logically zoomed in (set at request time, see
    /// the early-commit policy above).
    #[must_use]
    pub const fn is_zoomed(&self) -> bool {
        self.zoomed
    }

    /// Whether pointer-drag/key rotation is enabled.
    #[must_use]
    pub const fn is_rotation_enabled(&self) -> bool {
        self.rotation_enabled
    }

    /// The bone currently targeted by a zoom, if any.
    #[must_use]
    pub const fn target(&self) -> Option<BoneId> {
        self.target
    }

    /// Request a zoom-in on `bone`, whose bounds center is `center`.
    ///
    /// Returns `None` when already zoomed on this exact bone (repeated
    /// clicks are idempotent). Otherwise returns the flight from the
    /// live pose toward the close-up pose; when retargeting from
    /// another bone the live pose at this instant becomes the new start
    /// and the original pre-zoom pose stays saved for zoom-out.
    pub fn request_zoom_to(
        &mut self,
        bone: BoneId,
        center: Vec3,
    ) -> Option<Flight> {
        if self.zoomed && self.target == Some(bone) {
            log::debug!("zoom request ignored: already targeting {bone:?}");
            return None;
        }

        let start = self.pose;
        if !self.zoomed {
            self.saved_pose = Some(start);
        }

        let direction = start.position - start.focal_point;
        let end_position = center
            + direction.normalize_or_zero()
                * (ZOOM_DISTANCE_FACTOR * direction.length());

        // View up/angle never animate; the close-up keeps the pre-zoom
        // values.
        let saved = self.saved_pose.unwrap_or(start);
        let end = Pose::new(
            end_position,
            center,
            saved.view_up,
            saved.view_angle,
        );

        self.zoomed = true;
        self.target = Some(bone);
        log::debug!("zoom-in requested: target {bone:?}, end {end_position}");
        Some(Flight { start, end })
    }

    /// Request a zoom-out back to the saved pre-zoom pose (or home when
    /// no pose was saved). Returns `None` when not zoomed.
    pub fn request_zoom_out(&mut self) -> Option<Flight> {
        if !self.zoomed {
            return None;
        }

        let start = self.pose;
        let end = self.saved_pose.take().unwrap_or(self.home);
        self.zoomed = false;
        self.target = None;
        log::debug!("zoom-out requested from {}", start.position);
        Some(Flight { start, end })
    }

    /// Flip rotation mode and return the new state. Never touches the
    /// pose.
    pub fn toggle_rotation(&mut self) -> bool {
        self.rotation_enabled = !self.rotation_enabled;
        log::info!("rotation enabled: {}", self.rotation_enabled);
        self.rotation_enabled
    }

    /// Hard-cut the live pose back to home, unless zoomed in.
    ///
    /// This is an instant reset by contract, not an animated flight.
    pub fn reset_to_home(&mut self) -> ResetOutcome {
        if self.zoomed {
            log::debug!("reset blocked while zoomed");
            return ResetOutcome::BlockedWhileZoomed;
        }
        self.pose = self.home;
        ResetOutcome::Reset
    }

    /// Orbit the camera position around the focal point by `degrees`
    /// about a world axis. Silently ignored while rotation mode is off;
    /// returns whether the pose changed.
    pub fn rotate(&mut self, axis: RotationAxis, degrees: f32) -> bool {
        if !self.rotation_enabled {
            return false;
        }

        let rotation = match axis {
            RotationAxis::X => Quat::from_rotation_x(degrees.to_radians()),
            RotationAxis::Y => Quat::from_rotation_y(degrees.to_radians()),
        };
        let offset = self.pose.position - self.pose.focal_point;
        self.pose.position = self.pose.focal_point + rotation * offset;
        true
    }
}
