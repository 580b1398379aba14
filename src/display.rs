//! Display and overlay collaborator traits.
//!
//! The core never draws. Every pose mutation is pushed through
//! [`DisplaySink`] and every user-visible text change through
//! [`OverlaySink`]; the host's render/UI layer decides what those mean.

use crate::camera::Pose;
use crate::scene::BoneId;

/// Receives camera pose updates and redraw requests from the core.
pub trait DisplaySink {
    /// Apply `pose` to the live render camera.
    fn apply_pose(&mut self, pose: &Pose);

    /// Revalidate near/far clipping planes. Called after every pose
    /// mutation so close-up poses do not clip into the mesh.
    fn reset_clipping_range(&mut self);

    /// Ask the surface to redraw.
    fn request_redraw(&mut self);

    /// Highlight `bone` (hover feedback), or clear the highlight.
    fn set_highlight(&mut self, bone: Option<BoneId>);
}

/// Receives user-visible text updates (hover labels, hints, notices).
pub trait OverlaySink {
    /// Show `text` in the hover label (empty string clears it).
    fn set_hover_text(&mut self, text: &str);

    /// Update the rotation-mode hint.
    fn set_rotation_hint(&mut self, enabled: bool);

    /// Surface a transient notice (e.g. a blocked reset).
    fn notify(&mut self, message: &str);
}

/// Display sink that drops everything. Useful for headless runs and
/// tests that only care about state transitions.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullDisplay;

impl DisplaySink for NullDisplay {
    fn apply_pose(&mut self, _pose: &Pose) {}
    fn reset_clipping_range(&mut self) {}
    fn request_redraw(&mut self) {}
    fn set_highlight(&mut self, _bone: Option<BoneId>) {}
}

/// Overlay sink that drops everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullOverlay;

impl OverlaySink for NullOverlay {
    fn set_hover_text(&mut self, _text: &str) {}
    fn set_rotation_hint(&mut self, _enabled: bool) {}
    fn notify(&mut self, _message: &str) {}
}
