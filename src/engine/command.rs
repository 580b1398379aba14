//! The engine's complete interactive vocabulary.
//!
//! Every user-facing operation - whether triggered by a key press, a
//! pointer event, or a programmatic call - is represented as a
//! `ViewerCommand`. Consumers construct commands and pass them to
//! [`ViewerEngine::execute`](super::ViewerEngine::execute).

use crate::camera::RotationAxis;
use crate::scene::BoneId;

/// A discrete or parameterized operation the engine can perform.
///
/// The engine never cares *how* a command was triggered - keyboard,
/// pointer, or API all look identical:
///
/// ```ignore
/// engine.execute(ViewerCommand::ZoomToBone(femur));
/// engine.execute(ViewerCommand::ToggleRotation);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewerCommand {
    /// Animate the camera to a close-up of the given bone.
    ZoomToBone(BoneId),

    /// Animate the camera back to the pre-zoom pose.
    ZoomOut,

    /// Update hover feedback (highlight + label) for the bone under
    /// the cursor, or clear it.
    SetHover(Option<BoneId>),

    /// Toggle rotation mode.
    ToggleRotation,

    /// Orbit the camera about the focal point (rotation mode only).
    RotateCamera {
        /// World axis to orbit around.
        axis: RotationAxis,
        /// Signed orbit angle in degrees.
        degrees: f32,
    },

    /// Hard-cut back to the home pose (blocked while zoomed).
    ResetCamera,

    /// Cancel the in-flight camera animation, freezing mid-flight.
    CancelFlight,

    /// Signal shutdown to the host window owner.
    Quit,
}
