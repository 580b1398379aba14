//! Camera system for the anatomy viewer.
//!
//! Provides the immutable [`Pose`](pose::Pose) snapshot type and the
//! [`CameraRig`](rig::CameraRig) state machine that owns the live pose
//! and validates zoom/rotation transitions.

/// Immutable camera pose snapshots and pose interpolation.
pub mod pose;
/// Camera state machine: zoom, rotation mode, reset.
pub mod rig;

pub use pose::Pose;
pub use rig::{CameraRig, Flight, ResetOutcome, RotationAxis};
