//! The viewer engine facade.
//!
//! Wires the camera rig, animation driver, and interaction router to
//! the host-supplied collaborators (picking, display, overlay, timer
//! facility) and exposes the small event surface the host event loop
//! drives.

/// The engine's interactive vocabulary.
pub mod command;
/// Engine construction and event handling.
pub mod core;

pub use command::ViewerCommand;
pub use core::{Platform, ViewerEngine};
