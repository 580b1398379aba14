//! Raw input events and their translation into engine commands.

/// Platform-agnostic input event types.
pub mod event;
/// Event-to-command translation and key bindings.
pub mod router;

pub use event::{InputEvent, PointerButton};
pub use router::{InteractionRouter, KeyAction, KeyBindings};
