/// Platform-agnostic pointer events.
///
/// These are fed into an [`InteractionRouter`](super::InteractionRouter)
/// which converts them into
/// [`ViewerCommand`](crate::engine::ViewerCommand) values. Key presses
/// travel separately as key-code strings (see
/// [`InteractionRouter::route_key`](super::InteractionRouter::route_key)).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Cursor moved to absolute screen position.
    CursorMoved {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
    },
    /// Pointer button pressed or released.
    PointerButton {
        /// Which button changed.
        button: PointerButton,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
}

/// Platform-agnostic pointer button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// Primary (left) button.
    Primary,
    /// Secondary (right) button.
    Secondary,
    /// Middle button (wheel click).
    Middle,
}
