//! Converts raw pointer/keyboard input into viewer commands.
//!
//! The `InteractionRouter` owns hover tracking and the key-binding map.
//! It is the only thing that sits between raw events and the engine's
//! [`execute`](crate::engine::ViewerEngine::execute) method; it never
//! mutates camera state itself.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::event::{InputEvent, PointerButton};
use crate::camera::RotationAxis;
use crate::engine::ViewerCommand;
use crate::scene::BoneId;

/// Degrees of orbit applied per arrow-key press in rotation mode.
pub const KEY_ROTATE_STEP_DEG: f32 = 5.0;

/// Serializable tag for the subset of [`ViewerCommand`] that can be
/// key-bound (discrete, parameterless from the binding's point of
/// view).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Toggle pointer-drag/arrow-key rotation mode.
    ToggleRotation,
    /// Hard-cut the camera back to the home pose.
    ResetCamera,
    /// Cancel the in-flight camera animation.
    CancelFlight,
    /// Orbit left around the world Y axis.
    RotateLeft,
    /// Orbit right around the world Y axis.
    RotateRight,
    /// Orbit up around the world X axis.
    RotateUp,
    /// Orbit down around the world X axis.
    RotateDown,
    /// Ask the host to shut the viewer down.
    Quit,
}

impl KeyAction {
    /// Convert to the corresponding [`ViewerCommand`].
    const fn to_command(self) -> ViewerCommand {
        match self {
            Self::ToggleRotation => ViewerCommand::ToggleRotation,
            Self::ResetCamera => ViewerCommand::ResetCamera,
            Self::CancelFlight => ViewerCommand::CancelFlight,
            Self::RotateLeft => ViewerCommand::RotateCamera {
                axis: RotationAxis::Y,
                degrees: -KEY_ROTATE_STEP_DEG,
            },
            Self::RotateRight => ViewerCommand::RotateCamera {
                axis: RotationAxis::Y,
                degrees: KEY_ROTATE_STEP_DEG,
            },
            Self::RotateUp => ViewerCommand::RotateCamera {
                axis: RotationAxis::X,
                degrees: KEY_ROTATE_STEP_DEG,
            },
            Self::RotateDown => ViewerCommand::RotateCamera {
                axis: RotationAxis::X,
                degrees: -KEY_ROTATE_STEP_DEG,
            },
            Self::Quit => ViewerCommand::Quit,
        }
    }
}

/// Configurable keyboard bindings mapping actions to key codes.
///
/// Key strings use the `winit::keyboard::KeyCode` debug format:
/// `"KeyR"`, `"ArrowLeft"`, `"Escape"`, etc.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct KeyBindings {
    /// Maps action to key string (e.g. `ResetCamera` -> `"KeyF"`).
    pub bindings: HashMap<KeyAction, String>,
    /// Reverse lookup cache (key string to action). Rebuilt on load.
    #[serde(skip)]
    key_to_action: HashMap<String, KeyAction>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        let bindings = HashMap::from([
            (KeyAction::ToggleRotation, "KeyR".into()),
            (KeyAction::ResetCamera, "KeyF".into()),
            (KeyAction::Quit, "KeyQ".into()),
            (KeyAction::CancelFlight, "Escape".into()),
            (KeyAction::RotateLeft, "ArrowLeft".into()),
            (KeyAction::RotateRight, "ArrowRight".into()),
            (KeyAction::RotateUp, "ArrowUp".into()),
            (KeyAction::RotateDown, "ArrowDown".into()),
        ]);

        let mut bindings = Self {
            bindings,
            key_to_action: HashMap::new(),
        };
        bindings.rebuild_reverse_map();
        bindings
    }
}

impl KeyBindings {
    /// Rebuild the reverse lookup map (key string to action). Must be
    /// called after deserializing, since the cache is not serialized.
    pub fn rebuild_reverse_map(&mut self) {
        self.key_to_action.clear();
        for (action, key) in &self.bindings {
            let _ = self.key_to_action.insert(key.clone(), *action);
        }
    }

    /// Look up the action for a key string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<KeyAction> {
        self.key_to_action.get(key).copied()
    }
}

/// Maps raw pointer/keyboard events to state-machine commands.
///
/// Owns hover tracking (so hover notifications fire only on change)
/// and the key-binding map. Picking itself stays with the engine: the
/// router receives the pick result alongside each pointer event.
#[derive(Debug, Clone, Default)]
pub struct InteractionRouter {
    hovered: Option<BoneId>,
    bindings: KeyBindings,
}

impl InteractionRouter {
    /// Create a router with default key bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a router with custom key bindings.
    #[must_use]
    pub fn with_bindings(bindings: KeyBindings) -> Self {
        Self {
            hovered: None,
            bindings,
        }
    }

    /// The bone currently under the cursor, if any.
    #[must_use]
    pub const fn hovered(&self) -> Option<BoneId> {
        self.hovered
    }

    /// Route a pointer event.
    ///
    /// `picked` is the bone under the cursor (from the picking
    /// service) and `zoomed` the camera's logical zoom flag, which
    /// decides whether an empty-space click means zoom-out or nothing.
    pub fn route(
        &mut self,
        event: InputEvent,
        picked: Option<BoneId>,
        zoomed: bool,
    ) -> Option<ViewerCommand> {
        match event {
            InputEvent::CursorMoved { .. } => {
                if picked == self.hovered {
                    return None;
                }
                self.hovered = picked;
                Some(ViewerCommand::SetHover(picked))
            }
            InputEvent::PointerButton {
                button: PointerButton::Primary,
                pressed: true,
            } => match picked {
                Some(bone) => Some(ViewerCommand::ZoomToBone(bone)),
                None if zoomed => Some(ViewerCommand::ZoomOut),
                None => None,
            },
            InputEvent::PointerButton { .. } => None,
        }
    }

    /// Route a key press through the binding map.
    #[must_use]
    pub fn route_key(&self, key: &str) -> Option<ViewerCommand> {
        self.bindings.lookup(key).map(KeyAction::to_command)
    }
}
