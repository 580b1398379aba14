//! Runtime configuration with TOML preset support.
//!
//! All tweakable settings (animation cadence, keyboard bindings) are
//! consolidated here. Options serialize to/from TOML; every sub-struct
//! uses `#[serde(default)]` so partial files only override what they
//! name.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::OsteoError;
use crate::input::KeyBindings;

/// Camera animation parameters.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AnimationOptions {
    /// Interpolation steps per camera flight.
    pub steps: u32,
    /// Repeating timer interval in milliseconds (16 is roughly 60 Hz).
    pub tick_interval_ms: u64,
}

impl Default for AnimationOptions {
    fn default() -> Self {
        Self {
            steps: 60,
            tick_interval_ms: 16,
        }
    }
}

impl AnimationOptions {
    /// The tick interval as a [`Duration`].
    #[must_use]
    pub const fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

/// Top-level options container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Options {
    /// Camera animation parameters.
    pub animation: AnimationOptions,
    /// Keyboard binding options.
    pub keybindings: KeyBindings,
}

impl Options {
    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, OsteoError> {
        let content = std::fs::read_to_string(path).map_err(OsteoError::Io)?;
        let mut options: Self = toml::from_str(&content)
            .map_err(|e| OsteoError::OptionsParse(e.to_string()))?;
        // The reverse key lookup is a cache, not serialized state.
        options.keybindings.rebuild_reverse_map();
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), OsteoError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| OsteoError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(OsteoError::Io)?;
        }
        std::fs::write(path, content).map_err(OsteoError::Io)
    }
}
