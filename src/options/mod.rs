//! Scene tunables with TOML preset support.
//!
//! Camera smoothing, particle and star densities, motion overrides and
//! diagnostics are consolidated here. Options serialize to/from TOML so a
//! host can ship presets and hand-tune them without recompiling.

mod camera;
mod debug;
mod motion;
mod particles;
mod stars;

use std::path::Path;

pub use camera::CameraOptions;
pub use debug::DebugOptions;
pub use motion::MotionOptions;
pub use particles::ParticleOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use stars::StarOptions;

use crate::error::BackdropError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[camera]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Camera projection, smoothing and parallax.
    pub camera: CameraOptions,
    /// Drifting particle field.
    pub particles: ParticleOptions,
    /// Background star shell.
    pub stars: StarOptions,
    /// Reduced-motion overrides.
    pub motion: MotionOptions,
    /// Diagnostics.
    pub debug: DebugOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Parse options from TOML text. Missing fields use defaults.
    pub fn from_toml(content: &str) -> Result<Self, BackdropError> {
        toml::from_str(content)
            .map_err(|e| BackdropError::OptionsParse(e.to_string()))
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, BackdropError> {
        let content =
            std::fs::read_to_string(path).map_err(BackdropError::Io)?;
        Self::from_toml(&content)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), BackdropError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| BackdropError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(BackdropError::Io)?;
        }
        std::fs::write(path, content).map_err(BackdropError::Io)
    }
}
