//! Centralized runtime options with TOML preset support.
//!
//! All tweakable settings (simulation physics, camera projection) are
//! consolidated here. Options serialize to/from TOML; every sub-struct
//! uses `#[serde(default)]` so a partial file overriding a single section
//! works.

mod camera;
mod simulation;

use std::path::Path;

pub use camera::CameraOptions;
use serde::{Deserialize, Serialize};
pub use simulation::SimulationOptions;

use crate::error::GlintError;

/// Top-level options container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Options {
    /// Physics and orbit parameters.
    pub simulation: SimulationOptions,
    /// Camera projection parameters.
    pub camera: CameraOptions,
}

impl Options {
    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`GlintError::Io`] if the file cannot be read and
    /// [`GlintError::OptionsParse`] on malformed TOML.
    pub fn load(path: &Path) -> Result<Self, GlintError> {
        let content = std::fs::read_to_string(path).map_err(GlintError::Io)?;
        toml::from_str(&content)
            .map_err(|e| GlintError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Returns [`GlintError::OptionsParse`] if serialization fails and
    /// [`GlintError::Io`] if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), GlintError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| GlintError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(GlintError::Io)?;
        }
        std::fs::write(path, content).map_err(GlintError::Io)
    }
}
