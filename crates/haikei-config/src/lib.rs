//! Configuration loading for haikei.
//!
//! The config file selects the startup theme preset and animation speed.
//! Loading never fails: a missing or malformed file, or unknown values
//! inside it, degrade field-wise to defaults.

use std::fs;
use std::path::PathBuf;

use directories::ProjectDirs;
use haikei_core::AnimationSpeed;
use serde::{Deserialize, Serialize};

/// Milliseconds between animation frames when not overridden.
const DEFAULT_FRAME_MS: u64 = 33;

/// User configuration, as stored in `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Theme preset id applied at startup.
    pub theme: String,
    /// Animation speed: "slow", "normal", or "fast".
    pub speed: String,
    /// Frame interval in milliseconds.
    pub frame_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: "purple-network".to_string(),
            speed: "normal".to_string(),
            frame_ms: DEFAULT_FRAME_MS,
        }
    }
}

impl Config {
    /// Load the config file, falling back to defaults if it is missing or
    /// cannot be parsed.
    pub fn load() -> Self {
        let Some(path) = Self::path() else {
            return Self::default();
        };
        let Ok(contents) = fs::read_to_string(&path) else {
            return Self::default();
        };
        toml::from_str(&contents).unwrap_or_default()
    }

    /// Parse a config document. Unknown fields are ignored; missing fields
    /// take their defaults.
    pub fn from_toml(contents: &str) -> Self {
        toml::from_str(contents).unwrap_or_default()
    }

    /// Location of the config file, if a home directory can be determined.
    pub fn path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "haikei").map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// The configured animation speed.
    pub fn animation_speed(&self) -> AnimationSpeed {
        AnimationSpeed::from_name(&self.speed)
    }

    /// Frame interval, clamped to a sane range.
    pub fn frame_interval_ms(&self) -> u64 {
        self.frame_ms.clamp(8, 500)
    }
}
