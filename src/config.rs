//! Console configuration.
//!
//! Loaded from TOML; every field has a default so partial files work.
//!
//! ```toml
//! [keyboard]
//! release_handlers_on_close = false
//!
//! [viewer]
//! host = "10.0.0.2"
//! port = 5901
//! path = "websockify"
//! view_only = true
//! ```

use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::viewer::ViewerConfig;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub keyboard: KeyboardConfig,
    pub viewer: ViewerConfig,
}

/// On-screen keyboard settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyboardConfig {
    /// Drop the installed input/close handlers when the keyboard closes.
    /// By default they stay until the next open replaces them.
    pub release_handlers_on_close: bool,
}

impl Config {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }
}
