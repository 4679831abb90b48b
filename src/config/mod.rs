//! Configuration loading and management

mod error;
mod io;
mod settings;

#[cfg(test)]
mod tests;

pub use error::ConfigError;
pub use settings::{GuiSettings, Settings};

use serde::{Deserialize, Serialize};

use crate::Remote;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// The remote shown when the settings dialog opens
    #[serde(default)]
    pub remote: Remote,

    /// General settings
    #[serde(default)]
    pub settings: Settings,
}

impl Config {
    /// Replace the configured remote's name and/or URL (command line overrides)
    pub fn apply_overrides(&mut self, name: Option<String>, url: Option<String>) {
        if let Some(name) = name {
            self.remote.name = name;
        }
        if let Some(url) = url {
            self.remote.url = url;
        }
    }

    /// Check the parts of the config that TOML parsing can't enforce
    pub fn validate(&self) -> Result<(), ConfigError> {
        let name = &self.remote.name;
        if name.trim().is_empty() {
            return Err(ConfigError::EmptyRemoteName);
        }
        if name.chars().any(char::is_whitespace) {
            return Err(ConfigError::InvalidRemoteName(name.clone()));
        }

        let gui = &self.settings.gui;
        if !(gui.window_width > 0.0 && gui.window_height > 0.0) {
            return Err(ConfigError::InvalidWindowSize {
                width: gui.window_width,
                height: gui.window_height,
            });
        }

        Ok(())
    }
}
