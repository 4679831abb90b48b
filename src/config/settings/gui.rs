//! GUI-specific settings

use serde::{Deserialize, Serialize};

/// GUI-specific settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuiSettings {
    /// Initial window width in points
    /// Default: 520
    #[serde(default = "default_window_width")]
    pub window_width: f32,

    /// Initial window height in points
    /// Default: 240
    #[serde(default = "default_window_height")]
    pub window_height: f32,

    /// Dialog title shown in the window's title bar
    #[serde(default = "default_window_title")]
    pub title: String,
}

fn default_window_width() -> f32 {
    520.0
}

fn default_window_height() -> f32 {
    240.0
}

fn default_window_title() -> String {
    "Repository settings".to_string()
}

impl Default for GuiSettings {
    fn default() -> Self {
        Self {
            window_width: default_window_width(),
            window_height: default_window_height(),
            title: default_window_title(),
        }
    }
}
