//! Settings configuration types

mod gui;

pub use gui::GuiSettings;

use serde::{Deserialize, Serialize};

/// General settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// GUI settings
    #[serde(default)]
    pub gui: GuiSettings,
}
