//! Remote type definitions

use serde::{Deserialize, Serialize};

/// A named reference to a remote Git repository location
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Remote {
    /// Remote name (e.g. "origin", "upstream")
    pub name: String,
    /// Fetch/push URL. May be empty while the user is editing it.
    #[serde(default)]
    pub url: String,
}

impl Remote {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }

    /// Whether the URL is non-empty. Syntax is not checked.
    pub fn has_url(&self) -> bool {
        !self.url.is_empty()
    }

}

impl Default for Remote {
    fn default() -> Self {
        Self::new("origin", "")
    }
}

impl std::fmt::Display for Remote {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.url.is_empty() {
            write!(f, "{} (no url)", self.name)
        } else {
            write!(f, "{} ({})", self.name, self.url)
        }
    }
}
