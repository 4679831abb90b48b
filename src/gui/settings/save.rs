//! Settings save functionality
//!
//! Turns the dialog's edits into the change the caller should apply.

use crate::Remote;

/// Change to the repository's remote configuration, produced by Save
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteChange {
    /// Point the remote at a new URL
    UpdateUrl { name: String, url: String },
    /// Remove the remote from the repository
    Remove { name: String },
}

impl RemoteChange {
    /// Short description for the status line
    pub fn describe(&self) -> String {
        match self {
            RemoteChange::UpdateUrl { name, url } => {
                format!("Remote '{}' now points at {}", name, url)
            }
            RemoteChange::Remove { name } => format!("Remote '{}' removed", name),
        }
    }
}

/// Reasons the dialog refuses to save
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SaveError {
    #[error("Cannot save remote '{0}' with an empty URL")]
    EmptyUrl(String),
}

/// Work out what Save should do given the original and edited remote
pub(super) fn plan_change(
    original: &Remote,
    edited: &Remote,
    remote_deleted: bool,
) -> Result<Option<RemoteChange>, SaveError> {
    // A staged removal wins over any URL edit made before it
    if remote_deleted {
        return Ok(Some(RemoteChange::Remove {
            name: original.name.clone(),
        }));
    }

    if !edited.has_url() {
        return Err(SaveError::EmptyUrl(edited.name.clone()));
    }

    if edited.url == original.url {
        return Ok(None);
    }

    Ok(Some(RemoteChange::UpdateUrl {
        name: edited.name.clone(),
        url: edited.url.clone(),
    }))
}
