//! Settings dialog state
//!
//! Owns the remote being edited. The remote editor reads from here every frame
//! and its events are applied back here.

use tracing::{debug, info};

use super::save::{RemoteChange, SaveError, plan_change};
use crate::Remote;
use crate::gui::remote_editor::{RemoteEditorEvent, RemoteView};

/// State of the repository settings dialog
#[derive(Debug, Clone)]
pub struct RepositorySettingsDialog {
    /// Remote as it was when the dialog opened (or was last saved)
    original: Remote,
    /// Remote with the user's edits applied
    remote: Remote,
    /// Remote is staged for removal, pending Save
    remote_deleted: bool,
    /// Removal was confirmed with Save; the dialog has nothing left to do
    removal_saved: bool,
    /// Last save result shown under the buttons: (message, is_error)
    status: Option<(String, bool)>,
}

impl RepositorySettingsDialog {
    pub fn new(remote: Remote) -> Self {
        Self {
            original: remote.clone(),
            remote,
            remote_deleted: false,
            removal_saved: false,
            status: None,
        }
    }

    pub fn remote(&self) -> &Remote {
        &self.remote
    }

    pub fn original(&self) -> &Remote {
        &self.original
    }

    pub fn is_remote_deleted(&self) -> bool {
        self.remote_deleted
    }

    /// Whether a removal has already been confirmed with Save
    pub fn is_removal_saved(&self) -> bool {
        self.removal_saved
    }

    pub fn status(&self) -> Option<&(String, bool)> {
        self.status.as_ref()
    }

    /// Apply an event raised by the remote editor.
    ///
    /// Ignored once a removal has been saved.
    pub fn apply(&mut self, event: RemoteEditorEvent) {
        if self.removal_saved {
            debug!("Remote '{}' already removed, ignoring {:?}", self.original.name, event);
            return;
        }

        match event {
            RemoteEditorEvent::UrlEdited(url) => self.remote.url = url,
            RemoteEditorEvent::RemoveClicked => self.remote_deleted = true,
        }
        self.status = None;

        debug!(
            "Remote panel: {}",
            RemoteView::render(&self.remote, self.remote_deleted).text()
        );
    }

    /// Whether Save would change anything
    pub fn has_changes(&self) -> bool {
        !self.removal_saved && (self.remote_deleted || self.remote.url != self.original.url)
    }

    /// Confirm the edits.
    ///
    /// Returns the change the caller should apply to the repository, or `None`
    /// when nothing changed. On success the edited state becomes the new
    /// baseline. A confirmed removal finishes the dialog: it keeps showing the
    /// removal notice and later saves return `None`.
    pub fn save(&mut self) -> Result<Option<RemoteChange>, SaveError> {
        if self.removal_saved {
            return Ok(None);
        }

        match plan_change(&self.original, &self.remote, self.remote_deleted) {
            Ok(change) => {
                match &change {
                    Some(change) => {
                        info!("Saving remote settings: {:?}", change);
                        self.status = Some((change.describe(), false));
                    }
                    None => self.status = Some(("No changes to save".to_string(), false)),
                }
                if matches!(change, Some(RemoteChange::Remove { .. })) {
                    self.removal_saved = true;
                }
                self.original = self.remote.clone();
                Ok(change)
            }
            Err(e) => {
                self.status = Some((e.to_string(), true));
                Err(e)
            }
        }
    }

    /// Drop all edits, including a staged removal that wasn't saved yet
    pub fn reset(&mut self) {
        if self.removal_saved {
            return;
        }
        self.remote = self.original.clone();
        self.remote_deleted = false;
        self.status = None;
    }
}
