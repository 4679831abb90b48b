//! View tree for the remote editor
//!
//! `RemoteView::render` is a pure function of the editor's props. The egui
//! painter draws whatever it returns, so everything the user can see is
//! decided here.

use crate::Remote;

/// Message shown under the URL field when the URL is empty
pub const EMPTY_URL_WARNING: &str = "You cannot create an empty remote URL.";

/// Placeholder text for the URL field
pub const URL_PLACEHOLDER: &str = "Remote URL";

/// What the remote editor draws for a given set of props
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteView<'a> {
    /// The remote is staged for removal; only a notice is shown
    PendingRemoval(RemovalNotice<'a>),
    /// The remote's URL can be edited
    Editing(UrlForm<'a>),
}

/// Warning shown while the remote is staged for removal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemovalNotice<'a> {
    pub remote_name: &'a str,
}

/// The URL text field, the delete affordance and the inline validation message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlForm<'a> {
    pub remote_name: &'a str,
    /// Value of the text field. Always `remote.url` from the current props.
    pub url: &'a str,
    /// Accessible label and hover text of the delete affordance
    pub remove_label: String,
    /// Inline validation message, if any
    pub warning: Option<&'static str>,
}

impl<'a> RemoteView<'a> {
    pub fn render(remote: &'a Remote, remote_deleted: bool) -> Self {
        if remote_deleted {
            return RemoteView::PendingRemoval(RemovalNotice {
                remote_name: &remote.name,
            });
        }

        RemoteView::Editing(UrlForm {
            remote_name: &remote.name,
            url: &remote.url,
            remove_label: remove_label(&remote.name),
            warning: (!remote.has_url()).then_some(EMPTY_URL_WARNING),
        })
    }

    /// The URL shown in the text field, or `None` when no field is drawn
    pub fn text_field(&self) -> Option<&'a str> {
        match self {
            RemoteView::PendingRemoval(_) => None,
            RemoteView::Editing(form) => Some(form.url),
        }
    }

    /// The inline validation message, if one is drawn
    pub fn warning(&self) -> Option<&'static str> {
        match self {
            RemoteView::PendingRemoval(_) => None,
            RemoteView::Editing(form) => form.warning,
        }
    }

    /// All visible text, flattened. Used for logging and assertions.
    pub fn text(&self) -> String {
        match self {
            RemoteView::PendingRemoval(notice) => notice.message(),
            RemoteView::Editing(form) => {
                let mut text = form.heading();
                if let Some(warning) = form.warning {
                    text.push('\n');
                    text.push_str(warning);
                }
                text
            }
        }
    }
}

impl RemovalNotice<'_> {
    /// Plain-text version of the notice
    pub fn message(&self) -> String {
        format!(
            "Removing the {} remote will affect publishing the repository to your remote server. Press Save to confirm this change.",
            self.remote_name
        )
    }
}

impl UrlForm<'_> {
    pub fn heading(&self) -> String {
        format!("Primary remote repository ({})", self.remote_name)
    }
}

/// Accessible label for the delete affordance
pub fn remove_label(remote_name: &str) -> String {
    format!("Remove the {remote_name} remote from this repository")
}
