//! Repository settings dialog
//!
//! Hosts the remote editor and plays the caller's side of its contract:
//! - applies URL edits back into the remote so the field shows them
//! - flips the removal flag when the delete affordance is used
//! - on Save, reports the change to apply (update the URL or remove the remote)

mod helpers;
mod panel;
mod save;
mod state;

#[cfg(test)]
mod tests;

pub use panel::{SettingsAction, render_settings};
pub use save::{RemoteChange, SaveError};
pub use state::RepositorySettingsDialog;
