//! GUI runner - opens the repository settings window

use std::sync::{Arc, Mutex};

use anyhow::Result;
use eframe::egui;
use tracing::info;

use super::app::{RemoteSettingsApp, SharedOutcome};
use super::settings::{RemoteChange, RepositorySettingsDialog};
use crate::config::Config;

/// Run the settings window until the user saves or cancels.
///
/// Returns the change confirmed with Save, if any. Applying it to the
/// repository is left to the caller.
pub fn run_gui(config: Config) -> Result<Option<RemoteChange>> {
    let gui = &config.settings.gui;
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(gui.title.clone())
            .with_inner_size([gui.window_width, gui.window_height])
            .with_min_inner_size([360.0, 180.0])
            .with_resizable(true),
        centered: true,
        ..Default::default()
    };

    info!("Opening settings for remote {}", config.remote);

    let outcome = Arc::new(Mutex::new(None));
    let dialog = RepositorySettingsDialog::new(config.remote.clone());
    let app = RemoteSettingsApp::new(dialog, Arc::clone(&outcome));

    eframe::run_native(
        &config.settings.gui.title,
        options,
        Box::new(|_cc| Ok(Box::new(app))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run GUI: {}", e))?;

    take_outcome(&outcome)
}

/// Take the confirmed change out of the shared slot
pub(crate) fn take_outcome(outcome: &SharedOutcome) -> Result<Option<RemoteChange>> {
    let mut guard = outcome
        .lock()
        .map_err(|_| anyhow::anyhow!("Settings window outcome lock poisoned"))?;
    Ok(guard.take())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_outcome_empties_slot() {
        let outcome: SharedOutcome = Arc::new(Mutex::new(Some(RemoteChange::Remove {
            name: "origin".to_string(),
        })));

        assert_eq!(
            take_outcome(&outcome).unwrap(),
            Some(RemoteChange::Remove {
                name: "origin".to_string()
            })
        );
        assert_eq!(take_outcome(&outcome).unwrap(), None);
    }

    #[test]
    fn test_take_outcome_reports_poisoned_lock() {
        let outcome: SharedOutcome = Arc::new(Mutex::new(Some(RemoteChange::Remove {
            name: "origin".to_string(),
        })));

        let poisoner = Arc::clone(&outcome);
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.lock().unwrap();
            panic!("panic while holding the outcome lock");
        })
        .join();

        let err = take_outcome(&outcome).unwrap_err();
        assert!(err.to_string().contains("poisoned"));
    }
}
