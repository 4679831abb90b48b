//! Main GUI application using egui
//!
//! A single window holding the repository settings dialog.

use std::sync::{Arc, Mutex};

use eframe::egui;
use tracing::{info, warn};

use super::settings::{RemoteChange, RepositorySettingsDialog, SettingsAction, render_settings};
use super::theme::apply_theme;

/// Change confirmed by the user, filled in when the window closes after Save
pub type SharedOutcome = Arc<Mutex<Option<RemoteChange>>>;

pub struct RemoteSettingsApp {
    dialog: RepositorySettingsDialog,
    outcome: SharedOutcome,
    theme_applied: bool,
}

impl RemoteSettingsApp {
    pub fn new(dialog: RepositorySettingsDialog, outcome: SharedOutcome) -> Self {
        Self {
            dialog,
            outcome,
            theme_applied: false,
        }
    }

    pub fn dialog(&self) -> &RepositorySettingsDialog {
        &self.dialog
    }

    /// Handle Save/Cancel. Returns true when the window should close.
    pub fn handle_action(&mut self, action: SettingsAction) -> bool {
        match action {
            SettingsAction::Save => match self.dialog.save() {
                Ok(change) => {
                    if let Ok(mut outcome) = self.outcome.lock() {
                        *outcome = change;
                    }
                    true
                }
                Err(e) => {
                    warn!("Not saving remote settings: {}", e);
                    false
                }
            },
            SettingsAction::Cancel => {
                if self.dialog.has_changes() {
                    info!("Discarding remote settings changes");
                }
                self.dialog.reset();
                true
            }
        }
    }
}

impl eframe::App for RemoteSettingsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.theme_applied {
            apply_theme(ctx);
            self.theme_applied = true;
        }

        if let Some(action) = render_settings(ctx, &mut self.dialog) {
            if self.handle_action(action) {
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            }
        }
    }
}
