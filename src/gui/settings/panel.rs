//! Main settings panel rendering

use std::cell::RefCell;

use eframe::egui::{self, RichText};

use crate::gui::remote_editor::{RemoteEditor, RemoteEditorEvent};
use crate::gui::theme::{ACCENT_GREEN, BG_PRIMARY, TEXT_DIM, TEXT_PRIMARY};

use super::helpers::{render_section_frame, render_status_message};
use super::state::RepositorySettingsDialog;

/// Button the user pressed at the bottom of the dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsAction {
    Save,
    Cancel,
}

/// Render the settings dialog.
///
/// Editor events are applied to `dialog` before this returns; Save/Cancel are
/// handed back to the caller.
pub fn render_settings(
    ctx: &egui::Context,
    dialog: &mut RepositorySettingsDialog,
) -> Option<SettingsAction> {
    let mut action = None;

    egui::CentralPanel::default()
        .frame(egui::Frame::NONE.fill(BG_PRIMARY).inner_margin(16.0))
        .show(ctx, |ui| {
            ui.vertical(|ui| {
                ui.label(
                    RichText::new("⎇ REMOTE")
                        .monospace()
                        .size(18.0)
                        .color(TEXT_PRIMARY),
                );
                ui.add_space(16.0);

                let events = RefCell::new(Vec::new());
                render_section_frame(ui, |ui| {
                    RemoteEditor::new(dialog.remote(), dialog.is_remote_deleted())
                        .on_remote_url_changed(|url| {
                            events.borrow_mut().push(RemoteEditorEvent::UrlEdited(url))
                        })
                        .on_remote_removed(|| {
                            events.borrow_mut().push(RemoteEditorEvent::RemoveClicked)
                        })
                        .show(ui);
                });
                for event in events.into_inner() {
                    dialog.apply(event);
                }

                ui.add_space(12.0);
                ui.horizontal(|ui| {
                    let save = egui::Button::new(RichText::new("💾 Save").color(ACCENT_GREEN));
                    if ui.add_enabled(dialog.has_changes(), save).clicked() {
                        action = Some(SettingsAction::Save);
                    }
                    if ui
                        .button(RichText::new("✕ Cancel").color(TEXT_DIM))
                        .clicked()
                    {
                        action = Some(SettingsAction::Cancel);
                    }
                });

                if dialog.status().is_some() {
                    ui.add_space(8.0);
                    render_status_message(ui, dialog.status());
                }
            });
        });

    action
}
