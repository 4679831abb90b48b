//! Remote editor for the repository settings dialog
//!
//! Shows either the remote's URL field with a delete affordance, or, once the
//! remote is staged for removal, a notice asking the user to confirm with Save.
//!
//! The editor is stateless. It is built from props every frame, draws
//! `remote.url` as given, and reports edits through callbacks. The parent must
//! write the new URL back into its `Remote`, otherwise the field shows the old
//! value again on the next frame. The same holds for removal: clicking the
//! delete affordance only calls `on_remote_removed`, and the notice appears once
//! the parent passes `remote_deleted = true`.

mod event;
mod view;


pub use event::RemoteEditorEvent;
pub use view::{
    EMPTY_URL_WARNING, RemovalNotice, RemoteView, URL_PLACEHOLDER, UrlForm, remove_label,
};

use eframe::egui::{self, RichText};
use tracing::debug;

use crate::Remote;
use crate::gui::theme::{ACCENT_RED, ACCENT_YELLOW, BG_WARNING, TEXT_DIM, TEXT_MUTED, TEXT_PRIMARY};

/// Width reserved next to the URL field for the delete affordance
const REMOVE_BUTTON_WIDTH: f32 = 32.0;

/// Remote editor props: the remote, the removal flag and the two callbacks
pub struct RemoteEditor<'a> {
    remote: &'a Remote,
    remote_deleted: bool,
    on_remote_url_changed: Box<dyn FnMut(String) + 'a>,
    on_remote_removed: Box<dyn FnMut() + 'a>,
}

impl<'a> RemoteEditor<'a> {
    pub fn new(remote: &'a Remote, remote_deleted: bool) -> Self {
        Self {
            remote,
            remote_deleted,
            on_remote_url_changed: Box::new(|_| {}),
            on_remote_removed: Box::new(|| {}),
        }
    }

    /// Called with the field's new text on every edit
    pub fn on_remote_url_changed(mut self, callback: impl FnMut(String) + 'a) -> Self {
        self.on_remote_url_changed = Box::new(callback);
        self
    }

    /// Called when the user marks the remote for removal
    pub fn on_remote_removed(mut self, callback: impl FnMut() + 'a) -> Self {
        self.on_remote_removed = Box::new(callback);
        self
    }

    pub fn view(&self) -> RemoteView<'a> {
        RemoteView::render(self.remote, self.remote_deleted)
    }

    /// Forward a user intent to the matching callback, exactly once
    pub fn handle(&mut self, event: RemoteEditorEvent) {
        match event {
            RemoteEditorEvent::UrlEdited(url) => {
                debug!("Remote '{}' url edited ({} chars)", self.remote.name, url.len());
                (self.on_remote_url_changed)(url);
            }
            RemoteEditorEvent::RemoveClicked => {
                debug!("Remote '{}' marked for removal", self.remote.name);
                (self.on_remote_removed)();
            }
        }
    }

    /// Draw the editor and dispatch whatever the user did this frame
    pub fn show(mut self, ui: &mut egui::Ui) {
        match self.view() {
            RemoteView::PendingRemoval(notice) => render_removal_notice(ui, &notice),
            RemoteView::Editing(form) => {
                for event in render_url_form(ui, &form) {
                    self.handle(event);
                }
            }
        }
    }
}

fn render_removal_notice(ui: &mut egui::Ui, notice: &RemovalNotice<'_>) {
    egui::Frame::NONE
        .fill(BG_WARNING)
        .corner_radius(4.0)
        .inner_margin(12.0)
        .show(ui, |ui| {
            ui.horizontal_wrapped(|ui| {
                ui.spacing_mut().item_spacing.x = 4.0;
                ui.label(RichText::new("⚠").color(ACCENT_YELLOW));
                ui.label(RichText::new("Removing the").color(TEXT_DIM));
                ui.label(RichText::new(notice.remote_name).strong().color(TEXT_PRIMARY));
                ui.label(
                    RichText::new(
                        "remote will affect publishing the repository to your remote server. Press",
                    )
                    .color(TEXT_DIM),
                );
                ui.label(RichText::new("Save").italics().color(TEXT_PRIMARY));
                ui.label(RichText::new("to confirm this change.").color(TEXT_DIM));
            });
        })
        .response
        .widget_info(|| {
            egui::WidgetInfo::labeled(egui::WidgetType::Label, true, notice.message())
        });
}

fn render_url_form(ui: &mut egui::Ui, form: &UrlForm<'_>) -> Vec<RemoteEditorEvent> {
    let mut events = Vec::new();

    ui.label(RichText::new(form.heading()).color(TEXT_MUTED));
    ui.add_space(8.0);

    ui.horizontal(|ui| {
        // Scratch copy for this frame only; the props stay the source of truth
        let mut url = form.url.to_owned();
        let width = (ui.available_width() - REMOVE_BUTTON_WIDTH).max(120.0);
        let field = ui.add(
            egui::TextEdit::singleline(&mut url)
                .hint_text(URL_PLACEHOLDER)
                .font(egui::TextStyle::Monospace)
                .text_color(TEXT_PRIMARY)
                .desired_width(width),
        );
        if field.changed() {
            events.push(RemoteEditorEvent::UrlEdited(url));
        }

        let label = form.remove_label.as_str();
        let remove = ui
            .add(egui::Button::new(RichText::new("🗑").color(ACCENT_RED)).frame(false))
            .on_hover_text(label);
        remove.widget_info(|| egui::WidgetInfo::labeled(egui::WidgetType::Button, true, label));
        if remove.clicked() {
            events.push(RemoteEditorEvent::RemoveClicked);
        }
    });

    if let Some(warning) = form.warning {
        ui.add_space(4.0);
        ui.label(RichText::new(warning).color(ACCENT_RED));
    }

    events
}
