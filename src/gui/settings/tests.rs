//! Tests for settings dialog

use super::*;
use crate::Remote;
use crate::gui::remote_editor::{RemoteEditorEvent, RemoteView};

fn dialog() -> RepositorySettingsDialog {
    RepositorySettingsDialog::new(Remote::new("origin", "https://example.com/repo.git"))
}

#[test]
fn test_new_dialog_has_no_changes() {
    let mut dialog = dialog();
    assert!(!dialog.has_changes());
    assert!(!dialog.is_remote_deleted());
    assert_eq!(dialog.save(), Ok(None));
    assert_eq!(dialog.status(), Some(&("No changes to save".to_string(), false)));
}

#[test]
fn test_url_edit_round_trips_into_next_render() {
    let mut dialog = dialog();
    dialog.apply(RemoteEditorEvent::UrlEdited("https://example.com/other.git".to_string()));

    let view = RemoteView::render(dialog.remote(), dialog.is_remote_deleted());
    assert_eq!(view.text_field(), Some("https://example.com/other.git"));
    assert!(dialog.has_changes());
}

#[test]
fn test_save_updated_url() {
    let mut dialog = dialog();
    dialog.apply(RemoteEditorEvent::UrlEdited("git@host:x.git".to_string()));

    let change = dialog.save().unwrap();
    assert_eq!(
        change,
        Some(RemoteChange::UpdateUrl {
            name: "origin".to_string(),
            url: "git@host:x.git".to_string(),
        })
    );
    // Saved state becomes the new baseline
    assert_eq!(dialog.original().url, "git@host:x.git");
    assert!(!dialog.has_changes());
}

#[test]
fn test_save_rejects_empty_url() {
    let mut dialog = dialog();
    dialog.apply(RemoteEditorEvent::UrlEdited(String::new()));

    let view = RemoteView::render(dialog.remote(), dialog.is_remote_deleted());
    assert!(view.warning().is_some());

    assert_eq!(dialog.save(), Err(SaveError::EmptyUrl("origin".to_string())));
    assert!(matches!(dialog.status(), Some((_, true))));
    assert_eq!(dialog.original().url, "https://example.com/repo.git");
}

#[test]
fn test_two_phase_removal() {
    let mut dialog = dialog();

    // Phase one: the editor reports the click, the dialog stages the removal
    dialog.apply(RemoteEditorEvent::RemoveClicked);
    assert!(dialog.is_remote_deleted());
    let view = RemoteView::render(dialog.remote(), dialog.is_remote_deleted());
    assert!(view.text().contains("origin"));
    assert_eq!(view.text_field(), None);

    // Phase two: Save confirms it
    assert_eq!(
        dialog.save(),
        Ok(Some(RemoteChange::Remove {
            name: "origin".to_string()
        }))
    );
}

#[test]
fn test_removal_wins_over_empty_url() {
    let mut dialog = dialog();
    dialog.apply(RemoteEditorEvent::UrlEdited(String::new()));
    dialog.apply(RemoteEditorEvent::RemoveClicked);

    assert_eq!(
        dialog.save(),
        Ok(Some(RemoteChange::Remove {
            name: "origin".to_string()
        }))
    );
}

#[test]
fn test_reset_drops_edits_and_removal() {
    let mut dialog = dialog();
    dialog.apply(RemoteEditorEvent::UrlEdited("x".to_string()));
    dialog.apply(RemoteEditorEvent::RemoveClicked);

    dialog.reset();
    assert_eq!(dialog.remote(), &Remote::new("origin", "https://example.com/repo.git"));
    assert!(!dialog.is_remote_deleted());
    assert!(!dialog.has_changes());
}

#[test]
fn test_edit_clears_status() {
    let mut dialog = dialog();
    dialog.apply(RemoteEditorEvent::UrlEdited(String::new()));
    let _ = dialog.save();
    assert!(dialog.status().is_some());

    dialog.apply(RemoteEditorEvent::UrlEdited("h".to_string()));
    assert!(dialog.status().is_none());
}

#[test]
fn test_change_descriptions() {
    let update = RemoteChange::UpdateUrl {
        name: "origin".to_string(),
        url: "git@host:x.git".to_string(),
    };
    assert_eq!(update.describe(), "Remote 'origin' now points at git@host:x.git");

    let remove = RemoteChange::Remove {
        name: "upstream".to_string(),
    };
    assert_eq!(remove.describe(), "Remote 'upstream' removed");
}
