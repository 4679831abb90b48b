//! GUI module: the repository settings window and its remote editor
//!
//! The remote editor is a stateless view; `settings` hosts it and owns the
//! remote being edited.

pub mod app;
pub mod remote_editor;
pub mod runner;
pub mod settings;
pub mod theme;

pub use app::RemoteSettingsApp;
pub use remote_editor::{RemoteEditor, RemoteEditorEvent, RemoteView};
pub use runner::run_gui;
pub use settings::{RemoteChange, RepositorySettingsDialog, SaveError};
