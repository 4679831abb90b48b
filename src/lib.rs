//! remote-settings - repository remote settings for a desktop Git client
//!
//! The centrepiece is [`gui::RemoteEditor`], a stateless egui view that edits a
//! repository remote's URL and lets the user stage the remote for removal.
//! It draws the [`Remote`] it is given and reports edits through callbacks; the
//! caller owns the state and decides what Save does.
//!
//! [`gui::RepositorySettingsDialog`] is such a caller. It applies the editor's
//! events, keeps the removal flag and turns Save into a [`gui::RemoteChange`].

pub mod config;
pub mod domain;
pub mod gui;

pub use domain::*;
