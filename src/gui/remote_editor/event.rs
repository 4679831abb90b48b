//! User intents raised by the remote editor

/// Something the user did in the remote editor
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteEditorEvent {
    /// The URL field's text changed to this value
    UrlEdited(String),
    /// The delete affordance was activated
    RemoveClicked,
}
