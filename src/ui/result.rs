use serde::Serialize;

/// Outcome of one frame, consumed by the embedding application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UiResult {
    /// Nothing for the application to do.
    #[default]
    None,
    /// Quit the application.
    Exit,
    /// A file was picked in the browser; see `Frontend::selected_file`.
    FileSelected,
    /// A setting value changed; the application should re-read its slots.
    SettingsChanged,
    Unpause,
    LoadState,
    SaveState,
    /// Close the running game.
    Close,
}
