use serde::Serialize;

/// How the launcher should place the opened files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OpenMode {
    /// Spawn a fresh window for the files.
    NewWindow,
    /// Add the files as tabs to the currently active window.
    ReuseWindow,
}

impl std::fmt::Display for OpenMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OpenMode::NewWindow => write!(f, "new_window"),
            OpenMode::ReuseWindow => write!(f, "reuse_window"),
        }
    }
}
