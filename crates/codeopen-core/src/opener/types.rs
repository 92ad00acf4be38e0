use std::ffi::OsString;

use serde::Serialize;

use crate::editor::OpenMode;
use crate::opener::errors::OpenError;

/// Files to open, exactly as given by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenRequest {
    files: Vec<OsString>,
}

impl OpenRequest {
    pub fn new(files: Vec<OsString>) -> Result<Self, OpenError> {
        if files.is_empty() {
            return Err(OpenError::NoFiles);
        }
        Ok(Self { files })
    }

    pub fn files(&self) -> &[OsString] {
        &self.files
    }
}

/// Why the opener chose its mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OpenReason {
    /// No editor process was found, so there is nothing to reuse.
    EditorNotRunning,
    /// A reusable window was raised.
    WindowActivated,
    /// The editor is running but no window could be activated.
    NoReusableWindow,
}

impl std::fmt::Display for OpenReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OpenReason::EditorNotRunning => write!(f, "editor_not_running"),
            OpenReason::WindowActivated => write!(f, "window_activated"),
            OpenReason::NoReusableWindow => write!(f, "no_reusable_window"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenResult {
    pub mode: OpenMode,
    pub reason: OpenReason,
    /// Whether the launcher call itself succeeded.
    pub launched: bool,
}

/// Outcome of a reuse check, which inspects windows without opening anything.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReuseCheck {
    pub running: bool,
    pub reusable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub window_title: Option<String>,
}
