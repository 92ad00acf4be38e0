//! Editor backend trait definition.

use std::ffi::OsString;

use crate::editor::{errors::EditorError, types::OpenMode};

/// Capabilities codeopen needs from an editor.
///
/// The production implementation shells out to the editor's command-line
/// launcher; tests substitute an in-memory fake.
pub trait EditorBackend: Send + Sync {
    /// The display name for this editor (e.g., "VS Code").
    fn display_name(&self) -> &'static str;

    /// Check if the launcher can be found on this system.
    fn is_available(&self) -> bool;

    /// Check if an editor instance is currently running.
    ///
    /// Probe failures are reported as "not running".
    fn is_running(&self) -> bool;

    /// Ask the launcher for its human-readable window status report.
    fn query_status(&self) -> Result<String, EditorError>;

    /// Open `files` in the editor.
    ///
    /// # Arguments
    /// * `mode` - Reuse the active window or force a new one
    /// * `files` - Paths exactly as given on the command line, in order
    fn open(&self, mode: OpenMode, files: &[OsString]) -> Result<(), EditorError>;
}
