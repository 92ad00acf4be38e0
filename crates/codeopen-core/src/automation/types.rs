use std::path::PathBuf;

/// An editor window as seen by the automation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorWindow {
    /// 1-based position in the application's window list (front to back).
    pub index: usize,
    /// Window title; `None` when it could not be read or was empty.
    pub title: Option<String>,
    /// Document shown in the window, when the application reports one.
    pub document: Option<PathBuf>,
}

impl EditorWindow {
    pub fn new(index: usize, title: Option<String>, document: Option<PathBuf>) -> Self {
        Self {
            index,
            title,
            document,
        }
    }

    pub fn title_or_empty(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }
}
