use std::path::PathBuf;

/// Whether a window has a folder open or only loose files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowKind {
    Workspace,
    FileOnly,
}

/// One window line from the status report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowRecord {
    pub title: String,
    pub parent_folder: Option<PathBuf>,
    pub kind: WindowKind,
}

impl WindowRecord {
    pub fn workspace(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            parent_folder: None,
            kind: WindowKind::Workspace,
        }
    }

    pub fn file_only(title: impl Into<String>, parent_folder: Option<PathBuf>) -> Self {
        Self {
            title: title.into(),
            parent_folder,
            kind: WindowKind::FileOnly,
        }
    }

    /// The file name shown in the title, i.e. the segment before the
    /// ` — ` / ` - ` separator, without the unsaved-changes dot.
    pub fn file_name(&self) -> &str {
        let title = self.title.trim_start_matches('●').trim();
        let head = match title.split_once(" — ") {
            Some((head, _)) => head,
            None => title.split_once(" - ").map_or(title, |(head, _)| head),
        };
        head.trim()
    }

    /// Full document path for a file-only record with a parent folder.
    pub fn document_path(&self) -> Option<PathBuf> {
        if self.kind != WindowKind::FileOnly {
            return None;
        }
        let folder = self.parent_folder.as_ref()?;
        let name = self.file_name();
        if name.is_empty() {
            return None;
        }
        Some(folder.join(name))
    }
}

/// Parsed status report.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusReport {
    pub records: Vec<WindowRecord>,
}

impl StatusReport {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Titles of workspace windows, deduplicated in order of first appearance.
    pub fn workspace_markers(&self) -> Vec<String> {
        let mut markers: Vec<String> = Vec::new();
        for record in &self.records {
            if record.kind == WindowKind::Workspace && !markers.contains(&record.title) {
                markers.push(record.title.clone());
            }
        }
        markers
    }

    pub fn file_only_records(&self) -> impl Iterator<Item = &WindowRecord> {
        self.records
            .iter()
            .filter(|record| record.kind == WindowKind::FileOnly)
    }

    /// Document path of the single file-only window.
    ///
    /// Returns `None` when there are zero or several file-only windows, since
    /// the target would be ambiguous.
    pub fn file_only_target(&self) -> Option<PathBuf> {
        let mut file_only = self.file_only_records();
        let record = file_only.next()?;
        if file_only.next().is_some() {
            return None;
        }
        record.document_path()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_name_em_dash() {
        let record = WindowRecord::file_only("notes.md — Visual Studio Code", None);
        assert_eq!(record.file_name(), "notes.md");
    }

    #[test]
    fn test_file_name_hyphen_and_dirty_marker() {
        let record = WindowRecord::file_only("● todo.txt - Code", None);
        assert_eq!(record.file_name(), "todo.txt");
    }

    #[test]
    fn test_file_name_without_separator() {
        let record = WindowRecord::file_only("scratch.py", None);
        assert_eq!(record.file_name(), "scratch.py");
    }

    #[test]
    fn test_document_path_joins_folder() {
        let record = WindowRecord::file_only(
            "notes.md — Visual Studio Code",
            Some(PathBuf::from("/Users/me/Documents")),
        );
        assert_eq!(
            record.document_path(),
            Some(PathBuf::from("/Users/me/Documents/notes.md"))
        );
    }

    #[test]
    fn test_workspace_record_has_no_document_path() {
        let record = WindowRecord::workspace("main.rs — project");
        assert_eq!(record.document_path(), None);
    }

    #[test]
    fn test_workspace_markers_deduplicated() {
        let report = StatusReport {
            records: vec![
                WindowRecord::workspace("a — proj"),
                WindowRecord::file_only("x.txt — Code", None),
                WindowRecord::workspace("b — other"),
                WindowRecord::workspace("a — proj"),
            ],
        };
        assert_eq!(report.workspace_markers(), vec!["a — proj", "b — other"]);
    }

    #[test]
    fn test_file_only_target_requires_single_record() {
        let one = StatusReport {
            records: vec![WindowRecord::file_only(
                "x.txt — Code",
                Some(PathBuf::from("/tmp")),
            )],
        };
        assert_eq!(one.file_only_target(), Some(PathBuf::from("/tmp/x.txt")));

        let two = StatusReport {
            records: vec![
                WindowRecord::file_only("x.txt — Code", Some(PathBuf::from("/tmp"))),
                WindowRecord::file_only("y.txt — Code", Some(PathBuf::from("/tmp"))),
            ],
        };
        assert_eq!(two.file_only_target(), None);

        assert_eq!(StatusReport::default().file_only_target(), None);
    }
}
