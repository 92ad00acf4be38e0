//! Candidate selection. Pure functions over enumerated windows.

use std::path::Path;

use crate::automation::EditorWindow;

/// A title belongs to a known workspace window if it contains any marker.
pub fn is_known_workspace(title: &str, markers: &[String]) -> bool {
    markers
        .iter()
        .any(|marker| !marker.is_empty() && title.contains(marker.as_str()))
}

fn is_skipped(title: &str, skip_titles: &[String]) -> bool {
    let title = title.trim();
    skip_titles.iter().any(|skip| skip == title)
}

/// Windows that are neither known workspaces nor skipped, in enumeration order.
///
/// Windows without a readable title are kept: nothing marks them as
/// workspaces.
pub fn exclusion_candidates<'a>(
    windows: &'a [EditorWindow],
    markers: &[String],
    skip_titles: &[String],
) -> Vec<&'a EditorWindow> {
    windows
        .iter()
        .filter(|window| {
            let title = window.title_or_empty();
            !is_known_workspace(title, markers) && !is_skipped(title, skip_titles)
        })
        .collect()
}

/// The window showing `target`: exact document path first, then the first
/// window whose title contains the target's file name.
pub fn find_document_match<'a>(
    windows: &'a [EditorWindow],
    target: &Path,
) -> Option<&'a EditorWindow> {
    if let Some(window) = windows
        .iter()
        .find(|window| window.document.as_deref() == Some(target))
    {
        return Some(window);
    }

    let base_name = target.file_name()?.to_string_lossy();
    if base_name.is_empty() {
        return None;
    }

    windows
        .iter()
        .find(|window| window.title_or_empty().contains(base_name.as_ref()))
}
