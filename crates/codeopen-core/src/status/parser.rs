//! Status report grammar.
//!
//! The launcher's `--status` output is human-readable diagnostics, not a
//! stable format, so all knowledge about it lives here:
//!
//! - a line is a window record iff it contains `Window (`;
//! - the title is the text inside that parenthesised group (nested parens kept);
//! - a `(parent folder: <dir>)` annotation, inside or after the group, marks
//!   the window as file-only; without it the window is a workspace window.
//!
//! Anything else is ignored, so malformed output degrades to an empty report.

use std::path::PathBuf;

use tracing::debug;

use crate::status::types::{StatusReport, WindowRecord};

const WINDOW_TOKEN: &str = "Window (";
const PARENT_FOLDER_TOKEN: &str = "(parent folder:";

/// Parse the full status text into window records.
pub fn parse_status_report(text: &str) -> StatusReport {
    let records: Vec<WindowRecord> = text.lines().filter_map(parse_window_line).collect();

    debug!(
        event = "core.status.parse_completed",
        lines = text.lines().count(),
        records = records.len()
    );

    StatusReport { records }
}

/// Parse a single line, returning `None` for anything that is not a window record.
pub fn parse_window_line(line: &str) -> Option<WindowRecord> {
    let line = line.trim_end_matches('\r');
    let start = line.find(WINDOW_TOKEN)? + WINDOW_TOKEN.len();
    let (inner, after) = split_group(&line[start..])?;

    let (title, parent_folder) = if let Some(pos) = inner.find(PARENT_FOLDER_TOKEN) {
        (&inner[..pos], Some(&inner[pos + PARENT_FOLDER_TOKEN.len()..]))
    } else if let Some(pos) = after.find(PARENT_FOLDER_TOKEN) {
        (inner, Some(&after[pos + PARENT_FOLDER_TOKEN.len()..]))
    } else {
        (inner, None)
    };

    let title = title.trim();
    if title.is_empty() {
        return None;
    }

    match parent_folder {
        Some(folder) => {
            let folder = strip_unbalanced_close(folder.trim()).trim();
            let folder = (!folder.is_empty()).then(|| PathBuf::from(folder));
            Some(WindowRecord::file_only(title, folder))
        }
        None => Some(WindowRecord::workspace(title)),
    }
}

/// Split `s` at the paren closing an already-open group.
///
/// Returns the text inside the group and the text after it, or `None` when
/// the group is never closed.
fn split_group(s: &str) -> Option<(&str, &str)> {
    let mut depth = 1usize;
    for (i, c) in s.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return Some((&s[..i], &s[i + 1..]));
                }
            }
            _ => {}
        }
    }
    None
}

/// Drop trailing `)` characters that have no matching `(` in `s`.
fn strip_unbalanced_close(s: &str) -> &str {
    let mut s = s;
    while s.ends_with(')') && s.matches(')').count() > s.matches('(').count() {
        s = s[..s.len() - 1].trim_end();
    }
    s
}
