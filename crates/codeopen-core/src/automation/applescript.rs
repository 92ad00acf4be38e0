//! System Events automation through `osascript`.

use std::path::PathBuf;

use tracing::{debug, warn};

use crate::automation::{
    errors::AutomationError, traits::WindowAutomation, types::EditorWindow,
};
use crate::escape::applescript_escape;

/// AppleScript template listing every window as `title<TAB>document<LF>`.
///
/// Title and document reads are wrapped in `try` so one unreadable window
/// does not abort the listing.
const LIST_WINDOWS_SCRIPT: &str = r#"tell application "System Events"
        if not (exists process "{app_name}") then return ""
        tell process "{app_name}"
            set output to ""
            repeat with w in windows
                set windowTitle to ""
                try
                    set windowTitle to name of w
                end try
                set documentPath to ""
                try
                    set documentPath to value of attribute "AXDocument" of w
                end try
                set output to output & windowTitle & tab & documentPath & linefeed
            end repeat
            return output
        end tell
    end tell"#;

/// AppleScript template raising one window and making the process frontmost.
/// Returns `true` or `false`; errors inside the script become `false`.
const RAISE_WINDOW_SCRIPT: &str = r#"tell application "System Events"
        tell process "{app_name}"
            try
                {raise_action}
                set frontmost to true
                return true
            on error
                return false
            end try
        end tell
    end tell"#;

/// Raise by name, falling back to the enumeration index when no window
/// answers to that name.
const RAISE_BY_TITLE_ACTION: &str = r#"try
                    perform action "AXRaise" of window "{title}"
                on error
                    perform action "AXRaise" of window {index}
                end try"#;

const RAISE_BY_INDEX_ACTION: &str = r#"perform action "AXRaise" of window {index}"#;

/// AppleScript template selecting a window through the Window menu.
const WINDOW_MENU_SCRIPT: &str = r#"tell application "System Events"
        tell process "{app_name}"
            click menu item "{title}" of menu 1 of menu bar item "Window" of menu bar 1
        end tell
    end tell"#;

/// AppleScript template activating an application by bundle identifier.
const ACTIVATE_APP_SCRIPT: &str = r#"tell application id "{bundle_id}" to activate"#;

/// AppleScript's rendering of an unset value when coerced to text.
const MISSING_VALUE: &str = "missing value";

/// Window automation backed by System Events.
#[derive(Debug, Clone, Default)]
pub struct AppleScriptAutomation;

impl AppleScriptAutomation {
    pub fn new() -> Self {
        Self
    }
}

impl WindowAutomation for AppleScriptAutomation {
    fn list_windows(&self, app_name: &str) -> Result<Vec<EditorWindow>, AutomationError> {
        let output = run_script(&build_list_script(app_name), "list_windows")?;
        let windows = parse_window_listing(&output);

        debug!(
            event = "core.automation.list_completed",
            app_name = app_name,
            count = windows.len()
        );

        Ok(windows)
    }

    fn raise_window(
        &self,
        app_name: &str,
        window: &EditorWindow,
    ) -> Result<bool, AutomationError> {
        let output = run_script(&build_raise_script(app_name, window), "raise_window")?;
        parse_bool_output(&output)
    }

    fn select_in_window_menu(&self, app_name: &str, title: &str) -> Result<(), AutomationError> {
        run_script(&build_menu_script(app_name, title), "select_in_window_menu")?;
        Ok(())
    }

    fn activate_app(&self, bundle_id: &str) -> Result<(), AutomationError> {
        run_script(&build_activate_script(bundle_id), "activate_app")?;
        Ok(())
    }
}

pub fn build_list_script(app_name: &str) -> String {
    LIST_WINDOWS_SCRIPT.replace("{app_name}", &applescript_escape(app_name))
}

/// Address the window by title when known, so a z-order change between
/// listing and raising does not hit the wrong window. The index is the
/// fallback for titles System Events cannot resolve by name.
pub fn build_raise_script(app_name: &str, window: &EditorWindow) -> String {
    let index = window.index.to_string();
    let raise_action = match window.title.as_deref() {
        Some(title) => RAISE_BY_TITLE_ACTION
            .replace("{title}", &applescript_escape(title))
            .replace("{index}", &index),
        None => RAISE_BY_INDEX_ACTION.replace("{index}", &index),
    };

    RAISE_WINDOW_SCRIPT
        .replace("{app_name}", &applescript_escape(app_name))
        .replace("{raise_action}", &raise_action)
}

pub fn build_menu_script(app_name: &str, title: &str) -> String {
    WINDOW_MENU_SCRIPT
        .replace("{app_name}", &applescript_escape(app_name))
        .replace("{title}", &applescript_escape(title))
}

pub fn build_activate_script(bundle_id: &str) -> String {
    ACTIVATE_APP_SCRIPT.replace("{bundle_id}", &applescript_escape(bundle_id))
}

/// Parse the `title<TAB>document` listing produced by [`LIST_WINDOWS_SCRIPT`].
///
/// Lines without a tab are not window rows (osascript appends its own
/// newline) and are skipped.
pub fn parse_window_listing(output: &str) -> Vec<EditorWindow> {
    output
        .lines()
        .filter_map(|line| line.split_once('\t'))
        .enumerate()
        .map(|(i, (title, document))| {
            EditorWindow::new(i + 1, window_title(title), decode_document(document))
        })
        .collect()
}

/// Strict boolean parse: anything but `true`/`false` is malformed.
pub fn parse_bool_output(output: &str) -> Result<bool, AutomationError> {
    match output.trim() {
        "true" => Ok(true),
        "false" => Ok(false),
        other => Err(AutomationError::MalformedOutput {
            output: other.to_string(),
        }),
    }
}

/// Titles are kept verbatim so raising by name sees the exact window name.
fn window_title(value: &str) -> Option<String> {
    non_missing(value).map(|_| value.to_string())
}

fn non_missing(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() || value == MISSING_VALUE {
        None
    } else {
        Some(value.to_string())
    }
}

/// Turn an `AXDocument` value (usually a `file://` URL) into a path.
fn decode_document(value: &str) -> Option<PathBuf> {
    let value = non_missing(value)?;

    let Some(rest) = value.strip_prefix("file://") else {
        return value.starts_with('/').then(|| PathBuf::from(&value));
    };
    let rest = rest.strip_prefix("localhost").unwrap_or(rest);

    match urlencoding::decode(rest) {
        Ok(decoded) => Some(PathBuf::from(decoded.as_ref())),
        Err(e) => {
            warn!(
                event = "core.automation.document_decode_failed",
                value = %value,
                error = %e
            );
            None
        }
    }
}

#[cfg(target_os = "macos")]
fn run_script(script: &str, operation: &str) -> Result<String, AutomationError> {
    debug!(
        event = "core.automation.applescript_executing",
        operation = operation
    );

    let output = std::process::Command::new("osascript")
        .arg("-e")
        .arg(script)
        .output()
        .map_err(|e| AutomationError::ScriptExecution {
            message: format!("Failed to execute osascript for {}: {}", operation, e),
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        warn!(
            event = "core.automation.applescript_failed",
            operation = operation,
            code = ?output.status.code(),
            stderr = %stderr.trim()
        );
        return Err(AutomationError::ScriptFailed {
            stderr: stderr.trim().to_string(),
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).to_string())
}

#[cfg(not(target_os = "macos"))]
fn run_script(_script: &str, operation: &str) -> Result<String, AutomationError> {
    debug!(
        event = "core.automation.unsupported_platform",
        operation = operation
    );
    Err(AutomationError::Unsupported)
}
