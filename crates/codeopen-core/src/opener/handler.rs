use tracing::{debug, error, info, warn};

use crate::activation::{ActivationSettings, handler as activation};
use crate::automation::WindowAutomation;
use crate::config::CodeOpenConfig;
use crate::editor::{EditorBackend, OpenMode};
use crate::opener::types::{OpenReason, OpenRequest, OpenResult, ReuseCheck};
use crate::status::{StatusReport, parse_status_report};

/// Open the requested files, reusing a file-only window when one can be raised.
///
/// Exactly one launcher call is made. Every failure before that call falls
/// back to a new window; a failing launcher call is logged and reported in
/// [`OpenResult::launched`].
pub fn open_files(
    request: &OpenRequest,
    editor: &dyn EditorBackend,
    automation: &dyn WindowAutomation,
    config: &CodeOpenConfig,
) -> OpenResult {
    info!(
        event = "core.open.started",
        editor = editor.display_name(),
        files = ?request.files()
    );

    if !editor.is_available() {
        warn!(
            event = "core.open.launcher_unavailable",
            command = config.editor.command()
        );
    }

    let (mode, reason) = decide_mode(editor, automation, config);

    info!(
        event = "core.open.mode_decided",
        mode = %mode,
        reason = %reason
    );

    let launched = match editor.open(mode, request.files()) {
        Ok(()) => true,
        Err(e) => {
            error!(
                event = "core.open.launch_failed",
                mode = %mode,
                error = %e
            );
            false
        }
    };

    info!(
        event = "core.open.completed",
        mode = %mode,
        reason = %reason,
        launched = launched
    );

    OpenResult {
        mode,
        reason,
        launched,
    }
}

/// Report whether a reusable window exists, without raising or opening anything.
pub fn check_reusable(
    editor: &dyn EditorBackend,
    automation: &dyn WindowAutomation,
    config: &CodeOpenConfig,
) -> ReuseCheck {
    if !editor.is_running() {
        info!(event = "core.check.editor_not_running");
        return ReuseCheck {
            running: false,
            reusable: false,
            window_title: None,
        };
    }

    let report = load_status_report(editor);
    let settings = ActivationSettings::from_config(config);
    let window = activation::find_reusable_window(automation, &report, &settings);

    info!(
        event = "core.check.completed",
        reusable = window.is_some(),
        window = ?window.as_ref().and_then(|w| w.title.as_deref())
    );

    ReuseCheck {
        running: true,
        reusable: window.is_some(),
        window_title: window.and_then(|w| w.title),
    }
}

fn decide_mode(
    editor: &dyn EditorBackend,
    automation: &dyn WindowAutomation,
    config: &CodeOpenConfig,
) -> (OpenMode, OpenReason) {
    if !editor.is_running() {
        info!(event = "core.open.editor_not_running");
        return (OpenMode::NewWindow, OpenReason::EditorNotRunning);
    }

    let report = load_status_report(editor);
    let settings = ActivationSettings::from_config(config);

    if !activation::activate_window(automation, &report, &settings) {
        return (OpenMode::NewWindow, OpenReason::NoReusableWindow);
    }

    // The raised window only receives the files if the app is frontmost.
    if let Err(e) = automation.activate_app(config.editor.bundle_id()) {
        warn!(
            event = "core.open.app_activation_failed",
            bundle_id = config.editor.bundle_id(),
            error = %e
        );
    }

    (OpenMode::ReuseWindow, OpenReason::WindowActivated)
}

/// Query and parse the status report; any failure yields an empty report.
fn load_status_report(editor: &dyn EditorBackend) -> StatusReport {
    match editor.query_status() {
        Ok(text) => {
            let report = parse_status_report(&text);
            debug!(
                event = "core.open.status_loaded",
                records = report.records.len(),
                workspace_markers = ?report.workspace_markers()
            );
            report
        }
        Err(e) => {
            warn!(event = "core.open.status_failed", error = %e);
            StatusReport::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;

    use crate::automation::EditorWindow;
    use crate::testing::{FakeAutomation, FakeEditor, RaiseOutcome};

    const STATUS_ONE_WORKSPACE: &str = "\
Workspace Stats:
|  Window (main.rs — proj)
|    Folder (proj): 12 files
";

    fn config() -> CodeOpenConfig {
        let mut config = CodeOpenConfig::default();
        config.activation.settle_delay_ms = Some(0);
        config
    }

    fn os(files: &[&str]) -> Vec<OsString> {
        files.iter().map(OsString::from).collect()
    }

    fn request(files: &[&str]) -> OpenRequest {
        OpenRequest::new(os(files)).unwrap()
    }

    fn window(index: usize, title: &str) -> EditorWindow {
        EditorWindow::new(index, Some(title.to_string()), None)
    }

    #[test]
    fn test_not_running_opens_new_window_without_probing() {
        let editor = FakeEditor::not_running();
        let automation = FakeAutomation::with_windows(vec![window(1, "notes.md — Code")]);

        let result = open_files(&request(&["a.txt"]), &editor, &automation, &config());

        assert_eq!(result.mode, OpenMode::NewWindow);
        assert_eq!(result.reason, OpenReason::EditorNotRunning);
        assert!(result.launched);
        assert_eq!(editor.status_queries(), 0);
        assert!(automation.calls().is_empty());
        assert_eq!(
            editor.opens(),
            vec![(OpenMode::NewWindow, os(&["a.txt"]))]
        );
    }

    #[test]
    fn test_activation_success_reuses_window() {
        let editor = FakeEditor::running_with_status(STATUS_ONE_WORKSPACE);
        let automation = FakeAutomation::with_windows(vec![
            window(1, "main.rs — proj"),
            window(2, "notes.md — Visual Studio Code"),
        ]);
        let files = ["z.txt", "a dir/b.md", "c.rs"];

        let result = open_files(&request(&files), &editor, &automation, &config());

        assert_eq!(result.mode, OpenMode::ReuseWindow);
        assert_eq!(result.reason, OpenReason::WindowActivated);
        assert_eq!(editor.status_queries(), 1);
        assert_eq!(
            editor.opens(),
            vec![(OpenMode::ReuseWindow, os(&files))]
        );
        assert_eq!(
            automation.calls().last().map(String::as_str),
            Some("activate:com.microsoft.VSCode")
        );
    }

    #[test]
    fn test_only_workspace_window_opens_new_window() {
        let editor = FakeEditor::running_with_status(STATUS_ONE_WORKSPACE);
        let automation = FakeAutomation::with_windows(vec![window(1, "main.rs — proj")]);

        let result = open_files(&request(&["a.txt"]), &editor, &automation, &config());

        assert_eq!(result.mode, OpenMode::NewWindow);
        assert_eq!(result.reason, OpenReason::NoReusableWindow);
        assert_eq!(editor.opens().len(), 1);
        assert!(!automation.calls().iter().any(|c| c.starts_with("raise")));
    }

    #[test]
    fn test_status_failure_falls_back_to_empty_exclusion_set() {
        let mut editor = FakeEditor::running_with_status("");
        editor.status = Err(());
        let automation = FakeAutomation::with_windows(vec![window(1, "main.rs — proj")]);

        let result = open_files(&request(&["a.txt"]), &editor, &automation, &config());

        // Nothing is known to be a workspace, so the first window is reused
        assert_eq!(result.mode, OpenMode::ReuseWindow);
        assert_eq!(editor.status_queries(), 1);
    }

    #[test]
    fn test_empty_status_and_failed_activation_opens_new_window() {
        let editor = FakeEditor::running_with_status("");
        let automation = FakeAutomation::with_windows(vec![window(1, "a.txt — Code")])
            .raise(1, RaiseOutcome::Malformed);

        let result = open_files(&request(&["a.txt"]), &editor, &automation, &config());

        assert_eq!(result.mode, OpenMode::NewWindow);
        assert_eq!(result.reason, OpenReason::NoReusableWindow);
        assert_eq!(
            editor.opens(),
            vec![(OpenMode::NewWindow, os(&["a.txt"]))]
        );
    }

    #[test]
    fn test_automation_unavailable_opens_new_window() {
        let editor = FakeEditor::running_with_status(STATUS_ONE_WORKSPACE);
        let automation = FakeAutomation::failing_enumeration();

        let result = open_files(&request(&["a.txt", "b.txt"]), &editor, &automation, &config());

        assert_eq!(result.mode, OpenMode::NewWindow);
        assert_eq!(editor.opens().len(), 1);
        assert_eq!(editor.opens()[0].1, vec!["a.txt", "b.txt"]);
    }

    #[test]
    fn test_launch_failure_reported_not_retried() {
        let mut editor = FakeEditor::not_running();
        editor.open_fails = true;
        let automation = FakeAutomation::with_windows(Vec::new());

        let result = open_files(&request(&["a.txt"]), &editor, &automation, &config());

        assert!(!result.launched);
        assert_eq!(editor.opens().len(), 1);
    }

    #[test]
    fn test_check_reusable_reports_without_opening() {
        let editor = FakeEditor::running_with_status(STATUS_ONE_WORKSPACE);
        let automation = FakeAutomation::with_windows(vec![
            window(1, "main.rs — proj"),
            window(2, "notes.md — Code"),
        ]);

        let check = check_reusable(&editor, &automation, &config());

        assert_eq!(
            check,
            ReuseCheck {
                running: true,
                reusable: true,
                window_title: Some("notes.md — Code".to_string()),
            }
        );
        assert!(editor.opens().is_empty());
        assert_eq!(automation.calls(), vec!["list:Code"]);
    }

    #[test]
    fn test_check_reusable_not_running() {
        let editor = FakeEditor::not_running();
        let automation = FakeAutomation::with_windows(Vec::new());

        let check = check_reusable(&editor, &automation, &config());

        assert!(!check.running);
        assert!(!check.reusable);
        assert_eq!(editor.status_queries(), 0);
    }
}
