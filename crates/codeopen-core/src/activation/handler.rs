use tracing::{debug, info, warn};

use crate::activation::{matching, types::ActivationSettings};
use crate::automation::{EditorWindow, WindowAutomation};
use crate::config::ActivationStrategy;
use crate::status::StatusReport;

/// Try to bring one reusable editor window to the foreground.
///
/// Never fails: every automation error is logged and collapses to `false`.
pub fn activate_window(
    automation: &dyn WindowAutomation,
    report: &StatusReport,
    settings: &ActivationSettings,
) -> bool {
    info!(
        event = "core.activation.started",
        strategy = %settings.strategy,
        app_name = %settings.app_name,
        records = report.records.len()
    );

    let activated = match settings.strategy {
        ActivationStrategy::ExcludeWorkspaces => activate_excluding(automation, report, settings),
        ActivationStrategy::MatchDocument => activate_matching(automation, report, settings),
    };

    info!(
        event = "core.activation.completed",
        strategy = %settings.strategy,
        activated = activated
    );

    activated
}

/// Find the window [`activate_window`] would try first, without raising it.
pub fn find_reusable_window(
    automation: &dyn WindowAutomation,
    report: &StatusReport,
    settings: &ActivationSettings,
) -> Option<EditorWindow> {
    let windows = list_windows(automation, settings)?;

    match settings.strategy {
        ActivationStrategy::ExcludeWorkspaces => {
            let markers = report.workspace_markers();
            matching::exclusion_candidates(&windows, &markers, &settings.skip_titles)
                .first()
                .map(|window| (*window).clone())
        }
        ActivationStrategy::MatchDocument => {
            let target = report.file_only_target()?;
            matching::find_document_match(&windows, &target).cloned()
        }
    }
}

fn list_windows(
    automation: &dyn WindowAutomation,
    settings: &ActivationSettings,
) -> Option<Vec<EditorWindow>> {
    match automation.list_windows(&settings.app_name) {
        Ok(windows) => {
            debug!(
                event = "core.activation.windows_listed",
                count = windows.len()
            );
            Some(windows)
        }
        Err(e) => {
            warn!(
                event = "core.activation.list_failed",
                app_name = %settings.app_name,
                error = %e
            );
            None
        }
    }
}

fn activate_excluding(
    automation: &dyn WindowAutomation,
    report: &StatusReport,
    settings: &ActivationSettings,
) -> bool {
    let Some(windows) = list_windows(automation, settings) else {
        return false;
    };

    let markers = report.workspace_markers();
    debug!(
        event = "core.activation.markers_resolved",
        markers = ?markers
    );

    let candidates = matching::exclusion_candidates(&windows, &markers, &settings.skip_titles);
    if candidates.is_empty() {
        info!(
            event = "core.activation.no_candidate",
            windows = windows.len(),
            markers = markers.len()
        );
        return false;
    }

    for window in candidates {
        debug!(
            event = "core.activation.candidate_selected",
            index = window.index,
            title = ?window.title
        );

        let target = addressable(&windows, window);
        if !raise(automation, settings, &target) {
            continue;
        }

        if settings.use_window_menu {
            select_in_window_menu(automation, settings, &target);
        }

        return true;
    }

    false
}

fn activate_matching(
    automation: &dyn WindowAutomation,
    report: &StatusReport,
    settings: &ActivationSettings,
) -> bool {
    let Some(target) = report.file_only_target() else {
        info!(
            event = "core.activation.no_target",
            file_only_windows = report.file_only_records().count()
        );
        return false;
    };

    let Some(windows) = list_windows(automation, settings) else {
        return false;
    };

    let Some(window) = matching::find_document_match(&windows, &target) else {
        info!(
            event = "core.activation.no_candidate",
            target = %target.display(),
            windows = windows.len()
        );
        return false;
    };

    debug!(
        event = "core.activation.candidate_selected",
        index = window.index,
        title = ?window.title,
        target = %target.display()
    );

    raise(automation, settings, &addressable(&windows, window))
}

/// The window as the automation layer should address it. A title shared with
/// another window would resolve to the first of them, so those windows are
/// addressed by index instead.
fn addressable(windows: &[EditorWindow], window: &EditorWindow) -> EditorWindow {
    let shared = window.title.is_some()
        && windows
            .iter()
            .any(|other| other.index != window.index && other.title == window.title);

    if shared {
        debug!(
            event = "core.activation.duplicate_title",
            index = window.index,
            title = ?window.title
        );
        EditorWindow::new(window.index, None, window.document.clone())
    } else {
        window.clone()
    }
}

/// Raise one window, then wait for the window manager to settle.
fn raise(
    automation: &dyn WindowAutomation,
    settings: &ActivationSettings,
    window: &EditorWindow,
) -> bool {
    match automation.raise_window(&settings.app_name, window) {
        Ok(true) => {
            info!(
                event = "core.activation.raise_completed",
                index = window.index,
                title = ?window.title
            );
            settle(settings);
            true
        }
        Ok(false) => {
            warn!(
                event = "core.activation.raise_failed",
                index = window.index,
                title = ?window.title,
                error = "automation reported false"
            );
            false
        }
        Err(e) => {
            warn!(
                event = "core.activation.raise_failed",
                index = window.index,
                title = ?window.title,
                error = %e
            );
            false
        }
    }
}

/// Re-select the raised window through the Window menu; a focus race can
/// leave another window key right after `AXRaise`.
fn select_in_window_menu(
    automation: &dyn WindowAutomation,
    settings: &ActivationSettings,
    window: &EditorWindow,
) {
    let Some(title) = window.title.as_deref() else {
        debug!(
            event = "core.activation.menu_skipped",
            index = window.index,
            reason = "untitled window"
        );
        return;
    };

    match automation.select_in_window_menu(&settings.app_name, title) {
        Ok(()) => {
            debug!(event = "core.activation.menu_completed", title = title);
            settle(settings);
        }
        Err(e) => {
            warn!(
                event = "core.activation.menu_failed",
                title = title,
                error = %e
            );
        }
    }
}

fn settle(settings: &ActivationSettings) {
    if !settings.settle_delay.is_zero() {
        std::thread::sleep(settings.settle_delay);
    }
}
