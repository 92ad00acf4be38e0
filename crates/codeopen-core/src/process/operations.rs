use sysinfo::{ProcessRefreshKind, ProcessesToUpdate, System, UpdateKind};
use tracing::debug;

use crate::process::errors::ProcessError;

/// Check whether a process description matches a pattern.
///
/// The pattern is a plain substring looked for in the process name, the
/// executable path, and the joined command line. macOS frequently hides the
/// arguments of other users' processes, so any one of the three is enough.
fn process_matches(name: &str, exe: Option<&str>, cmd_line: &str, pattern: &str) -> bool {
    name.contains(pattern)
        || exe.is_some_and(|exe| exe.contains(pattern))
        || cmd_line.contains(pattern)
}

/// Find the PID of a running process matching `pattern`, ignoring this process.
pub fn find_matching_process(pattern: &str) -> Result<Option<u32>, ProcessError> {
    if pattern.trim().is_empty() {
        return Err(ProcessError::EmptyPattern);
    }

    let mut system = System::new();
    system.refresh_processes_specifics(
        ProcessesToUpdate::All,
        true,
        ProcessRefreshKind::nothing()
            .with_cmd(UpdateKind::OnlyIfNotSet)
            .with_exe(UpdateKind::OnlyIfNotSet),
    );

    let own_pid = sysinfo::get_current_pid().ok();

    for (pid, process) in system.processes() {
        if Some(*pid) == own_pid {
            continue;
        }

        let name = process.name().to_string_lossy();
        let exe = process.exe().map(|p| p.to_string_lossy().to_string());
        let cmd_line = process
            .cmd()
            .iter()
            .map(|s| s.to_string_lossy())
            .collect::<Vec<_>>()
            .join(" ");

        if process_matches(&name, exe.as_deref(), &cmd_line, pattern) {
            debug!(
                event = "core.process.match_found",
                pid = pid.as_u32(),
                name = %name,
                pattern = pattern
            );
            return Ok(Some(pid.as_u32()));
        }
    }

    Ok(None)
}

/// Check if any process other than this one matches `pattern`.
pub fn is_pattern_running(pattern: &str) -> Result<bool, ProcessError> {
    Ok(find_matching_process(pattern)?.is_some())
}
