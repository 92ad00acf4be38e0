use std::ffi::OsString;
use std::process::Command;

use tracing::{debug, error, info, warn};

use crate::config::EditorConfig;
use crate::editor::{errors::EditorError, traits::EditorBackend, types::OpenMode};
use crate::process;

/// VS Code (or a fork with the same launcher flags) driven through its CLI.
#[derive(Debug, Clone)]
pub struct VSCodeBackend {
    command: String,
    process_pattern: String,
    status_flag: String,
    new_window_flag: String,
    reuse_window_flag: String,
}

impl VSCodeBackend {
    pub fn from_config(config: &EditorConfig) -> Self {
        Self {
            command: config.command().to_string(),
            process_pattern: config.process_pattern().to_string(),
            status_flag: config.status_flag().to_string(),
            new_window_flag: config.new_window_flag().to_string(),
            reuse_window_flag: config.reuse_window_flag().to_string(),
        }
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    /// Launcher arguments for an open call: the mode flag, then the files untouched.
    pub fn open_args(&self, mode: OpenMode, files: &[OsString]) -> Vec<OsString> {
        let flag = match mode {
            OpenMode::NewWindow => &self.new_window_flag,
            OpenMode::ReuseWindow => &self.reuse_window_flag,
        };

        std::iter::once(OsString::from(flag))
            .chain(files.iter().cloned())
            .collect()
    }

    fn spawn_error(&self, e: std::io::Error) -> EditorError {
        if e.kind() == std::io::ErrorKind::NotFound {
            EditorError::LauncherNotFound {
                command: self.command.clone(),
            }
        } else {
            EditorError::SpawnFailed {
                message: format!("{}: {}", self.command, e),
            }
        }
    }
}

impl Default for VSCodeBackend {
    fn default() -> Self {
        Self::from_config(&EditorConfig::default())
    }
}

impl EditorBackend for VSCodeBackend {
    fn display_name(&self) -> &'static str {
        "VS Code"
    }

    fn is_available(&self) -> bool {
        which::which(&self.command).is_ok()
    }

    fn is_running(&self) -> bool {
        match process::is_pattern_running(&self.process_pattern) {
            Ok(running) => {
                debug!(
                    event = "core.editor.running_checked",
                    pattern = %self.process_pattern,
                    running = running
                );
                running
            }
            Err(e) => {
                warn!(
                    event = "core.editor.running_check_failed",
                    pattern = %self.process_pattern,
                    error = %e
                );
                false
            }
        }
    }

    fn query_status(&self) -> Result<String, EditorError> {
        debug!(
            event = "core.editor.status_started",
            command = %self.command,
            flag = %self.status_flag
        );

        let output = Command::new(&self.command)
            .arg(&self.status_flag)
            .output()
            .map_err(|e| self.spawn_error(e))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(EditorError::StatusFailed {
                stderr: stderr.trim().to_string(),
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout).to_string();

        debug!(
            event = "core.editor.status_completed",
            bytes = stdout.len()
        );

        Ok(stdout)
    }

    fn open(&self, mode: OpenMode, files: &[OsString]) -> Result<(), EditorError> {
        let args = self.open_args(mode, files);

        info!(
            event = "core.editor.open_started",
            command = %self.command,
            mode = %mode,
            args = ?args
        );

        let output = Command::new(&self.command)
            .args(&args)
            .output()
            .map_err(|e| self.spawn_error(e))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            error!(
                event = "core.editor.open_failed",
                command = %self.command,
                mode = %mode,
                code = ?output.status.code(),
                stderr = %stderr.trim()
            );
            return Err(EditorError::OpenFailed {
                code: output.status.code(),
                stderr: stderr.trim().to_string(),
            });
        }

        info!(
            event = "core.editor.open_completed",
            command = %self.command,
            mode = %mode
        );

        Ok(())
    }
}
