//! Default values for configuration types.
//!
//! File-backed settings are stored as `Option`s; the accessors here resolve
//! them against the built-in defaults.

use crate::config::types::{ActivationConfig, ActivationStrategy, Config, EditorConfig};
use std::path::PathBuf;

pub const DEFAULT_COMMAND: &str = "code";
pub const DEFAULT_APP_NAME: &str = "Code";
pub const DEFAULT_BUNDLE_ID: &str = "com.microsoft.VSCode";
pub const DEFAULT_STATUS_FLAG: &str = "--status";
pub const DEFAULT_NEW_WINDOW_FLAG: &str = "--new-window";
pub const DEFAULT_REUSE_WINDOW_FLAG: &str = "--reuse-window";
pub const DEFAULT_SETTLE_DELAY_MS: u64 = 200;

#[cfg(target_os = "macos")]
pub const DEFAULT_PROCESS_PATTERN: &str = "Visual Studio Code.app";
#[cfg(not(target_os = "macos"))]
pub const DEFAULT_PROCESS_PATTERN: &str = "code";

/// The VS Code welcome page is never worth reusing.
pub fn default_skip_titles() -> Vec<String> {
    vec!["Welcome".to_string()]
}

impl EditorConfig {
    pub fn command(&self) -> &str {
        self.command.as_deref().unwrap_or(DEFAULT_COMMAND)
    }

    pub fn process_pattern(&self) -> &str {
        self.process_pattern
            .as_deref()
            .unwrap_or(DEFAULT_PROCESS_PATTERN)
    }

    pub fn app_name(&self) -> &str {
        self.app_name.as_deref().unwrap_or(DEFAULT_APP_NAME)
    }

    pub fn bundle_id(&self) -> &str {
        self.bundle_id.as_deref().unwrap_or(DEFAULT_BUNDLE_ID)
    }

    pub fn status_flag(&self) -> &str {
        self.status_flag.as_deref().unwrap_or(DEFAULT_STATUS_FLAG)
    }

    pub fn new_window_flag(&self) -> &str {
        self.new_window_flag
            .as_deref()
            .unwrap_or(DEFAULT_NEW_WINDOW_FLAG)
    }

    pub fn reuse_window_flag(&self) -> &str {
        self.reuse_window_flag
            .as_deref()
            .unwrap_or(DEFAULT_REUSE_WINDOW_FLAG)
    }
}

impl ActivationConfig {
    pub fn strategy(&self) -> ActivationStrategy {
        self.strategy.unwrap_or_default()
    }

    pub fn settle_delay_ms(&self) -> u64 {
        self.settle_delay_ms.unwrap_or(DEFAULT_SETTLE_DELAY_MS)
    }

    pub fn use_window_menu(&self) -> bool {
        self.use_window_menu.unwrap_or(true)
    }

    pub fn skip_titles(&self) -> Vec<String> {
        self.skip_titles.clone().unwrap_or_else(default_skip_titles)
    }
}

impl Default for Config {
    fn default() -> Self {
        let codeopen_dir = match dirs::home_dir() {
            Some(home) => home.join(".codeopen"),
            None => {
                eprintln!(
                    "Warning: Could not find home directory. Set HOME environment variable. \
                    Using fallback directory."
                );
                std::env::temp_dir().join(".codeopen")
            }
        };

        Self {
            codeopen_dir,
            log_level: std::env::var("CODEOPEN_LOG_LEVEL").unwrap_or("info".to_string()),
            process_pattern: std::env::var("CODEOPEN_PROCESS_PATTERN")
                .ok()
                .filter(|pattern| !pattern.trim().is_empty()),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user_config_path(&self) -> PathBuf {
        self.codeopen_dir.join("config.toml")
    }
}
