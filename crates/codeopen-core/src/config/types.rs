//! Configuration type definitions for codeopen.
//!
//! These types are deserialized from TOML config files. Every file-backed
//! field is optional so that a project config can override a single value of
//! the user config; accessor methods supply the defaults.
//!
//! # Example Configuration
//!
//! ```toml
//! [editor]
//! command = "code"
//! app_name = "Code"
//!
//! [activation]
//! strategy = "exclude-workspaces"
//! settle_delay_ms = 200
//! use_window_menu = true
//! skip_titles = ["Welcome"]
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Runtime configuration derived from environment variables and system
/// defaults, not from config files.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base directory for codeopen user data (default: ~/.codeopen)
    pub codeopen_dir: PathBuf,
    /// Log level for the application
    pub log_level: String,
    /// Editor process pattern from `CODEOPEN_PROCESS_PATTERN`, overriding config files
    pub process_pattern: Option<String>,
}

/// Main configuration loaded from TOML config files.
///
/// Loaded from:
/// 1. User config: `~/.codeopen/config.toml`
/// 2. Project config: `./.codeopen/config.toml`
///
/// Project config values override user config values.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CodeOpenConfig {
    /// Editor launcher and process identification
    #[serde(default)]
    pub editor: EditorConfig,

    /// Window activation behavior
    #[serde(default)]
    pub activation: ActivationConfig,
}

/// Editor configuration.
///
/// Describes how to find, query, and launch the editor.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct EditorConfig {
    /// Launcher command. Default: `code`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,

    /// Substring looked for in process command lines to decide whether the
    /// editor is running. Default: `Visual Studio Code.app` on macOS, `code`
    /// elsewhere.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub process_pattern: Option<String>,

    /// Process name as seen by the automation layer. Default: `Code`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_name: Option<String>,

    /// Application bundle identifier. Default: `com.microsoft.VSCode`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bundle_id: Option<String>,

    /// Launcher flag that prints the window status report.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_flag: Option<String>,

    /// Launcher flag that forces a new window.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_window_flag: Option<String>,

    /// Launcher flag that reuses the active window.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reuse_window_flag: Option<String>,
}

/// How the activator chooses the window to raise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ActivationStrategy {
    /// Raise the first window whose title matches no workspace marker.
    #[default]
    ExcludeWorkspaces,
    /// Raise the window showing the single file-only document from the
    /// status report.
    MatchDocument,
}

/// Window activation configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ActivationConfig {
    /// Candidate selection policy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strategy: Option<ActivationStrategy>,

    /// Wait after each raise or menu selection so the window manager can
    /// settle focus. Default: 200ms.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settle_delay_ms: Option<u64>,

    /// Also select the raised window through the application's Window menu.
    /// Default: true.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_window_menu: Option<bool>,

    /// Window titles that are never reused. Default: `["Welcome"]`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skip_titles: Option<Vec<String>>,
}

impl std::fmt::Display for ActivationStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActivationStrategy::ExcludeWorkspaces => write!(f, "exclude-workspaces"),
            ActivationStrategy::MatchDocument => write!(f, "match-document"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codeopen_config_serialization() {
        let config = CodeOpenConfig::default();
        let toml_str = toml::to_string(&config).unwrap();
        let parsed: CodeOpenConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(config.editor.command, parsed.editor.command);
        assert_eq!(config.activation.strategy, parsed.activation.strategy);
    }

    #[test]
    fn test_strategy_kebab_case() {
        let toml_str = r#"
[activation]
strategy = "match-document"
"#;
        let config: CodeOpenConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(
            config.activation.strategy,
            Some(ActivationStrategy::MatchDocument)
        );
    }

    #[test]
    fn test_unknown_strategy_rejected() {
        let toml_str = r#"
[activation]
strategy = "best-guess"
"#;
        assert!(toml::from_str::<CodeOpenConfig>(toml_str).is_err());
    }

    #[test]
    fn test_strategy_display() {
        assert_eq!(
            ActivationStrategy::ExcludeWorkspaces.to_string(),
            "exclude-workspaces"
        );
        assert_eq!(ActivationStrategy::MatchDocument.to_string(), "match-document");
    }
}
