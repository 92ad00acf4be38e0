//! Configuration loading and merging logic.
//!
//! # Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.codeopen/config.toml`
//! 3. **Project config** - `./.codeopen/config.toml`

use crate::config::types::{ActivationConfig, CodeOpenConfig, Config, EditorConfig};
use crate::config::validation::validate_config;
use crate::errors::ConfigError;
use std::fs;
use std::path::Path;

/// Load configuration from the hierarchy of config files.
///
/// # Errors
///
/// Returns an error if a config file exists but cannot be read or parsed, or
/// if validation fails. Missing config files are not errors.
pub fn load_hierarchy() -> Result<CodeOpenConfig, ConfigError> {
    let mut config = CodeOpenConfig::default();

    if let Some(user_config) = skip_missing(load_user_config())? {
        config = merge_configs(config, user_config);
    }

    if let Some(project_config) = skip_missing(load_project_config())? {
        config = merge_configs(config, project_config);
    }

    validate_config(&config)?;

    Ok(config)
}

/// Treat a missing config file as "nothing to merge".
fn skip_missing(
    result: Result<CodeOpenConfig, ConfigError>,
) -> Result<Option<CodeOpenConfig>, ConfigError> {
    match result {
        Ok(config) => Ok(Some(config)),
        Err(ConfigError::ConfigNotFound { .. }) => Ok(None),
        Err(e) => Err(e),
    }
}

/// Load the user configuration from ~/.codeopen/config.toml.
fn load_user_config() -> Result<CodeOpenConfig, ConfigError> {
    load_config_file(&Config::new().user_config_path())
}

/// Load the project configuration from ./.codeopen/config.toml.
fn load_project_config() -> Result<CodeOpenConfig, ConfigError> {
    let current_dir = std::env::current_dir().map_err(|source| ConfigError::IoError {
        path: ".".to_string(),
        source,
    })?;
    load_config_file(&current_dir.join(".codeopen").join("config.toml"))
}

/// Load a configuration file from the given path.
pub fn load_config_file(path: &Path) -> Result<CodeOpenConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            ConfigError::ConfigNotFound {
                path: path.display().to_string(),
            }
        } else {
            ConfigError::IoError {
                path: path.display().to_string(),
                source,
            }
        }
    })?;

    toml::from_str(&content).map_err(|e| ConfigError::ConfigParseError {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

/// Merge two configurations, with override_config taking precedence.
///
/// Override values replace base values only where present.
pub fn merge_configs(base: CodeOpenConfig, override_config: CodeOpenConfig) -> CodeOpenConfig {
    let editor = override_config.editor;
    let activation = override_config.activation;

    CodeOpenConfig {
        editor: EditorConfig {
            command: editor.command.or(base.editor.command),
            process_pattern: editor.process_pattern.or(base.editor.process_pattern),
            app_name: editor.app_name.or(base.editor.app_name),
            bundle_id: editor.bundle_id.or(base.editor.bundle_id),
            status_flag: editor.status_flag.or(base.editor.status_flag),
            new_window_flag: editor.new_window_flag.or(base.editor.new_window_flag),
            reuse_window_flag: editor.reuse_window_flag.or(base.editor.reuse_window_flag),
        },
        activation: ActivationConfig {
            strategy: activation.strategy.or(base.activation.strategy),
            settle_delay_ms: activation.settle_delay_ms.or(base.activation.settle_delay_ms),
            use_window_menu: activation.use_window_menu.or(base.activation.use_window_menu),
            skip_titles: activation.skip_titles.or(base.activation.skip_titles),
        },
    }
}
