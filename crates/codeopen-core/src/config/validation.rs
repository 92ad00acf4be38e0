//! Configuration validation.

use crate::config::types::CodeOpenConfig;
use crate::errors::ConfigError;

/// Upper bound for the settle delay; anything longer makes the shortcut feel hung.
pub const MAX_SETTLE_DELAY_MS: u64 = 5000;

/// Validate the merged configuration.
pub fn validate_config(config: &CodeOpenConfig) -> Result<(), ConfigError> {
    let editor = &config.editor;

    for (field, value) in [
        ("editor.command", editor.command()),
        ("editor.app_name", editor.app_name()),
        ("editor.process_pattern", editor.process_pattern()),
    ] {
        if value.trim().is_empty() {
            return Err(ConfigError::InvalidConfiguration {
                message: format!("{} must not be empty", field),
            });
        }
    }

    let delay = config.activation.settle_delay_ms();
    if delay > MAX_SETTLE_DELAY_MS {
        return Err(ConfigError::InvalidConfiguration {
            message: format!(
                "activation.settle_delay_ms is {}ms, maximum is {}ms",
                delay, MAX_SETTLE_DELAY_MS
            ),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&CodeOpenConfig::default()).is_ok());
    }

    #[test]
    fn test_empty_command_rejected() {
        let mut config = CodeOpenConfig::default();
        config.editor.command = Some("  ".to_string());

        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("editor.command"));
        assert!(matches!(err, ConfigError::InvalidConfiguration { .. }));
    }

    #[test]
    fn test_excessive_settle_delay_rejected() {
        let mut config = CodeOpenConfig::default();
        config.activation.settle_delay_ms = Some(MAX_SETTLE_DELAY_MS + 1);

        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_max_settle_delay_accepted() {
        let mut config = CodeOpenConfig::default();
        config.activation.settle_delay_ms = Some(MAX_SETTLE_DELAY_MS);

        assert!(validate_config(&config).is_ok());
    }
}
