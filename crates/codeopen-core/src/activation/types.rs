use std::time::Duration;

use crate::config::{ActivationStrategy, CodeOpenConfig};

/// Everything the activator needs, resolved from config.
#[derive(Debug, Clone)]
pub struct ActivationSettings {
    pub app_name: String,
    pub strategy: ActivationStrategy,
    pub settle_delay: Duration,
    pub use_window_menu: bool,
    pub skip_titles: Vec<String>,
}

impl ActivationSettings {
    pub fn from_config(config: &CodeOpenConfig) -> Self {
        Self {
            app_name: config.editor.app_name().to_string(),
            strategy: config.activation.strategy(),
            settle_delay: Duration::from_millis(config.activation.settle_delay_ms()),
            use_window_menu: config.activation.use_window_menu(),
            skip_titles: config.activation.skip_titles(),
        }
    }
}
