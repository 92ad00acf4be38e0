//! # Configuration System
//!
//! Hierarchical TOML configuration for codeopen.
//!
//! ## Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.codeopen/config.toml` (global user preferences)
//! 3. **Project config** - `./.codeopen/config.toml` (directory-specific overrides)
//!
//! ## Usage Example
//!
//! ```toml
//! # ~/.codeopen/config.toml
//! [editor]
//! command = "code-insiders"
//! app_name = "Code - Insiders"
//! bundle_id = "com.microsoft.VSCodeInsiders"
//! process_pattern = "Visual Studio Code - Insiders.app"
//!
//! [activation]
//! strategy = "match-document"
//! settle_delay_ms = 300
//! ```
//!
//! ## Loading Configuration
//!
//! ```rust,no_run
//! use codeopen_core::config::CodeOpenConfig;
//!
//! fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = CodeOpenConfig::load_hierarchy()?;
//!     let launcher = config.editor.command();
//!     Ok(())
//! }
//! ```

pub mod defaults;
pub mod loading;
pub mod types;
pub mod validation;

// Public API exports
pub use types::{ActivationConfig, ActivationStrategy, CodeOpenConfig, Config, EditorConfig};
pub use validation::validate_config;

impl CodeOpenConfig {
    /// Load configuration from the hierarchy of config files.
    ///
    /// See [`loading::load_hierarchy`] for details.
    pub fn load_hierarchy() -> Result<Self, crate::errors::ConfigError> {
        loading::load_hierarchy()
    }

    /// Apply environment overrides from the runtime [`Config`].
    ///
    /// Applied after loading, so they hold even when the files were unusable
    /// and defaults are in effect.
    pub fn with_runtime_overrides(mut self, runtime: &Config) -> Self {
        if let Some(pattern) = &runtime.process_pattern {
            self.editor.process_pattern = Some(pattern.clone());
        }
        self
    }

    /// Validate the configuration.
    ///
    /// See [`validation::validate_config`] for details.
    pub fn validate(&self) -> Result<(), crate::errors::ConfigError> {
        validation::validate_config(self)
    }
}
