//! codeopen-core: open files in an editor, reusing a file-only window
//!
//! The library owns every decision the `codeopen` CLI makes. The editor
//! launcher and the OS window-automation layer are external collaborators,
//! reached through the [`EditorBackend`] and [`WindowAutomation`] traits.
//!
//! # Main Entry Points
//!
//! - [`status`] - Parse the editor's status report into window records
//! - [`activation`] - Raise a reusable editor window
//! - [`opener`] - Run the full decision tree and issue one open call
//! - [`config`] - Configuration management

pub mod activation;
pub mod automation;
pub mod config;
pub mod editor;
pub mod errors;
pub mod escape;
pub mod events;
pub mod logging;
pub mod opener;
pub mod process;
pub mod status;

#[cfg(test)]
mod testing;

// Re-export commonly used types at crate root for convenience
pub use automation::{AppleScriptAutomation, AutomationError, EditorWindow, WindowAutomation};
pub use config::{ActivationStrategy, CodeOpenConfig};
pub use editor::{EditorBackend, EditorError, OpenMode, VSCodeBackend};
pub use opener::OpenError;
pub use opener::types::{OpenReason, OpenRequest, OpenResult, ReuseCheck};
pub use status::{StatusReport, WindowKind, WindowRecord, parse_status_report};

// Re-export handler modules as the primary API
pub use activation::handler as activation_ops;
pub use opener::handler as opener_ops;

// Re-export logging initialization
pub use logging::init_logging;
