//! OS window automation.
//!
//! Enumerating, raising, and selecting another application's windows goes
//! through the [`WindowAutomation`] trait. The production backend drives
//! System Events via `osascript`, which needs the user to grant Accessibility
//! and Automation permissions; every failure is reported, never panics.

pub mod applescript;
pub mod errors;
pub mod traits;
pub mod types;

pub use applescript::AppleScriptAutomation;
pub use errors::AutomationError;
pub use traits::WindowAutomation;
pub use types::EditorWindow;
