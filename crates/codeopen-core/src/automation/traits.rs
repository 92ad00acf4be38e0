//! Window automation trait definition.

use crate::automation::{errors::AutomationError, types::EditorWindow};

/// Capabilities codeopen needs from the OS window-automation layer.
pub trait WindowAutomation: Send + Sync {
    /// Enumerate the windows of the running application `app_name`.
    ///
    /// Returns an empty list when the application is not running.
    fn list_windows(&self, app_name: &str) -> Result<Vec<EditorWindow>, AutomationError>;

    /// Raise `window` and make its application frontmost.
    ///
    /// # Returns
    /// * `Ok(true)` - The window was raised
    /// * `Ok(false)` - The automation layer reported that it could not raise it
    /// * `Err(AutomationError)` - The call itself failed or returned garbage
    fn raise_window(
        &self,
        app_name: &str,
        window: &EditorWindow,
    ) -> Result<bool, AutomationError>;

    /// Select the window titled `title` through the application's Window menu.
    fn select_in_window_menu(&self, app_name: &str, title: &str) -> Result<(), AutomationError>;

    /// Bring the application with `bundle_id` to the foreground.
    fn activate_app(&self, bundle_id: &str) -> Result<(), AutomationError>;
}
