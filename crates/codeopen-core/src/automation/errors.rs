use crate::errors::CodeOpenError;

#[derive(Debug, thiserror::Error)]
pub enum AutomationError {
    #[error("Window automation is not supported on this platform")]
    Unsupported,

    #[error("AppleScript execution failed: {message}")]
    ScriptExecution { message: String },

    #[error("AppleScript failed with error: {stderr}")]
    ScriptFailed { stderr: String },

    #[error("Unexpected automation output: '{output}'")]
    MalformedOutput { output: String },
}

impl CodeOpenError for AutomationError {
    fn error_code(&self) -> &'static str {
        match self {
            AutomationError::Unsupported => "AUTOMATION_UNSUPPORTED",
            AutomationError::ScriptExecution { .. } => "APPLESCRIPT_EXECUTION_FAILED",
            AutomationError::ScriptFailed { .. } => "APPLESCRIPT_FAILED",
            AutomationError::MalformedOutput { .. } => "AUTOMATION_MALFORMED_OUTPUT",
        }
    }

    fn is_user_error(&self) -> bool {
        // Usually missing Accessibility/Automation permissions
        matches!(self, AutomationError::ScriptFailed { .. })
    }
}
