use crate::errors::CodeOpenError;

#[derive(Debug, thiserror::Error)]
pub enum EditorError {
    #[error("Editor launcher '{command}' not found or not executable")]
    LauncherNotFound { command: String },

    #[error("Failed to run editor launcher: {message}")]
    SpawnFailed { message: String },

    #[error("Editor status query failed: {stderr}")]
    StatusFailed { stderr: String },

    #[error("Editor launcher exited with status {code:?}: {stderr}")]
    OpenFailed { code: Option<i32>, stderr: String },
}

impl CodeOpenError for EditorError {
    fn error_code(&self) -> &'static str {
        match self {
            EditorError::LauncherNotFound { .. } => "EDITOR_LAUNCHER_NOT_FOUND",
            EditorError::SpawnFailed { .. } => "EDITOR_SPAWN_FAILED",
            EditorError::StatusFailed { .. } => "EDITOR_STATUS_FAILED",
            EditorError::OpenFailed { .. } => "EDITOR_OPEN_FAILED",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(self, EditorError::LauncherNotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_launcher_not_found() {
        let error = EditorError::LauncherNotFound {
            command: "code".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Editor launcher 'code' not found or not executable"
        );
        assert_eq!(error.error_code(), "EDITOR_LAUNCHER_NOT_FOUND");
        assert!(error.is_user_error());
    }

    #[test]
    fn test_open_failed() {
        let error = EditorError::OpenFailed {
            code: Some(1),
            stderr: "boom".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Editor launcher exited with status Some(1): boom"
        );
        assert_eq!(error.error_code(), "EDITOR_OPEN_FAILED");
        assert!(!error.is_user_error());
    }
}
