use crate::errors::CodeOpenError;

#[derive(Debug, thiserror::Error)]
pub enum ProcessError {
    #[error("Process pattern is empty")]
    EmptyPattern,
}

impl CodeOpenError for ProcessError {
    fn error_code(&self) -> &'static str {
        match self {
            ProcessError::EmptyPattern => "PROCESS_EMPTY_PATTERN",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(self, ProcessError::EmptyPattern)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_pattern_error() {
        let error = ProcessError::EmptyPattern;
        assert_eq!(error.to_string(), "Process pattern is empty");
        assert_eq!(error.error_code(), "PROCESS_EMPTY_PATTERN");
        assert!(error.is_user_error());
    }
}
