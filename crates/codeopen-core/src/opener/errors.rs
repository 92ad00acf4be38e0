use crate::errors::CodeOpenError;

#[derive(Debug, thiserror::Error)]
pub enum OpenError {
    #[error("No files to open")]
    NoFiles,
}

impl CodeOpenError for OpenError {
    fn error_code(&self) -> &'static str {
        match self {
            OpenError::NoFiles => "NO_FILES",
        }
    }

    fn is_user_error(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_files() {
        let error = OpenError::NoFiles;
        assert_eq!(error.to_string(), "No files to open");
        assert_eq!(error.error_code(), "NO_FILES");
        assert!(error.is_user_error());
    }
}
