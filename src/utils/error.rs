//! Error handling for host-boundary operations
//!
//! The expander core never errors: unmet trigger conditions are `None` and a
//! failed scan is an empty table. Errors exist only at the outer boundary,
//! where files and settings objects come from the user (CLI, settings load).

use std::fmt;

/// Boundary error type
#[derive(Debug, Clone)]
pub enum ExpanderError {
    /// IO error (for file operations)
    IoError { message: String },
    /// Settings object could not be parsed
    ConfigError { message: String },
    /// Invalid input (bad offset argument, unreadable document)
    InvalidInput { message: String },
}

impl fmt::Display for ExpanderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpanderError::IoError { message } => write!(f, "IO error: {}", message),
            ExpanderError::ConfigError { message } => {
                write!(f, "Settings error: {}", message)
            }
            ExpanderError::InvalidInput { message } => {
                write!(f, "Invalid input: {}", message)
            }
        }
    }
}

impl std::error::Error for ExpanderError {}

impl From<std::io::Error> for ExpanderError {
    fn from(err: std::io::Error) -> Self {
        ExpanderError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type for boundary operations
pub type ExpanderResult<T> = Result<T, ExpanderError>;

// Convenience constructors
impl ExpanderError {
    pub fn config(message: impl Into<String>) -> Self {
        ExpanderError::ConfigError {
            message: message.into(),
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        ExpanderError::InvalidInput {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ExpanderError::config("unexpected key");
        assert!(err.to_string().contains("Settings error"));
        assert!(err.to_string().contains("unexpected key"));
    }

    #[test]
    fn test_io_error_from() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.md");
        let err = ExpanderError::from(io);
        assert!(err.to_string().contains("IO error"));
    }
}
