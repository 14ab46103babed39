//! Error types for meshprim

use thiserror::Error;

/// meshprim error types
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid parameter provided
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// File save error
    #[error("File save error: {0}")]
    FileSave(String),
}

/// Result type alias for meshprim operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidParameter("test".to_string());
        assert_eq!(err.to_string(), "Invalid parameter: test");
    }
}
