//! Error types for the portfolio site

use thiserror::Error;

use crate::typing::TypingError;

/// Main error type for loading and validating portfolio content
#[derive(Error, Debug)]
pub enum PortfolioError {
    /// Content override file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Content did not match the expected schema
    #[error("Content format error: {0}")]
    Json(#[from] serde_json::Error),

    /// Two entries of one collection share an identifier
    #[error("Duplicate {collection} id: {id}")]
    DuplicateId {
        collection: &'static str,
        id: String,
    },

    /// Two skills share a name
    #[error("Duplicate skill: {0}")]
    DuplicateSkill(String),

    /// A collection that must have at least one entry is empty
    #[error("Collection must not be empty: {0}")]
    EmptyCollection(&'static str),

    /// Typing effect could not be configured
    #[error("Typing effect error: {0}")]
    Typing(#[from] TypingError),
}

/// Result type alias using PortfolioError
pub type PortfolioResult<T> = Result<T, PortfolioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PortfolioError::DuplicateId {
            collection: "project",
            id: "flight-booking".to_string(),
        };
        assert_eq!(format!("{}", err), "Duplicate project id: flight-booking");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: PortfolioError = io_err.into();
        assert!(matches!(err, PortfolioError::Io(_)));
    }

    #[test]
    fn test_error_from_typing() {
        let err: PortfolioError = TypingError::NoPhrases.into();
        assert_eq!(
            format!("{}", err),
            "Typing effect error: at least one phrase is required"
        );
    }
}
