//! Error types for the quote engine.
//!
//! The breakdown engine itself is total and never fails. These errors belong
//! to the collaborators around it: configuration loading, the quote store and
//! the submission gate.

use thiserror::Error;

/// The main error type for the quote engine.
///
/// # Example
///
/// ```
/// use quote_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/company.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/company.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A quote was submitted before every required field was filled in.
    #[error("Quote is incomplete, missing: {}", missing_fields.join(", "))]
    IncompleteQuote {
        /// The required fields that were empty.
        missing_fields: Vec<String>,
    },

    /// No stored quote has the given id.
    #[error("Quote not found: {id}")]
    QuoteNotFound {
        /// The id that was looked up.
        id: String,
    },

    /// A quote id could not be parsed.
    #[error("Invalid quote id: {id}")]
    InvalidQuoteId {
        /// The raw id as received.
        id: String,
    },

    /// The quote store failed.
    #[error("Storage error: {message}")]
    StorageError {
        /// A description of the failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/company.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/company.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_incomplete_quote_lists_fields() {
        let error = EngineError::IncompleteQuote {
            missing_fields: vec!["customer_name".to_string(), "dthc".to_string()],
        };
        assert_eq!(
            error.to_string(),
            "Quote is incomplete, missing: customer_name, dthc"
        );
    }

    #[test]
    fn test_quote_not_found_displays_id() {
        let error = EngineError::QuoteNotFound {
            id: "7f1c".to_string(),
        };
        assert_eq!(error.to_string(), "Quote not found: 7f1c");
    }

    #[test]
    fn test_invalid_quote_id_displays_id() {
        let error = EngineError::InvalidQuoteId {
            id: "not-a-uuid".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid quote id: not-a-uuid");
    }

    #[test]
    fn test_storage_error_displays_message() {
        let error = EngineError::StorageError {
            message: "lock poisoned".to_string(),
        };
        assert_eq!(error.to_string(), "Storage error: lock poisoned");
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_not_found() -> EngineResult<()> {
            Err(EngineError::QuoteNotFound {
                id: "missing".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
