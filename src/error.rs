//! Error types for the Attendance Performance Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all conditions that can abort a pipeline invocation. Per-record
//! failures (unparseable clock strings, missing join keys) are absorbed
//! inside the pipeline and never surface here.

use thiserror::Error;

/// The main error type for the Attendance Performance Engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use attendance_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/policy.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/policy.yaml");
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

    /// The policy configuration was structurally invalid.
    #[error("Invalid policy configuration: {message}")]
    InvalidPolicy {
        /// A description of what made the policy invalid.
        message: String,
    },

    /// The upstream record source could not be read.
    ///
    /// This is the only condition allowed to abort a whole pipeline run:
    /// individual malformed records are absorbed locally instead.
    #[error("Record source unavailable: {message}")]
    SourceUnavailable {
        /// A description of the source failure.
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
            path: "/missing/policy.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/policy.yaml"
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
    fn test_invalid_policy_displays_message() {
        let error = EngineError::InvalidPolicy {
            message: "tier thresholds must be strictly ascending".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid policy configuration: tier thresholds must be strictly ascending"
        );
    }

    #[test]
    fn test_source_unavailable_displays_message() {
        let error = EngineError::SourceUnavailable {
            message: "connection refused".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Record source unavailable: connection refused"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_source_unavailable() -> EngineResult<()> {
            Err(EngineError::SourceUnavailable {
                message: "down".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_source_unavailable()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
