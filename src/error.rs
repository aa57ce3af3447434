//! Unified error hierarchy for liftrs
//!
//! Provides structured error information with the offending value preserved
//! in the error payload, and integration with the tracing system.

use thiserror::Error;

/// Top-level error type for all liftrs operations
#[derive(Debug, Error)]
pub enum LiftrsError {
    /// Row-level parsing errors
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    /// Exercise-name classification errors
    #[error("Classification error: {0}")]
    Classification(#[from] ClassificationError),

    /// Derived-statistics errors
    #[error("Calculation error: {0}")]
    Calculation(#[from] CalculationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Row-level parsing errors
///
/// Any of these aborts the entire load; there is no skip-and-continue for
/// malformed rows.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Date field does not match the export's date shape
    #[error("Malformed date: {value}")]
    MalformedDate { value: String },

    /// Numeric field failed to parse
    #[error("Invalid {field} value: {value}")]
    InvalidNumber { field: &'static str, value: String },

    /// Row has fewer fields than the export format defines
    #[error("Row {row} has {count} fields, expected at least 6")]
    ShortRow { row: usize, count: usize },

    /// Underlying CSV reader error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// An exercise name matched no keyword by substring and scored below the
/// similarity threshold against every keyword.
#[derive(Debug, Error)]
#[error("No matching muscle for: {name}")]
pub struct ClassificationError {
    /// The unmatched exercise name
    pub name: String,
}

/// Derived-statistics errors
#[derive(Debug, Error)]
pub enum CalculationError {
    /// Weight statistics are undefined for an exercise without sets
    #[error("Exercise '{name}' has no sets")]
    EmptySets { name: String },
}

/// Result type alias for liftrs operations
pub type Result<T> = std::result::Result<T, LiftrsError>;

impl LiftrsError {
    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            LiftrsError::Parse(_) => ErrorSeverity::Error,
            LiftrsError::Classification(_) => ErrorSeverity::Warning,
            LiftrsError::Calculation(_) => ErrorSeverity::Error,
            LiftrsError::Io(_) => ErrorSeverity::Error,
            LiftrsError::Configuration(_) => ErrorSeverity::Error,
        }
    }

    /// Get user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            LiftrsError::Parse(ParseError::MalformedDate { value }) => {
                format!("Could not read the workout date: {}", value)
            }
            LiftrsError::Parse(ParseError::InvalidNumber { field, value }) => {
                format!("The {} column contains a non-numeric value: {}", field, value)
            }
            LiftrsError::Classification(ClassificationError { name }) => {
                format!("Unknown exercise: {}", name)
            }
            _ => self.to_string(),
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Error that prevents operation but system can continue
    Error,
    /// Warning that doesn't prevent operation
    Warning,
}

impl ErrorSeverity {
    /// Convert to tracing level
    pub fn to_tracing_level(&self) -> tracing::Level {
        match self {
            ErrorSeverity::Error => tracing::Level::ERROR,
            ErrorSeverity::Warning => tracing::Level::WARN,
        }
    }
}
