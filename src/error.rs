//! Custom error types for Monthwise
//!
//! This module defines the error hierarchy for the library using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for Monthwise operations
#[derive(Error, Debug)]
pub enum MonthwiseError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Input rejected before any write was attempted
    #[error("Validation error: {0}")]
    Validation(String),

    /// The data layer refused or failed a request
    #[error("API error: {0}")]
    Api(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Malformed user input such as a month or amount string
    #[error("Parse error: {0}")]
    Parse(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl MonthwiseError {
    /// Create a "not found" error for expenses
    pub fn expense_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Expense",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for budgets
    pub fn budget_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Budget",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for budget items
    pub fn budget_item_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Budget item",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this error came from the data layer
    pub fn is_api(&self) -> bool {
        matches!(self, Self::Api(_))
    }
}

impl From<std::io::Error> for MonthwiseError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for MonthwiseError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for Monthwise operations
pub type MonthwiseResult<T> = Result<T, MonthwiseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MonthwiseError::Validation("Please enter a valid amount".into());
        assert_eq!(
            err.to_string(),
            "Validation error: Please enter a valid amount"
        );
        assert!(err.is_validation());
    }

    #[test]
    fn test_not_found_error() {
        let err = MonthwiseError::budget_not_found("2025-01");
        assert_eq!(err.to_string(), "Budget not found: 2025-01");
        assert!(err.is_not_found());
        assert!(!err.is_api());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: MonthwiseError = io_err.into();
        assert!(matches!(err, MonthwiseError::Io(_)));
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<u32>("nope").unwrap_err();
        let err: MonthwiseError = json_err.into();
        assert!(matches!(err, MonthwiseError::Json(_)));
    }
}
