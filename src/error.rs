//! Custom error types for Budget Buddy
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions. A missing month is *not* an error anywhere
//! in this hierarchy: stores report absence as `None`.

use std::path::PathBuf;

use thiserror::Error;

/// The main error type for Budget Buddy operations
#[derive(Error, Debug)]
pub enum BuddyError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Storage medium could not be read or written
    #[error("I/O error: {0}")]
    Io(String),

    /// A stored month exists but is not a usable JSON object
    #[error("Corrupt data in {}: {message}", .path.display())]
    Corrupt { path: PathBuf, message: String },

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for user edits
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Storage errors that are neither I/O nor corruption (lock poisoning etc.)
    #[error("Storage error: {0}")]
    Storage(String),
}

impl BuddyError {
    /// Create a "not found" error for a line item
    pub fn item_not_found(category: &str, identifier: impl Into<String>) -> Self {
        let entity_type = match category {
            "Income" => "Income item",
            "Bills" => "Bill",
            "Expenses" => "Expense",
            _ => "Savings item",
        };
        Self::NotFound {
            entity_type,
            identifier: identifier.into(),
        }
    }

    /// Create a corruption error for a stored file
    pub fn corrupt(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Corrupt {
            path: path.into(),
            message: message.into(),
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

    /// Check if this error means stored data could not be trusted
    pub fn is_corrupt(&self) -> bool {
        matches!(self, Self::Corrupt { .. })
    }
}

impl From<std::io::Error> for BuddyError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for BuddyError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for BuddyError {
    fn from(err: csv::Error) -> Self {
        Self::Export(err.to_string())
    }
}

/// Result type alias for Budget Buddy operations
pub type BuddyResult<T> = Result<T, BuddyError>;
