// Copyright 2025 Cowboy AI, LLC.

//! Error types for record operations

use thiserror::Error;

/// Errors that can occur while building or combining records
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// A record was assembled with a field left unset
    #[error("Invalid aggregate: field '{field}' is absent")]
    InvalidAggregate {
        /// Name of the first missing field
        field: &'static str,
    },

    /// Adding the integer fields would leave the i64 range
    #[error("Integer overflow adding {left} and {right}")]
    IntegerOverflow {
        /// Left operand
        left: i64,
        /// Right operand
        right: i64,
    },

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Result type for record operations
pub type DomainResult<T> = Result<T, DomainError>;

impl From<serde_json::Error> for DomainError {
    fn from(err: serde_json::Error) -> Self {
        DomainError::SerializationError(err.to_string())
    }
}
