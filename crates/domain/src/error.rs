//! Unified error types for the domain layer
//!
//! Provides a common error type that can be used across all domain operations,
//! enabling consistent error handling without forcing adapters to use String or anyhow.

use thiserror::Error;

use crate::entities::MockupStatus;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// Validation failed (e.g., invalid field values)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Entity not found
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// State transition not allowed
    #[error("Invalid state transition: cannot {action} while {from}")]
    InvalidStateTransition {
        from: MockupStatus,
        action: &'static str,
    },
}

impl DomainError {
    /// Creates a validation error for malformed input.
    ///
    /// # Example
    /// ```ignore
    /// if payload.is_empty() {
    ///     return Err(DomainError::validation("Image payload cannot be empty"));
    /// }
    /// ```
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a not found error
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Create an invalid state transition error
    pub fn invalid_transition(from: MockupStatus, action: &'static str) -> Self {
        Self::InvalidStateTransition { from, action }
    }

    /// Check if this is a NotFound error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transition_error_names_state_and_action() {
        let err = DomainError::invalid_transition(MockupStatus::Queued, "complete");
        assert_eq!(
            err.to_string(),
            "Invalid state transition: cannot complete while queued"
        );
    }

    #[test]
    fn not_found_is_detectable() {
        assert!(DomainError::not_found("Mockup", "abc").is_not_found());
        assert!(!DomainError::validation("bad").is_not_found());
    }
}
