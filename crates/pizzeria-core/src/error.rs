//! # Error Types
//!
//! Domain-specific error types for pizzeria-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  pizzeria-core errors (this file)                                      │
//! │  ├── CoreError        - Business rule violations (availability, etc.)  │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  pizzeria-db errors (separate crate)                                   │
//! │  └── DbError          - Database operation failures                    │
//! │                                                                         │
//! │  API errors (apps/api)                                                 │
//! │  └── ApiError         - What the HTTP client sees (status + envelope)  │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → HTTP response          │
//! │        DbError ────────────────────► ApiError → HTTP response          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (entity names, field names)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These represent business rule violations discovered while validating
/// the components of an order. The messages are user-facing and name the
/// offending entity or entities.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The referenced pizza base exists but is flagged unavailable.
    ///
    /// ## Error Precedence
    /// Availability is checked base → size → toppings, so when several
    /// components are unavailable at once, this error wins.
    #[error("Selected pizza base is not available")]
    BaseUnavailable,

    /// The referenced pizza size exists but is flagged unavailable.
    #[error("Selected pizza size is not available")]
    SizeUnavailable,

    /// One or more referenced toppings exist but are flagged unavailable.
    /// All offending topping names are reported together, comma-joined.
    #[error("Selected toppings are not available: {}", .names.join(", "))]
    ToppingsUnavailable { names: Vec<String> },

    /// Fewer toppings resolved than were requested.
    ///
    /// ## When This Occurs
    /// - A requested topping id does not exist in the catalog
    /// - The same topping id appears twice in one item (the store lookup
    ///   deduplicates, so the resolved count comes up short)
    #[error("Some selected toppings were not found")]
    ToppingsNotFound,

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when request input doesn't meet requirements.
/// Used for early validation before business logic runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too short.
    #[error("{field} must be at least {min} characters")]
    TooShort { field: String, min: usize },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Collection has fewer entries than required.
    #[error("{field} must contain at least {min} entry")]
    TooFew { field: String, min: usize },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (e.g., malformed email).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            CoreError::BaseUnavailable.to_string(),
            "Selected pizza base is not available"
        );

        let err = CoreError::ToppingsUnavailable {
            names: vec!["Pepperoni".to_string(), "Ham".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "Selected toppings are not available: Pepperoni, Ham"
        );

        assert_eq!(
            CoreError::ToppingsNotFound.to_string(),
            "Some selected toppings were not found"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "customerName".to_string(),
        };
        assert_eq!(err.to_string(), "customerName is required");

        let err = ValidationError::TooLong {
            field: "customerName".to_string(),
            max: 100,
        };
        assert_eq!(err.to_string(), "customerName must be at most 100 characters");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "customerName".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
