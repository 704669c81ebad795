//! # Error Types
//!
//! Domain-specific error types for quote-core.
//!
//! ## Where Errors Can Happen
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Surface                                   │
//! │                                                                         │
//! │  SelectionState::update      → never fails (inputs degrade to 0/false) │
//! │  compute_breakdown           → never fails (unknown tier prices as 0)  │
//! │                                                                         │
//! │  PriceTable construction     → CoreError / ValidationError             │
//! │  (config files, env vars)      negative prices, unknown tiers,         │
//! │                                unparseable amounts                      │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError (adapter) → Presenter    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field, key, etc.)
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core pricing errors.
///
/// Only price table construction can produce these. The user-facing update
/// path has no error conditions at all.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A package key in a price table does not name a known tier.
    #[error("Unknown package tier: {0}")]
    UnknownPackageTier(String),

    /// A price in the table is negative.
    #[error("Invalid price for {field}: {cents} cents")]
    InvalidPrice { field: String, cents: i64 },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors for configuration values.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (e.g., "1.005" for a price).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Value is not in allowed set.
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },
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
        let err = CoreError::UnknownPackageTier("deluxe".to_string());
        assert_eq!(err.to_string(), "Unknown package tier: deluxe");

        let err = CoreError::InvalidPrice {
            field: "terminal_fee".to_string(),
            cents: -100,
        };
        assert_eq!(err.to_string(), "Invalid price for terminal_fee: -100 cents");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "price".to_string(),
        };
        assert_eq!(err.to_string(), "price is required");

        let err = ValidationError::NotAllowed {
            field: "field".to_string(),
            allowed: vec!["products".to_string(), "orders".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "field must be one of: [\"products\", \"orders\"]"
        );
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "price".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
