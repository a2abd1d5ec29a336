//! Common error types used across the workspace.

/// Raised when user-supplied run parameters violate domain invariants.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A required form field was left blank.
    #[error("{field} is required")]
    MissingField { field: &'static str },

    /// A field did not hold a whole, non-negative number.
    #[error("{field} must be a whole number, got {value:?}")]
    InvalidNumber { field: &'static str, value: String },

    /// A field that counts something was zero.
    #[error("{field} must be greater than zero")]
    NotPositive { field: &'static str },
}
