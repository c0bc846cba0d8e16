//! # Error Types
//!
//! Domain-specific error types for shopcart-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  shopcart-core errors (this file)                                      │
//! │  ├── CoreError        - Assembly / configuration failures              │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  checkout-cli errors (app)                                             │
//! │  └── AppError         - What the operator sees                         │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → AppError → stderr                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Degenerate carts (no items, zero quantities) are NOT errors. They price
//! to zero.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core pricing errors.
///
/// Every variant is a programmer or configuration mistake. Nothing here is
/// transient, so nothing here is worth retrying.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A checkout engine was assembled without a shipping calculator.
    ///
    /// ## When This Occurs
    /// - `CheckoutEngine::builder().build()` with no calculator supplied
    ///
    /// Raised at assembly time so no cart is ever priced with an implicit
    /// zero shipping cost.
    #[error("Checkout engine requires a shipping calculator")]
    MissingShippingCalculator,

    /// Validation error (wraps ValidationError).
    ///
    /// ## When This Occurs
    /// - A configured shipping rate is zero or negative
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Callers check these before pricing a cart.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
