//! # Error Types
//!
//! Domain-specific error types for coffee-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  coffee-core errors (this file)                                        │
//! │  ├── CoreError        - Contract violations, broken catalog files      │
//! │  └── ValidationError  - Argument validation failures                   │
//! │                                                                         │
//! │  counter app errors (separate crate)                                   │
//! │  └── AppError         - Config, I/O, wrapped CoreError                 │
//! │                                                                         │
//! │  NOT errors: unknown product / unknown extra. Those are ordinary       │
//! │  business outcomes and come back as an `OrderReply`.                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core order engine errors.
///
/// These are programmer-error class failures: they surface immediately to
/// the caller and are never recovered inside the engine.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A catalog file could not be decoded.
    #[error("Invalid catalog: {reason}")]
    InvalidCatalog { reason: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        CoreError::InvalidCatalog {
            reason: err.to_string(),
        }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Argument validation errors.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required string is missing or blank.
    #[error("{field} is required")]
    Required { field: String },

    /// A price must be strictly positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Duplicate name (e.g. two products called "medium coffee").
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;
