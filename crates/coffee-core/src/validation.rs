//! # Validation Module
//!
//! Argument checks shared by the catalog constructors and the order engine.
//!
//! ## Where Validation Happens
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Catalog construction (once)        Order taking (per call)             │
//! │  ───────────────────────────        ───────────────────────             │
//! │  validate_name(product/extra)       validate_order_text(line)           │
//! │  validate_price(> 0)                                                    │
//! │  validate_unique_names(products)                                        │
//! │                                                                         │
//! │  Any failure here is a contract violation → CoreError::Validation       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashSet;

use crate::error::ValidationError;
use crate::money::Money;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates that a name is not blank.
///
/// ## Example
/// ```rust
/// use coffee_core::validation::validate_name;
///
/// assert!(validate_name("product name", "small coffee").is_ok());
/// assert!(validate_name("product name", "   ").is_err());
/// ```
pub fn validate_name(field: &str, name: &str) -> ValidationResult<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    Ok(())
}

/// Validates a free-text order line and returns it trimmed and lowercased.
pub fn validate_order_text(text: &str) -> ValidationResult<String> {
    let text = text.trim();

    if text.is_empty() {
        return Err(ValidationError::Required {
            field: "order".to_string(),
        });
    }

    Ok(text.to_lowercase())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a catalog price.
///
/// ## Rules
/// - Must be strictly positive; free items only exist on an order line
pub fn validate_price(field: &str, price: Money) -> ValidationResult<()> {
    if !price.is_positive() {
        return Err(ValidationError::MustBePositive {
            field: field.to_string(),
        });
    }

    Ok(())
}

/// Compares two names the way the desk matches them: case-insensitive,
/// including non-ASCII letters.
pub fn names_match(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

// =============================================================================
// Collection Validators
// =============================================================================

/// Validates that names are unique, ignoring case.
pub fn validate_unique_names<'a, I>(field: &str, names: I) -> ValidationResult<()>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    for name in names {
        if !seen.insert(name.to_lowercase()) {
            return Err(ValidationError::Duplicate {
                field: field.to_string(),
                value: name.to_string(),
            });
        }
    }

    Ok(())
}
