//! # Error Types
//!
//! Domain-specific error types for checkout-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  checkout-core errors (this file)                                      │
//! │  ├── CoreError        - Catalog and cart bookkeeping errors            │
//! │  └── ValidationError  - Inventory record validation failures           │
//! │                                                                         │
//! │  checkout-store errors (separate crate)                                │
//! │  └── StoreError       - File, parse and config failures                │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → StoreError                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The pricing engine itself never fails: invalid discounts are filtered out,
//! not reported.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Catalog and cart errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No inventory item carries this name.
    ///
    /// ## When This Occurs
    /// - Scanning a name the catalog does not know
    /// - Removing an item that was never scanned
    #[error("Item not found: {0}")]
    ItemNotFound(String),

    /// Scanning would push a cart line past the per-item limit.
    #[error("Quantity of {item} would exceed maximum allowed ({max})")]
    QuantityTooLarge { item: String, max: u32 },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Inventory record validation errors.
///
/// Raised when items or discounts are added to a catalog at runtime; records
/// loaded from a definition file go through the same checks.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    Negative { field: String },

    /// Invalid format.
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Duplicate value (e.g., two items with the same id).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

impl ValidationError {
    pub fn required(field: impl Into<String>) -> Self {
        ValidationError::Required {
            field: field.into(),
        }
    }

    pub fn duplicate(field: impl Into<String>, value: impl ToString) -> Self {
        ValidationError::Duplicate {
            field: field.into(),
            value: value.to_string(),
        }
    }
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
        let err = CoreError::QuantityTooLarge {
            item: "A".to_string(),
            max: 999,
        };
        assert_eq!(
            err.to_string(),
            "Quantity of A would exceed maximum allowed (999)"
        );
        assert_eq!(
            CoreError::ItemNotFound("D".to_string()).to_string(),
            "Item not found: D"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        assert_eq!(ValidationError::required("name").to_string(), "name is required");
        assert_eq!(
            ValidationError::duplicate("item id", 4).to_string(),
            "item id '4' already exists"
        );
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let core_err: CoreError = ValidationError::required("name").into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
