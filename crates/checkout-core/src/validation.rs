//! # Validation Module
//!
//! Input validation for inventory records and scan lists.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Deserialization (serde)                                      │
//! │  ├── Types and enum tags ("batch", "percentage")                       │
//! │  └── Missing discount fields fall back to an inert rule                │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Names present, costs and amounts non-negative                     │
//! │  └── No duplicate item ids, item names or discount names               │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Discount::is_valid                                           │
//! │  └── Decides whether a well-formed rule takes part in pricing          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use checkout_core::validation::{parse_scan_list, validate_item_name};
//!
//! assert!(validate_item_name("A").is_ok());
//! assert_eq!(parse_scan_list("A, A, B"), vec!["A", "A", "B"]);
//! ```

use rust_decimal::Decimal;

use crate::discount::Discount;
use crate::error::ValidationError;
use crate::money::Money;
use crate::types::InventoryItem;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest accepted item or discount name.
pub const MAX_NAME_LENGTH: usize = 200;

// =============================================================================
// String Validators
// =============================================================================

/// Validates an item name.
///
/// ## Rules
/// - Must not be empty
/// - No leading or trailing whitespace (scan lists are trimmed)
/// - At most 200 characters
/// - Must not contain a comma (commas separate names in a scan list)
pub fn validate_item_name(name: &str) -> ValidationResult<()> {
    let trimmed = name.trim();

    if trimmed.is_empty() {
        return Err(ValidationError::required("name"));
    }

    if trimmed.len() != name.len() {
        return Err(ValidationError::InvalidFormat {
            field: "name".to_string(),
            reason: "must not start or end with whitespace".to_string(),
        });
    }

    if name.len() > MAX_NAME_LENGTH {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_NAME_LENGTH,
        });
    }

    if name.contains(',') {
        return Err(ValidationError::InvalidFormat {
            field: "name".to_string(),
            reason: "must not contain commas".to_string(),
        });
    }

    Ok(())
}

/// Validates a discount name.
///
/// ## Rules
/// - Must not be empty
/// - At most 200 characters
/// - Only letters, numbers, hyphens and underscores (names are file keys)
///
/// ## Example
/// ```rust
/// use checkout_core::validation::validate_discount_name;
///
/// assert!(validate_discount_name("batch_discount_on_a").is_ok());
/// assert!(validate_discount_name("has space").is_err());
/// ```
pub fn validate_discount_name(name: &str) -> ValidationResult<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::required("discount name"));
    }

    if name.len() > MAX_NAME_LENGTH {
        return Err(ValidationError::TooLong {
            field: "discount name".to_string(),
            max: MAX_NAME_LENGTH,
        });
    }

    if !name
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ValidationError::InvalidFormat {
            field: "discount name".to_string(),
            reason: "must contain only letters, numbers, hyphens, and underscores".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a price. Zero is allowed (free items).
pub fn validate_money(field: &str, amount: Money) -> ValidationResult<()> {
    if amount.is_negative() {
        return Err(ValidationError::Negative {
            field: field.to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Record Validators
// =============================================================================

/// Validates an item about to join `existing`.
pub fn validate_item(item: &InventoryItem, existing: &[InventoryItem]) -> ValidationResult<()> {
    validate_item_name(&item.name)?;
    validate_money("cost", item.cost)?;

    if existing.iter().any(|other| other.id == item.id) {
        return Err(ValidationError::duplicate("item id", item.id));
    }

    if existing.iter().any(|other| other.name == item.name) {
        return Err(ValidationError::duplicate("item name", &item.name));
    }

    Ok(())
}

/// Validates a discount about to join `existing`.
///
/// Only shape is checked here. Whether the rule is usable for pricing is
/// [`Discount::is_valid`]'s call, so an unusable rule can still be stored.
pub fn validate_discount(discount: &Discount, existing: &[Discount]) -> ValidationResult<()> {
    validate_discount_name(&discount.name)?;

    if discount.deductible_amount < Decimal::ZERO {
        return Err(ValidationError::Negative {
            field: "deductible_amount".to_string(),
        });
    }

    if let Some(fixed) = discount.fixed_amount_total {
        validate_money("fixed_amount_total", fixed)?;
    }

    if let Some(bias) = discount.gt_bias {
        validate_money("gt_bias", bias)?;
    }

    if existing.iter().any(|other| other.name == discount.name) {
        return Err(ValidationError::duplicate("discount name", &discount.name));
    }

    Ok(())
}

// =============================================================================
// Scan Lists
// =============================================================================

/// Splits a comma-separated scan list into item names.
///
/// Whitespace around names is trimmed and empty tokens are skipped, so
/// `"A, A,B ,"` yields `["A", "A", "B"]`.
pub fn parse_scan_list(list: &str) -> Vec<&str> {
    list.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================
