//! # Discount Rules
//!
//! A [`Discount`] is one pricing rule from the inventory definition. It is
//! plain data plus classification predicates; the pricing engine in
//! [`crate::pricing`] decides what to do with each class.
//!
//! ## Classification
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Discount Classes                                   │
//! │                                                                         │
//! │  global = true ──────────────────────────► GLOBAL                      │
//! │    applies to the cart total, gated by gt_bias                         │
//! │    valid iff usable AND deductible_amount > 0                          │
//! │                                                                         │
//! │  global = false, context = Batch ────────► BATCH                       │
//! │    one deduction per group of N units                                  │
//! │    valid iff usable AND applicable_item_count > 1                      │
//! │                                                                         │
//! │  global = false, context = Single ───────► SINGLE                      │
//! │    per-unit deduction on whatever batches left over                    │
//! │    valid iff usable AND applicable_item_count == 1                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Invalid discounts are never applied. A missing field in an inventory file
//! deserializes to an inert default (`usable = false`), so malformed rules are
//! filtered out instead of failing the load.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::types::{InventoryItem, ItemId};

/// Prefix of every synthesized base discount name.
pub const BASE_DISCOUNT_PREFIX: &str = "base_discount_on_";

// =============================================================================
// Closed Enumerations
// =============================================================================

/// How `deductible_amount` is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeductibleType {
    /// Flat amount off, independent of the price.
    #[default]
    Unit,
    /// `deductible_amount` percent of the price.
    Percentage,
}

/// Which part of a cart entry a non-global discount prices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationContext {
    /// Groups of `applicable_item_count` units.
    Batch,
    /// Each unit left after batch pricing.
    #[default]
    Single,
}

// =============================================================================
// Discount
// =============================================================================

/// One discount rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Discount {
    /// Unique rule name; recorded in audit trails when applied.
    pub name: String,

    /// Applies to the cart total instead of a single item.
    pub global: bool,

    pub deductible_type: DeductibleType,

    /// Flat amount or percentage, per `deductible_type`.
    pub deductible_amount: Decimal,

    /// Price of a whole batch; overrides the deduction for batch pricing.
    pub fixed_amount_total: Option<Money>,

    /// Ignored for global discounts.
    #[serde(alias = "applicable_context")]
    pub application_context: ApplicationContext,

    /// Batch size. Always 1 for single discounts.
    pub applicable_item_count: u32,

    /// Ignored for global discounts.
    pub applicable_item_id: Option<ItemId>,

    pub usable: bool,

    /// Lower values are applied first. Any decimal, so `1.5` slots between
    /// rules at 1 and 2.
    pub priority: Decimal,

    /// Minimum running total before a global discount activates.
    pub gt_bias: Option<Money>,
}

impl Default for Discount {
    /// An inert rule: unusable until a definition says otherwise.
    fn default() -> Self {
        Discount {
            name: String::new(),
            global: false,
            deductible_type: DeductibleType::Unit,
            deductible_amount: Decimal::ZERO,
            fixed_amount_total: None,
            application_context: ApplicationContext::Single,
            applicable_item_count: 0,
            applicable_item_id: None,
            usable: false,
            priority: Decimal::ZERO,
            gt_bias: None,
        }
    }
}

impl Discount {
    /// Attribute set of a base discount, under the given name.
    ///
    /// Usable, single-context, one unit, priority 1, zero flat deduction and no
    /// target item. Tests and inventory editors override fields with struct
    /// update syntax:
    ///
    /// ```rust
    /// use checkout_core::discount::{ApplicationContext, Discount};
    ///
    /// let batch = Discount {
    ///     application_context: ApplicationContext::Batch,
    ///     applicable_item_count: 3,
    ///     ..Discount::base_attributes("three_for_two")
    /// };
    /// assert!(batch.is_batch());
    /// assert!(batch.is_valid());
    /// ```
    pub fn base_attributes(name: impl Into<String>) -> Self {
        Discount {
            name: name.into(),
            global: false,
            deductible_type: DeductibleType::Unit,
            deductible_amount: Decimal::ZERO,
            fixed_amount_total: None,
            application_context: ApplicationContext::Single,
            applicable_item_count: 1,
            applicable_item_id: None,
            usable: true,
            priority: Decimal::ONE,
            gt_bias: None,
        }
    }

    /// Synthesizes the no-op discount attached to entries without real rules.
    ///
    /// ```rust
    /// use checkout_core::discount::Discount;
    /// use checkout_core::money::Money;
    /// use checkout_core::types::InventoryItem;
    ///
    /// let item = InventoryItem::new(3, "C", Money::from_units(20));
    /// let base = Discount::base_for(&item);
    /// assert_eq!(base.name, "base_discount_on_c");
    /// assert_eq!(base.deductible_for(item.cost), Money::zero());
    /// ```
    pub fn base_for(item: &InventoryItem) -> Self {
        Discount {
            applicable_item_id: Some(item.id),
            ..Discount::base_attributes(base_discount_name(&item.name))
        }
    }

    #[inline]
    pub fn is_global(&self) -> bool {
        self.global
    }

    #[inline]
    pub fn is_usable(&self) -> bool {
        self.usable
    }

    /// Non-global and priced per batch.
    #[inline]
    pub fn is_batch(&self) -> bool {
        !self.global && self.application_context == ApplicationContext::Batch
    }

    /// Non-global and priced per unit.
    #[inline]
    pub fn is_single(&self) -> bool {
        !self.global && self.application_context == ApplicationContext::Single
    }

    #[inline]
    pub fn is_percentage_based(&self) -> bool {
        self.deductible_type == DeductibleType::Percentage
    }

    #[inline]
    pub fn is_unit_based(&self) -> bool {
        self.deductible_type == DeductibleType::Unit
    }

    /// Whether the rule may take part in pricing at all.
    pub fn is_valid(&self) -> bool {
        if !self.usable {
            return false;
        }

        if self.global {
            return self.deductible_amount > Decimal::ZERO;
        }

        match self.application_context {
            ApplicationContext::Batch => self.applicable_item_count > 1,
            ApplicationContext::Single => self.applicable_item_count == 1,
        }
    }

    /// True for non-global rules targeting `item_id`.
    #[inline]
    pub fn targets(&self, item_id: ItemId) -> bool {
        !self.global && self.applicable_item_id == Some(item_id)
    }

    /// Whether the `gt_bias` gate is open for a running total.
    #[inline]
    pub fn admits_total(&self, total: Money) -> bool {
        self.gt_bias.map_or(true, |bias| total >= bias)
    }

    /// Amount this rule takes off `price`.
    ///
    /// Percentage rules scale with the price; unit rules are flat.
    ///
    /// ```rust
    /// use checkout_core::discount::{DeductibleType, Discount};
    /// use checkout_core::money::Money;
    /// use rust_decimal::Decimal;
    ///
    /// let ten_percent = Discount {
    ///     deductible_type: DeductibleType::Percentage,
    ///     deductible_amount: Decimal::from(10),
    ///     ..Discount::base_attributes("ten_off")
    /// };
    /// assert_eq!(ten_percent.deductible_for(Money::from_units(50)), Money::from_units(5));
    /// ```
    pub fn deductible_for(&self, price: Money) -> Money {
        match self.deductible_type {
            DeductibleType::Percentage => price.percentage(self.deductible_amount),
            DeductibleType::Unit => Money::new(self.deductible_amount),
        }
    }
}

/// Deterministic base discount name for an item name.
pub fn base_discount_name(item_name: &str) -> String {
    format!("{}{}", BASE_DISCOUNT_PREFIX, item_name.to_lowercase())
}

/// Keeps only rules that pass [`Discount::is_valid`], preserving order.
pub fn valid_discounts(pool: &[Discount]) -> Vec<Discount> {
    pool.iter().filter(|d| d.is_valid()).cloned().collect()
}

// =============================================================================
// Unit Tests
// =============================================================================
