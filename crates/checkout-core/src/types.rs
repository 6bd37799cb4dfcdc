//! # Domain Types
//!
//! Core domain types used throughout Checkout.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐        ┌─────────────────┐                        │
//! │  │  InventoryItem  │ ◄───── │    CartEntry    │                        │
//! │  │  ─────────────  │        │  ─────────────  │                        │
//! │  │  id (ItemId)    │        │  item           │                        │
//! │  │  name           │        │  amount (u32)   │                        │
//! │  │  cost (Money)   │        └─────────────────┘                        │
//! │  └─────────────────┘                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Discount rules live in [`crate::discount`]; priced entries in
//! [`crate::pricing`].

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::money::Money;

// =============================================================================
// Item Identifier
// =============================================================================

/// Identifier of an inventory item.
///
/// Discounts point at items through this id (`applicable_item_id`), while
/// shoppers scan items by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(u64);

impl ItemId {
    #[inline]
    pub const fn new(id: u64) -> Self {
        ItemId(id)
    }

    #[inline]
    pub const fn get(&self) -> u64 {
        self.0
    }
}

impl From<u64> for ItemId {
    fn from(id: u64) -> Self {
        ItemId(id)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Inventory Item
// =============================================================================

/// A product the store sells.
///
/// Immutable once loaded into a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: ItemId,

    /// Name the item is scanned by.
    pub name: String,

    /// Unit price before any discount.
    pub cost: Money,
}

impl InventoryItem {
    pub fn new(id: u64, name: impl Into<String>, cost: Money) -> Self {
        InventoryItem {
            id: ItemId::new(id),
            name: name.into(),
            cost,
        }
    }

    /// Price of `amount` units without discounts.
    #[inline]
    pub fn undiscounted_cost(&self, amount: u32) -> Money {
        self.cost.multiply_quantity(amount)
    }
}

// =============================================================================
// Cart Entry
// =============================================================================

/// One line of a cart: an item and how many times it was scanned.
///
/// Entries are rebuilt from the cart on every read, so they are owned values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartEntry {
    pub item: InventoryItem,
    pub amount: u32,
}

impl CartEntry {
    pub fn new(item: InventoryItem, amount: u32) -> Self {
        CartEntry { item, amount }
    }

    /// Name of the scanned item.
    #[inline]
    pub fn name(&self) -> &str {
        &self.item.name
    }

    /// Price of this line without discounts.
    #[inline]
    pub fn undiscounted_cost(&self) -> Money {
        self.item.undiscounted_cost(self.amount)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
