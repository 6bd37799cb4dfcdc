//! # Catalog
//!
//! Read access to the items and discounts a cart is priced against.
//!
//! The file-backed inventory lives in `checkout-store`; this module only
//! defines the seam and an in-memory implementation for tests and embedding.

use serde::{Deserialize, Serialize};

use crate::discount::Discount;
use crate::error::CoreResult;
use crate::types::{InventoryItem, ItemId};
use crate::validation::{validate_discount, validate_item};

/// Items and discounts available at the till.
pub trait Catalog {
    /// All items, in definition order.
    fn items(&self) -> &[InventoryItem];

    /// All discounts, in definition order. Unusable rules are included.
    fn discounts(&self) -> &[Discount];

    /// Looks up an item by its scan name.
    fn find_item(&self, name: &str) -> Option<&InventoryItem> {
        self.items().iter().find(|item| item.name == name)
    }

    fn find_item_by_id(&self, id: ItemId) -> Option<&InventoryItem> {
        self.items().iter().find(|item| item.id == id)
    }

    fn find_discount(&self, name: &str) -> Option<&Discount> {
        self.discounts().iter().find(|discount| discount.name == name)
    }
}

/// A catalog held entirely in memory.
///
/// ## Example
/// ```rust
/// use checkout_core::catalog::{Catalog, MemoryCatalog};
/// use checkout_core::money::Money;
/// use checkout_core::types::InventoryItem;
///
/// let catalog = MemoryCatalog::new()
///     .with_item(InventoryItem::new(1, "A", Money::from_units(50)));
///
/// assert!(catalog.find_item("A").is_some());
/// assert!(catalog.find_item("Z").is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryCatalog {
    items: Vec<InventoryItem>,
    discounts: Vec<Discount>,
}

impl MemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalog from records that are trusted as-is.
    pub fn from_parts(items: Vec<InventoryItem>, discounts: Vec<Discount>) -> Self {
        MemoryCatalog { items, discounts }
    }

    /// Builder form of an unchecked insert.
    pub fn with_item(mut self, item: InventoryItem) -> Self {
        self.items.push(item);
        self
    }

    pub fn with_discount(mut self, discount: Discount) -> Self {
        self.discounts.push(discount);
        self
    }

    /// Adds an item after validating it against the current items.
    ///
    /// On error the catalog is left unchanged.
    pub fn add_item(&mut self, item: InventoryItem) -> CoreResult<()> {
        validate_item(&item, &self.items)?;
        self.items.push(item);
        Ok(())
    }

    /// Adds a discount after validating it against the current discounts.
    ///
    /// On error the catalog is left unchanged.
    pub fn add_discount(&mut self, discount: Discount) -> CoreResult<()> {
        validate_discount(&discount, &self.discounts)?;
        self.discounts.push(discount);
        Ok(())
    }

    pub fn into_parts(self) -> (Vec<InventoryItem>, Vec<Discount>) {
        (self.items, self.discounts)
    }
}

impl Catalog for MemoryCatalog {
    fn items(&self) -> &[InventoryItem] {
        &self.items
    }

    fn discounts(&self) -> &[Discount] {
        &self.discounts
    }
}
