//! # Cart
//!
//! Scanned items waiting to be priced.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Cart Operations                                 │
//! │                                                                         │
//! │  Till Action              Method                  Cart Change           │
//! │  ───────────              ──────                  ───────────           │
//! │                                                                         │
//! │  Scan item ──────────────► scan() ──────────────► line.amount += 1     │
//! │                                                   (new line if absent) │
//! │                                                                         │
//! │  Void one unit ──────────► remove() ────────────► line.amount -= 1     │
//! │                                                   (line dropped at 0)  │
//! │                                                                         │
//! │  Cancel sale ────────────► clear() ─────────────► lines.clear()        │
//! │                                                                         │
//! │  Show total ─────────────► total() ─────────────► (read only)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Lines keep the order in which each item was first scanned. The cart holds
//! a snapshot of every scanned item, so later catalog edits do not reprice
//! items that are already in it.

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::discount::Discount;
use crate::error::{CoreError, CoreResult};
use crate::pricing::{summarize, SummationResult};
use crate::types::{CartEntry, InventoryItem};
use crate::MAX_ITEM_QUANTITY;

/// The shopping cart.
///
/// ## Invariants
/// - One line per item (scanning the same item again increases its amount)
/// - Every line has an amount of at least 1
/// - No line exceeds [`MAX_ITEM_QUANTITY`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartEntry>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Scans one unit of `item` and returns the new amount on its line.
    ///
    /// ## Returns
    /// - `Err(CoreError::QuantityTooLarge)` if the line is already full;
    ///   the cart is unchanged in that case.
    pub fn scan(&mut self, item: &InventoryItem) -> CoreResult<u32> {
        if let Some(line) = self.lines.iter_mut().find(|l| l.item.id == item.id) {
            if line.amount >= MAX_ITEM_QUANTITY {
                return Err(CoreError::QuantityTooLarge {
                    item: item.name.clone(),
                    max: MAX_ITEM_QUANTITY,
                });
            }
            line.amount += 1;
            return Ok(line.amount);
        }

        self.lines.push(CartEntry::new(item.clone(), 1));
        Ok(1)
    }

    /// Looks `name` up in `catalog` and scans it.
    pub fn scan_name<C>(&mut self, catalog: &C, name: &str) -> CoreResult<u32>
    where
        C: Catalog + ?Sized,
    {
        let item = catalog
            .find_item(name)
            .ok_or_else(|| CoreError::ItemNotFound(name.to_string()))?;
        self.scan(item)
    }

    /// Scans each item in turn and returns how many units went in.
    ///
    /// Stops at the first full line; units scanned before it stay in the cart.
    pub fn scan_many<'a, I>(&mut self, items: I) -> CoreResult<usize>
    where
        I: IntoIterator<Item = &'a InventoryItem>,
    {
        let mut scanned = 0;
        for item in items {
            self.scan(item)?;
            scanned += 1;
        }
        Ok(scanned)
    }

    /// Takes one unit of the named item out and returns what is left.
    ///
    /// The line disappears when its amount reaches zero.
    pub fn remove(&mut self, name: &str) -> CoreResult<u32> {
        let index = self
            .lines
            .iter()
            .position(|l| l.name() == name)
            .ok_or_else(|| CoreError::ItemNotFound(name.to_string()))?;

        let line = &mut self.lines[index];
        line.amount = line.amount.saturating_sub(1);
        let left = line.amount;

        if left == 0 {
            self.lines.remove(index);
        }

        Ok(left)
    }

    /// Units of the named item in the cart (0 when absent).
    pub fn amount_of(&self, name: &str) -> u32 {
        self.lines
            .iter()
            .find(|l| l.name() == name)
            .map_or(0, |l| l.amount)
    }

    /// The cart lines as owned entries, in first-scan order.
    pub fn entries(&self) -> Vec<CartEntry> {
        self.lines.clone()
    }

    pub fn lines(&self) -> &[CartEntry] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of distinct items.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Number of scanned units across all lines.
    pub fn total_quantity(&self) -> u32 {
        self.lines.iter().map(|l| l.amount).sum()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Prices the cart under the catalog's discounts.
    pub fn total<C>(&self, catalog: &C) -> SummationResult
    where
        C: Catalog + ?Sized,
    {
        self.total_with(catalog.discounts())
    }

    /// Prices the cart under an explicit discount pool.
    pub fn total_with(&self, discounts: &[Discount]) -> SummationResult {
        summarize(self.entries(), discounts)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::MemoryCatalog;
    use crate::discount::ApplicationContext;
    use crate::money::Money;
    use crate::types::ItemId;

    fn catalog() -> MemoryCatalog {
        MemoryCatalog::new()
            .with_item(InventoryItem::new(1, "A", Money::from_units(50)))
            .with_item(InventoryItem::new(2, "B", Money::from_units(30)))
            .with_discount(Discount {
                application_context: ApplicationContext::Batch,
                applicable_item_count: 2,
                applicable_item_id: Some(ItemId::new(1)),
                fixed_amount_total: Some(Money::from_units(90)),
                ..Discount::base_attributes("batch_discount_on_a")
            })
    }

    #[test]
    fn test_scan_groups_same_item() {
        let catalog = catalog();
        let mut cart = Cart::new();

        assert_eq!(cart.scan_name(&catalog, "B").unwrap(), 1);
        assert_eq!(cart.scan_name(&catalog, "A").unwrap(), 1);
        assert_eq!(cart.scan_name(&catalog, "B").unwrap(), 2);

        assert_eq!(cart.len(), 2);
        assert_eq!(cart.total_quantity(), 3);
        assert_eq!(cart.amount_of("B"), 2);
        assert_eq!(cart.amount_of("C"), 0);

        let names: Vec<&str> = cart.lines().iter().map(|l| l.name()).collect();
        assert_eq!(names, vec!["B", "A"]);
    }

    #[test]
    fn test_scan_unknown_name() {
        let mut cart = Cart::new();
        let err = cart.scan_name(&catalog(), "D").unwrap_err();

        assert!(matches!(err, CoreError::ItemNotFound(ref name) if name == "D"));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_scan_many() {
        let catalog = catalog();
        let a = catalog.find_item("A").unwrap();
        let b = catalog.find_item("B").unwrap();
        let mut cart = Cart::new();

        assert_eq!(cart.scan_many([a, a, b]).unwrap(), 3);
        assert_eq!(cart.amount_of("A"), 2);
    }

    #[test]
    fn test_quantity_limit() {
        let item = InventoryItem::new(1, "A", Money::from_units(50));
        let mut cart = Cart::new();

        for _ in 0..MAX_ITEM_QUANTITY {
            cart.scan(&item).unwrap();
        }

        assert!(matches!(
            cart.scan(&item),
            Err(CoreError::QuantityTooLarge { max: MAX_ITEM_QUANTITY, .. })
        ));
        assert_eq!(cart.amount_of("A"), MAX_ITEM_QUANTITY);
    }

    #[test]
    fn test_remove() {
        let catalog = catalog();
        let mut cart = Cart::new();
        cart.scan_name(&catalog, "A").unwrap();
        cart.scan_name(&catalog, "A").unwrap();

        assert_eq!(cart.remove("A").unwrap(), 1);
        assert_eq!(cart.remove("A").unwrap(), 0);
        assert!(cart.is_empty());
        assert!(matches!(cart.remove("A"), Err(CoreError::ItemNotFound(_))));
    }

    #[test]
    fn test_remove_from_restored_empty_line() {
        let mut cart = Cart::new();
        cart.scan_name(&catalog(), "A").unwrap();

        let mut json = serde_json::to_value(&cart).unwrap();
        json["lines"][0]["amount"] = serde_json::json!(0);
        let mut restored: Cart = serde_json::from_value(json).unwrap();

        assert_eq!(restored.remove("A").unwrap(), 0);
        assert!(restored.is_empty());
    }

    #[test]
    fn test_total_uses_catalog_discounts() {
        let catalog = catalog();
        let mut cart = Cart::new();
        for name in ["A", "A", "A", "B"] {
            cart.scan_name(&catalog, name).unwrap();
        }

        // 2 × A for 90, one A at 50, one B at 30
        let result = cart.total(&catalog);
        assert_eq!(result.total, Money::from_units(170));

        let undiscounted = cart.total_with(&[]);
        assert_eq!(undiscounted.total, Money::from_units(180));
    }

    #[test]
    fn test_snapshot_survives_catalog_change() {
        let mut catalog = catalog();
        let mut cart = Cart::new();
        cart.scan_name(&catalog, "B").unwrap();

        catalog = MemoryCatalog::new().with_item(InventoryItem::new(2, "B", Money::from_units(99)));
        assert!(catalog.find_item("B").is_some());

        assert_eq!(cart.total_with(&[]).total, Money::from_units(30));
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        cart.scan_name(&catalog(), "A").unwrap();
        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total_with(&[]).total, Money::zero());
    }
}
