//! # Checkout Session
//!
//! One till session: an inventory plus the cart being rung up.
//!
//! ## Session Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Checkout Session                                 │
//! │                                                                         │
//! │  scan("A") ─────► Inventory::find_item ──► found?  ──► Cart::scan      │
//! │                                              │                          │
//! │                                              └─ no ──► warn, ignored   │
//! │                                                                         │
//! │  bulk_scan("A, A, B") ─► every name known? ─► yes ──► scan each        │
//! │                                  │                                      │
//! │                                  └─ no ──► warn, nothing scanned       │
//! │                                                                         │
//! │  total() ─────────► Cart::total(&inventory) ──► SummationResult        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use checkout_core::validation::parse_scan_list;
use checkout_core::{Cart, CartEntry, Catalog, CoreError, Discount, InventoryItem, SummationResult};
use tracing::{debug, info, warn};

use crate::config::StoreConfig;
use crate::error::StoreResult;
use crate::inventory::Inventory;

/// A till session over one inventory.
#[derive(Debug, Clone)]
pub struct Checkout {
    inventory: Inventory,
    cart: Cart,
    persist_changes: bool,
}

impl Checkout {
    /// Starts a session with an empty cart. Runtime edits are not persisted.
    pub fn new(inventory: Inventory) -> Self {
        Checkout {
            inventory,
            cart: Cart::new(),
            persist_changes: false,
        }
    }

    /// Starts a session over the configured inventory.
    pub fn from_config(config: &StoreConfig) -> StoreResult<Self> {
        let inventory = Inventory::from_config(config)?;
        Ok(Checkout {
            inventory,
            cart: Cart::new(),
            persist_changes: config.persist_changes(),
        })
    }

    // =========================================================================
    // Scanning
    // =========================================================================

    /// Scans one item by name.
    ///
    /// Unknown names and full cart lines are logged and ignored; returns
    /// whether the item went into the cart.
    pub fn scan(&mut self, name: &str) -> bool {
        match self.cart.scan_name(&self.inventory, name) {
            Ok(amount) => {
                debug!(item = name, amount, "Item scanned");
                true
            }
            Err(CoreError::ItemNotFound(_)) => {
                warn!(item = name, "Unknown item scanned, ignoring");
                false
            }
            Err(e) => {
                warn!(item = name, error = %e, "Scan rejected");
                false
            }
        }
    }

    /// Scans a comma-separated list such as `"A, A, B"`.
    ///
    /// The list is all or nothing on names: if any name is unknown, nothing
    /// is scanned. Returns how many units went into the cart.
    pub fn bulk_scan(&mut self, list: &str) -> usize {
        let names = parse_scan_list(list);

        let unknown: Vec<&str> = names
            .iter()
            .copied()
            .filter(|name| self.inventory.find_item(name).is_none())
            .collect();
        if !unknown.is_empty() {
            warn!(?unknown, "Scan list names unknown items, ignoring the list");
            return 0;
        }

        names.into_iter().filter(|name| self.scan(name)).count()
    }

    /// Takes one unit of the named item out of the cart.
    pub fn remove(&mut self, name: &str) -> StoreResult<u32> {
        let left = self.cart.remove(name)?;
        debug!(item = name, left, "Item removed");
        Ok(left)
    }

    /// Empties the cart.
    pub fn clear(&mut self) {
        self.cart.clear();
    }

    // =========================================================================
    // Reading
    // =========================================================================

    /// Cart lines in first-scan order.
    pub fn entries(&self) -> Vec<CartEntry> {
        self.cart.entries()
    }

    pub fn amount_of(&self, name: &str) -> u32 {
        self.cart.amount_of(name)
    }

    /// Prices the cart under the inventory's current discounts.
    pub fn total(&self) -> SummationResult {
        let result = self.cart.total(&self.inventory);

        info!(
            lines = result.cursors.len(),
            raw_total = %result.raw_total,
            total = %result.total,
            globals = ?result.global_discounts_applied,
            "Cart priced"
        );
        result
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn inventory_mut(&mut self) -> &mut Inventory {
        &mut self.inventory
    }

    // =========================================================================
    // Inventory Edits
    // =========================================================================

    /// Adds an item, persisting it when the session was configured to.
    pub fn add_item(&mut self, item: InventoryItem) -> StoreResult<()> {
        self.inventory.add_item(item, self.persist_changes)
    }

    /// Adds a discount, persisting it when the session was configured to.
    ///
    /// Items already in the cart are repriced under it on the next `total()`.
    pub fn add_discount(&mut self, discount: Discount) -> StoreResult<()> {
        self.inventory.add_discount(discount, self.persist_changes)
    }
}
