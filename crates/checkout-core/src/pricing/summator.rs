//! # Cart Summator
//!
//! The single entry point of the pricing engine.
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          summarize()                                    │
//! │                                                                         │
//! │  discounts ──► valid subset (once) ─────────────────────┐              │
//! │                       │                                  │              │
//! │  entries ──► for each entry:                             │              │
//! │                select_discounts ──► price_entry ──► Cursor              │
//! │                                                     │    │              │
//! │                              Σ current_cost ◄───────┘    │              │
//! │                                    │                     │              │
//! │                                    ▼                     ▼              │
//! │                             apply_global_discounts(raw_total, valid)   │
//! │                                    │                                    │
//! │                                    ▼                                    │
//! │                           SummationResult                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Summation holds no state between calls: the same entries and discounts
//! always produce an identical result.

use serde::{Deserialize, Serialize};

use crate::discount::{valid_discounts, Discount};
use crate::money::Money;
use crate::pricing::cursor::Cursor;
use crate::pricing::entry::price_entry;
use crate::pricing::global::apply_global_discounts;
use crate::pricing::selector::select_discounts;
use crate::types::CartEntry;

/// Fully itemized outcome of pricing a cart.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SummationResult {
    /// Amount due after global discounts.
    pub total: Money,

    /// Sum of the priced entries before global discounts.
    pub raw_total: Money,

    /// One settled cursor per cart entry, in cart order.
    pub cursors: Vec<Cursor>,

    /// Global rules that fired, in application order.
    pub global_discounts_applied: Vec<String>,
}

impl SummationResult {
    /// Looks up the cursor of an item by name.
    pub fn cursor_for(&self, item_name: &str) -> Option<&Cursor> {
        self.cursors.iter().find(|c| c.name() == item_name)
    }

    /// Price of the cart without any discount.
    pub fn undiscounted_total(&self) -> Money {
        self.cursors.iter().map(|c| c.entry.undiscounted_cost()).sum()
    }

    /// How much the discounts took off in total.
    pub fn savings(&self) -> Money {
        self.undiscounted_total() - self.total
    }

    pub fn is_empty(&self) -> bool {
        self.cursors.is_empty()
    }
}

/// Prices `entries` under `discounts`.
///
/// ## Example
/// ```rust
/// use checkout_core::money::Money;
/// use checkout_core::pricing::summarize;
/// use checkout_core::types::{CartEntry, InventoryItem};
///
/// let entries = vec![
///     CartEntry::new(InventoryItem::new(1, "A", Money::from_units(50)), 1),
///     CartEntry::new(InventoryItem::new(3, "C", Money::from_units(20)), 1),
/// ];
/// let result = summarize(entries, &[]);
///
/// assert_eq!(result.total, Money::from_units(70));
/// assert_eq!(
///     result.cursor_for("C").unwrap().applied_discounts,
///     vec!["base_discount_on_c"]
/// );
/// ```
pub fn summarize<I>(entries: I, discounts: &[Discount]) -> SummationResult
where
    I: IntoIterator<Item = CartEntry>,
{
    let usable = valid_discounts(discounts);

    let cursors: Vec<Cursor> = entries
        .into_iter()
        .map(|entry| {
            let selected = select_discounts(&entry, &usable);
            price_entry(entry, &selected)
        })
        .collect();

    let raw_total: Money = cursors.iter().map(|c| c.current_cost).sum();
    let global = apply_global_discounts(raw_total, &usable);

    SummationResult {
        total: global.total,
        raw_total,
        cursors,
        global_discounts_applied: global.applied,
    }
}
