//! Per-entry pricing accumulator.

use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::types::CartEntry;

/// Cost-so-far and remaining unpriced quantity of one cart entry.
///
/// ## Lifecycle
/// ```text
/// Cursor::for_entry ──► consume_batch (0..n) ──► settle ──► settled
///   cost = 0              cost += batch cost       cost += rest × unit price
///   remainder = amount    remainder -= batch size  remainder = 0
/// ```
///
/// Every step takes the cursor by value and hands back the updated one, so a
/// cursor is only ever owned by the fold that is pricing it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cursor {
    pub entry: CartEntry,
    pub current_cost: Money,
    /// Units not yet priced.
    pub remainder: u32,
    /// Names of the discounts that priced this entry, in application order.
    pub applied_discounts: Vec<String>,
}

impl Cursor {
    /// A fresh cursor: nothing priced yet.
    pub fn for_entry(entry: CartEntry) -> Self {
        let remainder = entry.amount;
        Cursor {
            entry,
            current_cost: Money::zero(),
            remainder,
            applied_discounts: Vec::new(),
        }
    }

    /// Name of the item this cursor prices.
    #[inline]
    pub fn name(&self) -> &str {
        self.entry.name()
    }

    /// Unit price before discounts.
    #[inline]
    pub fn unit_cost(&self) -> Money {
        self.entry.item.cost
    }

    /// True once every unit has been priced.
    #[inline]
    pub fn is_settled(&self) -> bool {
        self.remainder == 0
    }

    /// Prices `units` units at `cost` under `discount_name`.
    ///
    /// Callers guarantee `units <= remainder`.
    pub(crate) fn consume_batch(mut self, units: u32, cost: Money, discount_name: &str) -> Self {
        debug_assert!(units <= self.remainder);
        self.current_cost += cost;
        self.remainder -= units;
        self.applied_discounts.push(discount_name.to_string());
        self
    }

    /// Records a discount that shaped the unit price without consuming units.
    pub(crate) fn record(mut self, discount_name: &str) -> Self {
        self.applied_discounts.push(discount_name.to_string());
        self
    }

    /// Prices all remaining units at `unit_price`.
    pub(crate) fn settle(mut self, unit_price: Money) -> Self {
        self.current_cost += unit_price.multiply_quantity(self.remainder);
        self.remainder = 0;
        self
    }
}
