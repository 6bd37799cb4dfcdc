//! # Discount Selector
//!
//! Picks the rules that price one cart entry and splits them by scope.
//!
//! ```text
//! pool ──► valid AND targets(entry.item.id) ──► none? ──► [base_for(item)]
//!                                                 │
//!                                                 ▼
//!                          ┌───────── partition ─────────┐
//!                          ▼                             ▼
//!                   batch (by priority)          single (by priority)
//! ```
//!
//! Sorting is stable, so rules with equal priority keep their pool order.

use crate::discount::Discount;
use crate::types::CartEntry;

/// Rules that apply to one entry, in application order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectedDiscounts {
    pub batch: Vec<Discount>,
    pub single: Vec<Discount>,
}

impl SelectedDiscounts {
    /// Total number of selected rules.
    pub fn len(&self) -> usize {
        self.batch.len() + self.single.len()
    }

    pub fn is_empty(&self) -> bool {
        self.batch.is_empty() && self.single.is_empty()
    }
}

/// Selects and orders the discounts for `entry` out of `pool`.
///
/// Never returns an empty selection: an entry without matching rules gets the
/// synthesized base discount.
pub fn select_discounts(entry: &CartEntry, pool: &[Discount]) -> SelectedDiscounts {
    let mut matching: Vec<Discount> = pool
        .iter()
        .filter(|d| d.is_valid() && d.targets(entry.item.id))
        .cloned()
        .collect();

    if matching.is_empty() {
        matching.push(Discount::base_for(&entry.item));
    }

    let (mut batch, mut single): (Vec<_>, Vec<_>) =
        matching.into_iter().partition(Discount::is_batch);

    // A non-global rule is either batch or single, so `single` holds no strays.
    sort_by_priority(&mut batch);
    sort_by_priority(&mut single);

    SelectedDiscounts { batch, single }
}

/// Stable ascending sort on `priority`.
pub(crate) fn sort_by_priority(discounts: &mut [Discount]) {
    discounts.sort_by(|a, b| a.priority.cmp(&b.priority));
}
