//! # Global Discount Applier
//!
//! Applies cart-wide rules to the summed entry costs.
//!
//! ## Threshold Gating
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  raw total 230                                                          │
//! │     │                                                                   │
//! │     ▼  "ten_percent" (p1, gt_bias 150): 230 ≥ 150 → 230 - 23 = 207     │
//! │     │                                                                   │
//! │     ▼  "loyalty"     (p2, gt_bias 210): 207 < 210 → skipped            │
//! │     │                                                                   │
//! │  total 207, applied ["ten_percent"]                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each gate sees the total as of its own fold step, so an earlier rule can
//! close a later rule's gate.
//!
//! Unlike the single-unit fold there is no "no-op if not positive" rule: a
//! deduction is always applied once its gate is open. The running total is
//! floored at zero instead, so a flat deduction larger than the cart never
//! produces a negative total.

use serde::{Deserialize, Serialize};

use crate::discount::Discount;
use crate::money::Money;
use crate::pricing::selector::sort_by_priority;

/// Result of the global phase.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GlobalOutcome {
    pub total: Money,
    /// Names of the rules whose gate was open, in application order.
    pub applied: Vec<String>,
}

/// Valid global rules from `pool`, ordered by priority.
pub fn global_discounts(pool: &[Discount]) -> Vec<Discount> {
    let mut globals: Vec<Discount> = pool
        .iter()
        .filter(|d| d.is_valid() && d.is_global())
        .cloned()
        .collect();
    sort_by_priority(&mut globals);
    globals
}

/// Folds the global rules of `pool` over `total`.
pub fn apply_global_discounts(total: Money, pool: &[Discount]) -> GlobalOutcome {
    global_discounts(pool).iter().fold(
        GlobalOutcome {
            total,
            applied: Vec::new(),
        },
        |mut outcome, discount| {
            if discount.admits_total(outcome.total) {
                outcome.total =
                    (outcome.total - discount.deductible_for(outcome.total)).floor_at_zero();
                outcome.applied.push(discount.name.clone());
            }
            outcome
        },
    )
}
