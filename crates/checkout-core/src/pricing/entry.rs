//! # Entry Pricer
//!
//! Prices one cart entry with its selected discounts.
//!
//! ## Algorithm
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Entry: 7 × A @ 50     batch "2 for 90" (p1), single "5 off" (p1)       │
//! │                                                                         │
//! │  1. Batch phase (per rule, in priority order)                          │
//! │     remainder 7 ≥ 2 → +90, remainder 5, record "2 for 90"              │
//! │     remainder 5 ≥ 2 → +90, remainder 3, record "2 for 90"              │
//! │     remainder 3 ≥ 2 → +90, remainder 1, record "2 for 90"              │
//! │     remainder 1 < 2 → next batch rule (remainder carries over)         │
//! │                                                                         │
//! │  2. Single phase: fold unit price 50 → 45, record "5 off" once         │
//! │                                                                         │
//! │  3. Settle: +1 × 45                                                    │
//! │                                                                         │
//! │  current_cost = 315, remainder = 0                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! No rounding happens here; fractional costs from percentage rules are kept
//! exactly.

use crate::discount::Discount;
use crate::money::Money;
use crate::pricing::cursor::Cursor;
use crate::pricing::selector::SelectedDiscounts;
use crate::types::CartEntry;

/// Prices `entry` under `selected`, returning a settled cursor.
pub fn price_entry(entry: CartEntry, selected: &SelectedDiscounts) -> Cursor {
    let cursor = selected
        .batch
        .iter()
        .fold(Cursor::for_entry(entry), apply_batch_discount);

    apply_single_discounts(cursor, &selected.single)
}

/// Consumes as many whole batches as the remainder allows.
fn apply_batch_discount(cursor: Cursor, discount: &Discount) -> Cursor {
    let size = discount.applicable_item_count;
    if size == 0 {
        return cursor;
    }

    let cost = batch_cost(cursor.unit_cost(), discount);
    let mut cursor = cursor;
    while cursor.remainder >= size {
        cursor = cursor.consume_batch(size, cost, &discount.name);
    }
    cursor
}

/// Price charged for one batch under `discount`.
///
/// A fixed total wins outright. Otherwise the batch costs
/// `unit_cost - deductible_for(unit_cost) * batch_size`; if that derivation is
/// not positive the batch is charged at its undiscounted price instead.
pub fn batch_cost(unit_cost: Money, discount: &Discount) -> Money {
    if let Some(fixed) = discount.fixed_amount_total {
        return fixed;
    }

    let size = discount.applicable_item_count;
    let derived = unit_cost - discount.deductible_for(unit_cost).multiply_quantity(size);
    if derived.is_positive() {
        derived
    } else {
        unit_cost.multiply_quantity(size)
    }
}

/// Folds single rules into one unit price and settles the remainder with it.
///
/// Each rule is recorded once. When neither a batch nor a single rule has
/// been recorded (an entry whose only rules are batches too large to
/// trigger), the base discount is folded in so the entry keeps an audit
/// record.
fn apply_single_discounts(cursor: Cursor, discounts: &[Discount]) -> Cursor {
    if discounts.is_empty() && cursor.applied_discounts.is_empty() {
        let base = Discount::base_for(&cursor.entry.item);
        return apply_single_discounts(cursor, std::slice::from_ref(&base));
    }

    let unit_cost = cursor.unit_cost();
    let (cursor, unit_price) = discounts
        .iter()
        .fold((cursor, unit_cost), |(cursor, price), discount| {
            (cursor.record(&discount.name), discounted_price(price, discount))
        });

    cursor.settle(unit_price)
}

/// One single-fold step: subtract the deduction unless that would leave the
/// price at or below zero.
pub fn discounted_price(price: Money, discount: &Discount) -> Money {
    let next = price - discount.deductible_for(price);
    if next.is_positive() {
        next
    } else {
        price
    }
}
