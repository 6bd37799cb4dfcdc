//! Property tests for the pricing engine.

use checkout_core::discount::{ApplicationContext, DeductibleType, Discount};
use checkout_core::pricing::global::apply_global_discounts;
use checkout_core::{summarize, CartEntry, InventoryItem, ItemId, Money};
use proptest::prelude::*;
use rust_decimal::Decimal;

fn item(cost: i64) -> InventoryItem {
    InventoryItem::new(1, "A", Money::from_units(cost))
}

fn fixed_batch(size: u32, total: i64, usable: bool) -> Discount {
    Discount {
        application_context: ApplicationContext::Batch,
        applicable_item_count: size,
        applicable_item_id: Some(ItemId::new(1)),
        fixed_amount_total: Some(Money::from_units(total)),
        usable,
        ..Discount::base_attributes("batch_discount_on_a")
    }
}

fn flat_global(amount: i64, priority: i64) -> Discount {
    Discount {
        global: true,
        deductible_type: DeductibleType::Unit,
        deductible_amount: Decimal::from(amount),
        priority: Decimal::from(priority),
        ..Discount::base_attributes(format!("voucher_{priority}"))
    }
}

proptest! {
    #[test]
    fn test_batch_applies_floor_of_amount_over_size(
        amount in 1u32..60,
        size in 2u32..8,
        cost in 1i64..100,
        total in 1i64..400,
    ) {
        let result = summarize(
            vec![CartEntry::new(item(cost), amount)],
            &[fixed_batch(size, total, true)],
        );
        let cursor = &result.cursors[0];
        let batches = amount / size;
        let recorded = cursor
            .applied_discounts
            .iter()
            .filter(|name| *name == "batch_discount_on_a")
            .count();

        prop_assert_eq!(recorded as u32, batches);
        prop_assert!(cursor.is_settled());

        let expected = Money::from_units(total).multiply_quantity(batches)
            + Money::from_units(cost).multiply_quantity(amount % size);
        prop_assert_eq!(cursor.current_cost, expected);
    }

    #[test]
    fn test_unusable_rules_never_appear(
        amount in 1u32..30,
        size in 2u32..5,
        total in 1i64..200,
    ) {
        let result = summarize(
            vec![CartEntry::new(item(50), amount)],
            &[fixed_batch(size, total, false)],
        );

        prop_assert_eq!(
            &result.cursors[0].applied_discounts,
            &vec!["base_discount_on_a".to_string()]
        );
        prop_assert_eq!(result.total, Money::from_units(50).multiply_quantity(amount));
    }

    #[test]
    fn test_every_entry_keeps_an_audit_record(
        amounts in proptest::collection::vec(1u32..20, 1..4),
        size in 2u32..30,
    ) {
        let entries: Vec<CartEntry> = amounts
            .iter()
            .enumerate()
            .map(|(i, &amount)| {
                let id = i as u64 + 1;
                CartEntry::new(InventoryItem::new(id, format!("I{id}"), Money::from_units(10)), amount)
            })
            .collect();
        let result = summarize(entries, &[fixed_batch(size, 15, true)]);

        for cursor in &result.cursors {
            prop_assert!(!cursor.applied_discounts.is_empty());
            prop_assert!(cursor.is_settled());
        }
    }

    #[test]
    fn test_summation_is_deterministic(
        amount in 1u32..40,
        size in 2u32..6,
        bias in 0i64..500,
    ) {
        let pool = vec![
            fixed_batch(size, 70, true),
            Discount {
                global: true,
                deductible_type: DeductibleType::Percentage,
                deductible_amount: Decimal::from(10),
                gt_bias: Some(Money::from_units(bias)),
                ..Discount::base_attributes("group_discount_on_price_total")
            },
        ];
        let entries = vec![CartEntry::new(item(50), amount)];

        prop_assert_eq!(summarize(entries.clone(), &pool), summarize(entries, &pool));
    }

    #[test]
    fn test_global_total_never_goes_negative(
        raw in 0i64..1_000,
        vouchers in proptest::collection::vec(1i64..600, 0..4),
    ) {
        let pool: Vec<Discount> = vouchers
            .iter()
            .enumerate()
            .map(|(i, &amount)| flat_global(amount, i as i64))
            .collect();

        let outcome = apply_global_discounts(Money::from_units(raw), &pool);

        prop_assert!(!outcome.total.is_negative());
        prop_assert!(outcome.total <= Money::from_units(raw));
        prop_assert_eq!(outcome.applied.len(), pool.len());
    }
}
