//! Checkout sessions over the default inventory and over files on disk.

use checkout_core::discount::DeductibleType;
use checkout_core::{Catalog, Discount, InventoryItem, ItemId, Money};
use checkout_store::{Checkout, Inventory, StoreConfig, StoreError};
use rust_decimal::Decimal;

fn default_checkout(list: &str) -> Checkout {
    let mut checkout = Checkout::new(Inventory::load_default().unwrap());
    checkout.bulk_scan(list);
    checkout
}

// =============================================================================
// Default Inventory Scenarios
// =============================================================================

#[test]
fn test_one_of_each() {
    let result = default_checkout("A, B, C").total();

    assert_eq!(result.total, Money::from_units(100));
    assert_eq!(result.cursors.len(), 3);
    assert_eq!(
        result.cursor_for("C").unwrap().applied_discounts,
        vec!["base_discount_on_c"]
    );
    // batch rules too large to trigger leave the base record behind
    assert_eq!(
        result.cursor_for("A").unwrap().applied_discounts,
        vec!["base_discount_on_a"]
    );
}

#[test]
fn test_batches_without_group_discount() {
    let result = default_checkout("B, A, B, B, A").total();

    assert_eq!(result.total, Money::from_units(165));

    let a = result.cursor_for("A").unwrap();
    assert_eq!(a.current_cost, Money::from_units(90));
    assert_eq!(a.entry.amount, 2);
    assert_eq!(a.applied_discounts, vec!["batch_discount_on_a"]);

    let b = result.cursor_for("B").unwrap();
    assert_eq!(b.current_cost, Money::from_units(75));
    assert_eq!(b.applied_discounts, vec!["batch_discount_on_b"]);

    assert!(result.global_discounts_applied.is_empty());
}

#[test]
fn test_group_discount_over_threshold() {
    let result = default_checkout("C, B, A, A, C, B, C").total();

    assert_eq!(result.raw_total, Money::from_units(210));
    assert_eq!(result.total, Money::from_units(189));
    assert_eq!(
        result.global_discounts_applied,
        vec!["group_discount_on_price_total"]
    );

    let names: Vec<&str> = result.cursors.iter().map(|c| c.name()).collect();
    assert_eq!(names, vec!["C", "B", "A"]);
}

#[test]
fn test_expired_discount_never_applies() {
    let result = default_checkout("C, C, C").total();

    assert_eq!(result.total, Money::from_units(60));
    assert!(!result
        .cursor_for("C")
        .unwrap()
        .applied_discounts
        .iter()
        .any(|name| name == "expired_discount_on_c"));
}

// =============================================================================
// File-Backed Inventories
// =============================================================================

fn write_fixture(dir: &std::path::Path) -> std::path::PathBuf {
    let path = dir.join("inventory.yml");
    std::fs::write(
        &path,
        r#"
items:
  A: { id: 1, name: A, cost: 50 }
  B: { id: 2, name: B, cost: 30 }
discounts:
  group_discount_on_price_total:
    global: true
    deductible_type: percentage
    deductible_amount: 10
    usable: true
    priority: 1
    gt_bias: 150
  batch_discount_on_b:
    applicable_context: batch
    applicable_item_count: 2
    applicable_item_id: 2
    fixed_amount_total: 50
    usable: true
    priority: 1
"#,
    )
    .unwrap();
    path
}

#[test]
fn test_session_from_config() {
    let dir = tempfile::tempdir().unwrap();
    let config = StoreConfig::with_inventory(write_fixture(dir.path()));

    let mut checkout = Checkout::from_config(&config).unwrap();
    assert_eq!(checkout.bulk_scan("A, A, A, A, B"), 5);

    let result = checkout.total();
    assert_eq!(result.raw_total, Money::from_units(230));
    assert_eq!(result.total, Money::from_units(207));
}

#[test]
fn test_persisted_item_survives_reload() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(dir.path());

    let mut inventory = Inventory::load(&path).unwrap();
    inventory
        .add_item(InventoryItem::new(4, "D", Money::from_units(60)), true)
        .unwrap();

    let reloaded = Inventory::load(&path).unwrap();
    assert_eq!(reloaded.find_item("D").unwrap().id, ItemId::new(4));
    assert_eq!(
        reloaded.discounts()[0].name,
        "group_discount_on_price_total"
    );
}

#[test]
fn test_unpersisted_item_leaves_file_alone() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(dir.path());
    let before = std::fs::read_to_string(&path).unwrap();

    let mut inventory = Inventory::load(&path).unwrap();
    inventory
        .add_item(InventoryItem::new(4, "D", Money::from_units(60)), false)
        .unwrap();

    assert_eq!(std::fs::read_to_string(&path).unwrap(), before);
    assert!(inventory.find_item("D").is_some());
}

#[test]
fn test_invalid_item_leaves_inventory_and_file_alone() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(dir.path());
    let before = std::fs::read_to_string(&path).unwrap();

    let mut inventory = Inventory::load(&path).unwrap();
    let err = inventory
        .add_item(InventoryItem::new(4, "", Money::from_units(60)), true)
        .unwrap_err();

    assert!(matches!(err, StoreError::Core(_)));
    assert_eq!(inventory.items().len(), 2);
    assert_eq!(std::fs::read_to_string(&path).unwrap(), before);
}

#[test]
fn test_persisted_discount_applies_after_reload() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(dir.path());

    let mut inventory = Inventory::load(&path).unwrap();
    inventory
        .add_discount(
            Discount {
                deductible_type: DeductibleType::Unit,
                deductible_amount: Decimal::from(5),
                applicable_item_id: Some(ItemId::new(1)),
                ..Discount::base_attributes("single_discount_on_a")
            },
            true,
        )
        .unwrap();

    let mut checkout = Checkout::new(Inventory::load(&path).unwrap());
    checkout.bulk_scan("A, A");

    let result = checkout.total();
    assert_eq!(result.total, Money::from_units(90));
    assert_eq!(
        result.cursor_for("A").unwrap().applied_discounts,
        vec!["single_discount_on_a"]
    );
}

#[test]
fn test_duplicate_discount_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let mut inventory = Inventory::load(write_fixture(dir.path())).unwrap();

    let err = inventory
        .add_discount(Discount::base_attributes("batch_discount_on_b"), true)
        .unwrap_err();

    assert!(matches!(err, StoreError::Core(_)));
    assert_eq!(inventory.discounts().len(), 2);
}
