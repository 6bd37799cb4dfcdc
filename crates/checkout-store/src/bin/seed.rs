//! # Inventory Seed Generator
//!
//! Writes an inventory definition file for development.
//!
//! ## Usage
//! ```bash
//! # Write the embedded default inventory (A, B, C)
//! cargo run -p checkout-store --bin seed
//!
//! # Generate a larger catalog
//! cargo run -p checkout-store --bin seed -- --count 200 --out ./data/inventory.json
//! ```
//!
//! ## Generated Catalogs
//! - Item names: `{CATEGORY}-{INDEX}`, e.g. `BEV-007`
//! - Prices: 1.00 - 19.99
//! - Every 5th item: a "3 for the price of 2.7" batch discount
//! - Every 7th item: a 5% single-unit discount
//! - One 10% group discount on totals of 500 or more

use std::env;
use std::path::PathBuf;

use checkout_core::discount::{ApplicationContext, DeductibleType};
use checkout_core::{Catalog, Discount, InventoryItem, ItemId, Money};
use checkout_store::Inventory;
use rust_decimal::Decimal;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Item categories for generated catalogs
const CATEGORIES: &[&str] = &["BEV", "SNK", "DRY", "FRZ", "GRO"];

/// Batch size of generated batch discounts
const BATCH_SIZE: u32 = 3;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let args: Vec<String> = env::args().collect();

    let mut count: Option<usize> = None;
    let mut out = PathBuf::from("./inventory.yml");
    let mut force = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-c" | "--count" => {
                if i + 1 < args.len() {
                    count = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "-o" | "--out" => {
                if i + 1 < args.len() {
                    out = PathBuf::from(&args[i + 1]);
                    i += 1;
                }
            }
            "-f" | "--force" => force = true,
            "-h" | "--help" => {
                println!("Checkout Inventory Seed Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -c, --count <N>    Generate N items instead of the default inventory");
                println!("  -o, --out <PATH>   Output file, .yml or .json (default: ./inventory.yml)");
                println!("  -f, --force        Overwrite an existing file");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            other => warn!(argument = other, "Ignoring unknown argument"),
        }
        i += 1;
    }

    if out.exists() && !force {
        warn!(path = %out.display(), "Output file exists, pass --force to overwrite");
        return Ok(());
    }

    let inventory = match count {
        Some(count) => generate_inventory(count)?,
        None => Inventory::load_default()?,
    };

    inventory.save_to(&out)?;

    info!(
        path = %out.display(),
        items = inventory.items().len(),
        discounts = inventory.discounts().len(),
        "Inventory written"
    );
    Ok(())
}

/// Initializes the tracing subscriber.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - Default: INFO level
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Builds a catalog of `count` items with sample discounts.
fn generate_inventory(count: usize) -> checkout_store::StoreResult<Inventory> {
    let mut inventory = Inventory::new();

    for seed in 0..count {
        let item = generate_item(seed);

        if seed % 5 == 0 {
            inventory.add_discount(batch_discount_for(&item), false)?;
        }
        if seed % 7 == 0 {
            inventory.add_discount(single_discount_for(&item), false)?;
        }

        inventory.add_item(item, false)?;
    }

    inventory.add_discount(
        Discount {
            global: true,
            deductible_type: DeductibleType::Percentage,
            deductible_amount: Decimal::from(10),
            gt_bias: Some(Money::from_units(500)),
            ..Discount::base_attributes("group_discount_on_price_total")
        },
        false,
    )?;

    Ok(inventory)
}

/// Generates a single item with a deterministic price.
fn generate_item(seed: usize) -> InventoryItem {
    let category = CATEGORIES[seed % CATEGORIES.len()];
    let name = format!("{}-{:03}", category, seed / CATEGORIES.len());

    // 1.00 - 19.99
    let cents = 100 + ((seed * 617) % 1900) as i64;

    InventoryItem::new(seed as u64 + 1, name, Money::from_scaled(cents, 2))
}

/// "Three for the price of 2.7": a 10% cut on a full batch.
fn batch_discount_for(item: &InventoryItem) -> Discount {
    let full = item.cost.multiply_quantity(BATCH_SIZE);
    let fixed = full - full.percentage(Decimal::from(10));

    Discount {
        application_context: ApplicationContext::Batch,
        applicable_item_count: BATCH_SIZE,
        applicable_item_id: Some(item.id),
        fixed_amount_total: Some(fixed),
        ..Discount::base_attributes(discount_name("batch", item.id))
    }
}

fn single_discount_for(item: &InventoryItem) -> Discount {
    Discount {
        deductible_type: DeductibleType::Percentage,
        deductible_amount: Decimal::from(5),
        applicable_item_id: Some(item.id),
        priority: Decimal::from(2),
        ..Discount::base_attributes(discount_name("single", item.id))
    }
}

fn discount_name(kind: &str, id: ItemId) -> String {
    format!("{}_discount_on_item_{}", kind, id)
}
