//! # checkout-core: Pure Pricing Engine for Checkout
//!
//! This crate prices a cart of scanned items under a pool of discount rules.
//! It contains no I/O: inventories are loaded and persisted by
//! `checkout-store`.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Checkout Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              checkout-store (Inventory + Session)               │   │
//! │  │    inventory.yml ──► Inventory ──► Checkout::scan/total         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ checkout-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │ discount  │  │   cart    │  │  pricing  │  │   │
//! │  │   │   Item    │  │   rules   │  │   Cart    │  │  Cursor   │  │   │
//! │  │   │ CartEntry │  │ base rule │  │  Catalog  │  │ summarize │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO LOGGING • NO GLOBAL STATE • PURE FUNCTIONS       │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Inventory items and cart entries
//! - [`money`] - Exact decimal money
//! - [`discount`] - Discount rules and their predicates
//! - [`pricing`] - The pricing pipeline (selector, entry pricer, globals)
//! - [`cart`] - Scanned items awaiting pricing
//! - [`catalog`] - Item and discount lookup
//! - [`error`] - Domain error types
//! - [`validation`] - Record validation and scan list parsing
//!
//! ## Example Usage
//!
//! ```rust
//! use checkout_core::catalog::MemoryCatalog;
//! use checkout_core::cart::Cart;
//! use checkout_core::money::Money;
//! use checkout_core::types::InventoryItem;
//!
//! let catalog = MemoryCatalog::new()
//!     .with_item(InventoryItem::new(1, "A", Money::from_units(50)))
//!     .with_item(InventoryItem::new(2, "B", Money::from_units(30)));
//!
//! let mut cart = Cart::new();
//! cart.scan_name(&catalog, "A").unwrap();
//! cart.scan_name(&catalog, "B").unwrap();
//!
//! assert_eq!(cart.total(&catalog).total, Money::from_units(80));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod discount;
pub mod error;
pub mod money;
pub mod pricing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::Cart;
pub use catalog::{Catalog, MemoryCatalog};
pub use discount::{ApplicationContext, DeductibleType, Discount};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use pricing::{summarize, Cursor, SummationResult};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum quantity of a single item in a cart
///
/// Catches runaway scanners (a held-down trigger) before pricing.
pub const MAX_ITEM_QUANTITY: u32 = 999;
