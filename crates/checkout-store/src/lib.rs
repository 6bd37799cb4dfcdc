//! # checkout-store: Inventory Files and Checkout Sessions
//!
//! This crate loads inventories from disk, persists runtime edits, and runs
//! checkout sessions on top of the `checkout-core` pricing engine.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Checkout Data Flow                               │
//! │                                                                         │
//! │  checkout.toml + CHECKOUT_* env                                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  checkout-store (THIS CRATE)                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │    config     │    │   inventory   │    │   checkout   │  │   │
//! │  │   │               │    │               │    │              │  │   │
//! │  │   │ StoreConfig   │───►│ Inventory     │◄───│ Checkout     │  │   │
//! │  │   │ TOML + env    │    │ load / save   │    │ scan / total │  │   │
//! │  │   └───────────────┘    └───────┬───────┘    └──────────────┘  │   │
//! │  │                                │ definition                    │   │
//! │  └────────────────────────────────┼────────────────────────────────┘   │
//! │                                   ▼                                     │
//! │                      inventory.yml / inventory.json                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`config`] - Store configuration (TOML file + environment)
//! - [`definition`] - On-disk inventory format
//! - [`inventory`] - File-backed catalog
//! - [`checkout`] - Till session with logging
//! - [`error`] - Store error types
//!
//! ## Usage
//!
//! ```rust
//! use checkout_core::Money;
//! use checkout_store::{Checkout, Inventory};
//!
//! let mut checkout = Checkout::new(Inventory::load_default()?);
//! checkout.bulk_scan("B, A, B, B, A");
//!
//! assert_eq!(checkout.total().total, Money::from_units(165));
//! # Ok::<(), checkout_store::StoreError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod checkout;
pub mod config;
pub mod definition;
pub mod error;
pub mod inventory;

// =============================================================================
// Re-exports
// =============================================================================

pub use checkout::Checkout;
pub use config::StoreConfig;
pub use definition::{DefinitionFormat, InventoryDefinition};
pub use error::{StoreError, StoreResult};
pub use inventory::Inventory;
