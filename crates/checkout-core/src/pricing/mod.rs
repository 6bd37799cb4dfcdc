//! # Pricing Engine
//!
//! Turns cart entries and a discount pool into a [`SummationResult`].
//!
//! ## Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  selector  ──►  entry  ──►  global  ──►  summator                       │
//! │  which rules    batch then   cart-wide    ties it together              │
//! │  price an       single       rules on     and returns the               │
//! │  entry          pricing      the total    itemized result               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything here is a pure function: no logging, no I/O, no caches.

pub mod cursor;
pub mod entry;
pub mod global;
pub mod selector;
pub mod summator;

pub use cursor::Cursor;
pub use entry::price_entry;
pub use global::{apply_global_discounts, GlobalOutcome};
pub use selector::{select_discounts, SelectedDiscounts};
pub use summator::{summarize, SummationResult};
