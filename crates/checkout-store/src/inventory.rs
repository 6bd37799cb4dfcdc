//! # Inventory
//!
//! The catalog a till prices against, backed by an inventory definition file.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Inventory Lifecycle                               │
//! │                                                                         │
//! │  load(path) ──► read ──► parse (yml/json) ──► validate every record    │
//! │  load_default() ──────► embedded inventory.yml ──┘        │             │
//! │                                                           ▼             │
//! │                                                      Inventory          │
//! │                                                           │             │
//! │  add_item / add_discount ──► validate ──► (persist?) ──► commit         │
//! │                                 │             │                         │
//! │                                 ✗             ✗                         │
//! │                           inventory and file untouched                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Writes are plain overwrites of the whole file. Concurrent writers are not
//! coordinated.

use std::path::{Path, PathBuf};

use checkout_core::{Catalog, Discount, InventoryItem, MemoryCatalog};
use tracing::{debug, info};

use crate::config::StoreConfig;
use crate::definition::{DefinitionFormat, InventoryDefinition};
use crate::error::{StoreError, StoreResult};

/// Embedded inventory used when no file is configured.
pub const DEFAULT_INVENTORY: &str = include_str!("../assets/inventory.yml");

const DEFAULT_INVENTORY_NAME: &str = "<embedded inventory.yml>";

/// Items and discounts, optionally bound to a definition file.
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    catalog: MemoryCatalog,
    path: Option<PathBuf>,
}

impl Inventory {
    /// An empty inventory with no backing file.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads and validates an inventory file.
    ///
    /// ## Errors
    /// - `FileNotFound` if `path` does not exist
    /// - `UnsupportedFormat` for extensions other than yml/yaml/json
    /// - `Yaml`/`Json` for malformed content
    /// - `Core(Validation)` for duplicate or malformed records
    pub fn load(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref();
        let format = DefinitionFormat::from_path(path)?;
        let content = std::fs::read_to_string(path).map_err(|e| StoreError::read(path, e))?;
        let definition = format.parse(&content, path)?;

        let mut inventory = Self::from_definition(definition)?;
        inventory.path = Some(path.to_path_buf());

        info!(
            path = %path.display(),
            items = inventory.items().len(),
            discounts = inventory.discounts().len(),
            "Inventory loaded"
        );
        Ok(inventory)
    }

    /// The embedded default inventory (items A, B, C).
    pub fn load_default() -> StoreResult<Self> {
        let definition =
            DefinitionFormat::Yaml.parse(DEFAULT_INVENTORY, Path::new(DEFAULT_INVENTORY_NAME))?;
        let inventory = Self::from_definition(definition)?;

        debug!(
            items = inventory.items().len(),
            discounts = inventory.discounts().len(),
            "Default inventory loaded"
        );
        Ok(inventory)
    }

    /// Loads the configured file, or the embedded default when none is set.
    pub fn from_config(config: &StoreConfig) -> StoreResult<Self> {
        match config.inventory_path() {
            Some(path) => Self::load(path),
            None => Self::load_default(),
        }
    }

    /// Builds an inventory from parsed records, validating each in file order.
    pub fn from_definition(definition: InventoryDefinition) -> StoreResult<Self> {
        let (items, discounts) = definition.into_records();
        let mut catalog = MemoryCatalog::new();

        for item in items {
            catalog.add_item(item)?;
        }
        for discount in discounts {
            catalog.add_discount(discount)?;
        }

        Ok(Inventory {
            catalog,
            path: None,
        })
    }

    /// Backing file, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Binds the inventory to a file used by later persisting writes.
    pub fn set_path(&mut self, path: impl Into<PathBuf>) {
        self.path = Some(path.into());
    }

    // =========================================================================
    // Edits
    // =========================================================================

    /// Adds an item, optionally rewriting the backing file.
    ///
    /// Invalid items and failed writes leave both the inventory and the file
    /// as they were.
    pub fn add_item(&mut self, item: InventoryItem, persist: bool) -> StoreResult<()> {
        let name = item.name.clone();
        let id = item.id;

        let mut next = self.catalog.clone();
        next.add_item(item)?;
        self.commit(next, persist)?;

        info!(item = %name, %id, persisted = persist, "Item added");
        Ok(())
    }

    /// Adds a discount, optionally rewriting the backing file.
    ///
    /// Invalid discounts and failed writes leave both the inventory and the
    /// file as they were. An unusable discount is stored but never applied.
    pub fn add_discount(&mut self, discount: Discount, persist: bool) -> StoreResult<()> {
        let name = discount.name.clone();

        let mut next = self.catalog.clone();
        next.add_discount(discount)?;
        self.commit(next, persist)?;

        info!(discount = %name, persisted = persist, "Discount added");
        Ok(())
    }

    fn commit(&mut self, next: MemoryCatalog, persist: bool) -> StoreResult<()> {
        if persist {
            let path = self.path.as_deref().ok_or(StoreError::NotFileBacked)?;
            write_catalog(&next, path)?;
        }
        self.catalog = next;
        Ok(())
    }

    // =========================================================================
    // Persistence
    // =========================================================================

    /// Writes the inventory to its backing file.
    pub fn save(&self) -> StoreResult<()> {
        let path = self.path.as_deref().ok_or(StoreError::NotFileBacked)?;
        write_catalog(&self.catalog, path)
    }

    /// Writes the inventory to `path`, in the format its extension names.
    ///
    /// The backing file stays unchanged.
    pub fn save_to(&self, path: impl AsRef<Path>) -> StoreResult<()> {
        write_catalog(&self.catalog, path.as_ref())
    }

    /// Snapshot of the inventory as a definition.
    pub fn to_definition(&self) -> InventoryDefinition {
        InventoryDefinition::from_records(self.catalog.items(), self.catalog.discounts())
    }
}

impl Catalog for Inventory {
    fn items(&self) -> &[InventoryItem] {
        self.catalog.items()
    }

    fn discounts(&self) -> &[Discount] {
        self.catalog.discounts()
    }
}

fn write_catalog(catalog: &MemoryCatalog, path: &Path) -> StoreResult<()> {
    let format = DefinitionFormat::from_path(path)?;
    let definition = InventoryDefinition::from_records(catalog.items(), catalog.discounts());
    let content = format.render(&definition, path)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;

    debug!(path = %path.display(), %format, "Inventory written");
    Ok(())
}
