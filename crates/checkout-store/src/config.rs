//! # Store Configuration
//!
//! Where the inventory lives and whether runtime edits are written back.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     CHECKOUT_INVENTORY_PATH=./inventory.yml                            │
//! │     CHECKOUT_PERSIST_CHANGES=true                                      │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/checkout/checkout.toml (Linux)                           │
//! │     ~/Library/Application Support/com.checkout.checkout/... (macOS)    │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     embedded default inventory, no persistence                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # checkout.toml
//! [inventory]
//! path = "inventory.yml"   # omit to use the embedded default inventory
//! persist_changes = false  # write added items/discounts back to the file
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::definition::DefinitionFormat;
use crate::error::{StoreError, StoreResult};

pub const ENV_INVENTORY_PATH: &str = "CHECKOUT_INVENTORY_PATH";
pub const ENV_PERSIST_CHANGES: &str = "CHECKOUT_PERSIST_CHANGES";

// =============================================================================
// Inventory Settings
// =============================================================================

/// Settings for the inventory file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventorySettings {
    /// Inventory definition file. `None` selects the embedded default.
    #[serde(default)]
    pub path: Option<PathBuf>,

    /// Default for whether `add_item`/`add_discount` rewrite the file.
    #[serde(default)]
    pub persist_changes: bool,
}

impl InventorySettings {
    /// Format of the configured file, if one is configured.
    pub fn format(&self) -> Option<StoreResult<DefinitionFormat>> {
        self.path.as_deref().map(DefinitionFormat::from_path)
    }
}

// =============================================================================
// Main Store Configuration
// =============================================================================

/// Complete store configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    #[serde(default)]
    pub inventory: InventorySettings,
}

impl StoreConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Config pointing at an inventory file.
    pub fn with_inventory(path: impl Into<PathBuf>) -> Self {
        StoreConfig {
            inventory: InventorySettings {
                path: Some(path.into()),
                persist_changes: false,
            },
        }
    }

    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (checkout.toml)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> StoreResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_path) {
            if path.exists() {
                info!(?path, "Loading store config from file");
                config = Self::from_file(&path)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load store config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Reads a config file without applying environment overrides.
    pub fn from_file(path: &Path) -> StoreResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| StoreError::read(path, e))?;
        toml::from_str(&contents).map_err(|source| StoreError::TomlParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Saves configuration to file.
    pub fn save(&self, config_path: Option<PathBuf>) -> StoreResult<()> {
        let path = config_path
            .or_else(Self::default_path)
            .ok_or_else(|| StoreError::InvalidConfig("No config path available".into()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(&path, contents)?;

        info!(?path, "Store config saved");
        Ok(())
    }

    /// Validates the configuration.
    pub fn validate(&self) -> StoreResult<()> {
        if let Some(format) = self.inventory.format() {
            format?;
        }

        if self.inventory.persist_changes && self.inventory.path.is_none() {
            return Err(StoreError::InvalidConfig(
                "persist_changes requires an inventory path".into(),
            ));
        }

        Ok(())
    }

    /// Applies environment variable overrides.
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Applies overrides from any key lookup (the process environment in
    /// production).
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup(ENV_INVENTORY_PATH) {
            debug!(path = %path, "Overriding inventory path from environment");
            self.inventory.path = Some(PathBuf::from(path));
        }

        if let Some(persist) = lookup(ENV_PERSIST_CHANGES) {
            match persist.to_lowercase().as_str() {
                "1" | "true" | "yes" => self.inventory.persist_changes = true,
                "0" | "false" | "no" => self.inventory.persist_changes = false,
                _ => warn!(value = %persist, "Unknown persist flag in environment"),
            }
        }
    }

    /// Per-user config file location.
    pub fn default_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "checkout", "checkout")
            .map(|dirs| dirs.config_dir().join("checkout.toml"))
    }

    /// Returns the inventory path if configured.
    pub fn inventory_path(&self) -> Option<&Path> {
        self.inventory.path.as_deref()
    }

    pub fn persist_changes(&self) -> bool {
        self.inventory.persist_changes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = StoreConfig::default();
        assert!(config.inventory_path().is_none());
        assert!(!config.persist_changes());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_toml_parsing() {
        let config: StoreConfig = toml::from_str(
            r#"
            [inventory]
            path = "data/inventory.json"
            persist_changes = true
            "#,
        )
        .unwrap();

        assert_eq!(config.inventory_path(), Some(Path::new("data/inventory.json")));
        assert!(config.persist_changes());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_section_uses_defaults() {
        let config: StoreConfig = toml::from_str("").unwrap();
        assert_eq!(config, StoreConfig::default());
    }

    #[test]
    fn test_config_validation() {
        let mut config = StoreConfig::with_inventory("inventory.txt");
        assert!(matches!(
            config.validate(),
            Err(StoreError::UnsupportedFormat { .. })
        ));

        config.inventory.path = None;
        config.inventory.persist_changes = true;
        assert!(matches!(config.validate(), Err(StoreError::InvalidConfig(_))));

        config.inventory.path = Some(PathBuf::from("inventory.yaml"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_overrides() {
        let mut config = StoreConfig::default();
        config.apply_overrides(lookup(&[
            (ENV_INVENTORY_PATH, "/srv/till/inventory.yml"),
            (ENV_PERSIST_CHANGES, "TRUE"),
        ]));

        assert_eq!(
            config.inventory_path(),
            Some(Path::new("/srv/till/inventory.yml"))
        );
        assert!(config.persist_changes());

        config.apply_overrides(lookup(&[(ENV_PERSIST_CHANGES, "maybe")]));
        assert!(config.persist_changes());
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("checkout.toml");
        let config = StoreConfig::with_inventory("inventory.yml");

        config.save(Some(path.clone())).unwrap();
        assert_eq!(StoreConfig::from_file(&path).unwrap(), config);
    }

    #[test]
    fn test_broken_toml_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("checkout.toml");
        std::fs::write(&path, "[inventory\npath = 1").unwrap();

        let err = StoreConfig::from_file(&path).unwrap_err();
        assert!(matches!(err, StoreError::TomlParse { .. }));
    }
}
