//! # Store Error Types
//!
//! Error types for inventory files, configuration and checkout sessions.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  io::Error / serde_yaml / serde_json / toml                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← Adds the file path                         │
//! │       ▲                                                                 │
//! │       │                                                                 │
//! │  CoreError / ValidationError (checkout-core) ← Rejected records        │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::{Path, PathBuf};

use checkout_core::CoreError;
use thiserror::Error;

/// Inventory, configuration and session errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A file that must exist was not found.
    ///
    /// ## When This Occurs
    /// - `Inventory::load` on a missing path
    /// - A config file names an inventory that was deleted
    #[error("required file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Any other I/O failure (permissions, disk full).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML could not be read or written.
    #[error("YAML error at {path}: {source}")]
    Yaml {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    /// JSON could not be read or written.
    #[error("JSON error at {path}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// The config file is not valid TOML for [`crate::config::StoreConfig`].
    #[error("failed to parse TOML at {path}: {source}")]
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// The config could not be rendered as TOML.
    #[error("failed to serialize config: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// The inventory path has an extension we cannot read.
    ///
    /// ## When This Occurs
    /// - `inventory.txt`, `inventory` (no extension)
    #[error("unsupported inventory format: {path} (expected .yml, .yaml or .json)")]
    UnsupportedFormat { path: PathBuf },

    /// Persisting was requested for an inventory with no backing file.
    ///
    /// ## When This Occurs
    /// - `add_item(.., persist = true)` on the embedded default inventory
    #[error("inventory has no backing file to persist to")]
    NotFileBacked,

    /// Configuration is inconsistent.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Catalog or cart bookkeeping error.
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl StoreError {
    /// Maps a read failure, keeping NotFound distinct.
    pub fn read(path: &Path, err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            StoreError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            StoreError::Io(err)
        }
    }

    pub fn yaml(path: &Path, source: serde_yaml::Error) -> Self {
        StoreError::Yaml {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn json(path: &Path, source: serde_json::Error) -> Self {
        StoreError::Json {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn unsupported(path: &Path) -> Self {
        StoreError::UnsupportedFormat {
            path: path.to_path_buf(),
        }
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
