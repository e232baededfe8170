//! Persistent per-user configuration.
//!
//! Two values survive app launches independently of the roll history: the
//! selected die type and the dice amount. They are stored as a small JSON
//! object in `Settings.json`, written with the same atomic replace as the
//! history file. A missing or damaged file falls back to the defaults.

use crate::error::StoreError;
use crate::store::write_json_atomic;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the persisted configuration within the data directory.
pub const CONFIG_FILE: &str = "Settings.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
/// The user's selected die type and dice amount.
pub struct RollConfig {
    /// Number of faces on the selected die.
    #[serde(rename = "diceSides")]
    pub die_sides: u32,
    /// Number of dice per roll.
    #[serde(rename = "rollAmount")]
    pub roll_amount: u32,
}

impl Default for RollConfig {
    fn default() -> Self {
        Self {
            die_sides: 6,
            roll_amount: 1,
        }
    }
}

#[derive(Debug, Clone)]
/// Loads and saves [`RollConfig`] at a fixed path.
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    /// Bind a store to `Settings.json` inside `data_dir`.
    #[must_use]
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(CONFIG_FILE),
        }
    }

    /// Read the configuration, falling back to defaults on any failure.
    #[must_use]
    pub fn load(&self) -> RollConfig {
        fs::read_to_string(&self.path)
            .ok()
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default()
    }

    /// Persist the configuration with an atomic replace.
    ///
    /// # Errors
    /// Returns [`StoreError`] if the write or replacement fails.
    pub fn save(&self, config: RollConfig) -> Result<(), StoreError> {
        write_json_atomic(&self.path, &config)
    }
}
