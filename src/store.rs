//! Roll history persistence.
//!
//! The history is a single JSON array in `SavedRolls.json`, most-recent-first,
//! rewritten whole on every save via an atomic temp-file replace. Read
//! failures of any kind (missing file, unreadable, malformed JSON) degrade to
//! an empty history so a damaged file never blocks the app from launching.

use crate::error::StoreError;
use crate::record::RollRecord;
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the persisted history within the data directory.
pub const HISTORY_FILE: &str = "SavedRolls.json";

#[derive(Debug, Clone)]
/// Loads and saves the ordered roll history at a fixed path.
pub struct HistoryStore {
    path: PathBuf,
}

impl HistoryStore {
    /// Bind a store to `SavedRolls.json` inside `data_dir`.
    #[must_use]
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(HISTORY_FILE),
        }
    }

    /// Path of the persisted file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the full history, most-recent-first.
    ///
    /// Never fails: a missing, unreadable, or malformed file yields an empty
    /// history. The fallback is logged at debug level only.
    #[must_use]
    pub fn load(&self) -> Vec<RollRecord> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) => {
                log::debug!("no readable history at {}: {err}", self.path.display());
                return Vec::new();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(history) => history,
            Err(err) => {
                log::debug!("malformed history at {}: {err}", self.path.display());
                Vec::new()
            }
        }
    }

    /// Write the full history, replacing the previous file atomically.
    ///
    /// The JSON body is written to a sibling temp file first and renamed over
    /// the target, so a crash mid-write leaves the previous valid file intact.
    ///
    /// # Errors
    /// Returns [`StoreError`] if serialization, the temp write, or the
    /// replacement fails. Callers inside this crate absorb the error; a
    /// failed save must never block further rolls.
    pub fn save(&self, history: &[RollRecord]) -> Result<(), StoreError> {
        write_json_atomic(&self.path, history)
    }
}

/// Serialize `value` as pretty JSON and atomically replace `path` with it.
pub(crate) fn write_json_atomic<T: serde::Serialize + ?Sized>(
    path: &Path,
    value: &T,
) -> Result<(), StoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let body = serde_json::to_string_pretty(value)? + "\n";
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, body)?;

    // Best-effort cross-platform replacement:
    // - Unix: rename() replaces destination atomically.
    // - Windows: rename() fails if dest exists; remove then rename.
    #[cfg(windows)]
    {
        if path.exists() {
            fs::remove_file(path)?;
        }
    }

    fs::rename(&tmp, path)?;
    Ok(())
}
