/*
store.rs

Copyright 2025 Hervé Quatremain

This file is part of Alicegrid.

Alicegrid is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Alicegrid is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Alicegrid. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Key/value persistence for the game records.
//!
//! Each key is stored as one JSON file under the data directory, serialized
//! with [`serde`]. The store degrades gracefully: every failure (store
//! disabled, unusable directory, serialization error) is logged and collapsed
//! to a boolean or a default value at the public boundary, so the callers
//! never have to handle persistence errors.

use directories::ProjectDirs;
use log::{debug, warn};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::error::Error;
use std::fmt;
use std::fs::{self, File, remove_file};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::PathBuf;

/// Key of the current game snapshot record.
pub const KEY_CURRENT: &str = "alice-current";

/// Key of the completed dates record.
pub const KEY_COMPLETED: &str = "alice-completed";

/// Key of the player stats record.
pub const KEY_STATS: &str = "alice-stats";

/// File written and deleted to check that the data directory is usable.
const PROBE_FILE: &str = "__storage_test__";

/// Failures of the underlying store.
///
/// These never cross the public boundary of the store; they are logged and
/// collapsed to a boolean or a default value.
#[derive(Debug)]
pub enum StoreError {
    /// Persistence is switched off or the data directory is unusable.
    Disabled,

    /// File access error.
    Io(std::io::Error),

    /// Value not encodable, or stored text not decodable.
    Serde(serde_json::Error),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            StoreError::Disabled => write!(f, "storage is disabled"),
            StoreError::Io(e) => write!(f, "storage file error: {e}"),
            StoreError::Serde(e) => write!(f, "storage encoding error: {e}"),
        }
    }
}

impl Error for StoreError {}

impl From<std::io::Error> for StoreError {
    fn from(e: std::io::Error) -> Self {
        StoreError::Io(e)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        StoreError::Serde(e)
    }
}

/// Key/value store over one JSON file per key.
pub struct Store {
    /// Directory holding the record files.
    data_dir: PathBuf,

    /// Configuration toggle; the store is a no-op when off.
    enabled: bool,
}

impl Store {
    /// Create a [`Store`] object over the given directory.
    pub fn new(data_dir: PathBuf, enabled: bool) -> Self {
        debug!("Store directory: {data_dir:?} (enabled: {enabled})");
        Self { data_dir, enabled }
    }

    /// Create a [`Store`] object over the standard data directory for the
    /// platform, creating the directory when needed.
    ///
    /// When the directory cannot be determined, the store comes up disabled.
    pub fn open(enabled: bool) -> Self {
        match ProjectDirs::from("", "", "alicegrid") {
            Some(dirs) => {
                let data_dir: PathBuf = dirs.data_dir().to_path_buf();
                if let Err(error) = fs::create_dir_all(&data_dir) {
                    warn!("Cannot create the data directory {data_dir:?}: {error}");
                }
                Self::new(data_dir, enabled)
            }
            None => {
                warn!("Cannot determine the data directory: storage disabled");
                Self::new(PathBuf::new(), false)
            }
        }
    }

    /// Whether the store is switched on and the data directory is usable.
    ///
    /// Availability is probed with a write-then-delete test file on every
    /// call; it is never cached.
    pub fn is_enabled(&self) -> bool {
        if !self.enabled {
            return false;
        }

        let probe: PathBuf = self.data_dir.join(PROBE_FILE);
        match fs::write(&probe, PROBE_FILE) {
            Ok(()) => {
                let _ = remove_file(&probe);
                true
            }
            Err(_) => false,
        }
    }

    /// Path of the file holding the given key.
    fn key_path(&self, key: &str) -> PathBuf {
        self.data_dir.join(format!("{key}.json"))
    }

    /// Serialize and store a value under the given key.
    fn try_save<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        if !self.is_enabled() {
            return Err(StoreError::Disabled);
        }

        let file: File = File::create(self.key_path(key))?;
        let mut writer: BufWriter<File> = BufWriter::new(file);
        serde_json::to_writer(&mut writer, value)?;
        writer.flush()?;
        Ok(())
    }

    /// Retrieve and deserialize the value stored under the given key.
    ///
    /// Return None when the key has no record.
    fn try_load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        if !self.is_enabled() {
            return Err(StoreError::Disabled);
        }

        let file: File = match File::open(self.key_path(key)) {
            Ok(f) => f,
            Err(error) => match error.kind() {
                ErrorKind::NotFound => return Ok(None),
                _ => return Err(StoreError::Io(error)),
            },
        };
        let reader: BufReader<File> = BufReader::new(file);
        let value: T = serde_json::from_reader(reader)?;
        Ok(Some(value))
    }

    /// Store a value under the given key.
    ///
    /// Return whether the value was stored. Failures are logged, never
    /// raised.
    pub fn save<T: Serialize>(&self, key: &str, value: &T) -> bool {
        match self.try_save(key, value) {
            Ok(()) => true,
            Err(StoreError::Disabled) => false,
            Err(error) => {
                warn!("Failed to save \"{key}\": {error}");
                false
            }
        }
    }

    /// Return the value stored under the given key, or the default when the
    /// store is disabled, the key has no record, or the record is unreadable.
    pub fn load<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        match self.try_load(key) {
            Ok(Some(value)) => value,
            Ok(None) | Err(StoreError::Disabled) => default,
            Err(error) => {
                warn!("Failed to load \"{key}\": {error}");
                default
            }
        }
    }

    /// Delete the record stored under the given key, best effort.
    pub fn remove(&self, key: &str) {
        if !self.is_enabled() {
            return;
        }
        let _ = remove_file(self.key_path(key));
    }

    /// Delete all the game records.
    pub fn clear_all(&self) {
        for key in [KEY_CURRENT, KEY_COMPLETED, KEY_STATS] {
            self.remove(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    static TEST_DIR_SEQ: AtomicU32 = AtomicU32::new(0);

    /// Create a store over a fresh temporary directory.
    fn temp_store(enabled: bool) -> Store {
        let seq = TEST_DIR_SEQ.fetch_add(1, Ordering::Relaxed);
        let dir = std::env::temp_dir().join(format!(
            "alicegrid-store-test-{}-{seq}",
            std::process::id()
        ));
        fs::create_dir_all(&dir).unwrap();
        Store::new(dir, enabled)
    }

    #[test]
    fn test_save_load_round_trip() {
        let store = temp_store(true);
        let value = vec!["2025-01-18".to_string(), "2025-01-19".to_string()];
        assert!(store.save(KEY_COMPLETED, &value));
        let loaded: Vec<String> = store.load(KEY_COMPLETED, Vec::new());
        assert_eq!(loaded, value);
    }

    #[test]
    fn test_load_missing_key_returns_default() {
        let store = temp_store(true);
        let loaded: Vec<String> = store.load(KEY_COMPLETED, vec!["fallback".to_string()]);
        assert_eq!(loaded, vec!["fallback".to_string()]);
    }

    #[test]
    fn test_disabled_store_is_a_noop() {
        let store = temp_store(false);
        assert!(!store.is_enabled());
        assert!(!store.save(KEY_STATS, &42u32));
        let loaded: u32 = store.load(KEY_STATS, 7);
        assert_eq!(loaded, 7);
    }

    #[test]
    fn test_unusable_directory_disables_the_store() {
        let store = Store::new(PathBuf::from("/nonexistent/alicegrid"), true);
        assert!(!store.is_enabled());
        assert!(!store.save(KEY_STATS, &42u32));
        let loaded: u32 = store.load(KEY_STATS, 7);
        assert_eq!(loaded, 7);
    }

    #[test]
    fn test_corrupt_record_returns_default() {
        let store = temp_store(true);
        fs::write(store.key_path(KEY_STATS), "not json").unwrap();
        let loaded: u32 = store.load(KEY_STATS, 7);
        assert_eq!(loaded, 7);
    }

    #[test]
    fn test_remove_is_best_effort() {
        let store = temp_store(true);
        // Removing an absent key must not fail
        store.remove(KEY_CURRENT);

        assert!(store.save(KEY_CURRENT, &1u32));
        store.remove(KEY_CURRENT);
        let loaded: u32 = store.load(KEY_CURRENT, 0);
        assert_eq!(loaded, 0);
    }

    #[test]
    fn test_clear_all_removes_the_game_records() {
        let store = temp_store(true);
        assert!(store.save(KEY_CURRENT, &1u32));
        assert!(store.save(KEY_COMPLETED, &2u32));
        assert!(store.save(KEY_STATS, &3u32));
        store.clear_all();
        assert_eq!(store.load(KEY_CURRENT, 0u32), 0);
        assert_eq!(store.load(KEY_COMPLETED, 0u32), 0);
        assert_eq!(store.load(KEY_STATS, 0u32), 0);
    }

    #[test]
    fn test_probe_is_reevaluated() {
        let store = temp_store(true);
        assert!(store.is_enabled());
        fs::remove_dir_all(&store.data_dir).unwrap();
        assert!(!store.is_enabled());
    }
}
