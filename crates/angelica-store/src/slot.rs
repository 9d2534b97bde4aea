//! # Durable Slots
//!
//! A slot is one named value in a per-profile key-value store: the
//! browser's local storage on the web, a directory of JSON files here.
//!
//! ## Backends
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        SlotStorage                                      │
//! │        read(key) → Option<String>        write(key, value)              │
//! │                                                                         │
//! │   ┌──────────────────────┐          ┌──────────────────────────────┐    │
//! │   │   MemoryStorage      │          │   FileStorage                │    │
//! │   │   Arc<Mutex<Map>>    │          │   <dir>/angelica-cart.json   │    │
//! │   │   clones share data  │          │   <dir>/angelica-wishlist.…  │    │
//! │   │   (tests, previews)  │          │   temp file + rename         │    │
//! │   └──────────────────────┘          └──────────────────────────────┘    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Backends store raw strings. Encoding is the stores' job, which keeps
//! this trait free of any serde bound.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde::de::DeserializeOwned;
use tracing::{debug, error};

use crate::error::{StoreError, StoreResult};

// =============================================================================
// Slot Storage Trait
// =============================================================================

/// String key-value storage backing the stores.
pub trait SlotStorage {
    /// Reads the value stored under `key`. `Ok(None)` when the slot is empty.
    fn read(&self, key: &str) -> StoreResult<Option<String>>;

    /// Replaces the value stored under `key`.
    fn write(&mut self, key: &str, value: &str) -> StoreResult<()>;
}

// =============================================================================
// Hydration Helper
// =============================================================================

/// Reads and decodes a slot for hydration.
///
/// ## Recovery Rules
/// - missing slot → `T::default()`
/// - unreadable slot → logged, `T::default()`
/// - unparseable slot → logged, `T::default()`
///
/// Never fails: a broken slot must not keep the storefront from starting.
pub fn load_slot<T, S>(storage: &S, key: &str) -> T
where
    T: DeserializeOwned + Default,
    S: SlotStorage + ?Sized,
{
    let raw = match storage.read(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            debug!(slot = key, "Slot empty, starting fresh");
            return T::default();
        }
        Err(e) => {
            error!(slot = key, error = %e, "Failed to read slot, starting empty");
            return T::default();
        }
    };

    match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(e) => {
            error!(slot = key, error = %e, "Failed to parse slot, starting empty");
            T::default()
        }
    }
}

// =============================================================================
// Memory Storage
// =============================================================================

/// In-memory slots. Clones share the same map, like two tabs of one profile.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slots: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn slots(&self) -> MutexGuard<'_, HashMap<String, String>> {
        // A panic while holding the lock cannot leave a half-written String.
        self.slots.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl SlotStorage for MemoryStorage {
    fn read(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.slots().get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> StoreResult<()> {
        self.slots().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// =============================================================================
// File Storage
// =============================================================================

/// One JSON file per slot inside a data directory.
///
/// Writes go to `<key>.json.tmp` and are renamed over `<key>.json`, so a
/// crash mid-write leaves the previous value intact.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Uses `dir` for slot files. The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        FileStorage { dir: dir.into() }
    }

    /// Path of the file backing `key`.
    pub fn slot_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl SlotStorage for FileStorage {
    fn read(&self, key: &str) -> StoreResult<Option<String>> {
        match fs::read_to_string(self.slot_path(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::io(key, e)),
        }
    }

    fn write(&mut self, key: &str, value: &str) -> StoreResult<()> {
        fs::create_dir_all(&self.dir).map_err(|e| StoreError::io(key, e))?;

        let path = self.slot_path(key);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value).map_err(|e| StoreError::io(key, e))?;
        fs::rename(&tmp, &path).map_err(|e| StoreError::io(key, e))?;

        debug!(slot = key, path = %path.display(), bytes = value.len(), "Slot written");
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_clones_share_slots() {
        let mut a = MemoryStorage::new();
        let b = a.clone();

        a.write("k", "v").unwrap();
        assert_eq!(b.read("k").unwrap().as_deref(), Some("v"));

        let mut c = b.clone();
        c.write("k", "w").unwrap();
        assert_eq!(a.read("k").unwrap().as_deref(), Some("w"));
    }

    #[test]
    fn test_file_storage_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = FileStorage::new(dir.path().join("nested"));

        assert_eq!(storage.read("angelica-cart").unwrap(), None);

        storage.write("angelica-cart", "[]").unwrap();
        assert_eq!(storage.read("angelica-cart").unwrap().as_deref(), Some("[]"));
        assert!(storage.slot_path("angelica-cart").exists());
        assert!(!dir.path().join("nested/angelica-cart.json.tmp").exists());

        storage.write("angelica-cart", "[1]").unwrap();
        assert_eq!(storage.read("angelica-cart").unwrap().as_deref(), Some("[1]"));

        // A second handle on the same directory sees the latest value.
        let other = FileStorage::new(dir.path().join("nested"));
        assert_eq!(other.read("angelica-cart").unwrap().as_deref(), Some("[1]"));
    }

    #[test]
    fn test_load_slot_missing_and_corrupt_yield_default() {
        let mut storage = MemoryStorage::new();

        let missing: Vec<u32> = load_slot(&storage, "numbers");
        assert!(missing.is_empty());

        storage.write("numbers", "{not json").unwrap();
        let corrupt: Vec<u32> = load_slot(&storage, "numbers");
        assert!(corrupt.is_empty());

        storage.write("numbers", "[1,2,3]").unwrap();
        let valid: Vec<u32> = load_slot(&storage, "numbers");
        assert_eq!(valid, vec![1, 2, 3]);
    }

    #[test]
    fn test_load_slot_unreadable_yields_default() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path());
        // A directory where the slot file should be makes the read fail.
        fs::create_dir_all(storage.slot_path("numbers")).unwrap();

        assert!(storage.read("numbers").is_err());
        let value: Vec<u32> = load_slot(&storage, "numbers");
        assert!(value.is_empty());
    }
}
