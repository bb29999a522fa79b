//! Persistence gateway: a small key-value string store plus the load/save
//! helpers for the three saved entries (character, floor, inventory).
//!
//! Loads never fail upward: an absent or unreadable entry falls back to the
//! default value for its slot. Saves are fire-and-forget; a failed write is
//! logged and play continues.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;

use directories::ProjectDirs;
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::character::Character;
use crate::inventory::Inventory;

pub const CHARACTER_KEY: &str = "idleRPGCharacter";
pub const FLOOR_KEY: &str = "idleRPGCurrentFloor";
pub const INVENTORY_KEY: &str = "idleRPGInventory";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("no platform data directory available")]
    NoDataDir,
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Key-value string store the engine saves through. Implementations hold
/// JSON-encoded entries under the three `idleRPG*` keys.
pub trait StateStore {
    /// Returns the stored value, or `None` when the key has never been
    /// written (or was cleared).
    fn load(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
    fn clear(&mut self, key: &str) -> Result<(), StorageError>;
}

/// HashMap-backed store for tests and embedding.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StateStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn clear(&mut self, key: &str) -> Result<(), StorageError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// File-backed store: one `<key>.json` file per entry under the platform
/// data directory.
#[derive(Debug)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new() -> Result<Self, StorageError> {
        let dirs = ProjectDirs::from("", "", "spire").ok_or(StorageError::NoDataDir)?;
        Self::with_dir(dirs.data_dir().to_path_buf())
    }

    /// Store rooted at an explicit directory, created if missing.
    pub fn with_dir(dir: PathBuf) -> Result<Self, StorageError> {
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl StateStore for FileStore {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        fs::write(self.path_for(key), value)?;
        Ok(())
    }

    fn clear(&mut self, key: &str) -> Result<(), StorageError> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

fn load_or_default<T, F>(store: &impl StateStore, key: &str, fallback: F) -> T
where
    T: DeserializeOwned,
    F: FnOnce() -> T,
{
    match store.load(key) {
        Ok(Some(raw)) => match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(err) => {
                tracing::debug!(key, %err, "stored entry unreadable, using defaults");
                fallback()
            }
        },
        Ok(None) => fallback(),
        Err(err) => {
            tracing::warn!(key, %err, "load failed, using defaults");
            fallback()
        }
    }
}

fn persist<T: Serialize>(store: &mut impl StateStore, key: &str, value: &T) {
    let encoded = match serde_json::to_string(value) {
        Ok(encoded) => encoded,
        Err(err) => {
            tracing::warn!(key, %err, "could not encode entry");
            return;
        }
    };
    if let Err(err) = store.save(key, &encoded) {
        tracing::warn!(key, %err, "save failed");
    }
}

pub fn load_character(store: &impl StateStore) -> Character {
    load_or_default(store, CHARACTER_KEY, Character::new)
}

pub fn load_floor(store: &impl StateStore) -> u32 {
    load_or_default(store, FLOOR_KEY, || 1)
}

pub fn load_inventory(store: &impl StateStore) -> Inventory {
    load_or_default(store, INVENTORY_KEY, Inventory::new)
}

pub fn save_character(store: &mut impl StateStore, character: &Character) {
    persist(store, CHARACTER_KEY, character);
}

pub fn save_floor(store: &mut impl StateStore, floor: u32) {
    persist(store, FLOOR_KEY, &floor);
}

pub fn save_inventory(store: &mut impl StateStore, inventory: &Inventory) {
    persist(store, INVENTORY_KEY, inventory);
}

/// Removes all three saved entries.
pub fn clear_all(store: &mut impl StateStore) {
    for key in [CHARACTER_KEY, FLOOR_KEY, INVENTORY_KEY] {
        if let Err(err) = store.clear(key) {
            tracing::warn!(key, %err, "clear failed");
        }
    }
}
