//! Key-value persistence medium. Every value is a single JSON blob,
//! replaced wholesale on write; there is no delta log and no transaction.
//!
//! Two media exist: a flat-file directory (one file per key, synchronous
//! `std::fs`) and an in-memory map for tests and ephemeral use.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::config;
use crate::core::errors::StoreResult;
use crate::events::{ChangeEvent, EventBus, SubscriberId};

enum Medium {
    Memory(Mutex<HashMap<String, Vec<u8>>>),
    Disk(PathBuf),
}

pub struct Store {
    medium: Medium,
    bus: EventBus,
}

impl Store {
    /// Open a flat-file store rooted at `dir`, creating it if needed.
    pub fn open(dir: impl AsRef<Path>) -> StoreResult<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        debug!(dir = %dir.display(), "opened disk store");
        Ok(Store { medium: Medium::Disk(dir), bus: EventBus::new() })
    }

    pub fn open_default() -> StoreResult<Self> {
        Self::open(config::data_dir())
    }

    pub fn in_memory() -> Self {
        Store {
            medium: Medium::Memory(Mutex::new(HashMap::new())),
            bus: EventBus::new(),
        }
    }

    pub fn get(&self, key: &str) -> StoreResult<Option<Vec<u8>>> {
        match &self.medium {
            Medium::Memory(map) => {
                let map = map.lock().expect("store lock poisoned");
                Ok(map.get(key).cloned())
            }
            Medium::Disk(dir) => match fs::read(file_for(dir, key)) {
                Ok(bytes) => Ok(Some(bytes)),
                Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
                Err(err) => Err(err.into()),
            },
        }
    }

    pub fn set(&self, key: &str, value: &[u8]) -> StoreResult<()> {
        match &self.medium {
            Medium::Memory(map) => {
                let mut map = map.lock().expect("store lock poisoned");
                map.insert(key.to_string(), value.to_vec());
            }
            Medium::Disk(dir) => {
                fs::write(file_for(dir, key), value)?;
            }
        }
        debug!(key, bytes = value.len(), "wrote value");
        Ok(())
    }

    /// Deleting a missing key is a no-op.
    pub fn delete(&self, key: &str) -> StoreResult<()> {
        match &self.medium {
            Medium::Memory(map) => {
                let mut map = map.lock().expect("store lock poisoned");
                map.remove(key);
            }
            Medium::Disk(dir) => match fs::remove_file(file_for(dir, key)) {
                Ok(()) => {}
                Err(err) if err.kind() == ErrorKind::NotFound => {}
                Err(err) => return Err(err.into()),
            },
        }
        Ok(())
    }

    /// Missing key reads as `Ok(None)`; a present but malformed blob is
    /// `StoreError::Json`, not a panic.
    pub fn get_json<T: DeserializeOwned>(&self, key: &str) -> StoreResult<Option<T>> {
        match self.get(key)? {
            Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            None => Ok(None),
        }
    }

    pub fn set_json<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> StoreResult<()> {
        let bytes = serde_json::to_vec(value)?;
        self.set(key, &bytes)
    }

    /// Register a change listener. Callbacks run synchronously on the
    /// mutating thread and must not mutate the store themselves.
    pub fn subscribe<F>(&self, callback: F) -> SubscriberId
    where
        F: Fn(&ChangeEvent) + Send + Sync + 'static,
    {
        self.bus.subscribe(callback)
    }

    pub fn unsubscribe(&self, id: SubscriberId) {
        self.bus.unsubscribe(id);
    }

    pub fn publish(&self, event: ChangeEvent) {
        self.bus.publish(&event);
    }
}

// Ids are opaque caller-supplied strings, so the whole key is
// percent-encoded: the mapping is injective (distinct keys never share a
// file) and the result contains no path separators.
fn file_for(dir: &Path, key: &str) -> PathBuf {
    dir.join(format!("{}.json", urlencoding::encode(key)))
}
