//! In-memory Q-table store for testing.

use std::{
    collections::HashMap,
    path::Path,
    sync::{Arc, Mutex},
};

use crate::{Result, error::Error, ports::QTableStore, q_learning::QTable};

/// In-memory store for tests.
///
/// Keeps serialized tables in a shared HashMap instead of touching the
/// file system. Clones share the same underlying storage.
#[derive(Clone)]
pub struct InMemoryStore {
    storage: Arc<Mutex<HashMap<String, Vec<u8>>>>,
}

impl InMemoryStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self {
            storage: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Number of tables currently stored.
    pub fn count(&self) -> usize {
        self.storage.lock().unwrap().len()
    }

    /// Check whether a table exists at the given path.
    pub fn contains(&self, path: &Path) -> bool {
        let key = path.to_string_lossy().to_string();
        self.storage.lock().unwrap().contains_key(&key)
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl QTableStore for InMemoryStore {
    fn save(&self, table: &QTable, path: &Path) -> Result<()> {
        let key = path.to_string_lossy().to_string();

        let bytes = rmp_serde::to_vec(table).map_err(|e| Error::SerializationContext {
            operation: "serialize Q-table for in-memory storage".to_string(),
            message: e.to_string(),
        })?;

        self.storage.lock().unwrap().insert(key, bytes);
        Ok(())
    }

    fn load(&self, path: &Path) -> Result<Option<QTable>> {
        let key = path.to_string_lossy().to_string();
        let storage = self.storage.lock().unwrap();

        let Some(bytes) = storage.get(&key) else {
            return Ok(None);
        };

        let table = rmp_serde::from_slice(bytes).map_err(|e| Error::SerializationContext {
            operation: "deserialize Q-table from in-memory storage".to_string(),
            message: e.to_string(),
        })?;

        Ok(Some(table))
    }

    fn clear(&self, path: &Path) -> Result<()> {
        let key = path.to_string_lossy().to_string();
        self.storage.lock().unwrap().remove(&key);
        Ok(())
    }
}
