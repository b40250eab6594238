//! MessagePack implementation of the Q-table store.

use std::{fs::File, path::Path};

use crate::{Result, error::Error, ports::QTableStore, q_learning::QTable};

/// MessagePack-based Q-table store.
///
/// Persists tables in the MessagePack binary format via rmp_serde, which
/// keeps the (board snapshot, move) keys intact through the round-trip.
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
///
/// use morris::adapters::MsgPackStore;
/// use morris::ports::QTableStore;
/// use morris::q_learning::QTable;
///
/// let store = MsgPackStore;
/// let table = QTable::new(0.1, 0.9);
///
/// store.save(&table, Path::new("q_table.msgpack"))?;
/// let loaded = store.load(Path::new("q_table.msgpack"))?;
/// # Ok::<(), morris::Error>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct MsgPackStore;

impl MsgPackStore {
    /// Create a new MessagePack store.
    pub fn new() -> Self {
        Self
    }
}

impl QTableStore for MsgPackStore {
    fn save(&self, table: &QTable, path: &Path) -> Result<()> {
        let mut file = File::create(path).map_err(|source| Error::Io {
            operation: format!("create file {path:?}"),
            source,
        })?;

        rmp_serde::encode::write(&mut file, table).map_err(|e| Error::SerializationContext {
            operation: "serialize Q-table to MessagePack".to_string(),
            message: e.to_string(),
        })?;

        Ok(())
    }

    fn load(&self, path: &Path) -> Result<Option<QTable>> {
        if !path.exists() {
            return Ok(None);
        }

        let file = File::open(path).map_err(|source| Error::Io {
            operation: format!("open file {path:?}"),
            source,
        })?;

        let table =
            rmp_serde::decode::from_read(&file).map_err(|e| Error::SerializationContext {
                operation: "deserialize Q-table from MessagePack".to_string(),
                message: e.to_string(),
            })?;

        Ok(Some(table))
    }

    fn clear(&self, path: &Path) -> Result<()> {
        if path.exists() {
            std::fs::remove_file(path).map_err(|source| Error::Io {
                operation: format!("remove file {path:?}"),
                source,
            })?;
        }
        Ok(())
    }
}
