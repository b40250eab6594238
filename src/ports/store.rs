//! Storage port for learned Q-tables.
//!
//! This trait is the persistence contract of the Q-learning engine: the
//! engine only needs a mapping to round-trip exactly, the serialization
//! format is the adapter's concern.

use std::path::Path;

use crate::{Result, q_learning::QTable};

/// Port for persisting and loading Q-tables.
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
///
/// use morris::ports::QTableStore;
/// use morris::q_learning::QTable;
///
/// fn flush<S: QTableStore>(store: &S, table: &QTable, path: &Path) -> morris::Result<()> {
///     store.save(table, path)
/// }
/// ```
pub trait QTableStore {
    /// Save a table to persistent storage.
    ///
    /// # Errors
    ///
    /// Returns an error if the path cannot be written or serialization
    /// fails.
    fn save(&self, table: &QTable, path: &Path) -> Result<()>;

    /// Load a table from persistent storage.
    ///
    /// Returns `Ok(None)` when nothing has been persisted at `path`;
    /// a missing table is a fresh start, not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if existing data cannot be read or deserialized.
    fn load(&self, path: &Path) -> Result<Option<QTable>>;

    /// Remove any persisted table at `path`. Removing a path that holds
    /// nothing is a no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if existing data cannot be removed.
    fn clear(&self, path: &Path) -> Result<()>;
}
