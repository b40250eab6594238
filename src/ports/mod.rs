//! Ports (trait boundaries) for external dependencies.
//!
//! The domain owns these interfaces; infrastructure adapters implement
//! them. The only external dependency of this core is persistent storage
//! for learned Q-tables.

pub mod store;

pub use store::QTableStore;
