//! Persistent slot store
//!
//! The counter's durable state lives behind [`SlotStore`], a narrow get/set
//! interface over named text slots. Two backends are provided:
//!
//! - [`MemoryStore`] for tests and demos
//! - [`FileStore`] for durable state that survives reloads
//!
//! Slot values are always text; interpreting them is the caller's concern.
//! Writes are last-write-wins with no coordination between independent
//! users of the same backing store.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use thiserror::Error;

/// Error type for slot store operations
#[derive(Debug, Error)]
pub enum StoreError {
    /// Backing file could not be read or written
    #[error("store I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Backing file content is not a valid slot map
    #[error("store file is not valid JSON: {0}")]
    Format(#[from] serde_json::Error),
}

/// Result type alias for store operations
pub type Result<T> = std::result::Result<T, StoreError>;

/// Narrow interface over a durable per-user key-value store.
pub trait SlotStore: Send + Sync {
    /// Read a slot. `None` means the slot was never written.
    fn get(&self, slot: &str) -> Result<Option<String>>;

    /// Write a slot, replacing any previous value.
    fn set(&self, slot: &str, value: &str) -> Result<()>;
}
