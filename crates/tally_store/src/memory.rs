//! In-memory slot store for tests and demos.

use crate::{Result, SlotStore};
use parking_lot::RwLock;
use std::collections::HashMap;

/// Volatile store with the same observable behavior as a durable backend.
#[derive(Default)]
pub struct MemoryStore {
    slots: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of slots ever written.
    pub fn len(&self) -> usize {
        self.slots.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.read().is_empty()
    }
}

impl SlotStore for MemoryStore {
    fn get(&self, slot: &str) -> Result<Option<String>> {
        Ok(self.slots.read().get(slot).cloned())
    }

    fn set(&self, slot: &str, value: &str) -> Result<()> {
        self.slots.write().insert(slot.to_string(), value.to_string());
        Ok(())
    }
}
