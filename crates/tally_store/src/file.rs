//! File-backed slot store.
//!
//! One JSON object per store file, slot name to text value. The file is
//! read once on open and rewritten in full on every `set`, so the on-disk
//! state always reflects the last completed write.

use crate::{Result, SlotStore};
use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Durable store persisting slots to a single JSON file.
pub struct FileStore {
    path: PathBuf,
    slots: Mutex<BTreeMap<String, String>>,
}

impl FileStore {
    /// Open a store file. A missing file opens as an empty store; the file
    /// is created on the first write.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let slots = match fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw)?,
            Err(err) if err.kind() == ErrorKind::NotFound => BTreeMap::new(),
            Err(err) => return Err(err.into()),
        };
        Ok(Self {
            path,
            slots: Mutex::new(slots),
        })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self, slots: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let payload = serde_json::to_string_pretty(slots)?;
        fs::write(&self.path, payload)?;
        Ok(())
    }
}

impl SlotStore for FileStore {
    fn get(&self, slot: &str) -> Result<Option<String>> {
        Ok(self.slots.lock().get(slot).cloned())
    }

    fn set(&self, slot: &str, value: &str) -> Result<()> {
        let mut slots = self.slots.lock();
        slots.insert(slot.to_string(), value.to_string());
        tracing::debug!("slot '{}' <- '{}' ({})", slot, value, self.path.display());
        self.flush(&slots)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StoreError;

    fn temp_store_path(name: &str) -> PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!("tally_store_test_{}_{}.json", std::process::id(), name));
        let _ = fs::remove_file(&path);
        path
    }

    #[test]
    fn test_missing_file_opens_empty() {
        let path = temp_store_path("missing");
        let store = FileStore::open(&path).unwrap();
        assert_eq!(store.get("counter").unwrap(), None);
        // No write happened, so the file still does not exist
        assert!(!path.exists());
    }

    #[test]
    fn test_set_then_get() {
        let path = temp_store_path("set_get");
        let store = FileStore::open(&path).unwrap();
        store.set("counter", "1").unwrap();
        assert_eq!(store.get("counter").unwrap().as_deref(), Some("1"));
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_values_survive_reopen() {
        let path = temp_store_path("reopen");
        {
            let store = FileStore::open(&path).unwrap();
            store.set("counter", "41").unwrap();
        }
        let store = FileStore::open(&path).unwrap();
        assert_eq!(store.get("counter").unwrap().as_deref(), Some("41"));
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_parent_directories_created_on_write() {
        let mut path = std::env::temp_dir();
        path.push(format!("tally_store_test_{}_nested", std::process::id()));
        let _ = fs::remove_dir_all(&path);
        let file = path.join("deep").join("store.json");

        let store = FileStore::open(&file).unwrap();
        store.set("counter", "0").unwrap();
        assert!(file.exists());
        let _ = fs::remove_dir_all(&path);
    }

    #[test]
    fn test_unparseable_file_is_a_format_error() {
        let path = temp_store_path("corrupt");
        fs::write(&path, "not json").unwrap();
        let err = FileStore::open(&path).err().expect("open should fail");
        assert!(matches!(err, StoreError::Format(_)));
        let _ = fs::remove_file(&path);
    }
}
