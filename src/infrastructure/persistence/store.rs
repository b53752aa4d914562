use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
  #[error("I/O error: {0}")]
  Io(#[from] std::io::Error),

  #[error("Serialization error: {0}")]
  Serialization(#[from] serde_json::Error),
}

/// Whole-value key-value persistence: one serialized collection per key.
///
/// There is no partial update; every write replaces the full stored value,
/// which is what makes repository mutations a plain load-modify-save cycle.
pub trait KeyValueStore: Send + Sync {
  /// Returns the stored value, or `None` when the key has never been written
  /// or the backing data cannot be read.
  fn get(&self, key: &str) -> Option<String>;

  /// Atomically replaces the stored value for `key`.
  fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// File-backed store keeping one JSON document per key under a data
/// directory.
pub struct JsonFileStore {
  dir: PathBuf,
}

impl JsonFileStore {
  pub fn new(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
    let dir = dir.into();
    fs::create_dir_all(&dir)?;
    Ok(Self { dir })
  }

  fn path_for(&self, key: &str) -> PathBuf {
    self.dir.join(format!("{key}.json"))
  }
}

impl KeyValueStore for JsonFileStore {
  fn get(&self, key: &str) -> Option<String> {
    match fs::read_to_string(self.path_for(key)) {
      Ok(value) => Some(value),
      Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
      Err(e) => {
        tracing::warn!(key, error = %e, "failed to read stored collection, treating as absent");
        None
      }
    }
  }

  fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
    // Write to a sibling temp file, then rename: readers see either the old
    // value or the new one, never a torn write.
    let path = self.path_for(key);
    let tmp = self.dir.join(format!("{key}.json.tmp"));
    fs::write(&tmp, value)?;
    fs::rename(&tmp, &path)?;
    Ok(())
  }
}

/// In-memory store for tests and embedded use.
#[derive(Default)]
pub struct MemoryStore {
  values: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
  pub fn new() -> Self {
    Self::default()
  }
}

impl KeyValueStore for MemoryStore {
  fn get(&self, key: &str) -> Option<String> {
    self
      .values
      .lock()
      .expect("store mutex poisoned")
      .get(key)
      .cloned()
  }

  fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
    self
      .values
      .lock()
      .expect("store mutex poisoned")
      .insert(key.to_string(), value.to_string());
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_file_store_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path()).unwrap();

    assert_eq!(store.get("clients"), None);

    store.set("clients", r#"[{"name":"Acme"}]"#).unwrap();
    assert_eq!(store.get("clients").as_deref(), Some(r#"[{"name":"Acme"}]"#));

    // A second write replaces the whole value.
    store.set("clients", "[]").unwrap();
    assert_eq!(store.get("clients").as_deref(), Some("[]"));
  }

  #[test]
  fn test_file_store_keys_do_not_collide() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path()).unwrap();

    store.set("clients", "[1]").unwrap();
    store.set("invoices", "[2]").unwrap();

    assert_eq!(store.get("clients").as_deref(), Some("[1]"));
    assert_eq!(store.get("invoices").as_deref(), Some("[2]"));
  }

  #[test]
  fn test_memory_store_round_trip() {
    let store = MemoryStore::new();
    assert_eq!(store.get("settings"), None);

    store.set("settings", "{}").unwrap();
    assert_eq!(store.get("settings").as_deref(), Some("{}"));
  }
}
