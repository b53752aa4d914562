//! Storage-backed repositories over the key-value persistence collaborator.
//!
//! Every mutation is a whole-collection load-modify-save cycle. Malformed
//! stored data deserializes to the empty collection (or the default settings
//! record) with a warning; it never surfaces as an error.

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::store::{KeyValueStore, StoreError};

mod client_repository;
mod invoice_repository;
mod product_repository;
mod settings_repository;

pub use client_repository::LocalClientRepository;
pub use invoice_repository::LocalInvoiceRepository;
pub use product_repository::LocalProductRepository;
pub use settings_repository::LocalSettingsRepository;

use crate::infrastructure::config::Config;
use crate::infrastructure::persistence::store::JsonFileStore;

fn load_collection<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Vec<T> {
  match store.get(key) {
    None => Vec::new(),
    Some(raw) => match serde_json::from_str(&raw) {
      Ok(items) => items,
      Err(e) => {
        tracing::warn!(key, error = %e, "malformed collection in storage, substituting empty");
        Vec::new()
      }
    },
  }
}

fn save_collection<T: Serialize>(
  store: &dyn KeyValueStore,
  key: &str,
  items: &[T],
) -> Result<(), StoreError> {
  let raw = serde_json::to_string(items)?;
  store.set(key, &raw)?;
  tracing::debug!(key, count = items.len(), "persisted collection");
  Ok(())
}

/// The full set of storage-backed repositories, wired over one shared store.
pub struct LocalRepositories {
  pub clients: Arc<LocalClientRepository>,
  pub invoices: Arc<LocalInvoiceRepository>,
  pub products: Arc<LocalProductRepository>,
  pub settings: Arc<LocalSettingsRepository>,
}

impl LocalRepositories {
  /// Opens the file-backed store under the configured data directory.
  pub fn open(config: &Config) -> Result<Self, StoreError> {
    let store: Arc<dyn KeyValueStore> = Arc::new(JsonFileStore::new(&config.storage.data_dir)?);
    Ok(Self::with_store(store))
  }

  pub fn with_store(store: Arc<dyn KeyValueStore>) -> Self {
    Self {
      clients: Arc::new(LocalClientRepository::new(store.clone())),
      invoices: Arc::new(LocalInvoiceRepository::new(store.clone())),
      products: Arc::new(LocalProductRepository::new(store.clone())),
      settings: Arc::new(LocalSettingsRepository::new(store)),
    }
  }
}
