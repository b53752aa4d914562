use std::sync::Arc;

use crate::domain::settings::{CompanySettings, SettingsError, SettingsRepository};
use crate::infrastructure::persistence::store::KeyValueStore;

const SETTINGS_KEY: &str = "settings";

pub struct LocalSettingsRepository {
  store: Arc<dyn KeyValueStore>,
}

impl LocalSettingsRepository {
  pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
    Self { store }
  }
}

impl SettingsRepository for LocalSettingsRepository {
  fn load(&self) -> Result<CompanySettings, SettingsError> {
    match self.store.get(SETTINGS_KEY) {
      None => Ok(CompanySettings::default()),
      Some(raw) => match serde_json::from_str(&raw) {
        Ok(settings) => Ok(settings),
        Err(e) => {
          tracing::warn!(error = %e, "malformed settings in storage, substituting defaults");
          Ok(CompanySettings::default())
        }
      },
    }
  }

  fn save(&self, settings: &CompanySettings) -> Result<(), SettingsError> {
    let raw =
      serde_json::to_string(settings).map_err(|e| SettingsError::Storage(e.to_string()))?;
    self
      .store
      .set(SETTINGS_KEY, &raw)
      .map_err(|e| SettingsError::Storage(e.to_string()))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::infrastructure::persistence::store::MemoryStore;

  #[test]
  fn test_load_returns_defaults_when_nothing_stored() {
    let repo = LocalSettingsRepository::new(Arc::new(MemoryStore::new()));
    assert_eq!(repo.load().unwrap(), CompanySettings::default());
  }

  #[test]
  fn test_load_returns_defaults_on_malformed_data() {
    let store = Arc::new(MemoryStore::new());
    store.set(SETTINGS_KEY, "{{{").unwrap();
    let repo = LocalSettingsRepository::new(store);

    assert_eq!(repo.load().unwrap(), CompanySettings::default());
  }

  #[test]
  fn test_save_then_load_round_trip() {
    let repo = LocalSettingsRepository::new(Arc::new(MemoryStore::new()));
    let settings = CompanySettings {
      name: "Studio North".to_string(),
      currency: "€".to_string(),
      ..CompanySettings::default()
    };

    repo.save(&settings).unwrap();
    assert_eq!(repo.load().unwrap(), settings);
  }
}
