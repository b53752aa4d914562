use std::sync::Arc;

use super::entities::CompanySettings;
use super::errors::SettingsError;
use super::ports::SettingsRepository;

pub struct SettingsService {
  settings: Arc<dyn SettingsRepository>,
}

impl SettingsService {
  pub fn new(settings: Arc<dyn SettingsRepository>) -> Self {
    Self { settings }
  }

  pub fn get_settings(&self) -> Result<CompanySettings, SettingsError> {
    self.settings.load()
  }

  pub fn update_settings(&self, settings: CompanySettings) -> Result<CompanySettings, SettingsError> {
    self.settings.save(&settings)?;
    Ok(settings)
  }
}
