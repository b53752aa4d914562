use serde::Serialize;
use std::sync::Arc;

use crate::domain::settings::{CompanySettings, SettingsError, SettingsService};

#[derive(Debug, Serialize)]
pub struct SettingsDto {
  pub name: String,
  pub email: String,
  pub address: String,
  pub phone: String,
  pub currency: String,
  pub logo: Option<String>,
}

impl From<CompanySettings> for SettingsDto {
  fn from(settings: CompanySettings) -> Self {
    Self {
      name: settings.name,
      email: settings.email,
      address: settings.address,
      phone: settings.phone,
      currency: settings.currency,
      logo: settings.logo,
    }
  }
}

pub struct GetSettingsUseCase {
  settings_service: Arc<SettingsService>,
}

impl GetSettingsUseCase {
  pub fn new(settings_service: Arc<SettingsService>) -> Self {
    Self { settings_service }
  }

  pub fn execute(&self) -> Result<SettingsDto, SettingsError> {
    Ok(self.settings_service.get_settings()?.into())
  }
}
