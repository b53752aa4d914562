use serde::Deserialize;
use std::sync::Arc;

use super::get_settings::SettingsDto;
use crate::domain::settings::{CompanySettings, SettingsError, SettingsService};

#[derive(Debug, Deserialize)]
pub struct UpdateSettingsCommand {
  pub name: String,
  pub email: String,
  pub address: String,
  pub phone: String,
  pub currency: String,
  pub logo: Option<String>,
}

pub struct UpdateSettingsUseCase {
  settings_service: Arc<SettingsService>,
}

impl UpdateSettingsUseCase {
  pub fn new(settings_service: Arc<SettingsService>) -> Self {
    Self { settings_service }
  }

  pub fn execute(&self, command: UpdateSettingsCommand) -> Result<SettingsDto, SettingsError> {
    if command.name.trim().is_empty() {
      return Err(SettingsError::Validation("Company name is required".to_string()));
    }

    let settings = self.settings_service.update_settings(CompanySettings {
      name: command.name,
      email: command.email,
      address: command.address,
      phone: command.phone,
      currency: command.currency,
      logo: command.logo,
    })?;

    Ok(settings.into())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::infrastructure::persistence::local::LocalSettingsRepository;
  use crate::infrastructure::persistence::store::MemoryStore;

  fn service() -> Arc<SettingsService> {
    Arc::new(SettingsService::new(Arc::new(LocalSettingsRepository::new(
      Arc::new(MemoryStore::new()),
    ))))
  }

  fn command(name: &str) -> UpdateSettingsCommand {
    UpdateSettingsCommand {
      name: name.to_string(),
      email: "ops@studio.test".to_string(),
      address: "9 North Rd".to_string(),
      phone: "555-0199".to_string(),
      currency: "€".to_string(),
      logo: None,
    }
  }

  #[test]
  fn test_update_persists_the_new_record() {
    let service = service();
    UpdateSettingsUseCase::new(service.clone())
      .execute(command("Studio North"))
      .unwrap();

    let stored = service.get_settings().unwrap();
    assert_eq!(stored.name, "Studio North");
    assert_eq!(stored.currency, "€");
  }

  #[test]
  fn test_blank_company_name_is_rejected() {
    let err = UpdateSettingsUseCase::new(service())
      .execute(command("  "))
      .unwrap_err();
    assert!(matches!(err, SettingsError::Validation(_)));
  }
}
