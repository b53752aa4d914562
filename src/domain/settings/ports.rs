use super::entities::CompanySettings;
use super::errors::SettingsError;

pub trait SettingsRepository: Send + Sync {
  /// Returns the stored settings, or the default seed record when nothing is
  /// stored or the stored data is malformed. Malformed data never surfaces
  /// as an error.
  fn load(&self) -> Result<CompanySettings, SettingsError>;
  fn save(&self, settings: &CompanySettings) -> Result<(), SettingsError>;
}
