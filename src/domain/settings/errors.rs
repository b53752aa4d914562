use thiserror::Error;

#[derive(Debug, Error)]
pub enum SettingsError {
  #[error("Validation error: {0}")]
  Validation(String),

  #[error("Storage error: {0}")]
  Storage(String),
}
