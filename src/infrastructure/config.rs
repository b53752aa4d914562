use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;

fn default_data_dir() -> String {
  "./data".to_string()
}

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
  #[serde(default)]
  pub storage: StorageConfig,
}

/// Storage configuration
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
  /// Directory the JSON collection files live under
  #[serde(default = "default_data_dir")]
  pub data_dir: String,
}

impl Default for StorageConfig {
  fn default() -> Self {
    Self {
      data_dir: default_data_dir(),
    }
  }
}

impl Config {
  /// Load configuration from files and environment variables
  ///
  /// Configuration is loaded in the following order (later sources override earlier ones):
  /// 1. config/default.toml (if exists)
  /// 2. config/local.toml (if exists)
  /// 3. Environment variables with INVOICEPULSE_ prefix
  ///
  /// Environment variables use double underscores as the section separator:
  /// - `INVOICEPULSE_STORAGE__DATA_DIR=/var/lib/invoicepulse`
  ///
  /// # Errors
  ///
  /// Returns a `ConfigError` if a configuration file contains invalid TOML or
  /// a value has an invalid type.
  pub fn load() -> Result<Self, ConfigError> {
    let config = ConfigBuilder::builder()
      .add_source(File::with_name("config/default").required(false))
      .add_source(File::with_name("config/local").required(false))
      .add_source(
        Environment::with_prefix("INVOICEPULSE")
          .prefix_separator("_")
          .separator("__")
          .try_parsing(true),
      )
      .build()?;

    config.try_deserialize()
  }
}
