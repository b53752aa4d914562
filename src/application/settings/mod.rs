pub mod get_settings;
pub mod update_settings;

pub use get_settings::{GetSettingsUseCase, SettingsDto};
pub use update_settings::{UpdateSettingsCommand, UpdateSettingsUseCase};
