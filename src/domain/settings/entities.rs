use serde::{Deserialize, Serialize};

// Company Settings - Singleton record, one instance per installation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanySettings {
  pub name: String,
  pub email: String,
  pub address: String,
  pub phone: String,
  /// Display symbol prefixed to amounts, not an ISO code.
  pub currency: String,
  /// Base64-encoded logo payload, kept opaque.
  pub logo: Option<String>,
}

impl Default for CompanySettings {
  /// Seed record shown before the user fills in their own details.
  fn default() -> Self {
    Self {
      name: "Your Company Name".to_string(),
      email: "hello@yourcompany.com".to_string(),
      address: "123 Business Way, Suite 100\nCity, State, Zip".to_string(),
      phone: "(555) 000-0000".to_string(),
      currency: "$".to_string(),
      logo: None,
    }
  }
}
