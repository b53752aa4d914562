use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// Product - Reusable catalog entry attached to invoice lines
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
  pub id: Uuid,
  pub name: String,
  pub category: String,
  pub sub_categories: Vec<String>,
  pub description: String,
  pub default_price: Decimal,
  /// Default per-line percentage reduction suggested when the product is
  /// attached to an invoice line.
  pub default_discount: Option<Decimal>,
  /// Base64-encoded image payload, kept opaque.
  pub image: Option<String>,
}

impl Product {
  #[allow(clippy::too_many_arguments)]
  pub fn new(
    name: String,
    category: String,
    sub_categories: Vec<String>,
    description: String,
    default_price: Decimal,
    default_discount: Option<Decimal>,
    image: Option<String>,
  ) -> Self {
    Self {
      id: Uuid::new_v4(),
      name,
      category,
      sub_categories,
      description,
      default_price,
      default_discount,
      image,
    }
  }
}
