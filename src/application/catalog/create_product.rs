use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::catalog::{CatalogError, CatalogService, ProductData};

/// Input gate shared by product creation and update.
pub(super) fn validate_product_input(
  name: &str,
  category: &str,
  default_price: Decimal,
  default_discount: Option<Decimal>,
) -> Result<(), CatalogError> {
  if name.trim().is_empty() {
    return Err(CatalogError::Validation("Product name is required".to_string()));
  }
  if category.trim().is_empty() {
    return Err(CatalogError::Validation("Category is required".to_string()));
  }
  if default_price < Decimal::ZERO {
    return Err(CatalogError::Validation("Price cannot be negative".to_string()));
  }
  if let Some(discount) = default_discount {
    if discount < Decimal::ZERO || discount > Decimal::ONE_HUNDRED {
      return Err(CatalogError::Validation(
        "Discount must be between 0 and 100".to_string(),
      ));
    }
  }
  Ok(())
}

/// Trims sub-category tags and drops blank ones.
pub(super) fn normalize_sub_categories(sub_categories: Vec<String>) -> Vec<String> {
  sub_categories
    .into_iter()
    .map(|s| s.trim().to_string())
    .filter(|s| !s.is_empty())
    .collect()
}

#[derive(Debug, Deserialize)]
pub struct CreateProductCommand {
  pub name: String,
  pub category: String,
  pub sub_categories: Vec<String>,
  pub description: String,
  pub default_price: Decimal,
  pub default_discount: Option<Decimal>,
  pub image: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CreateProductResponse {
  pub product_id: Uuid,
  pub name: String,
}

pub struct CreateProductUseCase {
  catalog_service: Arc<CatalogService>,
}

impl CreateProductUseCase {
  pub fn new(catalog_service: Arc<CatalogService>) -> Self {
    Self { catalog_service }
  }

  pub fn execute(
    &self,
    command: CreateProductCommand,
  ) -> Result<CreateProductResponse, CatalogError> {
    validate_product_input(
      &command.name,
      &command.category,
      command.default_price,
      command.default_discount,
    )?;

    if let Some(existing) =
      self
        .catalog_service
        .find_duplicate(&command.name, &command.category, None)?
    {
      return Err(CatalogError::DuplicateProduct {
        name: existing.name,
        category: existing.category,
      });
    }

    let product = self.catalog_service.create_product(ProductData {
      name: command.name,
      category: command.category,
      sub_categories: normalize_sub_categories(command.sub_categories),
      description: command.description,
      default_price: command.default_price,
      default_discount: command.default_discount,
      image: command.image,
    })?;

    Ok(CreateProductResponse {
      product_id: product.id,
      name: product.name,
    })
  }
}
