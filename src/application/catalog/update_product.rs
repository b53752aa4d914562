use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use super::create_product::{normalize_sub_categories, validate_product_input};
use crate::domain::catalog::{CatalogError, CatalogService, ProductData};

#[derive(Debug, Deserialize)]
pub struct UpdateProductCommand {
  pub product_id: Uuid,
  pub name: String,
  pub category: String,
  pub sub_categories: Vec<String>,
  pub description: String,
  pub default_price: Decimal,
  pub default_discount: Option<Decimal>,
  pub image: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct UpdateProductResponse {
  pub product_id: Uuid,
  pub name: String,
}

pub struct UpdateProductUseCase {
  catalog_service: Arc<CatalogService>,
}

impl UpdateProductUseCase {
  pub fn new(catalog_service: Arc<CatalogService>) -> Self {
    Self { catalog_service }
  }

  pub fn execute(
    &self,
    command: UpdateProductCommand,
  ) -> Result<UpdateProductResponse, CatalogError> {
    validate_product_input(
      &command.name,
      &command.category,
      command.default_price,
      command.default_discount,
    )?;

    // The record being edited must not match itself.
    if let Some(existing) = self.catalog_service.find_duplicate(
      &command.name,
      &command.category,
      Some(command.product_id),
    )? {
      return Err(CatalogError::DuplicateProduct {
        name: existing.name,
        category: existing.category,
      });
    }

    let product = self.catalog_service.update_product(
      command.product_id,
      ProductData {
        name: command.name,
        category: command.category,
        sub_categories: normalize_sub_categories(command.sub_categories),
        description: command.description,
        default_price: command.default_price,
        default_discount: command.default_discount,
        image: command.image,
      },
    )?;

    Ok(UpdateProductResponse {
      product_id: product.id,
      name: product.name,
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::infrastructure::persistence::local::LocalProductRepository;
  use crate::infrastructure::persistence::store::MemoryStore;
  use rust_decimal_macros::dec;

  fn catalog() -> Arc<CatalogService> {
    Arc::new(CatalogService::new(Arc::new(LocalProductRepository::new(
      Arc::new(MemoryStore::new()),
    ))))
  }

  fn data(name: &str) -> ProductData {
    ProductData {
      name: name.to_string(),
      category: "Goods".to_string(),
      sub_categories: Vec::new(),
      description: String::new(),
      default_price: dec!(10),
      default_discount: None,
      image: None,
    }
  }

  fn command(product_id: Uuid, name: &str) -> UpdateProductCommand {
    UpdateProductCommand {
      product_id,
      name: name.to_string(),
      category: "Goods".to_string(),
      sub_categories: Vec::new(),
      description: String::new(),
      default_price: dec!(12),
      default_discount: None,
      image: None,
    }
  }

  #[test]
  fn test_update_keeping_own_name_is_not_a_duplicate() {
    let catalog = catalog();
    let widget = catalog.create_product(data("Widget")).unwrap();

    let response = UpdateProductUseCase::new(catalog.clone())
      .execute(command(widget.id, "Widget"))
      .unwrap();

    assert_eq!(response.product_id, widget.id);
    assert_eq!(
      catalog.get_product(widget.id).unwrap().unwrap().default_price,
      dec!(12)
    );
  }

  #[test]
  fn test_renaming_onto_another_product_is_rejected() {
    let catalog = catalog();
    catalog.create_product(data("Widget")).unwrap();
    let gadget = catalog.create_product(data("Gadget")).unwrap();

    let err = UpdateProductUseCase::new(catalog)
      .execute(command(gadget.id, "Widget"))
      .unwrap_err();

    assert!(matches!(err, CatalogError::DuplicateProduct { .. }));
  }

  #[test]
  fn test_unknown_product_fails_with_not_found() {
    let missing = Uuid::new_v4();
    let err = UpdateProductUseCase::new(catalog())
      .execute(command(missing, "Widget"))
      .unwrap_err();

    assert!(matches!(err, CatalogError::ProductNotFound(id) if id == missing));
  }
}
