use rust_decimal::Decimal;
use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::catalog::{CatalogError, CatalogService, Product};

#[derive(Debug, Serialize)]
pub struct ProductDto {
  pub id: Uuid,
  pub name: String,
  pub category: String,
  pub sub_categories: Vec<String>,
  pub description: String,
  pub default_price: Decimal,
  pub default_discount: Option<Decimal>,
  pub image: Option<String>,
}

impl From<Product> for ProductDto {
  fn from(product: Product) -> Self {
    Self {
      id: product.id,
      name: product.name,
      category: product.category,
      sub_categories: product.sub_categories,
      description: product.description,
      default_price: product.default_price,
      default_discount: product.default_discount,
      image: product.image,
    }
  }
}

#[derive(Debug, Serialize)]
pub struct ListProductsResponse {
  pub products: Vec<ProductDto>,
}

pub struct ListProductsUseCase {
  catalog_service: Arc<CatalogService>,
}

impl ListProductsUseCase {
  pub fn new(catalog_service: Arc<CatalogService>) -> Self {
    Self { catalog_service }
  }

  pub fn execute(&self) -> Result<ListProductsResponse, CatalogError> {
    let products = self
      .catalog_service
      .list_products()?
      .into_iter()
      .map(ProductDto::from)
      .collect();

    Ok(ListProductsResponse { products })
  }
}
