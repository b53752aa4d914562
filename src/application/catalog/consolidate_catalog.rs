use serde::Serialize;
use std::sync::Arc;

use crate::domain::catalog::{CatalogError, CatalogService};

#[derive(Debug, Serialize)]
pub struct ConsolidateCatalogResponse {
  /// Number of duplicate records folded away.
  pub merged_count: usize,
}

pub struct ConsolidateCatalogUseCase {
  catalog_service: Arc<CatalogService>,
}

impl ConsolidateCatalogUseCase {
  pub fn new(catalog_service: Arc<CatalogService>) -> Self {
    Self { catalog_service }
  }

  pub fn execute(&self) -> Result<ConsolidateCatalogResponse, CatalogError> {
    let merged_count = self.catalog_service.consolidate_catalog()?;
    Ok(ConsolidateCatalogResponse { merged_count })
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::catalog::ProductData;
  use crate::infrastructure::persistence::local::LocalProductRepository;
  use crate::infrastructure::persistence::store::MemoryStore;
  use rust_decimal::Decimal;
  use rust_decimal_macros::dec;

  fn data(name: &str, price: Decimal) -> ProductData {
    ProductData {
      name: name.to_string(),
      category: "Goods".to_string(),
      sub_categories: Vec::new(),
      description: String::new(),
      default_price: price,
      default_discount: None,
      image: None,
    }
  }

  #[test]
  fn test_consolidation_persists_the_merged_catalog() {
    let catalog = Arc::new(CatalogService::new(Arc::new(LocalProductRepository::new(
      Arc::new(MemoryStore::new()),
    ))));
    catalog.create_product(data("Widget", dec!(10))).unwrap();
    catalog.create_product(data("widget", dec!(20))).unwrap();
    catalog.create_product(data("Gadget", dec!(5))).unwrap();

    let response = ConsolidateCatalogUseCase::new(catalog.clone()).execute().unwrap();

    assert_eq!(response.merged_count, 1);
    let products = catalog.list_products().unwrap();
    assert_eq!(products.len(), 2);
    assert_eq!(products[0].default_price, dec!(20));
  }
}
