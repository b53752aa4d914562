use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use super::list_products::ProductDto;
use crate::domain::catalog::{CatalogError, CatalogService};

#[derive(Debug, Deserialize)]
pub struct FindDuplicateProductCommand {
  pub name: String,
  pub category: String,
  /// Record being edited, excluded from the search.
  pub exclude_id: Option<Uuid>,
}

#[derive(Debug, Serialize)]
pub struct FindDuplicateProductResponse {
  pub duplicate: Option<ProductDto>,
}

pub struct FindDuplicateProductUseCase {
  catalog_service: Arc<CatalogService>,
}

impl FindDuplicateProductUseCase {
  pub fn new(catalog_service: Arc<CatalogService>) -> Self {
    Self { catalog_service }
  }

  pub fn execute(
    &self,
    command: FindDuplicateProductCommand,
  ) -> Result<FindDuplicateProductResponse, CatalogError> {
    let duplicate = self
      .catalog_service
      .find_duplicate(&command.name, &command.category, command.exclude_id)?
      .map(ProductDto::from);

    Ok(FindDuplicateProductResponse { duplicate })
  }
}
