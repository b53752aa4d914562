use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum CatalogError {
  #[error("Validation error: {0}")]
  Validation(String),

  #[error("Product not found: {0}")]
  ProductNotFound(Uuid),

  #[error("A product named '{name}' already exists in category '{category}'")]
  DuplicateProduct { name: String, category: String },

  #[error("Storage error: {0}")]
  Storage(String),
}
