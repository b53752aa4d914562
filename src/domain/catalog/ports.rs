use uuid::Uuid;

use super::entities::Product;
use super::errors::CatalogError;

pub trait ProductRepository: Send + Sync {
  fn create(&self, product: Product) -> Result<Product, CatalogError>;
  /// Fails with `ProductNotFound` when no record with the product's id exists.
  fn update(&self, product: Product) -> Result<Product, CatalogError>;
  /// Idempotent; deleting an absent id is not an error.
  fn delete(&self, id: Uuid) -> Result<(), CatalogError>;
  fn find_by_id(&self, id: Uuid) -> Result<Option<Product>, CatalogError>;
  fn find_all(&self) -> Result<Vec<Product>, CatalogError>;
  /// Replaces the whole stored catalog, used after bulk consolidation.
  fn replace_all(&self, products: Vec<Product>) -> Result<(), CatalogError>;
}
