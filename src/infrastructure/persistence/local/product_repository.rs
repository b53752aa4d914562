use std::sync::Arc;

use uuid::Uuid;

use super::{load_collection, save_collection};
use crate::domain::catalog::{CatalogError, Product, ProductRepository};
use crate::infrastructure::persistence::store::KeyValueStore;

const PRODUCTS_KEY: &str = "products";

pub struct LocalProductRepository {
  store: Arc<dyn KeyValueStore>,
}

impl LocalProductRepository {
  pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
    Self { store }
  }

  fn load(&self) -> Vec<Product> {
    load_collection(self.store.as_ref(), PRODUCTS_KEY)
  }

  fn save(&self, products: &[Product]) -> Result<(), CatalogError> {
    save_collection(self.store.as_ref(), PRODUCTS_KEY, products)
      .map_err(|e| CatalogError::Storage(e.to_string()))
  }
}

impl ProductRepository for LocalProductRepository {
  fn create(&self, product: Product) -> Result<Product, CatalogError> {
    let mut products = self.load();
    products.push(product.clone());
    self.save(&products)?;
    Ok(product)
  }

  fn update(&self, product: Product) -> Result<Product, CatalogError> {
    let mut products = self.load();
    let slot = products
      .iter_mut()
      .find(|p| p.id == product.id)
      .ok_or(CatalogError::ProductNotFound(product.id))?;
    *slot = product.clone();
    self.save(&products)?;
    Ok(product)
  }

  fn delete(&self, id: Uuid) -> Result<(), CatalogError> {
    let mut products = self.load();
    products.retain(|p| p.id != id);
    self.save(&products)
  }

  fn find_by_id(&self, id: Uuid) -> Result<Option<Product>, CatalogError> {
    Ok(self.load().into_iter().find(|p| p.id == id))
  }

  fn find_all(&self) -> Result<Vec<Product>, CatalogError> {
    Ok(self.load())
  }

  fn replace_all(&self, products: Vec<Product>) -> Result<(), CatalogError> {
    self.save(&products)
  }
}
