use std::collections::HashMap;
use std::sync::Arc;

use rust_decimal::Decimal;
use uuid::Uuid;

use super::entities::Product;
use super::errors::CatalogError;
use super::ports::ProductRepository;

/// Product creation/update data
pub struct ProductData {
  pub name: String,
  pub category: String,
  pub sub_categories: Vec<String>,
  pub description: String,
  pub default_price: Decimal,
  pub default_discount: Option<Decimal>,
  pub image: Option<String>,
}

fn dedup_key(name: &str, category: &str) -> (String, String) {
  (name.trim().to_lowercase(), category.trim().to_lowercase())
}

/// Finds a product matching (name, category), case-insensitively and ignoring
/// surrounding whitespace. `exclude_id` lets an in-progress edit skip the
/// record being edited.
pub fn find_duplicate<'a>(
  products: &'a [Product],
  name: &str,
  category: &str,
  exclude_id: Option<Uuid>,
) -> Option<&'a Product> {
  let key = dedup_key(name, category);
  products
    .iter()
    .find(|p| Some(p.id) != exclude_id && dedup_key(&p.name, &p.category) == key)
}

/// Folds duplicate catalog entries into one record per (name, category) group
/// and returns the deduplicated set plus the number of records removed.
///
/// The first entry seen in a group is the base. Each later duplicate
/// contributes its image when the base has none and its description when
/// strictly longer; its price always wins (the later entry is assumed
/// fresher), and its discount wins only when present and non-zero. Group
/// order follows first appearance.
pub fn consolidate(products: &[Product]) -> (Vec<Product>, usize) {
  let mut merged: Vec<Product> = Vec::new();
  let mut index: HashMap<(String, String), usize> = HashMap::new();
  let mut removed = 0;

  for product in products {
    let key = dedup_key(&product.name, &product.category);
    match index.get(&key) {
      Some(&i) => {
        let base = &mut merged[i];
        if base.image.is_none() && product.image.is_some() {
          base.image = product.image.clone();
        }
        if product.description.len() > base.description.len() {
          base.description = product.description.clone();
        }
        base.default_price = product.default_price;
        if product.default_discount.is_some_and(|d| !d.is_zero()) {
          base.default_discount = product.default_discount;
        }
        removed += 1;
      }
      None => {
        index.insert(key, merged.len());
        merged.push(product.clone());
      }
    }
  }

  (merged, removed)
}

pub struct CatalogService {
  products: Arc<dyn ProductRepository>,
}

impl CatalogService {
  pub fn new(products: Arc<dyn ProductRepository>) -> Self {
    Self { products }
  }

  pub fn create_product(&self, data: ProductData) -> Result<Product, CatalogError> {
    let product = Product::new(
      data.name,
      data.category,
      data.sub_categories,
      data.description,
      data.default_price,
      data.default_discount,
      data.image,
    );
    self.products.create(product)
  }

  pub fn update_product(
    &self,
    product_id: Uuid,
    data: ProductData,
  ) -> Result<Product, CatalogError> {
    let mut product = self
      .products
      .find_by_id(product_id)?
      .ok_or(CatalogError::ProductNotFound(product_id))?;

    product.name = data.name;
    product.category = data.category;
    product.sub_categories = data.sub_categories;
    product.description = data.description;
    product.default_price = data.default_price;
    product.default_discount = data.default_discount;
    product.image = data.image;

    self.products.update(product)
  }

  pub fn delete_product(&self, product_id: Uuid) -> Result<(), CatalogError> {
    self.products.delete(product_id)
  }

  pub fn get_product(&self, product_id: Uuid) -> Result<Option<Product>, CatalogError> {
    self.products.find_by_id(product_id)
  }

  pub fn list_products(&self) -> Result<Vec<Product>, CatalogError> {
    self.products.find_all()
  }

  pub fn find_duplicate(
    &self,
    name: &str,
    category: &str,
    exclude_id: Option<Uuid>,
  ) -> Result<Option<Product>, CatalogError> {
    let products = self.products.find_all()?;
    Ok(find_duplicate(&products, name, category, exclude_id).cloned())
  }

  /// Deduplicates the stored catalog in place and returns the number of
  /// records removed.
  pub fn consolidate_catalog(&self) -> Result<usize, CatalogError> {
    let products = self.products.find_all()?;
    let (merged, removed) = consolidate(&products);
    self.products.replace_all(merged)?;
    Ok(removed)
  }
}
