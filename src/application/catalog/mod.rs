pub mod consolidate_catalog;
pub mod create_product;
pub mod delete_product;
pub mod find_duplicate_product;
pub mod list_products;
pub mod update_product;

pub use consolidate_catalog::{ConsolidateCatalogResponse, ConsolidateCatalogUseCase};
pub use create_product::{CreateProductCommand, CreateProductResponse, CreateProductUseCase};
pub use delete_product::{DeleteProductCommand, DeleteProductUseCase};
pub use find_duplicate_product::{
  FindDuplicateProductCommand, FindDuplicateProductResponse, FindDuplicateProductUseCase,
};
pub use list_products::{ListProductsResponse, ListProductsUseCase, ProductDto};
pub use update_product::{UpdateProductCommand, UpdateProductResponse, UpdateProductUseCase};
