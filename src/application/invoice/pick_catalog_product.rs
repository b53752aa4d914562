use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use super::create_invoice::InvoiceItemDto;
use crate::domain::catalog::{CatalogError, CatalogService};
use crate::domain::invoice::{ProductPick, apply_product_to_line};

#[derive(Debug, Deserialize)]
pub struct PickCatalogProductCommand {
  pub items: Vec<InvoiceItemDto>,
  /// Index of the line being edited.
  pub index: usize,
  pub product_id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct PickCatalogProductResponse {
  pub items: Vec<InvoiceItemDto>,
  /// Set when the edited line was folded into an existing identical line.
  pub merged_into: Option<Uuid>,
}

pub struct PickCatalogProductUseCase {
  catalog_service: Arc<CatalogService>,
}

impl PickCatalogProductUseCase {
  pub fn new(catalog_service: Arc<CatalogService>) -> Self {
    Self { catalog_service }
  }

  pub fn execute(
    &self,
    command: PickCatalogProductCommand,
  ) -> Result<PickCatalogProductResponse, CatalogError> {
    if command.index >= command.items.len() {
      return Err(CatalogError::Validation("Line index out of range".to_string()));
    }

    let product = self
      .catalog_service
      .get_product(command.product_id)?
      .ok_or(CatalogError::ProductNotFound(command.product_id))?;

    let mut items: Vec<_> = command
      .items
      .into_iter()
      .map(InvoiceItemDto::into_item)
      .collect();

    let merged_into = match apply_product_to_line(&mut items, command.index, &product) {
      ProductPick::MergedInto { item_id } => Some(item_id),
      ProductPick::Applied => None,
    };

    Ok(PickCatalogProductResponse {
      items: items.iter().map(InvoiceItemDto::from_item).collect(),
      merged_into,
    })
  }
}
