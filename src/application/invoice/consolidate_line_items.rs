use serde::{Deserialize, Serialize};

use super::create_invoice::InvoiceItemDto;
use crate::domain::invoice::{consolidate_items, has_possible_duplicates};

#[derive(Debug, Deserialize)]
pub struct ConsolidateLineItemsCommand {
  pub items: Vec<InvoiceItemDto>,
}

#[derive(Debug, Serialize)]
pub struct ConsolidateLineItemsResponse {
  pub items: Vec<InvoiceItemDto>,
  /// Whether the input contained lines the looser duplicate check flags.
  /// Computed on the input, so it can be true even when nothing merged.
  pub had_duplicates: bool,
}

/// Stateless projection over an in-progress item list; nothing is persisted.
pub struct ConsolidateLineItemsUseCase;

impl ConsolidateLineItemsUseCase {
  pub fn new() -> Self {
    Self
  }

  pub fn execute(&self, command: ConsolidateLineItemsCommand) -> ConsolidateLineItemsResponse {
    let items: Vec<_> = command
      .items
      .into_iter()
      .map(InvoiceItemDto::into_item)
      .collect();

    let had_duplicates = has_possible_duplicates(&items);
    let merged = consolidate_items(&items);

    ConsolidateLineItemsResponse {
      items: merged.iter().map(InvoiceItemDto::from_item).collect(),
      had_duplicates,
    }
  }
}

impl Default for ConsolidateLineItemsUseCase {
  fn default() -> Self {
    Self::new()
  }
}
