//! Duplicate detection and merge helpers for invoice authoring.
//!
//! Used while an item list is being composed: attaching a catalog product to
//! a line folds it into an identical existing line instead of creating a
//! duplicate, and the whole list can be consolidated in one pass.

use std::collections::{HashMap, HashSet};

use rust_decimal::Decimal;
use uuid::Uuid;

use super::entities::InvoiceItem;
use crate::domain::catalog::Product;

/// Outcome of attaching a catalog product to an in-progress line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductPick {
  /// The line's quantity was folded into an existing identical line and the
  /// line itself was removed.
  MergedInto { item_id: Uuid },
  /// No identical line existed; the line was filled in from the product.
  Applied,
}

/// Full line description composed from a product: name, bracketed
/// sub-categories, then the free-text description on its own line.
pub fn composed_description(product: &Product) -> String {
  let mut description = product.name.clone();
  if !product.sub_categories.is_empty() {
    description.push_str(&format!(" [{}]", product.sub_categories.join(", ")));
  }
  if !product.description.is_empty() {
    description.push('\n');
    description.push_str(&product.description);
  }
  description
}

/// Attaches `product` to the line at `index`.
///
/// If another line already carries this product (description equals the
/// product name or the full composed description, and unit price equals the
/// product's default price), the in-progress line's quantity is added to that
/// line and the in-progress line is removed; a blank line is inserted if that
/// would empty the list. Otherwise the line at `index` is overwritten from
/// the product.
pub fn apply_product_to_line(
  items: &mut Vec<InvoiceItem>,
  index: usize,
  product: &Product,
) -> ProductPick {
  let full_description = composed_description(product);

  let existing_idx = items.iter().enumerate().position(|(i, item)| {
    i != index
      && (item.description == full_description || item.description == product.name)
      && item.unit_price == product.default_price
  });

  match existing_idx {
    Some(existing_idx) => {
      let quantity_to_add = items[index].quantity;
      items[existing_idx].quantity += quantity_to_add;
      let merged_id = items[existing_idx].id;

      items.remove(index);
      if items.is_empty() {
        items.push(InvoiceItem::blank());
      }

      ProductPick::MergedInto { item_id: merged_id }
    }
    None => {
      let item = &mut items[index];
      item.description = full_description;
      item.unit_price = product.default_price;
      item.discount = product.default_discount;
      ProductPick::Applied
    }
  }
}

/// Collapses identical lines into one, summing quantities.
///
/// Lines are identical when trimmed description, unit price and
/// discount-or-zero all match. The first occurrence keeps its fields and its
/// position; output order follows first-seen group order.
pub fn consolidate_items(items: &[InvoiceItem]) -> Vec<InvoiceItem> {
  let mut merged: Vec<InvoiceItem> = Vec::new();
  let mut index: HashMap<(String, Decimal, Decimal), usize> = HashMap::new();

  for item in items {
    let key = (
      item.description.trim().to_string(),
      item.unit_price,
      item.discount.unwrap_or_default(),
    );
    match index.get(&key) {
      Some(&i) => merged[i].quantity += item.quantity,
      None => {
        index.insert(key, merged.len());
        merged.push(item.clone());
      }
    }
  }

  merged
}

/// Whether the list contains lines that could be consolidated. Deliberately
/// looser than the merge key: discount is ignored, so this only gates the UI
/// affordance, never the merge itself.
pub fn has_possible_duplicates(items: &[InvoiceItem]) -> bool {
  let mut seen = HashSet::new();
  items
    .iter()
    .any(|item| !seen.insert((item.description.trim().to_string(), item.unit_price)))
}
