use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::invoice::{InvoiceData, InvoiceError, InvoiceItem, InvoiceService};

/// Line item as exchanged with callers. `id` is kept when present so edits
/// preserve line identity; new lines get a fresh id on conversion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceItemDto {
  pub id: Option<Uuid>,
  pub description: String,
  pub quantity: Decimal,
  pub unit_price: Decimal,
  pub discount: Option<Decimal>,
}

impl InvoiceItemDto {
  pub fn into_item(self) -> InvoiceItem {
    let mut item = InvoiceItem::new(self.description, self.quantity, self.unit_price, self.discount);
    if let Some(id) = self.id {
      item.id = id;
    }
    item
  }

  pub fn from_item(item: &InvoiceItem) -> Self {
    Self {
      id: Some(item.id),
      description: item.description.clone(),
      quantity: item.quantity,
      unit_price: item.unit_price,
      discount: item.discount,
    }
  }
}

/// Input gate shared by invoice creation and update. The calculation engine
/// itself is permissive, so rejecting degenerate input happens here.
pub(super) fn validate_invoice_input(
  invoice_number: &str,
  tax_rate: Decimal,
  items: &[InvoiceItemDto],
) -> Result<(), InvoiceError> {
  if invoice_number.trim().is_empty() {
    return Err(InvoiceError::Validation("Invoice number is required".to_string()));
  }
  if tax_rate < Decimal::ZERO {
    return Err(InvoiceError::Validation("Tax rate cannot be negative".to_string()));
  }
  if items.is_empty() {
    return Err(InvoiceError::Validation("At least one item is required".to_string()));
  }

  for item in items {
    if item.description.trim().is_empty() {
      return Err(InvoiceError::Validation("Item description is required".to_string()));
    }
    if item.quantity <= Decimal::ZERO {
      return Err(InvoiceError::Validation("Quantity must be greater than 0".to_string()));
    }
    if item.unit_price < Decimal::ZERO {
      return Err(InvoiceError::Validation("Price cannot be negative".to_string()));
    }
    if let Some(discount) = item.discount {
      if discount < Decimal::ZERO || discount > Decimal::ONE_HUNDRED {
        return Err(InvoiceError::Validation(
          "Discount must be between 0 and 100".to_string(),
        ));
      }
    }
  }

  Ok(())
}

#[derive(Debug, Deserialize)]
pub struct CreateInvoiceCommand {
  pub client_id: Uuid,
  pub invoice_number: String,
  pub issue_date: NaiveDate,
  pub due_date: NaiveDate,
  pub items: Vec<InvoiceItemDto>,
  /// Fractional rate, 0.05 means 5%.
  pub tax_rate: Decimal,
  pub is_paid: bool,
  pub notes: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CreateInvoiceResponse {
  pub invoice_id: Uuid,
  pub invoice_number: String,
  pub subtotal: Decimal,
  pub tax_amount: Decimal,
  pub total: Decimal,
}

pub struct CreateInvoiceUseCase {
  invoice_service: Arc<InvoiceService>,
}

impl CreateInvoiceUseCase {
  pub fn new(invoice_service: Arc<InvoiceService>) -> Self {
    Self { invoice_service }
  }

  pub fn execute(
    &self,
    command: CreateInvoiceCommand,
  ) -> Result<CreateInvoiceResponse, InvoiceError> {
    validate_invoice_input(&command.invoice_number, command.tax_rate, &command.items)?;

    self
      .invoice_service
      .get_client(command.client_id)?
      .ok_or(InvoiceError::ClientNotFound(command.client_id))?;

    let items = command.items.into_iter().map(InvoiceItemDto::into_item).collect();
    let invoice = self.invoice_service.create_invoice(InvoiceData {
      client_id: command.client_id,
      invoice_number: command.invoice_number,
      issue_date: command.issue_date,
      due_date: command.due_date,
      items,
      tax_rate: command.tax_rate,
      is_paid: command.is_paid,
      notes: command.notes,
    })?;

    Ok(CreateInvoiceResponse {
      invoice_id: invoice.id,
      invoice_number: invoice.invoice_number.clone(),
      subtotal: invoice.subtotal(),
      tax_amount: invoice.tax_amount(),
      total: invoice.total(),
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::invoice::ClientData;
  use crate::infrastructure::persistence::local::{LocalClientRepository, LocalInvoiceRepository};
  use crate::infrastructure::persistence::store::MemoryStore;
  use rust_decimal_macros::dec;

  fn service() -> Arc<InvoiceService> {
    let store = Arc::new(MemoryStore::new());
    Arc::new(InvoiceService::new(
      Arc::new(LocalClientRepository::new(store.clone())),
      Arc::new(LocalInvoiceRepository::new(store)),
    ))
  }

  fn known_client(service: &InvoiceService) -> Uuid {
    service
      .create_client(ClientData {
        name: "Acme".to_string(),
        email: "billing@acme.test".to_string(),
        address: "1 Main St".to_string(),
        phone: "555-0100".to_string(),
      })
      .unwrap()
      .id
  }

  fn item(description: &str, quantity: Decimal, unit_price: Decimal) -> InvoiceItemDto {
    InvoiceItemDto {
      id: None,
      description: description.to_string(),
      quantity,
      unit_price,
      discount: None,
    }
  }

  fn command(client_id: Uuid) -> CreateInvoiceCommand {
    CreateInvoiceCommand {
      client_id,
      invoice_number: "INV-001".to_string(),
      issue_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
      due_date: NaiveDate::from_ymd_opt(2024, 6, 30).unwrap(),
      items: vec![item("Design work", dec!(2), dec!(50))],
      tax_rate: dec!(0.05),
      is_paid: false,
      notes: None,
    }
  }

  #[test]
  fn test_creates_invoice_with_derived_totals() {
    let service = service();
    let client_id = known_client(&service);

    let response = CreateInvoiceUseCase::new(service).execute(command(client_id)).unwrap();

    assert_eq!(response.subtotal, dec!(100));
    assert_eq!(response.tax_amount, dec!(5));
    assert_eq!(response.total, dec!(105));
  }

  #[test]
  fn test_unknown_client_is_rejected() {
    let err = CreateInvoiceUseCase::new(service())
      .execute(command(Uuid::new_v4()))
      .unwrap_err();
    assert!(matches!(err, InvoiceError::ClientNotFound(_)));
  }

  #[test]
  fn test_rejects_empty_item_list() {
    let service = service();
    let client_id = known_client(&service);
    let mut command = command(client_id);
    command.items.clear();

    let err = CreateInvoiceUseCase::new(service).execute(command).unwrap_err();
    assert!(matches!(err, InvoiceError::Validation(msg) if msg.contains("At least one item")));
  }

  #[test]
  fn test_rejects_degenerate_line_items() {
    let zero_quantity = vec![item("Design", dec!(0), dec!(50))];
    let negative_price = vec![item("Design", dec!(1), dec!(-5))];
    let oversized_discount = vec![InvoiceItemDto {
      discount: Some(dec!(101)),
      ..item("Design", dec!(1), dec!(50))
    }];

    for items in [zero_quantity, negative_price, oversized_discount] {
      assert!(matches!(
        validate_invoice_input("INV-001", dec!(0.05), &items),
        Err(InvoiceError::Validation(_))
      ));
    }

    assert!(validate_invoice_input("INV-001", dec!(0.05), &[item("Design", dec!(1), dec!(0))]).is_ok());
  }

  #[test]
  fn test_rejects_blank_invoice_number() {
    assert!(matches!(
      validate_invoice_input("  ", dec!(0.05), &[item("Design", dec!(1), dec!(50))]),
      Err(InvoiceError::Validation(msg)) if msg.contains("Invoice number")
    ));
  }
}
