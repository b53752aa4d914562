use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use super::create_invoice::InvoiceItemDto;
use super::list_clients::ClientDto;
use crate::domain::invoice::{InvoiceError, InvoiceService};

#[derive(Debug, Deserialize)]
pub struct GetInvoiceCommand {
  pub invoice_id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct InvoiceDetailsResponse {
  pub invoice_id: Uuid,
  pub invoice_number: String,
  /// `None` when the client was deleted after the invoice was written;
  /// consumers render a placeholder in that case.
  pub client: Option<ClientDto>,
  pub client_id: Uuid,
  pub issue_date: NaiveDate,
  pub due_date: NaiveDate,
  pub items: Vec<InvoiceItemDto>,
  pub tax_rate: Decimal,
  pub subtotal: Decimal,
  pub tax_amount: Decimal,
  pub total: Decimal,
  pub is_paid: bool,
  pub notes: Option<String>,
}

pub struct GetInvoiceUseCase {
  invoice_service: Arc<InvoiceService>,
}

impl GetInvoiceUseCase {
  pub fn new(invoice_service: Arc<InvoiceService>) -> Self {
    Self { invoice_service }
  }

  pub fn execute(&self, command: GetInvoiceCommand) -> Result<InvoiceDetailsResponse, InvoiceError> {
    let invoice = self
      .invoice_service
      .get_invoice(command.invoice_id)?
      .ok_or(InvoiceError::InvoiceNotFound(command.invoice_id))?;

    let client = self
      .invoice_service
      .get_client(invoice.client_id)?
      .map(ClientDto::from);

    Ok(InvoiceDetailsResponse {
      invoice_id: invoice.id,
      invoice_number: invoice.invoice_number.clone(),
      client,
      client_id: invoice.client_id,
      issue_date: invoice.issue_date,
      due_date: invoice.due_date,
      items: invoice.items().iter().map(InvoiceItemDto::from_item).collect(),
      tax_rate: invoice.tax_rate(),
      subtotal: invoice.subtotal(),
      tax_amount: invoice.tax_amount(),
      total: invoice.total(),
      is_paid: invoice.is_paid,
      notes: invoice.notes,
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::invoice::{ClientData, InvoiceData, InvoiceItem};
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

  fn seed(service: &InvoiceService) -> (Uuid, Uuid) {
    let client = service
      .create_client(ClientData {
        name: "Acme".to_string(),
        email: "billing@acme.test".to_string(),
        address: "1 Main St".to_string(),
        phone: "555-0100".to_string(),
      })
      .unwrap();
    let invoice = service
      .create_invoice(InvoiceData {
        client_id: client.id,
        invoice_number: "INV-001".to_string(),
        issue_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
        due_date: NaiveDate::from_ymd_opt(2024, 6, 30).unwrap(),
        items: vec![InvoiceItem::new("Design".to_string(), dec!(2), dec!(50), Some(dec!(10)))],
        tax_rate: dec!(0.05),
        is_paid: false,
        notes: None,
      })
      .unwrap();
    (client.id, invoice.id)
  }

  #[test]
  fn test_returns_invoice_with_client_and_totals() {
    let service = service();
    let (client_id, invoice_id) = seed(&service);

    let details = GetInvoiceUseCase::new(service)
      .execute(GetInvoiceCommand { invoice_id })
      .unwrap();

    assert_eq!(details.client.unwrap().id, client_id);
    assert_eq!(details.items.len(), 1);
    assert_eq!(details.total, dec!(94.5));
  }

  #[test]
  fn test_deleted_client_degrades_to_none() {
    let service = service();
    let (client_id, invoice_id) = seed(&service);
    service.delete_client(client_id).unwrap();

    let details = GetInvoiceUseCase::new(service)
      .execute(GetInvoiceCommand { invoice_id })
      .unwrap();

    assert!(details.client.is_none());
    assert_eq!(details.client_id, client_id);
  }
}
