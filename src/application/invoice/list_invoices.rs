use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::invoice::{InvoiceError, InvoiceService};

#[derive(Debug, Serialize)]
pub struct InvoiceListItemDto {
  pub id: Uuid,
  pub invoice_number: String,
  pub client_id: Uuid,
  pub issue_date: NaiveDate,
  pub due_date: NaiveDate,
  pub total: Decimal,
  pub is_paid: bool,
}

#[derive(Debug, Serialize)]
pub struct ListInvoicesResponse {
  pub invoices: Vec<InvoiceListItemDto>,
}

pub struct ListInvoicesUseCase {
  invoice_service: Arc<InvoiceService>,
}

impl ListInvoicesUseCase {
  pub fn new(invoice_service: Arc<InvoiceService>) -> Self {
    Self { invoice_service }
  }

  pub fn execute(&self) -> Result<ListInvoicesResponse, InvoiceError> {
    let invoices = self
      .invoice_service
      .list_invoices()?
      .into_iter()
      .map(|i| InvoiceListItemDto {
        id: i.id,
        invoice_number: i.invoice_number.clone(),
        client_id: i.client_id,
        issue_date: i.issue_date,
        due_date: i.due_date,
        total: i.total(),
        is_paid: i.is_paid,
      })
      .collect();

    Ok(ListInvoicesResponse { invoices })
  }
}
