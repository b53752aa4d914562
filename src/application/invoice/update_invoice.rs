use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use super::create_invoice::{InvoiceItemDto, validate_invoice_input};
use crate::domain::invoice::{InvoiceData, InvoiceError, InvoiceService};

#[derive(Debug, Deserialize)]
pub struct UpdateInvoiceCommand {
  pub invoice_id: Uuid,
  pub client_id: Uuid,
  pub invoice_number: String,
  pub issue_date: NaiveDate,
  pub due_date: NaiveDate,
  pub items: Vec<InvoiceItemDto>,
  pub tax_rate: Decimal,
  pub is_paid: bool,
  pub notes: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct UpdateInvoiceResponse {
  pub invoice_id: Uuid,
  pub subtotal: Decimal,
  pub tax_amount: Decimal,
  pub total: Decimal,
}

pub struct UpdateInvoiceUseCase {
  invoice_service: Arc<InvoiceService>,
}

impl UpdateInvoiceUseCase {
  pub fn new(invoice_service: Arc<InvoiceService>) -> Self {
    Self { invoice_service }
  }

  pub fn execute(
    &self,
    command: UpdateInvoiceCommand,
  ) -> Result<UpdateInvoiceResponse, InvoiceError> {
    validate_invoice_input(&command.invoice_number, command.tax_rate, &command.items)?;

    self
      .invoice_service
      .get_client(command.client_id)?
      .ok_or(InvoiceError::ClientNotFound(command.client_id))?;

    let items = command.items.into_iter().map(InvoiceItemDto::into_item).collect();
    let invoice = self.invoice_service.update_invoice(
      command.invoice_id,
      InvoiceData {
        client_id: command.client_id,
        invoice_number: command.invoice_number,
        issue_date: command.issue_date,
        due_date: command.due_date,
        items,
        tax_rate: command.tax_rate,
        is_paid: command.is_paid,
        notes: command.notes,
      },
    )?;

    Ok(UpdateInvoiceResponse {
      invoice_id: invoice.id,
      subtotal: invoice.subtotal(),
      tax_amount: invoice.tax_amount(),
      total: invoice.total(),
    })
  }
}
