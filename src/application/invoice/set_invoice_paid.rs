use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::invoice::{InvoiceError, InvoiceService};

#[derive(Debug, Deserialize)]
pub struct SetInvoicePaidCommand {
  pub invoice_id: Uuid,
  pub is_paid: bool,
}

#[derive(Debug, Serialize)]
pub struct SetInvoicePaidResponse {
  pub invoice_id: Uuid,
  pub is_paid: bool,
}

pub struct SetInvoicePaidUseCase {
  invoice_service: Arc<InvoiceService>,
}

impl SetInvoicePaidUseCase {
  pub fn new(invoice_service: Arc<InvoiceService>) -> Self {
    Self { invoice_service }
  }

  pub fn execute(
    &self,
    command: SetInvoicePaidCommand,
  ) -> Result<SetInvoicePaidResponse, InvoiceError> {
    let invoice = self
      .invoice_service
      .set_invoice_paid(command.invoice_id, command.is_paid)?;

    Ok(SetInvoicePaidResponse {
      invoice_id: invoice.id,
      is_paid: invoice.is_paid,
    })
  }
}
