use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::invoice::{ClientData, InvoiceError, InvoiceService};

#[derive(Debug, Deserialize)]
pub struct UpdateClientCommand {
  pub client_id: Uuid,
  pub name: String,
  pub email: String,
  pub address: String,
  pub phone: String,
}

#[derive(Debug, Serialize)]
pub struct UpdateClientResponse {
  pub client_id: Uuid,
  pub name: String,
}

pub struct UpdateClientUseCase {
  invoice_service: Arc<InvoiceService>,
}

impl UpdateClientUseCase {
  pub fn new(invoice_service: Arc<InvoiceService>) -> Self {
    Self { invoice_service }
  }

  pub fn execute(&self, command: UpdateClientCommand) -> Result<UpdateClientResponse, InvoiceError> {
    if command.name.trim().is_empty() {
      return Err(InvoiceError::Validation("Client name is required".to_string()));
    }
    if command.email.trim().is_empty() {
      return Err(InvoiceError::Validation("Client email is required".to_string()));
    }

    let client = self.invoice_service.update_client(
      command.client_id,
      ClientData {
        name: command.name,
        email: command.email,
        address: command.address,
        phone: command.phone,
      },
    )?;

    Ok(UpdateClientResponse {
      client_id: client.id,
      name: client.name,
    })
  }
}
