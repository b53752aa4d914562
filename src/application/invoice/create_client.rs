use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::invoice::{ClientData, InvoiceError, InvoiceService};

#[derive(Debug, Deserialize)]
pub struct CreateClientCommand {
  pub name: String,
  pub email: String,
  pub address: String,
  pub phone: String,
}

#[derive(Debug, Serialize)]
pub struct CreateClientResponse {
  pub client_id: Uuid,
  pub name: String,
}

pub struct CreateClientUseCase {
  invoice_service: Arc<InvoiceService>,
}

impl CreateClientUseCase {
  pub fn new(invoice_service: Arc<InvoiceService>) -> Self {
    Self { invoice_service }
  }

  pub fn execute(&self, command: CreateClientCommand) -> Result<CreateClientResponse, InvoiceError> {
    if command.name.trim().is_empty() {
      return Err(InvoiceError::Validation("Client name is required".to_string()));
    }
    if command.email.trim().is_empty() {
      return Err(InvoiceError::Validation("Client email is required".to_string()));
    }

    let client = self.invoice_service.create_client(ClientData {
      name: command.name,
      email: command.email,
      address: command.address,
      phone: command.phone,
    })?;

    Ok(CreateClientResponse {
      client_id: client.id,
      name: client.name,
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::infrastructure::persistence::local::{LocalClientRepository, LocalInvoiceRepository};
  use crate::infrastructure::persistence::store::MemoryStore;

  fn use_case() -> CreateClientUseCase {
    let store = Arc::new(MemoryStore::new());
    CreateClientUseCase::new(Arc::new(InvoiceService::new(
      Arc::new(LocalClientRepository::new(store.clone())),
      Arc::new(LocalInvoiceRepository::new(store)),
    )))
  }

  fn command(name: &str, email: &str) -> CreateClientCommand {
    CreateClientCommand {
      name: name.to_string(),
      email: email.to_string(),
      address: "1 Main St".to_string(),
      phone: "555-0100".to_string(),
    }
  }

  #[test]
  fn test_creates_client() {
    let response = use_case().execute(command("Acme", "billing@acme.test")).unwrap();
    assert_eq!(response.name, "Acme");
  }

  #[test]
  fn test_rejects_blank_name_and_email() {
    let use_case = use_case();

    assert!(matches!(
      use_case.execute(command("   ", "billing@acme.test")).unwrap_err(),
      InvoiceError::Validation(_)
    ));
    assert!(matches!(
      use_case.execute(command("Acme", "")).unwrap_err(),
      InvoiceError::Validation(_)
    ));
  }
}
