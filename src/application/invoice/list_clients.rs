use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::invoice::{Client, InvoiceError, InvoiceService};

#[derive(Debug, Serialize)]
pub struct ClientDto {
  pub id: Uuid,
  pub name: String,
  pub email: String,
  pub address: String,
  pub phone: String,
}

impl From<Client> for ClientDto {
  fn from(client: Client) -> Self {
    Self {
      id: client.id,
      name: client.name,
      email: client.email,
      address: client.address,
      phone: client.phone,
    }
  }
}

#[derive(Debug, Serialize)]
pub struct ListClientsResponse {
  pub clients: Vec<ClientDto>,
}

pub struct ListClientsUseCase {
  invoice_service: Arc<InvoiceService>,
}

impl ListClientsUseCase {
  pub fn new(invoice_service: Arc<InvoiceService>) -> Self {
    Self { invoice_service }
  }

  pub fn execute(&self) -> Result<ListClientsResponse, InvoiceError> {
    let clients = self
      .invoice_service
      .list_clients()?
      .into_iter()
      .map(ClientDto::from)
      .collect();

    Ok(ListClientsResponse { clients })
  }
}
