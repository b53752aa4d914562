use std::sync::Arc;

use uuid::Uuid;

use super::{load_collection, save_collection};
use crate::domain::invoice::{Client, ClientRepository, InvoiceError};
use crate::infrastructure::persistence::store::KeyValueStore;

const CLIENTS_KEY: &str = "clients";

pub struct LocalClientRepository {
  store: Arc<dyn KeyValueStore>,
}

impl LocalClientRepository {
  pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
    Self { store }
  }

  fn load(&self) -> Vec<Client> {
    load_collection(self.store.as_ref(), CLIENTS_KEY)
  }

  fn save(&self, clients: &[Client]) -> Result<(), InvoiceError> {
    save_collection(self.store.as_ref(), CLIENTS_KEY, clients)
      .map_err(|e| InvoiceError::Storage(e.to_string()))
  }
}

impl ClientRepository for LocalClientRepository {
  fn create(&self, client: Client) -> Result<Client, InvoiceError> {
    let mut clients = self.load();
    clients.push(client.clone());
    self.save(&clients)?;
    Ok(client)
  }

  fn update(&self, client: Client) -> Result<Client, InvoiceError> {
    let mut clients = self.load();
    let slot = clients
      .iter_mut()
      .find(|c| c.id == client.id)
      .ok_or(InvoiceError::ClientNotFound(client.id))?;
    *slot = client.clone();
    self.save(&clients)?;
    Ok(client)
  }

  fn delete(&self, id: Uuid) -> Result<(), InvoiceError> {
    let mut clients = self.load();
    clients.retain(|c| c.id != id);
    self.save(&clients)
  }

  fn find_by_id(&self, id: Uuid) -> Result<Option<Client>, InvoiceError> {
    Ok(self.load().into_iter().find(|c| c.id == id))
  }

  fn find_all(&self) -> Result<Vec<Client>, InvoiceError> {
    Ok(self.load())
  }
}
