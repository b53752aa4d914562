use uuid::Uuid;

use super::entities::{Client, Invoice};
use super::errors::InvoiceError;

pub trait ClientRepository: Send + Sync {
  fn create(&self, client: Client) -> Result<Client, InvoiceError>;
  /// Fails with `ClientNotFound` when no record with the client's id exists.
  fn update(&self, client: Client) -> Result<Client, InvoiceError>;
  /// Idempotent; deleting an absent id is not an error.
  fn delete(&self, id: Uuid) -> Result<(), InvoiceError>;
  fn find_by_id(&self, id: Uuid) -> Result<Option<Client>, InvoiceError>;
  fn find_all(&self) -> Result<Vec<Client>, InvoiceError>;
}

pub trait InvoiceRepository: Send + Sync {
  fn create(&self, invoice: Invoice) -> Result<Invoice, InvoiceError>;
  /// Fails with `InvoiceNotFound` when no record with the invoice's id exists.
  fn update(&self, invoice: Invoice) -> Result<Invoice, InvoiceError>;
  /// Idempotent; deleting an absent id is not an error.
  fn delete(&self, id: Uuid) -> Result<(), InvoiceError>;
  fn find_by_id(&self, id: Uuid) -> Result<Option<Invoice>, InvoiceError>;
  fn find_all(&self) -> Result<Vec<Invoice>, InvoiceError>;
}
