use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum InvoiceError {
  #[error("Validation error: {0}")]
  Validation(String),

  #[error("Client not found: {0}")]
  ClientNotFound(Uuid),

  #[error("Invoice not found: {0}")]
  InvoiceNotFound(Uuid),

  #[error("Storage error: {0}")]
  Storage(String),
}
