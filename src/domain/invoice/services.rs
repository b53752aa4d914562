use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use uuid::Uuid;

use super::alerts::{InvoiceAlert, invoice_alerts};
use super::entities::{Client, Invoice, InvoiceItem};
use super::errors::InvoiceError;
use super::ports::{ClientRepository, InvoiceRepository};

/// Client creation/update data
pub struct ClientData {
  pub name: String,
  pub email: String,
  pub address: String,
  pub phone: String,
}

/// Invoice creation/update data. Carries no totals: those are always derived
/// from the items and tax rate at write time.
pub struct InvoiceData {
  pub client_id: Uuid,
  pub invoice_number: String,
  pub issue_date: NaiveDate,
  pub due_date: NaiveDate,
  pub items: Vec<InvoiceItem>,
  pub tax_rate: Decimal,
  pub is_paid: bool,
  pub notes: Option<String>,
}

pub struct InvoiceService {
  clients: Arc<dyn ClientRepository>,
  invoices: Arc<dyn InvoiceRepository>,
}

impl InvoiceService {
  pub fn new(clients: Arc<dyn ClientRepository>, invoices: Arc<dyn InvoiceRepository>) -> Self {
    Self { clients, invoices }
  }

  // Client operations
  pub fn create_client(&self, data: ClientData) -> Result<Client, InvoiceError> {
    let client = Client::new(data.name, data.email, data.address, data.phone);
    self.clients.create(client)
  }

  pub fn update_client(&self, client_id: Uuid, data: ClientData) -> Result<Client, InvoiceError> {
    let mut client = self
      .clients
      .find_by_id(client_id)?
      .ok_or(InvoiceError::ClientNotFound(client_id))?;

    client.update(data.name, data.email, data.address, data.phone);
    self.clients.update(client)
  }

  /// Invoices referencing the client keep their dangling client id; lookups
  /// on it return `None` and consumers render a placeholder.
  pub fn delete_client(&self, client_id: Uuid) -> Result<(), InvoiceError> {
    self.clients.delete(client_id)
  }

  pub fn get_client(&self, client_id: Uuid) -> Result<Option<Client>, InvoiceError> {
    self.clients.find_by_id(client_id)
  }

  pub fn list_clients(&self) -> Result<Vec<Client>, InvoiceError> {
    self.clients.find_all()
  }

  // Invoice operations
  pub fn create_invoice(&self, data: InvoiceData) -> Result<Invoice, InvoiceError> {
    let invoice = Invoice::new(
      data.client_id,
      data.invoice_number,
      data.issue_date,
      data.due_date,
      data.items,
      data.tax_rate,
      data.is_paid,
      data.notes,
    );
    self.invoices.create(invoice)
  }

  pub fn update_invoice(
    &self,
    invoice_id: Uuid,
    data: InvoiceData,
  ) -> Result<Invoice, InvoiceError> {
    let mut invoice = self
      .invoices
      .find_by_id(invoice_id)?
      .ok_or(InvoiceError::InvoiceNotFound(invoice_id))?;

    invoice.client_id = data.client_id;
    invoice.invoice_number = data.invoice_number;
    invoice.issue_date = data.issue_date;
    invoice.due_date = data.due_date;
    invoice.set_tax_rate(data.tax_rate);
    invoice.set_items(data.items);
    invoice.is_paid = data.is_paid;
    invoice.notes = data.notes;

    self.invoices.update(invoice)
  }

  pub fn set_invoice_paid(&self, invoice_id: Uuid, is_paid: bool) -> Result<Invoice, InvoiceError> {
    let mut invoice = self
      .invoices
      .find_by_id(invoice_id)?
      .ok_or(InvoiceError::InvoiceNotFound(invoice_id))?;

    invoice.is_paid = is_paid;
    self.invoices.update(invoice)
  }

  pub fn delete_invoice(&self, invoice_id: Uuid) -> Result<(), InvoiceError> {
    self.invoices.delete(invoice_id)
  }

  pub fn get_invoice(&self, invoice_id: Uuid) -> Result<Option<Invoice>, InvoiceError> {
    self.invoices.find_by_id(invoice_id)
  }

  pub fn list_invoices(&self) -> Result<Vec<Invoice>, InvoiceError> {
    self.invoices.find_all()
  }

  /// Projects due-date alerts over the current invoice set.
  pub fn alerts(&self, today: NaiveDate) -> Result<Vec<InvoiceAlert>, InvoiceError> {
    Ok(invoice_alerts(&self.invoices.find_all()?, today))
  }
}
