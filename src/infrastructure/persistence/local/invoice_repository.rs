use std::sync::Arc;

use uuid::Uuid;

use super::{load_collection, save_collection};
use crate::domain::invoice::{Invoice, InvoiceError, InvoiceRepository};
use crate::infrastructure::persistence::store::KeyValueStore;

const INVOICES_KEY: &str = "invoices";

pub struct LocalInvoiceRepository {
  store: Arc<dyn KeyValueStore>,
}

impl LocalInvoiceRepository {
  pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
    Self { store }
  }

  fn load(&self) -> Vec<Invoice> {
    load_collection(self.store.as_ref(), INVOICES_KEY)
  }

  fn save(&self, invoices: &[Invoice]) -> Result<(), InvoiceError> {
    save_collection(self.store.as_ref(), INVOICES_KEY, invoices)
      .map_err(|e| InvoiceError::Storage(e.to_string()))
  }
}

impl InvoiceRepository for LocalInvoiceRepository {
  fn create(&self, invoice: Invoice) -> Result<Invoice, InvoiceError> {
    let mut invoices = self.load();
    invoices.push(invoice.clone());
    self.save(&invoices)?;
    Ok(invoice)
  }

  fn update(&self, invoice: Invoice) -> Result<Invoice, InvoiceError> {
    let mut invoices = self.load();
    let slot = invoices
      .iter_mut()
      .find(|i| i.id == invoice.id)
      .ok_or(InvoiceError::InvoiceNotFound(invoice.id))?;
    *slot = invoice.clone();
    self.save(&invoices)?;
    Ok(invoice)
  }

  fn delete(&self, id: Uuid) -> Result<(), InvoiceError> {
    let mut invoices = self.load();
    invoices.retain(|i| i.id != id);
    self.save(&invoices)
  }

  fn find_by_id(&self, id: Uuid) -> Result<Option<Invoice>, InvoiceError> {
    Ok(self.load().into_iter().find(|i| i.id == id))
  }

  fn find_all(&self) -> Result<Vec<Invoice>, InvoiceError> {
    Ok(self.load())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::invoice::InvoiceItem;
  use crate::infrastructure::persistence::store::MemoryStore;
  use chrono::NaiveDate;
  use rust_decimal_macros::dec;

  fn invoice(number: &str) -> Invoice {
    Invoice::new(
      Uuid::new_v4(),
      number.to_string(),
      NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
      NaiveDate::from_ymd_opt(2024, 6, 30).unwrap(),
      vec![InvoiceItem::new(
        "Design work".to_string(),
        dec!(2),
        dec!(50),
        Some(dec!(10)),
      )],
      dec!(0.05),
      false,
      None,
    )
  }

  #[test]
  fn test_round_trip_preserves_derived_totals() {
    let repo = LocalInvoiceRepository::new(Arc::new(MemoryStore::new()));
    let created = repo.create(invoice("INV-001")).unwrap();

    let fetched = repo.find_by_id(created.id).unwrap().unwrap();
    assert_eq!(fetched, created);
    assert_eq!(fetched.subtotal(), dec!(90));
    assert_eq!(fetched.tax_amount(), dec!(4.5));
    assert_eq!(fetched.total(), dec!(94.5));
  }

  #[test]
  fn test_update_replaces_the_stored_record() {
    let repo = LocalInvoiceRepository::new(Arc::new(MemoryStore::new()));
    let mut stored = repo.create(invoice("INV-001")).unwrap();

    stored.is_paid = true;
    repo.update(stored.clone()).unwrap();

    assert!(repo.find_by_id(stored.id).unwrap().unwrap().is_paid);
    assert_eq!(repo.find_all().unwrap().len(), 1);
  }
}
