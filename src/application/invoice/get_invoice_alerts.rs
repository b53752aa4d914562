use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::invoice::{InvoiceError, InvoiceService};

#[derive(Debug, Default, Deserialize)]
pub struct GetInvoiceAlertsCommand {
  /// Reference date for the projection; defaults to the current date.
  pub today: Option<NaiveDate>,
}

#[derive(Debug, Serialize)]
pub struct InvoiceAlertDto {
  pub invoice_id: Uuid,
  pub invoice_number: String,
  pub client_id: Uuid,
  pub due_date: NaiveDate,
  pub total: Decimal,
  /// "overdue" or "upcoming".
  pub kind: String,
  /// Whole days until due; only set for upcoming alerts.
  pub days_left: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct GetInvoiceAlertsResponse {
  pub alerts: Vec<InvoiceAlertDto>,
}

pub struct GetInvoiceAlertsUseCase {
  invoice_service: Arc<InvoiceService>,
}

impl GetInvoiceAlertsUseCase {
  pub fn new(invoice_service: Arc<InvoiceService>) -> Self {
    Self { invoice_service }
  }

  pub fn execute(
    &self,
    command: GetInvoiceAlertsCommand,
  ) -> Result<GetInvoiceAlertsResponse, InvoiceError> {
    let today = command.today.unwrap_or_else(|| Utc::now().date_naive());

    let alerts = self
      .invoice_service
      .alerts(today)?
      .into_iter()
      .map(|alert| InvoiceAlertDto {
        invoice_id: alert.invoice.id,
        invoice_number: alert.invoice.invoice_number.clone(),
        client_id: alert.invoice.client_id,
        due_date: alert.invoice.due_date,
        total: alert.invoice.total(),
        kind: alert.kind.as_str().to_string(),
        days_left: alert.days_left,
      })
      .collect();

    Ok(GetInvoiceAlertsResponse { alerts })
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::invoice::{ClientData, InvoiceData, InvoiceItem};
  use crate::infrastructure::persistence::local::{LocalClientRepository, LocalInvoiceRepository};
  use crate::infrastructure::persistence::store::MemoryStore;
  use rust_decimal_macros::dec;

  fn service() -> Arc<InvoiceService> {
    let store = Arc::new(MemoryStore::new());
    Arc::new(InvoiceService::new(
      Arc::new(LocalClientRepository::new(store.clone())),
      Arc::new(LocalInvoiceRepository::new(store)),
    ))
  }

  fn seed_invoice(service: &InvoiceService, number: &str, due: NaiveDate) {
    let client = service
      .create_client(ClientData {
        name: "Acme".to_string(),
        email: "billing@acme.test".to_string(),
        address: String::new(),
        phone: String::new(),
      })
      .unwrap();
    service
      .create_invoice(InvoiceData {
        client_id: client.id,
        invoice_number: number.to_string(),
        issue_date: due,
        due_date: due,
        items: vec![InvoiceItem::new("Design".to_string(), dec!(1), dec!(100), None)],
        tax_rate: Decimal::ZERO,
        is_paid: false,
        notes: None,
      })
      .unwrap();
  }

  #[test]
  fn test_projects_alerts_against_the_given_date() {
    let service = service();
    seed_invoice(&service, "INV-OLD", NaiveDate::from_ymd_opt(2024, 6, 5).unwrap());
    seed_invoice(&service, "INV-SOON", NaiveDate::from_ymd_opt(2024, 6, 12).unwrap());
    seed_invoice(&service, "INV-LATER", NaiveDate::from_ymd_opt(2024, 7, 1).unwrap());

    let response = GetInvoiceAlertsUseCase::new(service)
      .execute(GetInvoiceAlertsCommand {
        today: Some(NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()),
      })
      .unwrap();

    assert_eq!(response.alerts.len(), 2);
    assert_eq!(response.alerts[0].invoice_number, "INV-OLD");
    assert_eq!(response.alerts[0].kind, "overdue");
    assert_eq!(response.alerts[0].days_left, None);
    assert_eq!(response.alerts[1].invoice_number, "INV-SOON");
    assert_eq!(response.alerts[1].kind, "upcoming");
    assert_eq!(response.alerts[1].days_left, Some(2));
  }
}
