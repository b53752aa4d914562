use chrono::NaiveDate;
use serde::Serialize;

use super::entities::Invoice;

/// Alert classification for an unpaid invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
  Overdue,
  Upcoming,
}

impl AlertKind {
  pub fn as_str(&self) -> &'static str {
    match self {
      AlertKind::Overdue => "overdue",
      AlertKind::Upcoming => "upcoming",
    }
  }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvoiceAlert {
  pub invoice: Invoice,
  pub kind: AlertKind,
  /// Whole days until the due date; only set for upcoming alerts (0 means
  /// due today).
  pub days_left: Option<i64>,
}

/// Derives due-date alerts from the given invoices against `today`.
///
/// Paid invoices never alert. An unpaid invoice is overdue once its due date
/// has passed, and upcoming when due within 3 days inclusive of today; later
/// due dates produce nothing. `NaiveDate` subtraction yields whole-day deltas
/// with no time-of-day component, so an invoice due today counts as 0 days
/// left. Overdue alerts sort before upcoming ones; within each kind the order
/// is ascending by due date. This is a pure projection, recomputed on demand
/// and never persisted.
pub fn invoice_alerts(invoices: &[Invoice], today: NaiveDate) -> Vec<InvoiceAlert> {
  let mut alerts: Vec<InvoiceAlert> = Vec::new();

  for invoice in invoices {
    if invoice.is_paid {
      continue;
    }

    let days_left = (invoice.due_date - today).num_days();
    if days_left < 0 {
      alerts.push(InvoiceAlert {
        invoice: invoice.clone(),
        kind: AlertKind::Overdue,
        days_left: None,
      });
    } else if days_left <= 3 {
      alerts.push(InvoiceAlert {
        invoice: invoice.clone(),
        kind: AlertKind::Upcoming,
        days_left: Some(days_left),
      });
    }
  }

  alerts.sort_by_key(|alert| (alert.kind != AlertKind::Overdue, alert.invoice.due_date));
  alerts
}
