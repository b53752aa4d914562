use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// Client - Reusable billing contact
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
  pub id: Uuid,
  pub name: String,
  pub email: String,
  pub address: String,
  pub phone: String,
}

impl Client {
  pub fn new(name: String, email: String, address: String, phone: String) -> Self {
    Self {
      id: Uuid::new_v4(),
      name,
      email,
      address,
      phone,
    }
  }

  pub fn update(&mut self, name: String, email: String, address: String, phone: String) {
    self.name = name;
    self.email = email;
    self.address = address;
    self.phone = phone;
  }
}

// Invoice Line Item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceItem {
  pub id: Uuid,
  pub description: String,
  pub quantity: Decimal,
  pub unit_price: Decimal,
  /// Per-item percentage reduction (10 means 10% off this line).
  pub discount: Option<Decimal>,
}

impl InvoiceItem {
  pub fn new(
    description: String,
    quantity: Decimal,
    unit_price: Decimal,
    discount: Option<Decimal>,
  ) -> Self {
    Self {
      id: Uuid::new_v4(),
      description,
      quantity,
      unit_price,
      discount,
    }
  }

  /// Empty line used as a backstop so an item list never ends up empty.
  pub fn blank() -> Self {
    Self::new(String::new(), Decimal::ONE, Decimal::ZERO, None)
  }

  pub fn line_base(&self) -> Decimal {
    self.quantity * self.unit_price
  }

  pub fn discount_amount(&self) -> Decimal {
    self.line_base() * self.discount.unwrap_or_default() / Decimal::ONE_HUNDRED
  }

  pub fn line_net(&self) -> Decimal {
    self.line_base() - self.discount_amount()
  }
}

// Invoice Totals - Always derived from line items, never caller-supplied
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceTotals {
  pub subtotal: Decimal,
  pub tax_amount: Decimal,
  pub total: Decimal,
}

impl InvoiceTotals {
  /// Computes subtotal, tax and grand total from line items and a fractional
  /// tax rate (0.05 means 5%). No rounding is applied here; display layers
  /// round, the engine keeps full precision. Degenerate inputs (negative
  /// quantities or prices) are computed as-is; input gating is the caller's
  /// concern.
  pub fn calculate(items: &[InvoiceItem], tax_rate: Decimal) -> Self {
    let subtotal: Decimal = items.iter().map(InvoiceItem::line_net).sum();
    let tax_amount = subtotal * tax_rate;

    Self {
      subtotal,
      tax_amount,
      total: subtotal + tax_amount,
    }
  }
}

// Invoice - Main invoice document
//
// Totals fields are private: they are recomputed by the constructor and by
// every mutator that touches items or the tax rate, so a stored invoice can
// never carry stale or caller-forged totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
  pub id: Uuid,
  /// Reference by id only; the client may have been deleted since (consumers
  /// treat a lookup miss as "unknown client").
  pub client_id: Uuid,
  pub invoice_number: String,
  pub issue_date: NaiveDate,
  pub due_date: NaiveDate,
  items: Vec<InvoiceItem>,
  /// Fractional rate, 0.05 means 5%.
  tax_rate: Decimal,
  subtotal: Decimal,
  tax_amount: Decimal,
  total: Decimal,
  pub is_paid: bool,
  pub notes: Option<String>,
}

impl Invoice {
  #[allow(clippy::too_many_arguments)]
  pub fn new(
    client_id: Uuid,
    invoice_number: String,
    issue_date: NaiveDate,
    due_date: NaiveDate,
    items: Vec<InvoiceItem>,
    tax_rate: Decimal,
    is_paid: bool,
    notes: Option<String>,
  ) -> Self {
    let totals = InvoiceTotals::calculate(&items, tax_rate);

    Self {
      id: Uuid::new_v4(),
      client_id,
      invoice_number,
      issue_date,
      due_date,
      items,
      tax_rate,
      subtotal: totals.subtotal,
      tax_amount: totals.tax_amount,
      total: totals.total,
      is_paid,
      notes,
    }
  }

  pub fn items(&self) -> &[InvoiceItem] {
    &self.items
  }

  pub fn tax_rate(&self) -> Decimal {
    self.tax_rate
  }

  pub fn subtotal(&self) -> Decimal {
    self.subtotal
  }

  pub fn tax_amount(&self) -> Decimal {
    self.tax_amount
  }

  pub fn total(&self) -> Decimal {
    self.total
  }

  pub fn totals(&self) -> InvoiceTotals {
    InvoiceTotals {
      subtotal: self.subtotal,
      tax_amount: self.tax_amount,
      total: self.total,
    }
  }

  pub fn set_items(&mut self, items: Vec<InvoiceItem>) {
    self.items = items;
    self.recalculate();
  }

  pub fn set_tax_rate(&mut self, tax_rate: Decimal) {
    self.tax_rate = tax_rate;
    self.recalculate();
  }

  fn recalculate(&mut self) {
    let totals = InvoiceTotals::calculate(&self.items, self.tax_rate);
    self.subtotal = totals.subtotal;
    self.tax_amount = totals.tax_amount;
    self.total = totals.total;
  }
}
