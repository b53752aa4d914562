pub mod alerts;
pub mod entities;
pub mod errors;
pub mod line_items;
pub mod ports;
pub mod services;

pub use alerts::{AlertKind, InvoiceAlert, invoice_alerts};
pub use entities::{Client, Invoice, InvoiceItem, InvoiceTotals};
pub use errors::InvoiceError;
pub use line_items::{
  ProductPick, apply_product_to_line, composed_description, consolidate_items,
  has_possible_duplicates,
};
pub use ports::{ClientRepository, InvoiceRepository};
pub use services::{ClientData, InvoiceData, InvoiceService};
