//! InvoicePulse — a single-user invoicing core.
//!
//! Clients, a product catalog, invoices and company settings, persisted
//! through a whole-collection key-value store. The domain layer holds the
//! calculation and consolidation engines, the application layer hosts the
//! use cases and their input validation, and the infrastructure layer
//! provides local storage-backed repositories.

pub mod application;
pub mod domain;
pub mod infrastructure;
