pub mod consolidate_line_items;
pub mod create_client;
pub mod create_invoice;
pub mod delete_client;
pub mod delete_invoice;
pub mod get_invoice;
pub mod get_invoice_alerts;
pub mod list_clients;
pub mod list_invoices;
pub mod pick_catalog_product;
pub mod set_invoice_paid;
pub mod update_client;
pub mod update_invoice;

pub use consolidate_line_items::{
  ConsolidateLineItemsCommand, ConsolidateLineItemsResponse, ConsolidateLineItemsUseCase,
};
pub use create_client::{CreateClientCommand, CreateClientResponse, CreateClientUseCase};
pub use create_invoice::{
  CreateInvoiceCommand, CreateInvoiceResponse, CreateInvoiceUseCase, InvoiceItemDto,
};
pub use delete_client::{DeleteClientCommand, DeleteClientUseCase};
pub use delete_invoice::{DeleteInvoiceCommand, DeleteInvoiceUseCase};
pub use get_invoice::{GetInvoiceCommand, GetInvoiceUseCase, InvoiceDetailsResponse};
pub use get_invoice_alerts::{
  GetInvoiceAlertsCommand, GetInvoiceAlertsResponse, GetInvoiceAlertsUseCase, InvoiceAlertDto,
};
pub use list_clients::{ClientDto, ListClientsResponse, ListClientsUseCase};
pub use list_invoices::{InvoiceListItemDto, ListInvoicesResponse, ListInvoicesUseCase};
pub use pick_catalog_product::{
  PickCatalogProductCommand, PickCatalogProductResponse, PickCatalogProductUseCase,
};
pub use set_invoice_paid::{SetInvoicePaidCommand, SetInvoicePaidResponse, SetInvoicePaidUseCase};
pub use update_client::{UpdateClientCommand, UpdateClientResponse, UpdateClientUseCase};
pub use update_invoice::{UpdateInvoiceCommand, UpdateInvoiceResponse, UpdateInvoiceUseCase};
