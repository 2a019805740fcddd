//! [`Resource`](crate::resource::Resource) bindings for every registry.

pub mod customer;
pub mod delivery_receipt;
pub mod inventory;
pub mod project;
pub mod purchase_order;
pub mod receiving_report;
pub mod sales_invoice;
pub mod sales_order;
pub mod supplier;

pub use customer::Customers;
pub use delivery_receipt::DeliveryReceipts;
pub use inventory::Inventory;
pub use project::Projects;
pub use purchase_order::PurchaseOrders;
pub use receiving_report::ReceivingReports;
pub use sales_invoice::SalesInvoices;
pub use sales_order::SalesOrders;
pub use supplier::Suppliers;
