//! Domain types shared between the client core and the web frontend.
//!
//! Every registry follows the same three shapes: a display `Row` projected from
//! the backend record (keeping the record itself in `raw`), a `Form` draft
//! with its required-field rules, and the request payload the backend expects.

pub mod auth;
pub mod converters;
pub mod customer;
pub mod delivery_receipt;
pub mod inventory;
pub mod project;
pub mod purchase_order;
pub mod receiving_report;
pub mod sales_invoice;
pub mod sales_order;
pub mod supplier;

pub use auth::{AuthUser, LoginForm, SignInResponse};
pub use customer::{CustomerForm, CustomerPayload, CustomerRow};
pub use delivery_receipt::{DeliveryReceiptForm, DeliveryReceiptPayload, DeliveryReceiptRow};
pub use inventory::{InventoryForm, InventoryRow};
pub use project::{CreateProjectPayload, ProjectForm, ProjectRow, UpdateProjectPayload};
pub use purchase_order::{
    CreatePurchaseOrderPayload, PurchaseOrderForm, PurchaseOrderItemForm, PurchaseOrderRow,
    UpdatePurchaseOrderPayload,
};
pub use receiving_report::{ReceivingReportForm, ReceivingReportPayload, ReceivingReportRow};
pub use sales_invoice::{InvoiceItemForm, SalesInvoiceForm, SalesInvoicePayload, SalesInvoiceRow};
pub use sales_order::{SalesOrderForm, SalesOrderLineForm, SalesOrderPayload, SalesOrderRow};
pub use supplier::{SupplierForm, SupplierPayload, SupplierRow};
