pub mod customers;
pub mod delivery_receipts;
pub mod inventory;
pub mod login;
pub mod options;
pub mod projects;
pub mod purchase_orders;
pub mod receiving_reports;
pub mod sales_invoices;
pub mod sales_orders;
pub mod suppliers;
