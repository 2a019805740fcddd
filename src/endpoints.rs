//! Backend route table. Paths are relative to the API base URL
//! (`https://<host>/v1`); paginated lists take the page number as a query
//! parameter.

pub mod auth {
    pub const HEALTH: &str = "/auth";
    pub const SIGN_UP_EMAIL: &str = "/auth/sign-up-email";
    pub const SIGN_IN_EMAIL: &str = "/auth/sign-in-email";
}

pub mod customer {
    pub const GET_ALL: &str = "/customer/get-all-customer";
    /// Create when the body id is empty, update otherwise.
    pub const ADD_OR_UPDATE: &str = "/customer/add-update-customer";
    /// Expects `{"id": ...}` in the body.
    pub const DELETE: &str = "/customer/delete-customer";
}

pub mod project {
    pub const CREATE: &str = "/project/create-project";

    pub fn get_all(page: u32) -> String {
        format!("/project/get-all-project?page={}", page)
    }

    pub fn get_by_id(id: &str) -> String {
        format!("/project/get-project-by/{}", id)
    }

    pub fn update(id: &str) -> String {
        format!("/project/edit-project/{}", id)
    }

    pub fn delete(id: &str) -> String {
        format!("/project/delete-project/{}", id)
    }
}

pub mod sales_order {
    pub const GET_ALL: &str = "/salesorder/get-all-sales-order";
    pub const CREATE: &str = "/salesorder/create-sales-order";
    /// Id travels in the body.
    pub const EDIT: &str = "/salesorder/edit-sales-order";
    /// Expects `{"id": ...}` in the body.
    pub const DELETE: &str = "/salesorder/delete-sales-order";
    /// Aircon catalogue offered on order lines.
    pub const GET_AIRCON: &str = "/salesorder/get-aircon";

    pub fn get_by_id(id: &str) -> String {
        format!("/salesorder/get-sales-order-by-id/{}", id)
    }
}

pub mod purchase_order {
    pub const ADD: &str = "/supplierpo/add";
    /// Id travels in the body as `supplierPOId`.
    pub const UPDATE: &str = "/supplierpo/update";
    pub const TOGGLE_STATUS: &str = "/supplierpo/status";

    pub fn get_all(page: u32) -> String {
        format!("/supplierpo/get-all-supplierpo?page={}", page)
    }

    pub fn get_by_id(id: &str) -> String {
        format!("/supplierpo/{}", id)
    }

    pub fn delete(id: &str) -> String {
        format!("/supplierpo/delete-po/{}", id)
    }
}

pub mod supplier {
    pub const GET_ALL: &str = "/supplier/get-all-suppliers";
    pub const ADD: &str = "/supplier/add-supplier";
    /// Id travels in the body.
    pub const EDIT: &str = "/supplier/edit-supplier";
    /// Expects `{"id": ...}` in the body.
    pub const DELETE: &str = "/supplier/supplier-delete";

    pub fn get_by_id(id: &str) -> String {
        format!("/supplier/get-supplier-by-id/{}", id)
    }
}

pub mod inventory {
    pub const GET_ALL: &str = "/inventory/get";
    pub const ADD: &str = "/inventory/add";

    pub fn get_by_id(id: &str) -> String {
        format!("/inventory/get-by/{}", id)
    }

    pub fn update(id: &str) -> String {
        format!("/inventory/update/{}", id)
    }

    pub fn delete(id: &str) -> String {
        format!("/inventory/delete/{}", id)
    }
}

pub mod delivery_receipt {
    pub const CREATE: &str = "/delivery-receipt/create-delivery-receipt";

    pub fn get_all(page: u32) -> String {
        format!("/delivery-receipt/get-all-delivery-receipts?page={}", page)
    }

    pub fn get_by_id(id: &str) -> String {
        format!("/delivery-receipt/get-delivery-receipt-by-id/{}", id)
    }

    pub fn update(id: &str) -> String {
        format!("/delivery-receipt/update-delivery-receipt/{}", id)
    }

    pub fn delete(id: &str) -> String {
        format!("/delivery-receipt/delete-delivery-receipt/{}", id)
    }
}

pub mod receiving_report {
    /// Create, or replace when the body carries an `id`.
    pub const CREATE: &str = "/receiving-r/rr-create";

    pub fn get_all(page: u32) -> String {
        format!("/receiving-r/rr-get-all?page={}", page)
    }

    pub fn get_by_id(id: &str) -> String {
        format!("/receiving-r/rr-get-by-id/{}", id)
    }

    pub fn delete(id: &str) -> String {
        format!("/receiving-r/rr-delete/{}", id)
    }
}

/// Supplier delivery receipts, offered when receiving goods.
pub mod supplier_dr {
    pub const GET_ALL: &str = "/supplier/dr/get-all";
}

/// Supplier invoices; the sales invoice registry.
pub mod supplier_invoice {
    pub const CREATE: &str = "/supplier/invoice-create";
    pub const GET_ALL: &str = "/supplier/invoice/get-all";
    /// Id travels in the body.
    pub const EDIT: &str = "/supplier/invoice-edit";
    /// Expects `{"id": ...}` in the body.
    pub const DELETE: &str = "/supplier/invoice-delete";

    pub fn get_by_id(id: &str) -> String {
        format!("/supplier/invoice-get-by-id/{}", id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paginated_paths() {
        assert_eq!(project::get_all(3), "/project/get-all-project?page=3");
        assert_eq!(
            purchase_order::get_all(1),
            "/supplierpo/get-all-supplierpo?page=1"
        );
        assert_eq!(
            delivery_receipt::get_all(7),
            "/delivery-receipt/get-all-delivery-receipts?page=7"
        );
        assert_eq!(receiving_report::get_all(2), "/receiving-r/rr-get-all?page=2");
    }

    #[test]
    fn test_id_paths() {
        assert_eq!(project::update("p1"), "/project/edit-project/p1");
        assert_eq!(purchase_order::delete("po9"), "/supplierpo/delete-po/po9");
        assert_eq!(inventory::update("i2"), "/inventory/update/i2");
        assert_eq!(
            sales_order::get_by_id("so1"),
            "/salesorder/get-sales-order-by-id/so1"
        );
        assert_eq!(receiving_report::delete("rr3"), "/receiving-r/rr-delete/rr3");
        assert_eq!(
            supplier_invoice::get_by_id("si4"),
            "/supplier/invoice-get-by-id/si4"
        );
    }
}
