//! Route table facts the core needs: the login route, the route guard and
//! the sidebar entries.

use crate::session::SessionStore;

/// Login page; also the only route reachable without a credential.
pub const LOGIN_ROUTE: &str = "/";
pub const PUBLIC_ROUTES: &[&str] = &[LOGIN_ROUTE];
/// Where a successful sign-in lands.
pub const HOME_ROUTE: &str = "/customers";

/// Sends the user to the login page.
pub trait Navigator {
    fn redirect_to_login(&self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    RedirectToLogin,
}

/// Decide whether `path` may render for the current session.
pub fn guard(path: &str, session: &SessionStore) -> GuardDecision {
    if PUBLIC_ROUTES.contains(&path) || session.is_authenticated() {
        GuardDecision::Allow
    } else {
        tracing::debug!("Blocking {} without a credential", path);
        GuardDecision::RedirectToLogin
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem {
        label: "Customers",
        href: "/customers",
    },
    NavItem {
        label: "Projects",
        href: "/projects",
    },
    NavItem {
        label: "Sales Orders",
        href: "/sales-orders",
    },
    NavItem {
        label: "Purchase Orders",
        href: "/purchase-orders",
    },
    NavItem {
        label: "Suppliers",
        href: "/suppliers",
    },
    NavItem {
        label: "Inventory",
        href: "/inventory",
    },
    NavItem {
        label: "Receiving Reports",
        href: "/receiving-reports",
    },
    NavItem {
        label: "Delivery Receipts",
        href: "/delivery-receipts",
    },
    NavItem {
        label: "Sales Invoices",
        href: "/sales-invoices",
    },
];

/// Sidebar highlight: exact match or a nested path below the entry.
pub fn is_active(current_path: &str, href: &str) -> bool {
    current_path == href
        || current_path
            .strip_prefix(href)
            .is_some_and(|rest| rest.starts_with('/'))
}
