//! Route table: every guarded path with its allow-list.
//!
//! `app.rs` mounts these routes and the sidebar builds its navigation from
//! the same table, so a role never sees a link it would be redirected away
//! from.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use crate::state::role::Role;

pub const ROOT_PATH: &str = "/";
/// Ungated login route; also the redirect target for every guard failure.
pub const LOGIN_PATH: &str = "/auth/login";
/// Landing route after a successful login.
pub const HOME_PATH: &str = "/dashboard";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteSpec {
    pub path: &'static str,
    pub title: &'static str,
    pub allowed: &'static [Role],
}

impl RouteSpec {
    #[must_use]
    pub fn allows(&self, role: Role) -> bool {
        self.allowed.contains(&role)
    }
}

pub const DASHBOARD: RouteSpec = RouteSpec { path: HOME_PATH, title: "Dashboard", allowed: &Role::ALL };

pub const INVOICES: RouteSpec = RouteSpec { path: "/invoices", title: "Invoices", allowed: &Role::ALL };

pub const INVOICE_CREATE: RouteSpec =
    RouteSpec { path: "/invoices/create", title: "Submit Invoice", allowed: &[Role::SupplierFinance] };

pub const GOODS_RECEIPTS: RouteSpec = RouteSpec {
    path: "/goods-receipts",
    title: "Goods Receipts",
    allowed: &[Role::Finance, Role::SupplierFinance],
};

pub const REPORTS: RouteSpec =
    RouteSpec { path: "/reports", title: "Reports", allowed: &[Role::SuperAdmin, Role::Finance] };

pub const USERS: RouteSpec = RouteSpec { path: "/users", title: "Users", allowed: &[Role::SuperAdmin] };

pub const NEWS: RouteSpec = RouteSpec { path: "/news", title: "News", allowed: &[Role::SuperAdmin] };

/// All guarded routes, in sidebar order.
pub static GUARDED_ROUTES: [RouteSpec; 7] = [DASHBOARD, INVOICES, INVOICE_CREATE, GOODS_RECEIPTS, REPORTS, USERS, NEWS];

/// Sidebar entries a role may open.
#[must_use]
pub fn navigation_for(role: Role) -> Vec<&'static RouteSpec> {
    GUARDED_ROUTES.iter().filter(|route| route.allows(role)).collect()
}
