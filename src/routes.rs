//! Static route table.
//!
//! Descriptors are plain data fixed at startup; the view bound to each route
//! is wired up in `app.rs`. The guard consults `requires_auth` to decide
//! whether a destination is reachable.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

/// Static description of a navigable view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteDescriptor {
    pub path: &'static str,
    pub name: &'static str,
    /// Destination is only reachable with an authenticated session.
    pub requires_auth: bool,
}

/// Main chat view.
pub const CHAT: RouteDescriptor = RouteDescriptor {
    path: "/",
    name: "Chat",
    requires_auth: true,
};

/// Login form, reachable without a session.
pub const LOGIN: RouteDescriptor = RouteDescriptor {
    path: "/login",
    name: "Login",
    requires_auth: false,
};

/// The full route table.
pub static ROUTES: [RouteDescriptor; 2] = [CHAT, LOGIN];

/// Look up a route descriptor by its path.
pub fn by_path(path: &str) -> Option<&'static RouteDescriptor> {
    ROUTES.iter().find(|route| route.path == path)
}
