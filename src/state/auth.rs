#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Authentication state tracking the current user and the in-flight login.
///
/// `loading` is the duplicate-submission gate: while a login request is
/// outstanding, further submits are ignored.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}
