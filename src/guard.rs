//! Navigation guard.
//!
//! Every route transition is checked against the session before the
//! destination view renders. The check is synchronous and reads local state
//! only, so it cannot tell "really logged in" from "claims to be logged in";
//! server endpoints re-validate on their side.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::routes::{self, RouteDescriptor};
use crate::state::session::Session;

/// Outcome of a navigation check. Exactly one per transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Proceed to the requested destination.
    Allow,
    /// Abandon the transition and go to the given route instead.
    Redirect(&'static RouteDescriptor),
}

/// Decide whether a transition to `to` may proceed.
///
/// First match wins:
/// 1. protected destination without a session goes to the login form
/// 2. the login form while already authenticated goes back to the chat
/// 3. everything else is allowed
pub fn decide(to: &RouteDescriptor, session: &Session) -> GuardDecision {
    let authenticated = session.is_authenticated();

    if to.requires_auth && !authenticated {
        GuardDecision::Redirect(&routes::LOGIN)
    } else if to.name == routes::LOGIN.name && authenticated {
        GuardDecision::Redirect(&routes::CHAT)
    } else {
        GuardDecision::Allow
    }
}
