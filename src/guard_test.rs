use super::*;
use crate::routes::{CHAT, LOGIN};

fn logged_in() -> Session {
    let session = Session::new();
    session.set_authenticated(true);
    session
}

// =============================================================
// Decision table
// =============================================================

#[test]
fn protected_route_without_session_redirects_to_login() {
    let session = Session::new();
    assert_eq!(decide(&CHAT, &session), GuardDecision::Redirect(&LOGIN));
}

#[test]
fn protected_route_with_session_is_allowed() {
    assert_eq!(decide(&CHAT, &logged_in()), GuardDecision::Allow);
}

#[test]
fn login_route_without_session_is_allowed() {
    let session = Session::new();
    assert_eq!(decide(&LOGIN, &session), GuardDecision::Allow);
}

#[test]
fn login_route_with_session_redirects_to_chat() {
    assert_eq!(decide(&LOGIN, &logged_in()), GuardDecision::Redirect(&CHAT));
}

// =============================================================
// Session state transitions
// =============================================================

#[test]
fn logging_in_unlocks_protected_route() {
    let session = Session::new();
    assert_eq!(decide(&CHAT, &session), GuardDecision::Redirect(&LOGIN));

    session.set_authenticated(true);
    assert_eq!(decide(&CHAT, &session), GuardDecision::Allow);
}

#[test]
fn logging_out_locks_protected_route_again() {
    let session = logged_in();
    session.set_authenticated(false);
    assert_eq!(decide(&CHAT, &session), GuardDecision::Redirect(&LOGIN));
}

#[test]
fn decision_is_idempotent_for_unchanged_session() {
    let session = Session::new();
    let first = decide(&CHAT, &session);
    let second = decide(&CHAT, &session);
    assert_eq!(first, second);

    let session = logged_in();
    let first = decide(&LOGIN, &session);
    let second = decide(&LOGIN, &session);
    assert_eq!(first, second);
}

// =============================================================
// Corrupt stored state
// =============================================================

#[cfg(not(feature = "hydrate"))]
#[test]
fn corrupt_session_value_redirects_to_login() {
    let session = Session::with_raw("maybe");
    assert_eq!(decide(&CHAT, &session), GuardDecision::Redirect(&LOGIN));
}
