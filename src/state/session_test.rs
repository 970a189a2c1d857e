use super::*;

// =============================================================
// Flag parsing
// =============================================================

#[test]
fn literal_true_means_authenticated() {
    assert!(flag_means_authenticated(Some("true")));
}

#[test]
fn missing_value_means_logged_out() {
    assert!(!flag_means_authenticated(None));
}

#[test]
fn corrupt_values_mean_logged_out() {
    for raw in ["maybe", "TRUE", "1", "false", "", " true"] {
        assert!(!flag_means_authenticated(Some(raw)), "accepted {raw:?}");
    }
}

// =============================================================
// Session accessors
// =============================================================

#[test]
fn fresh_session_is_logged_out() {
    let session = Session::new();
    assert!(!session.is_authenticated());
}

#[test]
fn set_authenticated_round_trips() {
    let session = Session::new();

    session.set_authenticated(true);
    assert!(session.is_authenticated());

    session.set_authenticated(false);
    assert!(!session.is_authenticated());
}

#[test]
fn clones_share_the_flag() {
    let session = Session::new();
    let other = session.clone();

    session.set_authenticated(true);
    assert!(other.is_authenticated());
}

#[test]
fn corrupt_stored_value_reads_as_logged_out() {
    let session = Session::with_raw("maybe");
    assert!(!session.is_authenticated());
}
