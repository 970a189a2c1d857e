use super::*;

// =============================================================
// Route table contents
// =============================================================

#[test]
fn table_has_chat_and_login() {
    assert_eq!(ROUTES.len(), 2);
    assert!(ROUTES.contains(&CHAT));
    assert!(ROUTES.contains(&LOGIN));
}

#[test]
fn chat_route_requires_auth() {
    assert_eq!(CHAT.path, "/");
    assert_eq!(CHAT.name, "Chat");
    assert!(CHAT.requires_auth);
}

#[test]
fn login_route_is_open() {
    assert_eq!(LOGIN.path, "/login");
    assert_eq!(LOGIN.name, "Login");
    assert!(!LOGIN.requires_auth);
}

// =============================================================
// by_path
// =============================================================

#[test]
fn by_path_finds_declared_routes() {
    assert_eq!(by_path("/"), Some(&CHAT));
    assert_eq!(by_path("/login"), Some(&LOGIN));
}

#[test]
fn by_path_misses_unknown_paths() {
    assert_eq!(by_path("/settings"), None);
    assert_eq!(by_path(""), None);
}
