use super::*;

// =============================================================
// Login wire shapes
// =============================================================

#[test]
fn login_request_serializes_both_fields() {
    let request = LoginRequest {
        username: "u".to_owned(),
        password: "p".to_owned(),
    };
    let json = serde_json::to_value(&request).unwrap();
    assert_eq!(json, serde_json::json!({"username": "u", "password": "p"}));
}

#[test]
fn minimal_failure_body_deserializes() {
    let response: LoginResponse = serde_json::from_str(r#"{"success": false}"#).unwrap();
    assert!(!response.success);
    assert_eq!(response.message, None);
    assert_eq!(response.user, None);
}

#[test]
fn rejection_body_keeps_server_message() {
    let response: LoginResponse =
        serde_json::from_str(r#"{"success": false, "message": "Invalid credentials"}"#).unwrap();
    assert!(!response.success);
    assert_eq!(response.message.as_deref(), Some("Invalid credentials"));
}

#[test]
fn success_body_carries_the_user() {
    let body = r#"{
        "success": true,
        "user": {"id": 7, "username": "u", "email": "u@example.com"}
    }"#;
    let response: LoginResponse = serde_json::from_str(body).unwrap();
    assert!(response.success);
    let user = response.user.unwrap();
    assert_eq!(user.id, 7);
    assert_eq!(user.username, "u");
    assert_eq!(user.avatar, None);
}

#[test]
fn failure_constructor_always_has_a_message() {
    let response = LoginResponse::failure("nope");
    assert!(!response.success);
    assert_eq!(response.message.as_deref(), Some("nope"));
    assert_eq!(response.user, None);
}

// =============================================================
// Error bodies and ApiError
// =============================================================

#[test]
fn error_body_extracts_message() {
    let body: ErrorBody = serde_json::from_str(r#"{"message": "taken"}"#).unwrap();
    assert_eq!(body.message.as_deref(), Some("taken"));
}

#[test]
fn error_body_tolerates_empty_object() {
    let body: ErrorBody = serde_json::from_str("{}").unwrap();
    assert_eq!(body.message, None);
}

#[test]
fn rejected_error_displays_the_server_message() {
    let error = ApiError::Rejected {
        status: 409,
        message: "username taken".to_owned(),
    };
    assert_eq!(error.to_string(), "username taken");
}

#[test]
fn network_error_has_a_generic_message() {
    assert!(ApiError::Network.to_string().contains("network error"));
}

// =============================================================
// Chat wire shapes
// =============================================================

#[test]
fn chat_request_serializes_the_history() {
    let request = ChatRequest {
        messages: vec![ChatMessage {
            role: "user".to_owned(),
            content: "hi".to_owned(),
            time: None,
        }],
    };
    let json = serde_json::to_value(&request).unwrap();
    assert_eq!(json["messages"][0]["role"], "user");
    assert_eq!(json["messages"][0]["content"], "hi");
}

#[test]
fn chat_response_deserializes_without_time() {
    let response: ChatResponse =
        serde_json::from_str(r#"{"role": "assistant", "content": "hello"}"#).unwrap();
    assert_eq!(response.role, "assistant");
    assert_eq!(response.content, "hello");
    assert_eq!(response.time, None);
}
