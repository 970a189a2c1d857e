//! Wire types for the auth and chat endpoints.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Credentials for `POST /api/auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Account data the server returns for an authenticated user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub avatar: Option<String>,
}

/// Body of a login response.
///
/// When `success` is true the server also sends `user`; the client trusts
/// that rather than enforcing it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    pub message: Option<String>,
    pub user: Option<User>,
}

impl LoginResponse {
    /// Client-side failure carrying a caller-facing message, used when the
    /// server rejected the request or could not be reached.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            user: None,
        }
    }
}

/// Payload for `POST /auth/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    pub email: String,
}

/// Body of a registration response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub success: bool,
    pub message: Option<String>,
    pub user: Option<User>,
}

/// One turn of the conversation, as exchanged with the server.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// `"user"` or `"assistant"`.
    pub role: String,
    pub content: String,
    pub time: Option<String>,
}

/// Payload for `POST /chat`: the full conversation so far.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub messages: Vec<ChatMessage>,
}

/// Reply returned by `POST /chat`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub role: String,
    pub content: String,
    pub time: Option<String>,
}

/// Shape of the body the server sends along with error statuses.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ErrorBody {
    pub message: Option<String>,
}

/// Failure of a request whose errors are handed back to the caller.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The server answered with an error status.
    #[error("{message}")]
    Rejected { status: u16, message: String },
    /// No response arrived at all.
    #[error("network error, please try again later")]
    Network,
}
