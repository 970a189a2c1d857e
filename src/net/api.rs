//! REST clients for the auth and chat endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`. Server-side (SSR):
//! inert stubs, since these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! [`login`] never fails outward: every transport or server failure is
//! folded into a `LoginResponse` with `success == false`, so the login form
//! has a single code path. [`register`] and [`send_chat`] do the opposite and
//! hand an [`ApiError`] back to the caller.

#![allow(clippy::unused_async)]

use super::types::{
    ApiError, ChatRequest, ChatResponse, LoginRequest, LoginResponse, RegisterRequest,
    RegisterResponse,
};

/// Base URL prepended to every request path, injected at build time.
/// Empty means same-origin requests.
#[cfg(feature = "hydrate")]
fn api_base() -> &'static str {
    option_env!("PARLOR_API_URL").unwrap_or("")
}

/// Shown when the server rejects a login without a usable message.
#[cfg(feature = "hydrate")]
const LOGIN_FAILED: &str = "Login failed";

/// Shown when no response arrived at all.
const NETWORK_ERROR: &str = "Network error, please try again later";

#[cfg(feature = "hydrate")]
const REGISTER_FAILED: &str = "Registration failed";

/// Read the `message` field of an error response, if the server sent one.
#[cfg(feature = "hydrate")]
async fn error_message(resp: &gloo_net::http::Response) -> Option<String> {
    resp.json::<super::types::ErrorBody>()
        .await
        .ok()
        .and_then(|body| body.message)
}

/// Log in via `POST {base}/api/auth/login`.
///
/// An OK status returns the server's body verbatim, including a server-sent
/// `success: false`. An error status is folded into a failure carrying the
/// server's message (or a generic fallback); a transport failure into a
/// failure with a generic network message. Does not touch the session;
/// acting on `success` is the caller's job.
pub async fn login(credentials: &LoginRequest) -> LoginResponse {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("{}/api/auth/login", api_base());
        let request = match gloo_net::http::Request::post(&url).json(credentials) {
            Ok(request) => request,
            Err(_) => return LoginResponse::failure(NETWORK_ERROR),
        };
        match request.send().await {
            Ok(resp) if resp.ok() => resp
                .json::<LoginResponse>()
                .await
                .unwrap_or_else(|_| LoginResponse::failure(LOGIN_FAILED)),
            Ok(resp) => {
                let message = error_message(&resp)
                    .await
                    .unwrap_or_else(|| LOGIN_FAILED.to_owned());
                LoginResponse::failure(message)
            }
            Err(_) => LoginResponse::failure(NETWORK_ERROR),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = credentials;
        LoginResponse::failure(NETWORK_ERROR)
    }
}

/// Create an account via `POST {base}/auth/register`.
///
/// Unlike [`login`], failures are returned to the caller: an error status
/// maps to [`ApiError::Rejected`] with the server's status and message, a
/// transport failure to [`ApiError::Network`].
///
/// # Errors
///
/// See above; the caller must handle both variants.
pub async fn register(user: &RegisterRequest) -> Result<RegisterResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("{}/auth/register", api_base());
        let request = gloo_net::http::Request::post(&url)
            .json(user)
            .map_err(|_| ApiError::Network)?;
        let resp = request.send().await.map_err(|_| ApiError::Network)?;
        if !resp.ok() {
            let message = error_message(&resp)
                .await
                .unwrap_or_else(|| REGISTER_FAILED.to_owned());
            return Err(ApiError::Rejected {
                status: resp.status(),
                message,
            });
        }
        resp.json::<RegisterResponse>()
            .await
            .map_err(|_| ApiError::Rejected {
                status: resp.status(),
                message: REGISTER_FAILED.to_owned(),
            })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = user;
        Err(ApiError::Network)
    }
}

/// Send the conversation to `POST {base}/chat` and return the reply.
///
/// # Errors
///
/// Same taxonomy as [`register`].
pub async fn send_chat(request: &ChatRequest) -> Result<ChatResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("{}/chat", api_base());
        let request = gloo_net::http::Request::post(&url)
            .json(request)
            .map_err(|_| ApiError::Network)?;
        let resp = request.send().await.map_err(|_| ApiError::Network)?;
        if !resp.ok() {
            let message = error_message(&resp)
                .await
                .unwrap_or_else(|| format!("chat request failed: {}", resp.status()));
            return Err(ApiError::Rejected {
                status: resp.status(),
                message,
            });
        }
        resp.json::<ChatResponse>().await.map_err(|_| ApiError::Rejected {
            status: resp.status(),
            message: "malformed chat reply".to_owned(),
        })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::Network)
    }
}
