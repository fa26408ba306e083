//! REST API helpers for the session endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since these endpoints are
//! only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get a `Result` instead of panics so an auth fetch failure
//! degrades to an unauthenticated session without crashing hydration. The
//! provider surfaces the error text as a transient notice and otherwise
//! swallows it.

#![allow(clippy::unused_async)]

use super::types::User;

#[cfg(feature = "hydrate")]
use super::types::CurrentUserResponse;

/// Failure modes of the current-user fetch.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("current-user request failed with status {0}")]
    Status(u16),
    #[error("malformed current-user response: {0}")]
    Decode(String),
    #[error("not available on the server")]
    Unavailable,
}

/// Fetch the currently authenticated user from `{server_url}/current-user`.
///
/// A single best-effort attempt: no retry, no timeout. The provider calls
/// this exactly once, on mount.
///
/// # Errors
///
/// Returns [`ApiError`] on network failure, a non-success status, or an
/// undecodable body.
pub async fn fetch_current_user() -> Result<User, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("{}/current-user", crate::util::server_url::server_url());
        let resp = gloo_net::http::Request::get(&url)
            .header("Content-Type", "application/json")
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        let body: CurrentUserResponse = resp
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(User::from(body))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}
