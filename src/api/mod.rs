//! Supabase REST Client
//!
//! Frontend bindings to the managed backend, organized by surface:
//! GoTrue authentication and the PostgREST `tasks` collection.

mod auth;
mod tasks;

pub use auth::*;
pub use tasks::*;

use gloo_net::http::Response;
use thiserror::Error;

/// Errors crossing back from the remote backend.
///
/// Everything is stringly at the boundary on purpose: each variant carries
/// the message shown to the user, with the backend's own message preserved
/// verbatim where it provides one.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Session lookup, sign-in/up/out failure.
    #[error("{0}")]
    Auth(String),
    /// Any store operation failure.
    #[error("{0}")]
    Data(String),
}

/// Extract a human-readable message from a Supabase error body.
///
/// GoTrue uses `error_description` or `msg`, PostgREST uses `message`.
/// Falls back to the raw body, then to the HTTP status.
pub(crate) fn error_message(body: &str, status: u16) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["error_description", "msg", "message"] {
            if let Some(msg) = value.get(key).and_then(|v| v.as_str()) {
                return msg.to_string();
            }
        }
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        format!("request failed with status {}", status)
    } else {
        trimmed.to_string()
    }
}

/// Turn a non-2xx response into the given error variant.
pub(crate) async fn response_error(
    resp: Response,
    wrap: fn(String) -> ApiError,
) -> ApiError {
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    wrap(error_message(&body, status))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_postgrest_shape() {
        let body = r#"{"code":"23502","message":"null value in column \"text\"","details":null}"#;
        assert_eq!(error_message(body, 400), "null value in column \"text\"");
    }

    #[test]
    fn test_error_message_gotrue_shape() {
        let body = r#"{"error":"invalid_grant","error_description":"Invalid login credentials"}"#;
        assert_eq!(error_message(body, 400), "Invalid login credentials");
    }

    #[test]
    fn test_error_message_gotrue_msg_shape() {
        let body = r#"{"code":401,"msg":"Invalid token"}"#;
        assert_eq!(error_message(body, 401), "Invalid token");
    }

    #[test]
    fn test_error_message_falls_back_to_body_then_status() {
        assert_eq!(error_message("plain failure", 500), "plain failure");
        assert_eq!(error_message("  ", 503), "request failed with status 503");
    }
}
