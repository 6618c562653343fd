//! Authentication Commands
//!
//! GoTrue bindings: password sign-in/sign-up, OAuth hand-off, sign-out, and
//! session restore. The persisted session lives in localStorage; the remote
//! auth service stays the source of truth.

use gloo_net::http::Request;
use serde::{Deserialize, Serialize};
use wasm_bindgen::JsValue;

use super::{error_message, response_error, ApiError};
use crate::config::{SESSION_STORAGE_KEY, SUPABASE_ANON_KEY, SUPABASE_URL};
use crate::models::{Session, User};

#[derive(Serialize)]
struct CredentialArgs<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
    refresh_token: Option<String>,
    user: User,
}

/// Signup response without autoconfirm carries no tokens, just the user.
#[derive(Deserialize)]
struct SignupResponse {
    access_token: Option<String>,
    refresh_token: Option<String>,
    #[serde(default)]
    user: Option<User>,
}

/// Tokens delivered in the URL fragment after an OAuth redirect.
#[derive(Debug, Clone, PartialEq)]
pub struct FragmentTokens {
    pub access_token: String,
    pub refresh_token: Option<String>,
}

// ========================
// Commands
// ========================

/// Password sign-in. Persists the session on success.
pub async fn sign_in(email: &str, password: &str) -> Result<Session, ApiError> {
    let url = format!("{}/auth/v1/token?grant_type=password", SUPABASE_URL);
    let resp = Request::post(&url)
        .header("apikey", SUPABASE_ANON_KEY)
        .json(&CredentialArgs { email, password })
        .map_err(|e| ApiError::Auth(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Auth(e.to_string()))?;
    if !resp.ok() {
        return Err(response_error(resp, ApiError::Auth).await);
    }
    let token: TokenResponse = resp
        .json()
        .await
        .map_err(|e| ApiError::Auth(e.to_string()))?;
    let session = Session {
        access_token: token.access_token,
        refresh_token: token.refresh_token,
        user: token.user,
    };
    persist_session(&session);
    Ok(session)
}

/// Sign-up. Returns `None` when email confirmation is pending (no session yet).
pub async fn sign_up(email: &str, password: &str) -> Result<Option<Session>, ApiError> {
    let url = format!("{}/auth/v1/signup", SUPABASE_URL);
    let resp = Request::post(&url)
        .header("apikey", SUPABASE_ANON_KEY)
        .json(&CredentialArgs { email, password })
        .map_err(|e| ApiError::Auth(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Auth(e.to_string()))?;
    if !resp.ok() {
        return Err(response_error(resp, ApiError::Auth).await);
    }
    let signup: SignupResponse = resp
        .json()
        .await
        .map_err(|e| ApiError::Auth(e.to_string()))?;
    match (signup.access_token, signup.user) {
        (Some(access_token), Some(user)) => {
            let session = Session {
                access_token,
                refresh_token: signup.refresh_token,
                user,
            };
            persist_session(&session);
            Ok(Some(session))
        }
        _ => Ok(None),
    }
}

/// Terminate the remote session and drop the persisted snapshot.
///
/// The snapshot is cleared even when the remote call fails, so a dead
/// backend can never pin the user into a signed-in UI.
pub async fn sign_out() -> Result<(), ApiError> {
    let token = persisted_session().map(|s| s.access_token);
    clear_persisted_session();
    let Some(token) = token else { return Ok(()) };

    let url = format!("{}/auth/v1/logout", SUPABASE_URL);
    let resp = Request::post(&url)
        .header("apikey", SUPABASE_ANON_KEY)
        .header("Authorization", &format!("Bearer {}", token))
        .send()
        .await
        .map_err(|e| ApiError::Auth(e.to_string()))?;
    if !resp.ok() && resp.status() != 401 {
        return Err(response_error(resp, ApiError::Auth).await);
    }
    Ok(())
}

/// Resolve the current session, OAuth fragment first.
///
/// An OAuth redirect lands with tokens in the URL fragment; those are
/// materialized into a full session by fetching the user profile, then
/// persisted and scrubbed from the address bar. Otherwise the persisted
/// snapshot from an earlier visit is returned as-is.
pub async fn current_session() -> Result<Option<Session>, ApiError> {
    if let Some(tokens) = window_fragment_tokens() {
        let user = fetch_user(&tokens.access_token)
            .await
            .map_err(UserLookupError::into_auth)?;
        let session = Session {
            access_token: tokens.access_token,
            refresh_token: tokens.refresh_token,
            user,
        };
        persist_session(&session);
        clear_fragment();
        return Ok(Some(session));
    }
    Ok(persisted_session())
}

/// Restore the persisted session on app start, validating the token once.
///
/// A stale or revoked token comes back 401 from `/user`; that drops the
/// snapshot and the app starts signed out. A lookup that never gets an
/// authoritative answer (network down, 5xx) leaves the snapshot in place
/// so the next visit can try again. No retry beyond this one check.
pub async fn restore_session() -> Result<Option<Session>, ApiError> {
    let Some(session) = persisted_session() else {
        return Ok(None);
    };
    match fetch_user(&session.access_token).await {
        Ok(user) => Ok(Some(Session { user, ..session })),
        Err(err) => {
            if matches!(err, UserLookupError::Rejected(_)) {
                clear_persisted_session();
            }
            Err(err.into_auth())
        }
    }
}

/// Full-page navigation to the OAuth provider's consent screen.
pub fn begin_oauth(provider: &str) {
    let Some(window) = web_sys::window() else { return };
    let origin = window.location().origin().unwrap_or_default();
    let url = oauth_authorize_url(SUPABASE_URL, provider, &origin);
    let _ = window.location().set_href(&url);
}

/// Bearer token for data-plane requests, if a session is persisted.
pub fn access_token() -> Option<String> {
    persisted_session().map(|s| s.access_token)
}

// ========================
// Internals
// ========================

/// `/user` lookup failure, split by whether the token itself was refused.
#[derive(Debug, Clone, PartialEq)]
enum UserLookupError {
    /// The auth service saw the token and rejected it.
    Rejected(String),
    /// No authoritative answer; the token's status is unknown.
    Unreachable(String),
}

impl UserLookupError {
    fn into_auth(self) -> ApiError {
        match self {
            Self::Rejected(msg) | Self::Unreachable(msg) => ApiError::Auth(msg),
        }
    }
}

fn classify_lookup_failure(status: Option<u16>, message: String) -> UserLookupError {
    match status {
        Some(401) | Some(403) => UserLookupError::Rejected(message),
        _ => UserLookupError::Unreachable(message),
    }
}

async fn fetch_user(access_token: &str) -> Result<User, UserLookupError> {
    let url = format!("{}/auth/v1/user", SUPABASE_URL);
    let resp = Request::get(&url)
        .header("apikey", SUPABASE_ANON_KEY)
        .header("Authorization", &format!("Bearer {}", access_token))
        .send()
        .await
        .map_err(|e| classify_lookup_failure(None, e.to_string()))?;
    if !resp.ok() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        return Err(classify_lookup_failure(Some(status), error_message(&body, status)));
    }
    resp.json()
        .await
        .map_err(|e| classify_lookup_failure(None, e.to_string()))
}

fn oauth_authorize_url(base: &str, provider: &str, origin: &str) -> String {
    format!(
        "{}/auth/v1/authorize?provider={}&redirect_to={}/auth/callback",
        base, provider, origin
    )
}

/// Parse `access_token`/`refresh_token` out of a location hash.
fn parse_fragment(hash: &str) -> Option<FragmentTokens> {
    let hash = hash.strip_prefix('#').unwrap_or(hash);
    let mut access_token = None;
    let mut refresh_token = None;
    for pair in hash.split('&') {
        let Some((key, value)) = pair.split_once('=') else {
            continue;
        };
        match key {
            "access_token" => access_token = Some(value.to_string()),
            "refresh_token" => refresh_token = Some(value.to_string()),
            _ => {}
        }
    }
    access_token.map(|access_token| FragmentTokens {
        access_token,
        refresh_token,
    })
}

fn window_fragment_tokens() -> Option<FragmentTokens> {
    let hash = web_sys::window()?.location().hash().ok()?;
    parse_fragment(&hash)
}

/// Scrub OAuth tokens from the address bar once consumed.
fn clear_fragment() {
    let Some(window) = web_sys::window() else { return };
    let Ok(path) = window.location().pathname() else { return };
    if let Ok(history) = window.history() {
        let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(&path));
    }
}

fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

fn persist_session(session: &Session) {
    let Some(storage) = storage() else { return };
    if let Ok(json) = serde_json::to_string(session) {
        let _ = storage.set_item(SESSION_STORAGE_KEY, &json);
    }
}

fn persisted_session() -> Option<Session> {
    let json = storage()?.get_item(SESSION_STORAGE_KEY).ok()??;
    serde_json::from_str(&json).ok()
}

fn clear_persisted_session() {
    if let Some(storage) = storage() {
        let _ = storage.remove_item(SESSION_STORAGE_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_fragment_full_oauth_hash() {
        let hash = "#access_token=abc123&expires_in=3600&refresh_token=def456&token_type=bearer";
        let tokens = parse_fragment(hash).expect("tokens expected");
        assert_eq!(tokens.access_token, "abc123");
        assert_eq!(tokens.refresh_token.as_deref(), Some("def456"));
    }

    #[test]
    fn test_parse_fragment_without_refresh_token() {
        let tokens = parse_fragment("access_token=only").expect("tokens expected");
        assert_eq!(tokens.access_token, "only");
        assert_eq!(tokens.refresh_token, None);
    }

    #[test]
    fn test_parse_fragment_rejects_non_token_hashes() {
        assert_eq!(parse_fragment(""), None);
        assert_eq!(parse_fragment("#section-2"), None);
        assert_eq!(parse_fragment("#error=access_denied&error_code=403"), None);
    }

    #[test]
    fn test_only_token_rejection_counts_as_rejected() {
        // A revoked token must sign the user out; a flaky network at
        // startup must not.
        assert_eq!(
            classify_lookup_failure(Some(401), "Invalid token".into()),
            UserLookupError::Rejected("Invalid token".into())
        );
        assert_eq!(
            classify_lookup_failure(Some(403), "Forbidden".into()),
            UserLookupError::Rejected("Forbidden".into())
        );
        assert_eq!(
            classify_lookup_failure(Some(503), "upstream down".into()),
            UserLookupError::Unreachable("upstream down".into())
        );
        assert_eq!(
            classify_lookup_failure(None, "connection refused".into()),
            UserLookupError::Unreachable("connection refused".into())
        );
    }

    #[test]
    fn test_oauth_authorize_url_targets_callback_route() {
        let url = oauth_authorize_url("https://x.supabase.co", "github", "https://app.example");
        assert_eq!(
            url,
            "https://x.supabase.co/auth/v1/authorize?provider=github&redirect_to=https://app.example/auth/callback"
        );
    }
}
