//! Frontend Models
//!
//! Data structures matching the remote `tasks` table and the GoTrue
//! session payload.

use serde::{Deserialize, Serialize};

/// A single todo row (matches the `tasks` table)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub text: String,
    pub completed: bool,
    /// Server-assigned ISO-8601 timestamp; only used for ascending sort order.
    pub created_at: String,
}

/// Authenticated principal (subset of the GoTrue user object)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: Option<String>,
}

/// Session snapshot held client-side; the auth service is the source of truth
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub refresh_token: Option<String>,
    pub user: User,
}

impl User {
    /// Display label for headers: email when present, truncated id otherwise.
    pub fn label(&self) -> String {
        match &self.email {
            Some(email) => email.clone(),
            None => self.id.chars().take(8).collect(),
        }
    }
}
