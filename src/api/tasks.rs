//! Task Commands
//!
//! PostgREST bindings for the `tasks` collection. Every mutation re-supplies
//! the owner filter alongside the row id: a user cannot touch a row they do
//! not own even if they hold its id. Row-level security enforces the same
//! rule server-side; the client filter is defense in depth.

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::Serialize;
use serde_json::json;

use super::{auth, response_error, ApiError};
use crate::config::{SUPABASE_ANON_KEY, SUPABASE_URL};
use crate::models::Task;

#[derive(Serialize)]
struct NewTaskArgs<'a> {
    text: &'a str,
    completed: bool,
    user_id: &'a str,
}

// ========================
// Query builders
// ========================

/// Select query: owned rows only, ascending by creation time.
fn list_query(user_id: &str) -> String {
    format!(
        "select=id,text,completed,created_at&user_id=eq.{}&order=created_at.asc",
        user_id
    )
}

/// Mutation filter: row id AND owner.
fn row_filter(id: &str, user_id: &str) -> String {
    format!("id=eq.{}&user_id=eq.{}", id, user_id)
}

fn collection_url() -> String {
    format!("{}/rest/v1/tasks", SUPABASE_URL)
}

fn with_auth(builder: RequestBuilder) -> RequestBuilder {
    let token = auth::access_token().unwrap_or_default();
    builder
        .header("apikey", SUPABASE_ANON_KEY)
        .header("Authorization", &format!("Bearer {}", token))
}

async fn check(resp: Response) -> Result<Response, ApiError> {
    if resp.ok() {
        Ok(resp)
    } else {
        Err(response_error(resp, ApiError::Data).await)
    }
}

// ========================
// Commands
// ========================

/// Fetch all tasks owned by the user, ascending by `created_at`.
pub async fn list_tasks(user_id: &str) -> Result<Vec<Task>, ApiError> {
    let url = format!("{}?{}", collection_url(), list_query(user_id));
    let resp = with_auth(Request::get(&url))
        .send()
        .await
        .map_err(|e| ApiError::Data(e.to_string()))?;
    let resp = check(resp).await?;
    resp.json().await.map_err(|e| ApiError::Data(e.to_string()))
}

/// Insert a new incomplete task and return the created row
/// (server-assigned id and timestamp included).
pub async fn create_task(user_id: &str, text: &str) -> Result<Task, ApiError> {
    let resp = with_auth(Request::post(&collection_url()))
        .header("Prefer", "return=representation")
        .json(&NewTaskArgs {
            text,
            completed: false,
            user_id,
        })
        .map_err(|e| ApiError::Data(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Data(e.to_string()))?;
    let resp = check(resp).await?;
    let mut rows: Vec<Task> = resp
        .json()
        .await
        .map_err(|e| ApiError::Data(e.to_string()))?;
    rows.pop()
        .ok_or_else(|| ApiError::Data("insert returned no row".to_string()))
}

/// Set the completed flag on an owned task.
pub async fn set_completed(id: &str, user_id: &str, completed: bool) -> Result<(), ApiError> {
    update_fields(id, user_id, &json!({ "completed": completed })).await
}

/// Overwrite the text of an owned task.
pub async fn set_text(id: &str, user_id: &str, text: &str) -> Result<(), ApiError> {
    update_fields(id, user_id, &json!({ "text": text })).await
}

/// Delete an owned task.
pub async fn delete_task(id: &str, user_id: &str) -> Result<(), ApiError> {
    let url = format!("{}?{}", collection_url(), row_filter(id, user_id));
    let resp = with_auth(Request::delete(&url))
        .send()
        .await
        .map_err(|e| ApiError::Data(e.to_string()))?;
    check(resp).await?;
    Ok(())
}

async fn update_fields(
    id: &str,
    user_id: &str,
    fields: &serde_json::Value,
) -> Result<(), ApiError> {
    let url = format!("{}?{}", collection_url(), row_filter(id, user_id));
    let resp = with_auth(Request::patch(&url))
        .json(fields)
        .map_err(|e| ApiError::Data(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Data(e.to_string()))?;
    check(resp).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    // Client half of the authorization invariant: no request is ever built
    // without the owner clause.

    #[test]
    fn test_list_query_filters_by_owner_and_orders_ascending() {
        let query = list_query("user-1");
        assert!(query.contains("user_id=eq.user-1"));
        assert!(query.contains("order=created_at.asc"));
        assert!(query.contains("select=id,text,completed,created_at"));
    }

    #[test]
    fn test_row_filter_requires_both_id_and_owner() {
        let filter = row_filter("task-9", "user-1");
        assert!(filter.contains("id=eq.task-9"));
        assert!(filter.contains("user_id=eq.user-1"));
    }

    #[test]
    fn test_row_filter_differs_per_owner() {
        // Same row id under two principals builds two distinct requests;
        // a guessed id alone never selects another user's row.
        assert_ne!(row_filter("task-9", "user-1"), row_filter("task-9", "user-2"));
    }
}
