//! REST API helpers for the external auth backend.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics so a failed login degrades
//! to an inline message on the login panel.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::http::{HttpClient, HttpError};
use super::types::{LoginRequest, LoginResponse};

pub const LOGIN_ENDPOINT: &str = "/api/login";

fn login_failed_message(err: &HttpError) -> String {
    match err {
        HttpError::Status(401 | 403) => "Invalid username or password.".to_owned(),
        other => format!("login failed: {other}"),
    }
}

/// Exchange credentials for a session token via `POST /api/login`.
///
/// # Errors
///
/// Returns a user-facing message when the request fails or the backend
/// answers without a usable token.
pub async fn login(http: &HttpClient, username: &str, password: &str) -> Result<String, String> {
    let body = LoginRequest { username: username.to_owned(), password: password.to_owned() };
    let resp: LoginResponse = http
        .post_json(LOGIN_ENDPOINT, &body)
        .await
        .map_err(|e| login_failed_message(&e))?;
    if resp.token.is_empty() {
        return Err(login_failed_message(&HttpError::Decode("empty token".to_owned())));
    }
    Ok(resp.token)
}
