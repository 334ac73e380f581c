use super::*;

#[test]
fn login_failed_message_for_rejected_credentials() {
    assert_eq!(login_failed_message(&HttpError::Status(401)), "Invalid username or password.");
    assert_eq!(login_failed_message(&HttpError::Status(403)), "Invalid username or password.");
}

#[test]
fn login_failed_message_formats_other_errors() {
    assert_eq!(login_failed_message(&HttpError::Status(500)), "login failed: unexpected status: 500");
    assert_eq!(
        login_failed_message(&HttpError::Transport("offline".to_owned())),
        "login failed: request failed: offline"
    );
}

#[test]
fn login_request_serializes_credentials() {
    let body = LoginRequest { username: "ada".to_owned(), password: "pw".to_owned() };
    let json = serde_json::to_value(&body).unwrap();
    assert_eq!(json, serde_json::json!({ "username": "ada", "password": "pw" }));
}

#[test]
fn login_response_deserializes_token() {
    let resp: LoginResponse = serde_json::from_str(r#"{"token":"abc123"}"#).unwrap();
    assert_eq!(resp.token, "abc123");
}
