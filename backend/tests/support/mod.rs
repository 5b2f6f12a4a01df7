#![allow(dead_code)]
use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use chrono::NaiveDate;
use http_body_util::BodyExt;
use leavedesk_backend::{
    app,
    config::Config,
    models::{
        leave_request::LeaveRequest,
        user::{User, UserRole},
    },
    state::AppState,
    utils::{jwt::create_access_token, password::hash_password},
};
use leavedesk_domain::{LeaveDraft, LeaveStatus, LeaveType, TransitionPolicy};
use serde_json::Value;
use tower::ServiceExt;

pub const TEST_PASSWORD: &str = "password123";

pub fn test_config() -> Config {
    Config {
        jwt_secret: "a_secure_token_that_is_long_enough_123".into(),
        jwt_expiration_hours: 1,
        ..Config::default()
    }
}

pub fn test_state() -> AppState {
    AppState::in_memory(test_config())
}

pub fn strict_state() -> AppState {
    AppState::in_memory(Config {
        status_transitions: TransitionPolicy::Strict,
        ..test_config()
    })
}

pub async fn seed_user(state: &AppState, name: &str, role: UserRole) -> User {
    let user = User::new(
        name.into(),
        format!("{}@example.com", name.to_lowercase()),
        hash_password(TEST_PASSWORD).expect("hash password"),
        role,
    );
    state.users.create(user).await.expect("seed user")
}

pub async fn seed_leave(
    state: &AppState,
    owner: &User,
    from: NaiveDate,
    to: NaiveDate,
    status: LeaveStatus,
) -> LeaveRequest {
    let mut leave = LeaveRequest::new(
        owner.id.clone(),
        LeaveDraft {
            from_date: from,
            to_date: to,
            leave_type: LeaveType::Annual,
            reason: "Seeded".into(),
        },
    );
    leave.status = status;
    state.leaves.create(leave).await.expect("seed leave")
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

pub fn create_test_token(user: &User) -> String {
    let config = test_config();
    create_access_token(
        user.id.clone(),
        user.role.as_str().to_string(),
        &config.jwt_secret,
        config.jwt_expiration_hours,
    )
    .expect("create token")
}

/// Sends one request through the full router and returns status and JSON body.
pub async fn send(
    state: &AppState,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {}", token));
    }
    let request = match body {
        Some(json) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .unwrap();

    let response = app(state.clone()).oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, json)
}
