use axum::http::StatusCode;
use leavedesk_backend::models::user::UserRole;
use leavedesk_domain::LeaveStatus;
use serde_json::json;

mod support;

use support::{create_test_token, date, seed_leave, seed_user, send, test_state};

#[tokio::test]
async fn create_then_list_shows_pending_record() {
    let state = test_state();
    let employee = seed_user(&state, "Alice", UserRole::Employee).await;
    let token = create_test_token(&employee);

    let (status, created) = send(
        &state,
        "POST",
        "/api/leaves",
        Some(&token),
        Some(json!({
            "fromDate": "2025-07-15",
            "toDate": "2025-07-17",
            "type": "annual",
            "reason": "Summer vacation"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["status"], "Pending");
    assert_eq!(created["ownerId"], employee.id.as_str());
    assert_eq!(created["type"], "annual");

    let (status, listed) = send(&state, "GET", "/api/leaves", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    let listed = listed.as_array().expect("array");
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["id"], created["id"]);
    assert_eq!(listed[0]["fromDate"], "2025-07-15");
}

#[tokio::test]
async fn list_only_returns_callers_records() {
    let state = test_state();
    let alice = seed_user(&state, "Alice", UserRole::Employee).await;
    let bob = seed_user(&state, "Bob", UserRole::Employee).await;
    seed_leave(&state, &bob, date(2025, 3, 3), date(2025, 3, 4), LeaveStatus::Pending).await;

    let (status, listed) = send(
        &state,
        "GET",
        "/api/leaves",
        Some(&create_test_token(&alice)),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed.as_array().map(Vec::len), Some(0));
}

#[tokio::test]
async fn create_with_reversed_range_is_rejected() {
    let state = test_state();
    let employee = seed_user(&state, "Alice", UserRole::Employee).await;

    let (status, body) = send(
        &state,
        "POST",
        "/api/leaves",
        Some(&create_test_token(&employee)),
        Some(json!({
            "fromDate": "2025-07-20",
            "toDate": "2025-07-15",
            "type": "sick",
            "reason": "Invalid dates"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "To Date must be on or after From Date");
}

#[tokio::test]
async fn create_with_blank_reason_is_rejected() {
    let state = test_state();
    let employee = seed_user(&state, "Alice", UserRole::Employee).await;

    let (status, body) = send(
        &state,
        "POST",
        "/api/leaves",
        Some(&create_test_token(&employee)),
        Some(json!({
            "fromDate": "2025-07-15",
            "toDate": "2025-07-15",
            "type": "casual",
            "reason": "   "
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Reason is required");
}

#[tokio::test]
async fn create_over_remaining_quota_reports_days_left() {
    let state = test_state();
    let employee = seed_user(&state, "Alice", UserRole::Employee).await;
    seed_leave(&state, &employee, date(2025, 1, 6), date(2025, 1, 23), LeaveStatus::Approved).await;

    let (status, body) = send(
        &state,
        "POST",
        "/api/leaves",
        Some(&create_test_token(&employee)),
        Some(json!({
            "fromDate": "2025-07-01",
            "toDate": "2025-07-03",
            "type": "annual",
            "reason": "Trip"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert_eq!(body["error"], "Only 2 days remaining for 2025");
}

#[tokio::test]
async fn create_longer_than_cap_is_rejected() {
    let state = test_state();
    let employee = seed_user(&state, "Alice", UserRole::Employee).await;

    let (status, body) = send(
        &state,
        "POST",
        "/api/leaves",
        Some(&create_test_token(&employee)),
        Some(json!({
            "fromDate": "2025-08-01",
            "toDate": "2025-08-21",
            "type": "annual",
            "reason": "Sabbatical"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Leave duration cannot exceed 20 days");
}

#[tokio::test]
async fn cancel_removes_pending_record() {
    let state = test_state();
    let employee = seed_user(&state, "Alice", UserRole::Employee).await;
    let token = create_test_token(&employee);
    let leave =
        seed_leave(&state, &employee, date(2025, 5, 5), date(2025, 5, 6), LeaveStatus::Pending).await;

    let (status, body) = send(
        &state,
        "DELETE",
        &format!("/api/leaves/{}", leave.id),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["message"].is_string());

    let (_, listed) = send(&state, "GET", "/api/leaves", Some(&token), None).await;
    assert_eq!(listed.as_array().map(Vec::len), Some(0));
}

#[tokio::test]
async fn cancel_of_decided_record_conflicts() {
    let state = test_state();
    let employee = seed_user(&state, "Alice", UserRole::Employee).await;
    let leave =
        seed_leave(&state, &employee, date(2025, 5, 5), date(2025, 5, 6), LeaveStatus::Approved).await;

    let (status, body) = send(
        &state,
        "DELETE",
        &format!("/api/leaves/{}", leave.id),
        Some(&create_test_token(&employee)),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "CONFLICT");
}

#[tokio::test]
async fn cancel_of_someone_elses_record_is_not_found() {
    let state = test_state();
    let alice = seed_user(&state, "Alice", UserRole::Employee).await;
    let bob = seed_user(&state, "Bob", UserRole::Employee).await;
    let leave =
        seed_leave(&state, &bob, date(2025, 5, 5), date(2025, 5, 6), LeaveStatus::Pending).await;

    let (status, _) = send(
        &state,
        "DELETE",
        &format!("/api/leaves/{}", leave.id),
        Some(&create_test_token(&alice)),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn requests_without_token_are_unauthorized() {
    let state = test_state();
    let (status, body) = send(&state, "GET", "/api/leaves", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], "UNAUTHORIZED");

    let (status, _) = send(&state, "GET", "/api/leaves", Some("garbage"), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}
