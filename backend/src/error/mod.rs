use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use leavedesk_domain::{DraftError, QuotaViolation, TransitionError};
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Unauthorized(String),
    #[error("{0}")]
    Forbidden(String),
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    BadRequest(String),
    #[error("internal server error: {0}")]
    InternalServerError(anyhow::Error),
    #[error("validation failed: {}", .0.join(", "))]
    Validation(Vec<String>),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message, code, details) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg, "NOT_FOUND".to_string(), None),
            AppError::Unauthorized(msg) => (
                StatusCode::UNAUTHORIZED,
                msg,
                "UNAUTHORIZED".to_string(),
                None,
            ),
            AppError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg, "FORBIDDEN".to_string(), None),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, msg, "CONFLICT".to_string(), None),
            AppError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                msg,
                "BAD_REQUEST".to_string(),
                None,
            ),
            AppError::InternalServerError(err) => {
                tracing::error!("Internal server error: {:?}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                    "INTERNAL_SERVER_ERROR".to_string(),
                    None,
                )
            }
            AppError::Validation(errors) => {
                // A single rule failure is shown to the user as-is.
                let message = match errors.as_slice() {
                    [only] => only.clone(),
                    _ => "Validation failed".to_string(),
                };
                (
                    StatusCode::BAD_REQUEST,
                    message,
                    "VALIDATION_ERROR".to_string(),
                    Some(serde_json::json!({ "errors": errors })),
                )
            }
        };

        let body = Json(ErrorResponse {
            error: error_message,
            code,
            details,
        });

        (status, body).into_response()
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::InternalServerError(err)
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let messages: Vec<String> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| match &e.message {
                    Some(message) => message.to_string(),
                    None => format!("{}: {}", field, e.code),
                })
            })
            .collect();
        AppError::Validation(messages)
    }
}

impl From<DraftError> for AppError {
    fn from(err: DraftError) -> Self {
        AppError::Validation(vec![err.to_string()])
    }
}

impl From<QuotaViolation> for AppError {
    fn from(err: QuotaViolation) -> Self {
        AppError::Validation(vec![err.to_string()])
    }
}

impl From<TransitionError> for AppError {
    fn from(err: TransitionError) -> Self {
        AppError::Conflict(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn response_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("read body");
        serde_json::from_slice(&bytes).expect("json")
    }

    #[tokio::test]
    async fn app_error_into_response_maps_status_and_body() {
        let response = AppError::BadRequest("bad".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = response_json(response).await;
        assert_eq!(json["error"], "bad");
        assert_eq!(json["code"], "BAD_REQUEST");

        let response = AppError::Unauthorized("nope".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let json = response_json(response).await;
        assert_eq!(json["code"], "UNAUTHORIZED");

        let response = AppError::Forbidden("denied".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);

        let response = AppError::Conflict("conflict".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
        let json = response_json(response).await;
        assert_eq!(json["code"], "CONFLICT");

        let response = AppError::NotFound("missing".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json = response_json(response).await;
        assert_eq!(json["error"], "missing");
    }

    #[tokio::test]
    async fn single_validation_failure_is_surfaced_verbatim() {
        let response = AppError::from(QuotaViolation::DurationExceedsRemainingQuota {
            remaining: 2,
            year: 2025,
        })
        .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = response_json(response).await;
        assert_eq!(json["error"], "Only 2 days remaining for 2025");
        assert_eq!(json["code"], "VALIDATION_ERROR");
        assert_eq!(json["details"]["errors"][0], "Only 2 days remaining for 2025");
    }

    #[tokio::test]
    async fn multiple_validation_failures_use_generic_message() {
        let response =
            AppError::Validation(vec!["a: invalid".into(), "b: invalid".into()]).into_response();
        let json = response_json(response).await;
        assert_eq!(json["error"], "Validation failed");
        assert_eq!(json["details"]["errors"][1], "b: invalid");
    }

    #[tokio::test]
    async fn app_error_internal_maps_to_generic_message() {
        let response = AppError::InternalServerError(anyhow::anyhow!("boom")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = response_json(response).await;
        assert_eq!(json["error"], "Internal server error");
        assert!(json["details"].is_null());
    }
}
