use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::auth::AuthError;
use crate::llm_client::LlmError;
use crate::models::profile::ProfileError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// The taxonomy is closed: every failure a handler can produce maps onto one of
/// these kinds, and each kind has exactly one externally visible status.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Upstream service unavailable: {0}")]
    UpstreamUnavailable(String),

    #[error("Completion service returned a malformed response: {0}")]
    UpstreamMalformed(String),

    #[error("Storage error: {0}")]
    Storage(#[from] sqlx::Error),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Status and stable error code for each kind.
    pub fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::Validation(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            AppError::Unauthorized(_) => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED"),
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            AppError::UpstreamUnavailable(_) => (StatusCode::BAD_GATEWAY, "UPSTREAM_UNAVAILABLE"),
            AppError::UpstreamMalformed(_) => (StatusCode::BAD_GATEWAY, "UPSTREAM_MALFORMED"),
            AppError::Storage(_) => (StatusCode::INTERNAL_SERVER_ERROR, "STORAGE_ERROR"),
            AppError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        let message = match &self {
            AppError::Validation(msg) | AppError::NotFound(msg) => msg.clone(),
            AppError::Unauthorized(reason) => {
                tracing::debug!("Rejected credential: {reason}");
                "Authentication required".to_string()
            }
            AppError::UpstreamUnavailable(msg) => {
                tracing::error!("Upstream service unavailable: {msg}");
                "An upstream service is currently unavailable".to_string()
            }
            AppError::UpstreamMalformed(msg) => {
                tracing::error!("Completion service returned malformed output: {msg}");
                "The AI service returned an invalid response".to_string()
            }
            AppError::Storage(e) => {
                tracing::error!("Storage error: {e}");
                "A storage error occurred".to_string()
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                "An internal server error occurred".to_string()
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

impl From<LlmError> for AppError {
    fn from(err: LlmError) -> Self {
        match err {
            LlmError::Parse(_) | LlmError::EmptyContent | LlmError::Invalid(_) => {
                AppError::UpstreamMalformed(err.to_string())
            }
            LlmError::Http(_) | LlmError::Api { .. } => {
                AppError::UpstreamUnavailable(err.to_string())
            }
        }
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        match err {
            // The credential was never checked; the key source is down.
            AuthError::KeyFetch(_) => AppError::UpstreamUnavailable(err.to_string()),
            _ => AppError::Unauthorized(err.to_string()),
        }
    }
}

impl From<ProfileError> for AppError {
    fn from(err: ProfileError) -> Self {
        AppError::Validation(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mapping_table() {
        let cases = [
            (AppError::Validation("x".into()), StatusCode::BAD_REQUEST),
            (AppError::Unauthorized("x".into()), StatusCode::UNAUTHORIZED),
            (AppError::NotFound("x".into()), StatusCode::NOT_FOUND),
            (AppError::UpstreamUnavailable("x".into()), StatusCode::BAD_GATEWAY),
            (AppError::UpstreamMalformed("x".into()), StatusCode::BAD_GATEWAY),
            (
                AppError::Storage(sqlx::Error::RowNotFound),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                AppError::Internal(anyhow::anyhow!("boom")),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (err, expected) in cases {
            assert_eq!(err.into_response().status(), expected);
        }
    }

    #[test]
    fn test_parse_failure_is_malformed() {
        let parse_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err: AppError = LlmError::Parse(parse_err).into();
        assert!(matches!(err, AppError::UpstreamMalformed(_)));
    }

    #[test]
    fn test_api_failure_is_unavailable() {
        let err: AppError = LlmError::Api {
            status: 503,
            message: "overloaded".to_string(),
        }
        .into();
        assert!(matches!(err, AppError::UpstreamUnavailable(_)));
    }

    #[test]
    fn test_signing_key_outage_is_unavailable() {
        let err: AppError = AuthError::KeyFetch("HTTP 503".to_string()).into();
        assert!(matches!(err, AppError::UpstreamUnavailable(_)));
        assert_eq!(err.status_and_code().0, StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_bad_credential_is_unauthorized() {
        for err in [
            AuthError::MissingToken,
            AuthError::Expired,
            AuthError::UnknownKeyId("k1".to_string()),
        ] {
            let err: AppError = err.into();
            assert!(matches!(err, AppError::Unauthorized(_)));
        }
    }

    #[tokio::test]
    async fn test_internal_detail_not_leaked() {
        let response =
            AppError::Internal(anyhow::anyhow!("secret connection string")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"]["code"], "INTERNAL_ERROR");
        assert!(!body.to_string().contains("secret"));
    }
}
