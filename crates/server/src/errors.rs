use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use models::errors::ModelError;
use serde::{Deserialize, Serialize};
use service::errors::ServiceError;
use thiserror::Error;
use tracing::{error, warn};

/// Message returned for dependency failures; driver detail stays in the logs.
pub const DEPENDENCY_MESSAGE: &str = "the database request could not be completed";

/// Client-visible error category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    NotFound,
    Conflict,
    Dependency,
}

impl ErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::Validation => "ValidationError",
            ErrorKind::NotFound => "NotFoundError",
            ErrorKind::Conflict => "ConflictError",
            ErrorKind::Dependency => "DependencyError",
        }
    }

    pub fn status(self) -> StatusCode {
        match self {
            ErrorKind::Validation => StatusCode::BAD_REQUEST,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Conflict => StatusCode::CONFLICT,
            ErrorKind::Dependency => StatusCode::BAD_GATEWAY,
        }
    }
}

/// Wire shape of every error response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    pub message: String,
}

#[derive(Debug)]
pub struct ApiError {
    pub kind: ErrorKind,
    pub message: String,
}

impl ApiError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self { kind, message: message.into() }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, message)
    }

    fn dependency(detail: &str) -> Self {
        error!(event = "dependency_failure", error = %detail, "database call failed");
        Self::new(ErrorKind::Dependency, DEPENDENCY_MESSAGE)
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Validation(msg) | ServiceError::Model(ModelError::Validation(msg)) => {
                Self::validation(msg)
            }
            ServiceError::NotFound(msg) => Self::new(ErrorKind::NotFound, msg),
            ServiceError::Conflict(msg) => Self::new(ErrorKind::Conflict, msg),
            ServiceError::Db(detail) => Self::dependency(&detail),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        warn!(event = "invalid_json", status = %rejection.status(), "request body rejected");
        Self::validation(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::validation(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody { error: self.kind.as_str().to_string(), message: self.message };
        (self.kind.status(), Json(body)).into_response()
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_map_to_statuses() {
        let cases = [
            (ServiceError::Validation("x".into()), StatusCode::BAD_REQUEST, "ValidationError"),
            (
                ServiceError::Model(ModelError::Validation("x".into())),
                StatusCode::BAD_REQUEST,
                "ValidationError",
            ),
            (ServiceError::NotFound("x".into()), StatusCode::NOT_FOUND, "NotFoundError"),
            (ServiceError::Conflict("x".into()), StatusCode::CONFLICT, "ConflictError"),
            (ServiceError::Db("x".into()), StatusCode::BAD_GATEWAY, "DependencyError"),
        ];
        for (err, status, kind) in cases {
            let api: ApiError = err.into();
            assert_eq!(api.kind.status(), status);
            assert_eq!(api.kind.as_str(), kind);
        }
    }

    #[test]
    fn dependency_detail_is_not_exposed() {
        let detail = "password authentication failed for user \"postgres\"";
        let api: ApiError = ServiceError::Db(detail.into()).into();
        assert_eq!(api.message, DEPENDENCY_MESSAGE);
    }

    #[test]
    fn invalid_config_reports_the_cause() {
        let err = StartupError::InvalidConfig("server.port must be non-zero".into());
        assert_eq!(err.to_string(), "invalid configuration: server.port must be non-zero");
    }
}
