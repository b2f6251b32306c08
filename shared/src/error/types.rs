//! `AppError` and the `{code, message, data, details}` envelope

use super::codes::ErrorCode;
use http::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

/// A coded failure as it travels to the caller
///
/// `details` holds machine-readable extras: `fields` for per-field
/// validation errors, `auth_code` for sign-in failures, `resource` for
/// lookups that missed.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AppError {
    pub code: ErrorCode,
    pub message: String,
    pub details: Option<HashMap<String, Value>>,
}

impl AppError {
    /// Error carrying the code's stock message
    pub fn new(code: ErrorCode) -> Self {
        Self::with_message(code, code.message())
    }

    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    pub fn http_status(&self) -> StatusCode {
        self.code.http_status()
    }

    pub fn detail(&self, key: &str) -> Option<&Value> {
        self.details.as_ref()?.get(key)
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ValidationFailed, message)
    }

    /// `"<what> not found"`, with `what` echoed under `resource`
    pub fn not_found(what: impl Into<String>) -> Self {
        let what = what.into();
        Self::with_message(ErrorCode::NotFound, format!("{} not found", what))
            .with_detail("resource", what)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InternalError, message)
    }

    pub fn database(message: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::DatabaseError, message)
    }

    pub fn unauthorized() -> Self {
        Self::new(ErrorCode::NotAuthenticated)
    }

    pub fn invalid_token(message: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::TokenInvalid, message)
    }

    pub fn token_expired() -> Self {
        Self::new(ErrorCode::TokenExpired)
    }

    pub fn admin_required() -> Self {
        Self::new(ErrorCode::AdminRequired)
    }

    /// Sign-in failure; adds `auth_code` (`auth/wrong-password`, ...) when
    /// the code has one
    pub fn auth(code: ErrorCode) -> Self {
        let err = Self::new(code);
        match code.auth_provider_code() {
            Some(auth_code) => err.with_detail("auth_code", auth_code),
            None => err,
        }
    }
}

/// JSON body for every API answer
///
/// Successful handlers return their payload directly; this envelope is what
/// an `AppError` becomes on the wire, and what the client parses back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<u16>,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, Value>>,
}

impl<T> From<AppError> for ApiResponse<T> {
    fn from(err: AppError) -> Self {
        Self {
            code: Some(err.code.code()),
            message: err.message,
            data: None,
            details: err.details,
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = self.http_status();
        if status.is_server_error() {
            tracing::error!(code = %self.code, message = %self.message, "Request failed");
        }
        (status, axum::Json(ApiResponse::<()>::from(self))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_stock_message() {
        let err = AppError::new(ErrorCode::ProductNotFound);
        assert_eq!(err.message, "Product not found");
        assert!(err.details.is_none());
    }

    #[test]
    fn test_details_accumulate() {
        let err = AppError::validation("bad input")
            .with_detail("field", "address")
            .with_detail("max", 500);
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert_eq!(err.detail("field"), Some(&Value::from("address")));
        assert_eq!(err.detail("max"), Some(&Value::from(500)));
        assert_eq!(err.detail("min"), None);
    }

    #[test]
    fn test_auth_adds_auth_code() {
        let err = AppError::auth(ErrorCode::WrongPassword);
        assert_eq!(err.http_status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            err.detail("auth_code"),
            Some(&Value::from("auth/wrong-password"))
        );
        assert!(AppError::auth(ErrorCode::InternalError).details.is_none());
    }

    #[test]
    fn test_envelope_on_the_wire() {
        let body = serde_json::to_value(ApiResponse::<()>::from(AppError::not_found("Order abc")))
            .unwrap();
        assert_eq!(body["code"], 3);
        assert_eq!(body["message"], "Order abc not found");
        assert_eq!(body["details"]["resource"], "Order abc");
        assert!(body.get("data").is_none());
    }
}
