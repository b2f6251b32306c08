//! Client error types

use std::collections::{BTreeMap, HashMap};

use http::StatusCode;
use serde::Deserialize;
use serde_json::Value;
use shared::error::ErrorCode;
use shared::order::{Field, FieldError, ValidationErrors};
use thiserror::Error;

/// Error body returned by the storefront server
#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorResponse {
    pub code: u16,
    pub message: String,
    #[serde(default)]
    pub details: Option<HashMap<String, Value>>,
}

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a structured error
    #[error("API error {code}: {message}")]
    Api {
        code: u16,
        message: String,
        details: Option<HashMap<String, Value>>,
    },

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Authentication required
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Permission denied
    #[error("Permission denied: {0}")]
    Forbidden(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    /// Build the error for a non-success response body
    pub(crate) fn from_response(status: StatusCode, text: String) -> Self {
        if let Ok(api_err) = serde_json::from_str::<ApiErrorResponse>(&text) {
            return ClientError::Api {
                code: api_err.code,
                message: api_err.message,
                details: api_err.details,
            };
        }
        match status {
            StatusCode::UNAUTHORIZED => ClientError::Unauthorized(text),
            StatusCode::FORBIDDEN => ClientError::Forbidden(text),
            StatusCode::NOT_FOUND => ClientError::NotFound(text),
            StatusCode::BAD_REQUEST => ClientError::Validation(text),
            _ => ClientError::Internal(text),
        }
    }

    /// Server error code, when the body carried a known one
    pub fn error_code(&self) -> Option<ErrorCode> {
        match self {
            ClientError::Api { code, .. } => ErrorCode::try_from(*code).ok(),
            _ => None,
        }
    }

    fn detail(&self, key: &str) -> Option<&Value> {
        match self {
            ClientError::Api {
                details: Some(details),
                ..
            } => details.get(key),
            _ => None,
        }
    }

    /// Provider-style sign-in code (`auth/...`)
    pub fn auth_code(&self) -> Option<&str> {
        self.detail("auth_code").and_then(Value::as_str)
    }

    /// Field errors from a rejected order
    pub fn validation_errors(&self) -> Option<ValidationErrors> {
        let fields = self.detail("fields")?;
        serde_json::from_value::<BTreeMap<Field, FieldError>>(fields.clone())
            .ok()
            .map(|fields| ValidationErrors { fields })
    }

    /// Message for display: the server's message when there is one
    pub fn message(&self) -> String {
        match self {
            ClientError::Api { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
