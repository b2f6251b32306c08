//! Request and response bodies of the JSON API
//!
//! Request/response bodies used by storefront-server handlers and the
//! storefront-client API wrappers.

use crate::models::{Order, OrderStatus};
use crate::order::{OrderInput, ValidationErrors};
use serde::{Deserialize, Serialize};

// Re-export ApiResponse from the error module
pub use crate::error::ApiResponse;

// ---- Auth API DTOs ----

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Login response data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: AccountInfo,
}

/// Signed-in account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountInfo {
    pub id: String,
    pub email: String,
    pub is_admin: bool,
}

// ---- Order API DTOs ----

/// `POST /api/orders` body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitOrderRequest {
    pub product_id: String,
    #[serde(flatten)]
    pub input: OrderInput,
}

/// `POST /api/orders` response data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitOrderResponse {
    pub order: Order,
    pub whatsapp_url: String,
    pub redirect_after_ms: u64,
}

/// `POST /api/orders/validate` response data
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidateOrderResponse {
    pub valid: bool,
    #[serde(default)]
    pub errors: ValidationErrors,
}

/// Order list query for the admin board
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

/// `PUT /api/admin/orders/{id}/status` body
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct StatusUpdate {
    pub status: OrderStatus,
}

// ---- Admin product utilities ----

/// Result of writing the seed catalog to the database
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncResult {
    pub synced: usize,
}

/// Generic delete acknowledgement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteResult {
    pub id: String,
    pub deleted: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_request_is_flat() {
        let json = r#"{"product_id":"1","customer_name":"Budi","whatsapp":"0858","address":"Jl","quantity":3}"#;
        let req: SubmitOrderRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.product_id, "1");
        assert_eq!(req.input.quantity, 3);
        assert_eq!(req.input.customer_name, "Budi");
    }

    #[test]
    fn test_quantity_defaults_to_one() {
        let json = r#"{"product_id":"1","customer_name":"Budi","whatsapp":"0858","address":"Jl"}"#;
        let req: SubmitOrderRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.input.quantity, 1);
    }
}
