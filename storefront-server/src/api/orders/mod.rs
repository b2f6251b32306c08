//! Order API 模块 (顾客下单)

mod handler;

use axum::{Router, routing::post};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/orders", post(handler::submit))
        .route("/api/orders/validate", post(handler::validate))
}
