//! Admin order handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use shared::client::{DeleteResult, OrderQuery, StatusUpdate};
use shared::models::{Order, OrderSummary};

use crate::core::ServerState;
use crate::utils::AppResult;

/// GET /api/admin/orders?status=&search= - 最新的在前
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<OrderQuery>,
) -> AppResult<Json<Vec<Order>>> {
    let orders = state.order_service().list(&query).await?;
    Ok(Json(orders))
}

/// GET /api/admin/orders/summary
pub async fn summary(State(state): State<ServerState>) -> AppResult<Json<OrderSummary>> {
    let summary = state.order_service().summary().await?;
    Ok(Json(summary))
}

/// GET /api/admin/orders/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Order>> {
    let order = state.order_service().get(&id).await?;
    Ok(Json(order))
}

/// PUT /api/admin/orders/{id}/status
pub async fn update_status(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(update): Json<StatusUpdate>,
) -> AppResult<Json<Order>> {
    let order = state.order_service().update_status(&id, update.status).await?;
    Ok(Json(order))
}

/// DELETE /api/admin/orders/{id}
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<DeleteResult>> {
    state.order_service().delete(&id).await?;
    Ok(Json(DeleteResult { id, deleted: true }))
}
