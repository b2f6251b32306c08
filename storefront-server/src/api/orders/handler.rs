//! Order API Handlers

use axum::{Json, extract::State};
use shared::client::{SubmitOrderRequest, SubmitOrderResponse, ValidateOrderResponse};
use shared::order::OrderInput;

use crate::core::ServerState;
use crate::services::OrderService;
use crate::utils::AppResult;

/// POST /api/orders/validate - 第二步的字段校验 (不访问数据库)
pub async fn validate(Json(input): Json<OrderInput>) -> Json<ValidateOrderResponse> {
    Json(OrderService::validate(&input))
}

/// POST /api/orders - 提交订单，返回 WhatsApp 链接
pub async fn submit(
    State(state): State<ServerState>,
    Json(req): Json<SubmitOrderRequest>,
) -> AppResult<Json<SubmitOrderResponse>> {
    let response = state.order_service().submit(req).await?;
    Ok(Json(response))
}
