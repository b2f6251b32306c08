//! Catalog API 模块
//!
//! 商品页顶部的筛选项 (`all` + 12 个子分类)

use axum::{Json, Router, routing::get};
use shared::catalog::{FilterOption, filter_options};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/catalog/filters", get(list_filters))
}

/// GET /api/catalog/filters
pub async fn list_filters() -> Json<Vec<FilterOption>> {
    Json(filter_options())
}
