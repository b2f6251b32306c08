//! Product API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use shared::catalog::CatalogQuery;
use shared::models::Product;

use crate::core::ServerState;
use crate::utils::AppResult;

/// GET /api/products?search=&category= - 商品列表 (已过滤)
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<CatalogQuery>,
) -> AppResult<Json<Vec<Product>>> {
    let products = state.catalog_service().list(&query).await?;
    Ok(Json(products))
}

/// GET /api/products/{id} - 单个商品
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Product>> {
    let product = state.catalog_service().get(&id).await?;
    Ok(Json(product))
}
