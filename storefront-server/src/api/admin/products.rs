//! Admin product handlers

use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use http::header;
use shared::catalog::EXPORT_FILE_NAME;
use shared::client::{DeleteResult, SyncResult};
use shared::models::{Product, ProductInput};

use crate::core::ServerState;
use crate::utils::AppResult;

/// POST /api/admin/products
pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<ProductInput>,
) -> AppResult<Json<Product>> {
    let product = state.catalog_service().create(input).await?;
    Ok(Json(product))
}

/// PUT /api/admin/products/{id}
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(input): Json<ProductInput>,
) -> AppResult<Json<Product>> {
    let product = state.catalog_service().update(&id, input).await?;
    Ok(Json(product))
}

/// DELETE /api/admin/products/{id}
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<DeleteResult>> {
    state.catalog_service().delete(&id).await?;
    Ok(Json(DeleteResult { id, deleted: true }))
}

/// POST /api/admin/products/sync-seed
pub async fn sync_seed(State(state): State<ServerState>) -> AppResult<Json<SyncResult>> {
    let synced = state.catalog_service().sync_seed().await?;
    Ok(Json(SyncResult { synced }))
}

/// GET /api/admin/products/export - products.ts 附件
pub async fn export(State(state): State<ServerState>) -> AppResult<impl IntoResponse> {
    let body = state.catalog_service().export().await?;
    let headers = [
        (
            header::CONTENT_TYPE,
            "text/typescript; charset=utf-8".to_string(),
        ),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", EXPORT_FILE_NAME),
        ),
    ];
    Ok((headers, body))
}
