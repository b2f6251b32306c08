//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`auth`] - 管理员登录
//! - [`products`] - 商品目录 (公开)
//! - [`catalog`] - 目录筛选项 (公开)
//! - [`orders`] - 顾客下单 (公开)
//! - [`admin`] - 管理后台 (商品、订单、种子同步、导出)

pub mod admin;
pub mod auth;
pub mod catalog;
pub mod health;
pub mod logging;
pub mod orders;
pub mod products;

use axum::Router;
use axum::middleware as axum_middleware;
use http::{HeaderName, HeaderValue};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::auth::require_auth;
use crate::core::ServerState;

pub use crate::utils::{AppError, AppResult};

const REQUEST_ID_HEADER: &str = "x-request-id";

/// UUID v4 for `x-request-id` when the caller sent none
#[derive(Clone)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        HeaderValue::from_str(&Uuid::new_v4().to_string())
            .ok()
            .map(RequestId::new)
    }
}

/// Build a router with all routes registered (no middleware)
pub fn build_router() -> Router<ServerState> {
    Router::new()
        // Health - public
        .merge(health::router())
        // Auth - login public, /me authenticated
        .merge(auth::router())
        // Storefront - public
        .merge(products::router())
        .merge(catalog::router())
        .merge(orders::router())
        // Admin - admin account required
        .merge(admin::router())
}

/// Build the fully configured application with middleware and state
pub fn build_app(state: ServerState) -> Router {
    build_router()
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(axum_middleware::from_fn(logging::log_request))
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::new(
            HeaderName::from_static(REQUEST_ID_HEADER),
            XRequestId,
        ))
        .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
            REQUEST_ID_HEADER,
        )))
        // JWT authentication - injects CurrentUser before routes run
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            require_auth,
        ))
        .with_state(state)
}
