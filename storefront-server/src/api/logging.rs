//! 请求日志中间件
//!
//! 记录所有进入的 HTTP 请求，包含延迟、账户和状态码

use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::{info, warn};

use crate::auth::CurrentUser;

/// 请求日志中间件
///
/// target 为 `http_access`，记录：
/// - 请求 ID (x-request-id)
/// - HTTP 方法和路径 (路由模板)
/// - 认证账户 (如果存在)
/// - 响应状态码与延迟 (毫秒)
pub async fn log_request(req: Request, next: Next) -> Response {
    let start = Instant::now();

    let request_id = req
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-")
        .to_string();
    let method = req.method().clone();
    let path = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| req.uri().path().to_string());
    let user = req
        .extensions()
        .get::<CurrentUser>()
        .map(|u| u.email.clone());

    let response = next.run(req).await;

    let latency_ms = start.elapsed().as_millis();
    let status = response.status().as_u16();

    if response.status().is_server_error() || response.status().is_client_error() {
        warn!(
            target: "http_access",
            request_id = %request_id,
            method = %method,
            path = %path,
            status,
            latency_ms = %latency_ms,
            user = ?user,
            "Request failed"
        );
    } else {
        info!(
            target: "http_access",
            request_id = %request_id,
            method = %method,
            path = %path,
            status,
            latency_ms = %latency_ms,
            user = ?user,
            "Request completed"
        );
    }

    response
}
