//! 路由级认证中间件

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use http::Method;

use crate::AppError;
use crate::auth::CurrentUser;
use crate::auth::extractor::authenticate;
use crate::core::ServerState;
use crate::security_log;

/// 顾客侧接口 (目录、下单) 与登录本身不需要令牌
pub fn is_public_route(method: &Method, path: &str) -> bool {
    if path == "/api/auth/login" {
        return true;
    }
    if path.starts_with("/api/admin/") || path == "/api/admin" || path == "/api/auth/me" {
        return false;
    }
    let customer_route = path == "/api/products"
        || path.starts_with("/api/products/")
        || path.starts_with("/api/catalog/")
        || path == "/api/orders"
        || path == "/api/orders/validate";
    customer_route && (method == Method::GET || method == Method::POST)
}

/// 管理接口的令牌校验
///
/// 放行 CORS 预检、非 `/api/` 路径和 [`is_public_route`]；其余请求必须带
/// 有效的 Bearer 令牌，校验通过后把 [`CurrentUser`] 放进请求扩展。
/// 缺少令牌返回 1001，过期 1003，其它无效情况 1004，均为 401。
pub async fn require_auth(
    State(state): State<ServerState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let path = req.uri().path();
    let open = req.method() == Method::OPTIONS
        || !path.starts_with("/api/")
        || is_public_route(req.method(), path);

    if !open {
        let user = authenticate(&state.get_jwt_service(), req.headers(), req.uri())?;
        req.extensions_mut().insert(user);
    }
    Ok(next.run(req).await)
}

/// 只允许管理员账户，需挂在 [`require_auth`] 之后
pub async fn require_admin(req: Request, next: Next) -> Result<Response, AppError> {
    let user = req
        .extensions()
        .get::<CurrentUser>()
        .ok_or_else(AppError::unauthorized)?;
    if !user.is_admin() {
        security_log!(
            "WARN",
            "admin_required",
            user_id = user.id.clone(),
            email = user.email.clone(),
            uri = req.uri().path().to_string()
        );
        return Err(AppError::admin_required());
    }
    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_routes() {
        assert!(is_public_route(&Method::POST, "/api/auth/login"));
        assert!(is_public_route(&Method::GET, "/api/products"));
        assert!(is_public_route(&Method::GET, "/api/products/3"));
        assert!(is_public_route(&Method::GET, "/api/catalog/filters"));
        assert!(is_public_route(&Method::POST, "/api/orders"));
        assert!(is_public_route(&Method::POST, "/api/orders/validate"));
    }

    #[test]
    fn test_protected_routes() {
        assert!(!is_public_route(&Method::GET, "/api/auth/me"));
        assert!(!is_public_route(&Method::GET, "/api/admin/orders"));
        assert!(!is_public_route(&Method::POST, "/api/admin/products"));
        assert!(!is_public_route(&Method::DELETE, "/api/products/3"));
        assert!(!is_public_route(&Method::PUT, "/api/products/3"));
        assert!(!is_public_route(&Method::GET, "/api/orders/abc"));
    }
}
