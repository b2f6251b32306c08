//! Admin API 模块
//!
//! 所有路由都需要管理员账户 (`require_admin`)，
//! 认证由全局 `require_auth` 中间件完成。
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /api/admin/products | POST | 新建商品 |
//! | /api/admin/products/{id} | PUT/DELETE | 修改/删除商品 |
//! | /api/admin/products/sync-seed | POST | 写入内置种子商品 |
//! | /api/admin/products/export | GET | 下载 products.ts |
//! | /api/admin/orders | GET | 订单列表 (?status=&search=) |
//! | /api/admin/orders/summary | GET | 各状态数量 |
//! | /api/admin/orders/{id} | GET/DELETE | 订单详情/删除 |
//! | /api/admin/orders/{id}/status | PUT | 修改订单状态 |

mod orders;
mod products;

use axum::{
    Router, middleware,
    routing::{get, post, put},
};

use crate::auth::require_admin;
use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/admin", admin_routes())
}

fn admin_routes() -> Router<ServerState> {
    Router::new()
        .route("/products", post(products::create))
        .route("/products/sync-seed", post(products::sync_seed))
        .route("/products/export", get(products::export))
        .route(
            "/products/{id}",
            put(products::update).delete(products::delete),
        )
        .route("/orders", get(orders::list))
        .route("/orders/summary", get(orders::summary))
        .route("/orders/{id}", get(orders::get_by_id).delete(orders::delete))
        .route("/orders/{id}/status", put(orders::update_status))
        .route_layer(middleware::from_fn(require_admin))
}
