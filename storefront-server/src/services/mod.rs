//! 服务层 - 业务逻辑
//!
//! # 服务列表
//!
//! - [`CatalogService`] - 商品目录 (公开查询、管理端增删改、种子同步与导出)
//! - [`OrderService`] - 下单流程与管理端订单看板

pub mod catalog_service;
pub mod order_service;

pub use catalog_service::CatalogService;
pub use order_service::OrderService;
