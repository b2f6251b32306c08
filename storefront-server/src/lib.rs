//! NakuByte Storefront Server - 电子产品商店后端
//!
//! # 架构概述
//!
//! - **数据库** (`db`): SurrealDB 存储 (`products`, `orders`, `accounts`)
//! - **认证** (`auth`): JWT + Argon2 认证体系，单一管理员邮箱
//! - **服务** (`services`): 下单流程、目录读取
//! - **HTTP API** (`api`): 公共目录/下单接口与管理员接口
//!
//! # 模块结构
//!
//! ```text
//! storefront-server/src/
//! ├── core/          # 配置、状态、错误、服务器
//! ├── auth/          # JWT 认证、登录限流
//! ├── services/      # 业务服务
//! ├── api/           # HTTP 路由和处理器
//! ├── utils/         # 日志、错误类型
//! └── db/            # 数据库层
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod services;
pub mod utils;

// Re-export 公共类型
pub use api::build_app;
pub use auth::{CurrentUser, JwtService};
pub use core::{Config, Server, ServerState};
pub use utils::{AppError, AppResult};

// Re-export unified error types from shared
pub use utils::{ApiResponse, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

// Security logging macro - 支持 tracing 格式说明符
#[macro_export]
macro_rules! security_log {
    ($level:expr, $event:expr, $($key:ident = $value:expr),*) => {
        tracing::info!(
            target: "security",
            level = $level,
            event = $event,
            $($key = $value),*
        );
    };
}

/// 设置运行环境: 加载 .env，准备工作目录，初始化日志
pub fn setup_environment() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    let work_dir = std::env::var("WORK_DIR").unwrap_or_else(|_| core::config::DEFAULT_WORK_DIR.into());
    std::fs::create_dir_all(&work_dir)?;

    let log_level = std::env::var("LOG_LEVEL").ok();
    let log_json = std::env::var("LOG_JSON").ok().and_then(|v| v.parse().ok());
    let log_dir = std::env::var("LOG_DIR").ok();
    if let Some(dir) = &log_dir {
        std::fs::create_dir_all(dir)?;
    }
    init_logger_with_file(log_level.as_deref(), log_json, log_dir.as_deref());

    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
    _   __      __          ____        __
   / | / /___ _/ /____  __ / __ )__  __/ /____
  /  |/ / __ `/ //_/ / / // __  / / / / __/ _ \
 / /|  / /_/ / ,< / /_/ // /_/ / /_/ / /_/  __/
/_/ |_/\__,_/_/|_|\__,_//_____/\__, /\__/\___/
                              /____/
    "#
    );
}
