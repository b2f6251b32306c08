use std::sync::Arc;

use crate::auth::{JwtService, LoginAttempts, hash_password};
use crate::core::{Config, Result, ServerError};
use crate::db::repository::{AccountRepository, OrderRepository, ProductRepository};
use crate::db::{Database, DbService};
use crate::services::{CatalogService, OrderService};

/// 服务器状态 - 持有所有服务的共享引用
///
/// 使用 Arc 实现浅拷贝，作为 axum 的 `State` 在所有请求间共享。
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | db | Database | SurrealDB 连接 |
/// | jwt_service | Arc<JwtService> | JWT 认证服务 |
/// | login_attempts | Arc<LoginAttempts> | 登录失败限流 |
#[derive(Clone)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 数据库
    pub db: Database,
    /// JWT 服务
    pub jwt_service: Arc<JwtService>,
    /// 登录失败计数
    pub login_attempts: Arc<LoginAttempts>,
}

impl std::fmt::Debug for ServerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerState")
            .field("environment", &self.config.environment)
            .field("database", &self.config.database.url)
            .finish_non_exhaustive()
    }
}

impl ServerState {
    /// 创建服务器状态 (手动构造)
    ///
    /// 通常使用 [`ServerState::initialize`] 代替
    pub fn new(config: Config, db: Database) -> Self {
        let jwt_service = Arc::new(JwtService::with_config(config.jwt.clone()));
        Self {
            config,
            db,
            jwt_service,
            login_attempts: Arc::new(LoginAttempts::default()),
        }
    }

    /// 初始化服务器状态
    ///
    /// 按顺序初始化：
    /// 1. 工作目录 (嵌入式数据库需要)
    /// 2. 数据库连接与表定义
    /// 3. 管理员账号 (配置了 ADMIN_PASSWORD 时)
    pub async fn initialize(config: &Config) -> Result<Self> {
        if config.database.url.starts_with("rocksdb://") {
            std::fs::create_dir_all(config.database_dir())?;
        }

        let db = DbService::connect(&config.database).await?.db;
        let state = Self::new(config.clone(), db);
        state.ensure_admin_account().await?;

        Ok(state)
    }

    /// 测试用状态: 内存数据库
    pub async fn for_tests(config: Config) -> Result<Self> {
        let db = DbService::connect(&config.database).await?.db;
        let state = Self::new(config, db);
        state.ensure_admin_account().await?;
        Ok(state)
    }

    /// 写入或更新管理员账号
    ///
    /// 已存在且密码一致时不做任何修改
    async fn ensure_admin_account(&self) -> Result<()> {
        let Some(password) = self.config.admin_password.as_deref() else {
            tracing::warn!(
                email = %self.config.admin_email,
                "ADMIN_PASSWORD not set, admin account is not provisioned"
            );
            return Ok(());
        };

        let hash = hash_password(password)
            .map_err(|e| ServerError::Config(format!("Failed to hash admin password: {e}")))?;
        let accounts = self.accounts();

        match accounts.find_by_email(&self.config.admin_email).await? {
            Some(account) if account.verify_password(password) => {}
            Some(account) => {
                accounts.set_password_hash(&account.id, hash).await?;
                tracing::info!(email = %account.email, "Admin password updated");
            }
            None => {
                let account = accounts.create(&self.config.admin_email, hash).await?;
                tracing::info!(email = %account.email, "Admin account created");
            }
        }
        Ok(())
    }

    /// 获取数据库实例
    pub fn get_db(&self) -> Database {
        self.db.clone()
    }

    /// 获取 JWT 服务
    pub fn get_jwt_service(&self) -> Arc<JwtService> {
        self.jwt_service.clone()
    }

    pub fn products(&self) -> ProductRepository {
        ProductRepository::new(self.get_db())
    }

    pub fn orders(&self) -> OrderRepository {
        OrderRepository::new(self.get_db())
    }

    pub fn accounts(&self) -> AccountRepository {
        AccountRepository::new(self.get_db())
    }

    pub fn catalog_service(&self) -> CatalogService {
        CatalogService::new(self.products())
    }

    pub fn order_service(&self) -> OrderService {
        OrderService::new(self.orders(), self.catalog_service(), self.config.store.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::JwtConfig;

    #[tokio::test]
    async fn test_admin_account_is_provisioned_once() {
        let mut config = Config::for_tests(JwtConfig::for_tests());
        config.admin_password = Some("rahasia123".to_string());
        let state = ServerState::for_tests(config).await.unwrap();

        let first = state
            .accounts()
            .find_by_email("admin@nakubyte.com")
            .await
            .unwrap()
            .unwrap();
        assert!(first.verify_password("rahasia123"));

        // re-running keeps the same account
        state.ensure_admin_account().await.unwrap();
        let second = state
            .accounts()
            .find_by_email("admin@nakubyte.com")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(first.id, second.id);
        assert_eq!(first.password_hash, second.password_hash);
    }

    #[tokio::test]
    async fn test_no_password_no_account() {
        let state = ServerState::for_tests(Config::for_tests(JwtConfig::for_tests()))
            .await
            .unwrap();
        assert!(
            state
                .accounts()
                .find_by_email("admin@nakubyte.com")
                .await
                .unwrap()
                .is_none()
        );
    }
}
