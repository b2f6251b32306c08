use std::path::PathBuf;

use shared::order::StoreProfile;

use crate::auth::JwtConfig;

/// 默认工作目录
pub const DEFAULT_WORK_DIR: &str = "/var/lib/nakubyte/storefront";

/// 默认管理员邮箱
pub const DEFAULT_ADMIN_EMAIL: &str = "admin@nakubyte.com";

/// 登录固定延迟 (毫秒)，防止计时攻击
pub const DEFAULT_AUTH_DELAY_MS: u64 = 500;

/// 数据库连接配置
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// 连接地址: `mem://`, `rocksdb://<path>`, `ws://<host>`
    pub url: String,
    pub namespace: String,
    pub database: String,
    /// 托管数据库的 root 用户 (可选)
    pub username: Option<String>,
    pub password: Option<String>,
}

impl DatabaseConfig {
    /// 内存数据库，用于测试
    pub fn in_memory() -> Self {
        Self {
            url: "mem://".to_string(),
            namespace: "nakubyte".to_string(),
            database: "storefront".to_string(),
            username: None,
            password: None,
        }
    }
}

/// 服务器配置
///
/// # 环境变量
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | WORK_DIR | /var/lib/nakubyte/storefront | 工作目录 |
/// | HTTP_PORT | 3000 | HTTP 服务端口 |
/// | ENVIRONMENT | development | 运行环境 |
/// | DATABASE_URL | rocksdb://{WORK_DIR}/database | 数据库地址 |
/// | DATABASE_NAMESPACE | nakubyte | 命名空间 |
/// | DATABASE_NAME | storefront | 数据库名 |
/// | DATABASE_USER / DATABASE_PASS | - | 托管数据库 root 登录 |
/// | ADMIN_EMAIL | admin@nakubyte.com | 唯一管理员邮箱 |
/// | ADMIN_PASSWORD | - | 启动时写入管理员账号 |
/// | STORE_NAME | NakuByte Store | 店铺名称 |
/// | STORE_BRAND | NakuByte | 店铺简称 |
/// | STORE_WHATSAPP | 6285864139786 | 店铺 WhatsApp 号码 |
/// | AUTH_FIXED_DELAY_MS | 500 | 登录固定延迟 |
///
/// # 示例
///
/// ```ignore
/// WORK_DIR=/data/nakubyte HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// 工作目录，存储数据库、日志等文件
    pub work_dir: String,
    /// HTTP API 服务端口
    pub http_port: u16,
    /// JWT 认证配置
    pub jwt: JwtConfig,
    /// 运行环境: development | staging | production
    pub environment: String,
    /// 数据库连接
    pub database: DatabaseConfig,
    /// 管理员邮箱 (唯一拥有管理权限的账号)
    pub admin_email: String,
    /// 管理员初始密码
    pub admin_password: Option<String>,
    /// 下单消息中的店铺信息
    pub store: StoreProfile,
    /// 登录固定延迟 (毫秒)
    pub auth_delay_ms: u64,
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.into())
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        let work_dir = env_or("WORK_DIR", DEFAULT_WORK_DIR);
        let default_db_url = format!("rocksdb://{}/database", work_dir.trim_end_matches('/'));
        let defaults = StoreProfile::default();

        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            jwt: JwtConfig::default(),
            environment: env_or("ENVIRONMENT", "development"),
            database: DatabaseConfig {
                url: env_or("DATABASE_URL", &default_db_url),
                namespace: env_or("DATABASE_NAMESPACE", "nakubyte"),
                database: env_or("DATABASE_NAME", "storefront"),
                username: std::env::var("DATABASE_USER").ok(),
                password: std::env::var("DATABASE_PASS").ok(),
            },
            admin_email: env_or("ADMIN_EMAIL", DEFAULT_ADMIN_EMAIL).to_lowercase(),
            admin_password: std::env::var("ADMIN_PASSWORD").ok().filter(|p| !p.is_empty()),
            store: StoreProfile {
                name: env_or("STORE_NAME", &defaults.name),
                brand: env_or("STORE_BRAND", &defaults.brand),
                whatsapp: env_or("STORE_WHATSAPP", &defaults.whatsapp),
                bank_accounts: defaults.bank_accounts,
            },
            auth_delay_ms: std::env::var("AUTH_FIXED_DELAY_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_AUTH_DELAY_MS),
            work_dir,
        }
    }

    /// 测试配置: 内存数据库，无登录延迟
    pub fn for_tests(jwt: JwtConfig) -> Self {
        Self {
            work_dir: std::env::temp_dir().to_string_lossy().into_owned(),
            http_port: 0,
            jwt,
            environment: "test".to_string(),
            database: DatabaseConfig::in_memory(),
            admin_email: DEFAULT_ADMIN_EMAIL.to_string(),
            admin_password: None,
            store: StoreProfile::default(),
            auth_delay_ms: 0,
        }
    }

    /// 数据库目录
    pub fn database_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("database")
    }

    /// 邮箱是否为管理员
    pub fn is_admin_email(&self, email: &str) -> bool {
        email.trim().eq_ignore_ascii_case(&self.admin_email)
    }

    /// 是否生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// 是否开发环境
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
