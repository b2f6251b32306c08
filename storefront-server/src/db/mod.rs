//! Database Module
//!
//! SurrealDB connection through the `any` engine: `mem://` in tests,
//! `rocksdb://<path>` when embedded, `ws://<host>` for a hosted instance.

pub mod repository;

use crate::core::config::DatabaseConfig;
use crate::utils::AppError;
use surrealdb::Surreal;
use surrealdb::engine::any::{self, Any};
use surrealdb::opt::auth::Root;

/// Database handle shared by all repositories
pub type Database = Surreal<Any>;

/// Collection names
pub mod tables {
    pub const PRODUCTS: &str = "products";
    pub const ORDERS: &str = "orders";
    pub const ACCOUNTS: &str = "accounts";
}

const SCHEMA: &str = r#"
DEFINE TABLE IF NOT EXISTS products SCHEMALESS;
DEFINE TABLE IF NOT EXISTS orders SCHEMALESS;
DEFINE TABLE IF NOT EXISTS accounts SCHEMALESS;
DEFINE INDEX IF NOT EXISTS orders_created_at ON TABLE orders FIELDS created_at;
DEFINE INDEX IF NOT EXISTS accounts_email ON TABLE accounts FIELDS email UNIQUE;
"#;

/// Database service - owns the SurrealDB connection
#[derive(Clone)]
pub struct DbService {
    pub db: Database,
}

impl DbService {
    /// Connect, sign in when credentials are configured, select namespace
    /// and database, then apply the table definitions
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, AppError> {
        let db = any::connect(config.url.as_str())
            .await
            .map_err(|e| AppError::database(format!("Failed to open database {}: {e}", config.url)))?;

        if let (Some(username), Some(password)) = (&config.username, &config.password) {
            db.signin(Root {
                username: username.as_str(),
                password: password.as_str(),
            })
            .await
            .map_err(|e| AppError::database(format!("Database sign-in failed: {e}")))?;
        }

        db.use_ns(&config.namespace)
            .use_db(&config.database)
            .await
            .map_err(|e| AppError::database(format!("Failed to select namespace: {e}")))?;

        db.query(SCHEMA)
            .await
            .and_then(|response| response.check())
            .map_err(|e| AppError::database(format!("Failed to define schema: {e}")))?;

        tracing::info!(
            url = %config.url,
            namespace = %config.namespace,
            database = %config.database,
            "Database connection established"
        );

        Ok(Self { db })
    }

    /// In-memory database, used by tests
    pub async fn memory() -> Result<Self, AppError> {
        Self::connect(&DatabaseConfig::in_memory()).await
    }
}
