use crate::db::repository::RepoError;
use shared::error::{AppError, ErrorCode};
use thiserror::Error;

/// 服务器启动/运行错误 (非请求级别)
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("配置错误: {0}")]
    Config(String),

    #[error("数据库错误: {0}")]
    Database(String),

    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),

    #[error("内部服务器错误")]
    Internal(#[from] anyhow::Error),
}

impl From<AppError> for ServerError {
    fn from(err: AppError) -> Self {
        match err.code {
            ErrorCode::DatabaseError => ServerError::Database(err.message),
            _ => ServerError::Internal(anyhow::anyhow!(err.message)),
        }
    }
}

impl From<RepoError> for ServerError {
    fn from(err: RepoError) -> Self {
        AppError::from(err).into()
    }
}

/// 服务器级 Result 类型别名
pub type Result<T> = std::result::Result<T, ServerError>;
