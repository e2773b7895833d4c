use thiserror::Error;

use crate::utils::AppError;

/// 服务器启动/运行期错误
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),

    #[error("应用错误: {0}")]
    App(#[from] AppError),

    #[error("内部服务器错误: {0}")]
    Internal(#[from] anyhow::Error),
}

/// Server::run 的 Result 类型别名
pub type Result<T> = std::result::Result<T, ServerError>;
