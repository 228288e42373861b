use thiserror::Error;

use crate::kitchen::NotifyError;

/// 服务器启动/运行错误
///
/// Request-level failures use [`shared::AppError`]; this type only covers
/// what can stop the process.
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("无法绑定地址 {addr}: {source}")]
    Bind {
        addr: std::net::SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),

    #[error("kitchen 客户端初始化失败: {0}")]
    Kitchen(#[from] NotifyError),
}

pub type Result<T> = std::result::Result<T, ServerError>;
