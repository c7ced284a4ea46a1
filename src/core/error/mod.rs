//! 统一错误处理 for SortGraph
//!
//! 错误分类刻意保持精简：
//! - `InvalidArgument`：调用方传入的参数违反约定（如桶数量为 0、计数范围过大）
//! - `Config` / `Io` / `Serialization`：配置加载与日志初始化相关的外部错误
//!
//! 遍历起点不存在不是错误，遍历函数直接返回空序列。

use thiserror::Error;

/// 统一的错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AlgoError {
    #[error("无效参数: {0}")]
    InvalidArgument(String),

    #[error("配置错误: {0}")]
    Config(String),

    #[error("IO错误: {0}")]
    Io(String),

    #[error("序列化错误: {0}")]
    Serialization(String),
}

/// 统一的结果类型
pub type AlgoResult<T> = Result<T, AlgoError>;

impl AlgoError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        AlgoError::InvalidArgument(message.into())
    }

    pub fn config(message: impl Into<String>) -> Self {
        AlgoError::Config(message.into())
    }
}

// ==================== 外部错误转换实现 ====================

impl From<std::io::Error> for AlgoError {
    fn from(err: std::io::Error) -> Self {
        AlgoError::Io(err.to_string())
    }
}

impl From<toml::de::Error> for AlgoError {
    fn from(err: toml::de::Error) -> Self {
        AlgoError::Serialization(err.to_string())
    }
}

impl From<toml::ser::Error> for AlgoError {
    fn from(err: toml::ser::Error) -> Self {
        AlgoError::Serialization(err.to_string())
    }
}

impl From<flexi_logger::FlexiLoggerError> for AlgoError {
    fn from(err: flexi_logger::FlexiLoggerError) -> Self {
        AlgoError::Config(err.to_string())
    }
}
