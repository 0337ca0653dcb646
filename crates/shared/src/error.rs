//! 统一错误处理模块
//!
//! 定义生成器与共享基础设施使用的错误类型，使用 thiserror 提供良好的错误信息。

use std::path::PathBuf;

use chrono::NaiveDate;
use thiserror::Error;

/// 系统错误类型
#[derive(Debug, Error)]
pub enum FixtureError {
    // ==================== 文件系统错误 ====================
    #[error("文件读写失败: {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ==================== 序列化错误 ====================
    #[error("JSON 序列化失败: {0}")]
    Serialization(#[from] serde_json::Error),

    // ==================== 配置错误 ====================
    #[error("配置加载失败: {0}")]
    Config(#[from] config::ConfigError),

    // ==================== 参数错误 ====================
    #[error("无效的参数: {field} - {message}")]
    InvalidArgument { field: String, message: String },

    #[error("日期超出可表示范围: {date} ({reason})")]
    DateOutOfRange { date: NaiveDate, reason: String },

    // ==================== 可观测性错误 ====================
    #[error("日志初始化失败: {0}")]
    Tracing(String),
}

/// 错误结果类型别名
pub type Result<T> = std::result::Result<T, FixtureError>;

impl FixtureError {
    /// 构造参数错误
    pub fn invalid_argument(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            field: field.into(),
            message: message.into(),
        }
    }

    /// 构造带路径的 IO 错误
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// 获取错误码
    pub fn code(&self) -> &'static str {
        match self {
            Self::Io { .. } => "IO_ERROR",
            Self::Serialization(_) => "SERIALIZATION_ERROR",
            Self::Config(_) => "CONFIG_ERROR",
            Self::InvalidArgument { .. } => "INVALID_ARGUMENT",
            Self::DateOutOfRange { .. } => "DATE_OUT_OF_RANGE",
            Self::Tracing(_) => "TRACING_ERROR",
        }
    }
}
