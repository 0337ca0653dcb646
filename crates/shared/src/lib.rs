//! 共享库
//!
//! 包含生成器二进制共用的配置、错误处理与日志初始化代码。

pub mod config;
pub mod error;
pub mod observability;

pub use error::{FixtureError, Result};
