//! 日志初始化
//!
//! 基于 tracing-subscriber 构建环境过滤器与格式化层。
//! 日志统一写入 stderr，stdout 保留给命令的正常输出。

use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use super::ObservabilityConfig;
use crate::error::{FixtureError, Result};

/// 构建环境过滤器
///
/// 优先使用环境变量 RUST_LOG，其次是配置中的级别，都无效时回退到 info
fn build_env_filter(config: &ObservabilityConfig) -> EnvFilter {
    let from_env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    resolve_filter(from_env.as_deref(), &config.log_level)
}

fn resolve_filter(from_env: Option<&str>, configured: &str) -> EnvFilter {
    from_env
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .or_else(|| EnvFilter::try_new(configured).ok())
        .unwrap_or_else(|| EnvFilter::new(default_directive()))
}

fn default_directive() -> String {
    super::default_log_level()
}

/// 初始化 tracing 日志
///
/// 重复初始化（例如测试中多次调用）返回 `FixtureError::Tracing`
pub fn init(config: &ObservabilityConfig) -> Result<()> {
    let env_filter = build_env_filter(config);

    let fmt_layer = if config.json_logs() {
        fmt::layer()
            .json()
            .with_target(true)
            .with_writer(std::io::stderr)
            .boxed()
    } else {
        fmt::layer()
            .with_target(false)
            .with_ansi(true)
            .with_writer(std::io::stderr)
            .boxed()
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| FixtureError::Tracing(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_level_falls_back() {
        let filter = resolve_filter(None, "data_faker=verbose");
        assert_eq!(filter.to_string(), "info");
    }

    #[test]
    fn test_configured_level_used_without_env() {
        let filter = resolve_filter(None, "debug");
        assert_eq!(filter.to_string(), "debug");
    }

    #[test]
    fn test_env_directive_wins() {
        let filter = resolve_filter(Some("warn"), "debug");
        assert_eq!(filter.to_string(), "warn");
    }

    #[test]
    fn test_invalid_env_directive_uses_configured_level() {
        let filter = resolve_filter(Some("data_faker=verbose"), "error");
        assert_eq!(filter.to_string(), "error");
    }
}
