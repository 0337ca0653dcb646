//! 配置管理模块
//!
//! 支持多格式配置文件加载，环境变量覆盖，以及类型安全的配置访问。
//! 所有配置项都有默认值，不提供任何配置文件时生成器使用内置常量。

use chrono::NaiveDate;
use config::{Config, Environment, File};
use serde::{Deserialize, Deserializer};
use std::path::Path;

use crate::error::{FixtureError, Result};
use crate::observability::ObservabilityConfig;

/// 默认输出文件名
pub const DEFAULT_OUTPUT_PATH: &str = "government.json";

/// 默认 JSON 缩进空格数
pub const DEFAULT_INDENT: usize = 4;

/// 默认每个集合的记录数量
pub const DEFAULT_COLLECTION_SIZE: usize = 1000;

/// 输出配置
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// 输出文件路径，已存在时覆盖
    pub path: String,
    /// JSON 缩进空格数
    pub indent: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: DEFAULT_OUTPUT_PATH.to_string(),
            indent: DEFAULT_INDENT,
        }
    }
}

/// 单个记录集合的生成参数
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionConfig {
    /// ID 前缀，如 "BP"
    pub prefix: String,
    /// 记录数量
    pub count: usize,
}

impl CollectionConfig {
    pub fn new(prefix: &str, count: usize) -> Self {
        Self {
            prefix: prefix.to_string(),
            count,
        }
    }
}

/// 配置中的集合覆盖项，缺失的键沿用该集合自身的默认值
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CollectionOverride {
    prefix: Option<String>,
    count: Option<usize>,
}

impl CollectionOverride {
    fn apply(self, base: CollectionConfig) -> CollectionConfig {
        CollectionConfig {
            prefix: self.prefix.unwrap_or(base.prefix),
            count: self.count.unwrap_or(base.count),
        }
    }
}

fn deserialize_big<'de, D>(deserializer: D) -> std::result::Result<CollectionConfig, D::Error>
where
    D: Deserializer<'de>,
{
    CollectionOverride::deserialize(deserializer).map(|o| o.apply(DatasetConfig::default().big))
}

fn deserialize_small<'de, D>(deserializer: D) -> std::result::Result<CollectionConfig, D::Error>
where
    D: Deserializer<'de>,
{
    CollectionOverride::deserialize(deserializer).map(|o| o.apply(DatasetConfig::default().small))
}

/// 数据集生成配置
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatasetConfig {
    #[serde(deserialize_with = "deserialize_big")]
    pub big: CollectionConfig,
    #[serde(deserialize_with = "deserialize_small")]
    pub small: CollectionConfig,
    /// 随机种子，设置后输出可复现
    pub seed: Option<u64>,
    /// 固定的"今天"，用于复现历史输出；未设置时取当前 UTC 日期
    pub today: Option<NaiveDate>,
    /// 文本生成器：faker 或 word_list
    pub text_provider: String,
    /// 额外启用的可选指标字段（capacity、voltage 等）
    pub optional_metrics: Vec<String>,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            big: CollectionConfig::new("BP", DEFAULT_COLLECTION_SIZE),
            small: CollectionConfig::new("SP", DEFAULT_COLLECTION_SIZE),
            seed: None,
            today: None,
            text_provider: "faker".to_string(),
            optional_metrics: Vec::new(),
        }
    }
}

/// 应用配置
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub service_name: String,
    pub environment: String,
    pub output: OutputConfig,
    pub dataset: DatasetConfig,
    pub observability: ObservabilityConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            service_name: "data-faker".to_string(),
            environment: "development".to_string(),
            output: OutputConfig::default(),
            dataset: DatasetConfig::default(),
            observability: ObservabilityConfig::default(),
        }
    }
}

/// FIXTURE_ 前缀的环境变量源，节之间用双下划线分隔
pub fn environment_source() -> Environment {
    Environment::with_prefix("FIXTURE")
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

impl AppConfig {
    /// 从配置文件和环境变量加载配置
    ///
    /// 加载顺序（后加载的会覆盖先加载的同名配置项）：
    /// 1. 内置默认值
    /// 2. config/default.toml（默认配置）
    /// 3. config/{environment}.toml（环境特定配置）
    /// 4. 环境变量（FIXTURE_ 前缀，节之间用双下划线，如 FIXTURE_OUTPUT__PATH -> output.path）
    pub fn load(service_name: &str) -> Result<Self> {
        let env = std::env::var("FIXTURE_ENV").unwrap_or_else(|_| "development".to_string());
        let config_dir = std::env::var("CONFIG_DIR").unwrap_or_else(|_| "config".to_string());

        Self::load_from(service_name, Path::new(&config_dir), &env)
    }

    /// 从指定目录加载配置
    pub fn load_from(service_name: &str, config_dir: &Path, env: &str) -> Result<Self> {
        Self::load_with_environment(service_name, config_dir, env, environment_source())
    }

    /// 使用给定的环境变量源加载配置
    pub fn load_with_environment(
        service_name: &str,
        config_dir: &Path,
        env: &str,
        environment: Environment,
    ) -> Result<Self> {
        let builder = Config::builder()
            .set_default("service_name", service_name)?
            .set_default("environment", env)?
            .add_source(File::from(config_dir.join("default.toml")).required(false))
            .add_source(File::from(config_dir.join(format!("{}.toml", env))).required(false))
            .add_source(environment);

        let config: Self = builder.build()?.try_deserialize()?;
        config.validate()?;

        Ok(config)
    }

    /// 校验配置
    pub fn validate(&self) -> Result<()> {
        if self.output.path.trim().is_empty() {
            return Err(FixtureError::invalid_argument("output.path", "输出路径不能为空"));
        }

        for (field, collection) in [
            ("dataset.big.prefix", &self.dataset.big),
            ("dataset.small.prefix", &self.dataset.small),
        ] {
            if collection.prefix.is_empty() {
                return Err(FixtureError::invalid_argument(field, "ID 前缀不能为空"));
            }
        }

        Ok(())
    }

    /// 是否为生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.output.path, "government.json");
        assert_eq!(config.output.indent, 4);
        assert_eq!(config.dataset.big, CollectionConfig::new("BP", 1000));
        assert_eq!(config.dataset.small, CollectionConfig::new("SP", 1000));
        assert!(config.dataset.seed.is_none());
        assert_eq!(config.dataset.text_provider, "faker");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_without_files_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();

        let config = AppConfig::load_from("data-faker", dir.path(), "test").unwrap();

        assert_eq!(config.service_name, "data-faker");
        assert_eq!(config.environment, "test");
        assert_eq!(config.dataset.big.count, DEFAULT_COLLECTION_SIZE);
        assert!(!config.is_production());
    }

    #[test]
    fn test_environment_file_overrides_default_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("default.toml"),
            "[output]\npath = \"default.json\"\n\n[dataset]\nseed = 7\n",
        )
        .unwrap();
        fs::write(
            dir.path().join("staging.toml"),
            "[output]\npath = \"staging.json\"\nindent = 2\n\n[dataset.small]\nprefix = \"XS\"\ncount = 5\n",
        )
        .unwrap();

        let config = AppConfig::load_from("data-faker", dir.path(), "staging").unwrap();

        assert_eq!(config.output.path, "staging.json");
        assert_eq!(config.output.indent, 2);
        assert_eq!(config.dataset.seed, Some(7));
        assert_eq!(config.dataset.small, CollectionConfig::new("XS", 5));
        // 未覆盖的集合保持默认
        assert_eq!(config.dataset.big, CollectionConfig::new("BP", 1000));
    }

    #[test]
    fn test_load_today_and_metrics() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("default.toml"),
            "[dataset]\ntoday = \"2024-03-01\"\ntext_provider = \"word_list\"\noptional_metrics = [\"capacity\", \"voltage\"]\n",
        )
        .unwrap();

        let config = AppConfig::load_from("data-faker", dir.path(), "development").unwrap();

        assert_eq!(
            config.dataset.today,
            NaiveDate::from_ymd_opt(2024, 3, 1)
        );
        assert_eq!(config.dataset.text_provider, "word_list");
        assert_eq!(config.dataset.optional_metrics, vec!["capacity", "voltage"]);
    }

    #[test]
    fn test_partial_collection_keeps_its_own_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("default.toml"), "[dataset.small]\ncount = 5\n").unwrap();

        let config = AppConfig::load_from("data-faker", dir.path(), "development").unwrap();

        assert_eq!(config.dataset.small, CollectionConfig::new("SP", 5));
        assert_eq!(config.dataset.big, CollectionConfig::new("BP", 1000));
    }

    #[test]
    fn test_environment_variables_override_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("default.toml"),
            "[output]\npath = \"file.json\"\n\n[dataset]\nseed = 1\n",
        )
        .unwrap();

        let vars: config::Map<String, String> = [
            ("FIXTURE_OUTPUT__PATH", "env.json"),
            ("FIXTURE_DATASET__SEED", "42"),
            ("FIXTURE_DATASET__BIG__COUNT", "5"),
            ("FIXTURE_OBSERVABILITY__LOG_FORMAT", "json"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        let config = AppConfig::load_with_environment(
            "data-faker",
            dir.path(),
            "development",
            environment_source().source(Some(vars)),
        )
        .unwrap();

        assert_eq!(config.output.path, "env.json");
        assert_eq!(config.dataset.seed, Some(42));
        assert_eq!(config.dataset.big, CollectionConfig::new("BP", 5));
        assert_eq!(config.dataset.small, CollectionConfig::new("SP", 1000));
        assert!(config.observability.json_logs());
    }

    #[test]
    fn test_validate_rejects_empty_prefix() {
        let mut config = AppConfig::default();
        config.dataset.small.prefix = String::new();

        let err = config.validate().unwrap_err();
        assert_eq!(err.code(), "INVALID_ARGUMENT");
        assert!(err.to_string().contains("dataset.small.prefix"));
    }

    #[test]
    fn test_validate_rejects_empty_output_path() {
        let mut config = AppConfig::default();
        config.output.path = "  ".to_string();

        assert!(config.validate().is_err());
    }
}
