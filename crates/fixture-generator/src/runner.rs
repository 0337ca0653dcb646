//! 生成流程执行器
//!
//! 将配置转化为一次完整的生成：选择随机源与文本提供者，组装数据集并写出文件。

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use fixture_shared::config::AppConfig;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};

use crate::dataset::{Dataset, DatasetPlan, DatasetStats, write_dataset};
use crate::generators::{
    FakerTextProvider, GeneratorConfig, ProjectGenerator, SyntheticTextProvider, TextProviderKind,
    WordListTextProvider,
};
use crate::models::OptionalMetric;

/// 生成流程执行器
///
/// 封装应用配置，作为 main 函数与生成逻辑之间的桥梁
pub struct FixtureRunner {
    config: AppConfig,
}

impl FixtureRunner {
    /// 创建执行器
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// 执行一次完整生成并写出文件
    pub fn run(&self) -> Result<DatasetStats> {
        let started = Instant::now();
        let dataset_config = &self.config.dataset;

        let today = self.today();
        let optional_metrics = self.optional_metrics()?;
        let provider: TextProviderKind = dataset_config
            .text_provider
            .parse()
            .context("解析文本生成器失败")?;

        info!(
            %today,
            seed = ?dataset_config.seed,
            provider = ?provider,
            metrics = ?optional_metrics,
            "开始生成项目数据"
        );

        let generator_config = GeneratorConfig {
            today,
            optional_metrics,
        };
        let mut rng = self.build_rng();

        let dataset = match provider {
            TextProviderKind::Faker => {
                self.assemble(generator_config, FakerTextProvider, &mut rng)?
            }
            TextProviderKind::WordList => {
                self.assemble(generator_config, WordListTextProvider, &mut rng)?
            }
        };

        let path = Path::new(&self.config.output.path);
        let bytes_written = write_dataset(&dataset, path, self.config.output.indent)
            .with_context(|| format!("写出数据集失败: {}", path.display()))?;

        let mut stats = DatasetStats::from_dataset(&dataset);
        stats.bytes_written = bytes_written;

        info!(
            path = %path.display(),
            big_projects = stats.big_projects.count,
            small_projects = stats.small_projects.count,
            bytes = bytes_written,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "数据集已写出"
        );
        debug!(
            big_by_status = ?stats.big_projects.by_status,
            small_by_status = ?stats.small_projects.by_status,
            big_by_type = ?stats.big_projects.by_type,
            small_by_type = ?stats.small_projects.by_type,
            "状态与类型分布"
        );

        Ok(stats)
    }

    // ========================================================================
    // 辅助方法
    // ========================================================================

    fn assemble<P: SyntheticTextProvider>(
        &self,
        config: GeneratorConfig,
        provider: P,
        rng: &mut StdRng,
    ) -> Result<Dataset> {
        let generator = ProjectGenerator::new(config, provider).context("创建生成器失败")?;
        let plan = DatasetPlan::from(&self.config.dataset);

        Dataset::assemble(&generator, &plan, rng).context("生成数据集失败")
    }

    /// 基准日期：配置优先，否则取当前 UTC 日期
    fn today(&self) -> NaiveDate {
        self.config
            .dataset
            .today
            .unwrap_or_else(|| Utc::now().date_naive())
    }

    /// 设置了种子时使用确定性随机源，否则从操作系统取熵
    fn build_rng(&self) -> StdRng {
        match self.config.dataset.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }

    fn optional_metrics(&self) -> Result<Vec<OptionalMetric>> {
        let mut metrics = Vec::new();
        for name in &self.config.dataset.optional_metrics {
            let metric: OptionalMetric = name.parse().context("解析可选指标失败")?;
            if !metrics.contains(&metric) {
                metrics.push(metric);
            }
        }
        Ok(metrics)
    }
}

// ============================================================================
// 单元测试
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn runner_with(f: impl FnOnce(&mut AppConfig)) -> FixtureRunner {
        let mut config = AppConfig::default();
        f(&mut config);
        FixtureRunner::new(config)
    }

    #[test]
    fn test_today_from_config() {
        let fixed = NaiveDate::from_ymd_opt(2022, 1, 31).unwrap();
        let runner = runner_with(|c| c.dataset.today = Some(fixed));
        assert_eq!(runner.today(), fixed);
    }

    #[test]
    fn test_today_defaults_to_utc_date() {
        let runner = FixtureRunner::new(AppConfig::default());
        let before = Utc::now().date_naive();
        let today = runner.today();
        let after = Utc::now().date_naive();
        assert!(before <= today && today <= after);
    }

    #[test]
    fn test_optional_metrics_parsed_and_deduplicated() {
        let runner = runner_with(|c| {
            c.dataset.optional_metrics = vec![
                "capacity".to_string(),
                "flow_rate".to_string(),
                "capacity".to_string(),
            ]
        });

        assert_eq!(
            runner.optional_metrics().unwrap(),
            vec![OptionalMetric::Capacity, OptionalMetric::FlowRate]
        );
    }

    #[test]
    fn test_unknown_metric_is_error() {
        let runner = runner_with(|c| c.dataset.optional_metrics = vec!["humidity".to_string()]);
        assert!(runner.optional_metrics().is_err());
    }

    #[test]
    fn test_seeded_rng_is_deterministic() {
        use rand::Rng;

        let runner = runner_with(|c| c.dataset.seed = Some(5));
        let a: u64 = runner.build_rng().random();
        let b: u64 = runner.build_rng().random();
        assert_eq!(a, b);
    }

    #[test]
    fn test_unknown_provider_fails_before_writing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("government.json");
        let runner = runner_with(|c| {
            c.dataset.text_provider = "markov".to_string();
            c.output.path = path.display().to_string();
        });

        assert!(runner.run().is_err());
        assert!(!path.exists());
    }
}
