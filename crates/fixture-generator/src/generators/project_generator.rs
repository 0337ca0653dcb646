//! 项目记录生成器
//!
//! 按前缀和数量批量生成项目记录，随机源由调用方注入。

use chrono::NaiveDate;
use fixture_shared::{FixtureError, Result};
use rand::Rng;
use tracing::debug;

use super::coordinate::generate_coordinates;
use super::date_window::DateWindow;
use super::text_provider::{SyntheticTextProvider, capitalize};
use crate::models::{OptionalMetric, ProjectRecord, ProjectStatus, ProjectType};

/// 开工日期回溯年数
pub const START_DATE_YEARS_BACK: u32 = 5;

/// 预计完工的最早天数
pub const COMPLETION_MIN_DAYS: u64 = 5;

/// 预计完工的最晚年数
pub const COMPLETION_MAX_YEARS: u32 = 5;

/// 预算上限（含）
pub const MAX_BUDGET: u64 = 1_000_000_000;

/// 进度上限（含）
pub const MAX_PROGRESS: u8 = 100;

/// 可选指标上限（含）
pub const MAX_METRIC: u8 = 100;

/// 生成器配置
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// 日期窗口的基准日期
    pub today: NaiveDate,
    /// 额外生成的可选指标
    pub optional_metrics: Vec<OptionalMetric>,
}

impl GeneratorConfig {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            today,
            optional_metrics: Vec::new(),
        }
    }
}

/// 格式化项目 ID：前缀 + 至少 3 位补零的序号
///
/// 序号超过 999 时宽度随之增长（BP1000）
pub fn format_project_id(prefix: &str, index: usize) -> String {
    format!("{}{:03}", prefix, index)
}

/// 项目记录生成器
pub struct ProjectGenerator<P> {
    provider: P,
    optional_metrics: Vec<OptionalMetric>,
    start_window: DateWindow,
    completion_window: DateWindow,
}

impl<P: SyntheticTextProvider> ProjectGenerator<P> {
    /// 创建生成器
    ///
    /// 日期窗口在此一次性计算，`today` 过于接近日期上下限时返回错误
    pub fn new(config: GeneratorConfig, provider: P) -> Result<Self> {
        let start_window = DateWindow::trailing_years(config.today, START_DATE_YEARS_BACK)?;
        let completion_window =
            DateWindow::upcoming(config.today, COMPLETION_MIN_DAYS, COMPLETION_MAX_YEARS)?;

        Ok(Self {
            provider,
            optional_metrics: config.optional_metrics,
            start_window,
            completion_window,
        })
    }

    pub fn start_window(&self) -> DateWindow {
        self.start_window
    }

    pub fn completion_window(&self) -> DateWindow {
        self.completion_window
    }

    /// 生成 `count` 条记录，ID 从 1 开始连续编号
    pub fn generate<R: Rng + ?Sized>(
        &self,
        prefix: &str,
        count: usize,
        rng: &mut R,
    ) -> Result<Vec<ProjectRecord>> {
        if prefix.is_empty() {
            return Err(FixtureError::invalid_argument("prefix", "ID 前缀不能为空"));
        }

        let mut records = Vec::with_capacity(count);
        for index in 1..=count {
            let record = self.generate_one(prefix, index, rng);
            records.push(drop_absent(record));
        }

        debug!(prefix, count = records.len(), "项目记录生成完成");
        Ok(records)
    }

    /// 生成单条记录
    pub fn generate_one<R: Rng + ?Sized>(
        &self,
        prefix: &str,
        index: usize,
        rng: &mut R,
    ) -> ProjectRecord {
        let name = format!(
            "{} {} data",
            self.provider.city(rng),
            capitalize(&self.provider.word(rng))
        );

        let mut record = ProjectRecord {
            id: Some(format_project_id(prefix, index)),
            name: Some(name),
            status: Some(ProjectStatus::random(rng)),
            coordinates: Some(generate_coordinates(rng)),
            start_date: Some(self.start_window.sample(rng)),
            estimated_completion: Some(self.completion_window.sample(rng)),
            progress: Some(rng.random_range(0..=MAX_PROGRESS)),
            contractor: Some(self.provider.company(rng)),
            budget: Some(rng.random_range(0..=MAX_BUDGET)),
            project_type: Some(ProjectType::random(rng)),
            description: Some(self.provider.sentence(rng)),
            ..Default::default()
        };

        for metric in &self.optional_metrics {
            record.set_metric(*metric, Some(rng.random_range(0..=MAX_METRIC)));
        }

        record
    }
}

/// 丢弃取值为空的文本字段
///
/// 文本提供者可能返回空串，此时按缺失处理；其余字段的缺失由序列化时省略
fn drop_absent(mut record: ProjectRecord) -> ProjectRecord {
    for field in [
        &mut record.id,
        &mut record.name,
        &mut record.contractor,
        &mut record.description,
    ] {
        if field.as_deref().is_some_and(|value| value.trim().is_empty()) {
            *field = None;
        }
    }

    if record.coordinates.as_ref().is_some_and(Vec::is_empty) {
        record.coordinates = None;
    }

    record
}
