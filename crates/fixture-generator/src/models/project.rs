//! 项目记录模型
//!
//! 地图看板使用的政府项目数据结构。每个字段都是可选值，
//! 缺失的字段在序列化时直接省略，而不是输出 null。

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use fixture_shared::FixtureError;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// 项目状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ProjectStatus {
    Abandoned,
    Maintenance,
    Development,
    Proposal,
}

impl ProjectStatus {
    pub const ALL: [Self; 4] = [
        Self::Abandoned,
        Self::Maintenance,
        Self::Development,
        Self::Proposal,
    ];

    /// 均匀随机选择一个状态
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Abandoned => "Abandoned",
            Self::Maintenance => "Maintenance",
            Self::Development => "Development",
            Self::Proposal => "Proposal",
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 项目类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectType {
    Infrastructure,
    Education,
    Healthcare,
    Housing,
    Other,
}

impl ProjectType {
    pub const ALL: [Self; 5] = [
        Self::Infrastructure,
        Self::Education,
        Self::Healthcare,
        Self::Housing,
        Self::Other,
    ];

    /// 均匀随机选择一个项目类型
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Infrastructure => "infrastructure",
            Self::Education => "education",
            Self::Healthcare => "healthcare",
            Self::Housing => "housing",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 地理坐标点（WGS84 度）
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

/// 可选的基础设施指标
///
/// 默认不生成，只有在配置中显式启用时才会出现在记录里
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionalMetric {
    /// 装机容量（MW）
    Capacity,
    /// 电压等级（kV）
    Voltage,
    /// 管道压力（PSI）
    Pressure,
    /// 流量
    FlowRate,
    /// 道路交通密度（百分比）
    TrafficDensity,
}

impl OptionalMetric {
    pub const ALL: [Self; 5] = [
        Self::Capacity,
        Self::Voltage,
        Self::Pressure,
        Self::FlowRate,
        Self::TrafficDensity,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Capacity => "capacity",
            Self::Voltage => "voltage",
            Self::Pressure => "pressure",
            Self::FlowRate => "flow_rate",
            Self::TrafficDensity => "traffic_density",
        }
    }
}

impl FromStr for OptionalMetric {
    type Err = FixtureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|metric| metric.as_str() == normalized)
            .ok_or_else(|| {
                FixtureError::invalid_argument(
                    "dataset.optional_metrics",
                    format!(
                        "未知的指标 '{}'，支持: capacity, voltage, pressure, flow_rate, traffic_density",
                        s
                    ),
                )
            })
    }
}

/// 项目记录
///
/// 字段顺序即 JSON 输出顺序
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ProjectStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Vec<Coordinate>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_completion: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contractor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget: Option<u64>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub project_type: Option<ProjectType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    // 可选指标，默认缺失
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voltage: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pressure: Option<u8>,
    #[serde(rename = "flow_rate", skip_serializing_if = "Option::is_none")]
    pub flow_rate: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub traffic_density: Option<u8>,
}

impl ProjectRecord {
    /// 基础字段的 JSON 名称
    pub const BASE_FIELDS: [&'static str; 11] = [
        "id",
        "name",
        "status",
        "coordinates",
        "startDate",
        "estimatedCompletion",
        "progress",
        "contractor",
        "budget",
        "type",
        "description",
    ];

    /// 十一个基础字段是否全部存在
    pub fn is_complete(&self) -> bool {
        self.id.is_some()
            && self.name.is_some()
            && self.status.is_some()
            && self.coordinates.is_some()
            && self.start_date.is_some()
            && self.estimated_completion.is_some()
            && self.progress.is_some()
            && self.contractor.is_some()
            && self.budget.is_some()
            && self.project_type.is_some()
            && self.description.is_some()
    }

    /// 设置可选指标
    pub fn set_metric(&mut self, metric: OptionalMetric, value: Option<u8>) {
        let slot = match metric {
            OptionalMetric::Capacity => &mut self.capacity,
            OptionalMetric::Voltage => &mut self.voltage,
            OptionalMetric::Pressure => &mut self.pressure,
            OptionalMetric::FlowRate => &mut self.flow_rate,
            OptionalMetric::TrafficDensity => &mut self.traffic_density,
        };
        *slot = value;
    }

    /// 读取可选指标
    pub fn metric(&self, metric: OptionalMetric) -> Option<u8> {
        match metric {
            OptionalMetric::Capacity => self.capacity,
            OptionalMetric::Voltage => self.voltage,
            OptionalMetric::Pressure => self.pressure,
            OptionalMetric::FlowRate => self.flow_rate,
            OptionalMetric::TrafficDensity => self.traffic_density,
        }
    }
}
