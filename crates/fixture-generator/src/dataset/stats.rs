//! 数据集统计

use std::collections::BTreeMap;

use super::Dataset;
use crate::models::ProjectRecord;

/// 单个集合的统计
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectionStats {
    pub count: usize,
    pub by_status: BTreeMap<String, usize>,
    pub by_type: BTreeMap<String, usize>,
    /// 预算总额
    pub total_budget: u128,
}

impl CollectionStats {
    pub fn from_records(records: &[ProjectRecord]) -> Self {
        let mut stats = Self {
            count: records.len(),
            ..Default::default()
        };

        for record in records {
            if let Some(status) = record.status {
                *stats.by_status.entry(status.to_string()).or_default() += 1;
            }
            if let Some(project_type) = record.project_type {
                *stats.by_type.entry(project_type.to_string()).or_default() += 1;
            }
            stats.total_budget += u128::from(record.budget.unwrap_or(0));
        }

        stats
    }
}

/// 数据集统计
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DatasetStats {
    pub big_projects: CollectionStats,
    pub small_projects: CollectionStats,
    /// 写出的字节数，未写出时为 0
    pub bytes_written: usize,
}

impl DatasetStats {
    pub fn from_dataset(dataset: &Dataset) -> Self {
        Self {
            big_projects: CollectionStats::from_records(&dataset.big_projects),
            small_projects: CollectionStats::from_records(&dataset.small_projects),
            bytes_written: 0,
        }
    }

    pub fn total_records(&self) -> usize {
        self.big_projects.count + self.small_projects.count
    }
}
