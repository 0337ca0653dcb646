//! 数据集组装
//!
//! 把大项目与小项目两个集合合并成一个顶层文档，并提供统计与写出。

pub mod stats;
pub mod writer;

use fixture_shared::Result;
use fixture_shared::config::{CollectionConfig, DatasetConfig};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::generators::{ProjectGenerator, SyntheticTextProvider};
use crate::models::ProjectRecord;

pub use stats::{CollectionStats, DatasetStats};
pub use writer::{render, write_dataset};

/// 顶层数据集文档
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub big_projects: Vec<ProjectRecord>,
    pub small_projects: Vec<ProjectRecord>,
}

/// 两个集合的生成计划
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetPlan {
    pub big: CollectionConfig,
    pub small: CollectionConfig,
}

impl Default for DatasetPlan {
    fn default() -> Self {
        let config = DatasetConfig::default();
        Self {
            big: config.big,
            small: config.small,
        }
    }
}

impl From<&DatasetConfig> for DatasetPlan {
    fn from(config: &DatasetConfig) -> Self {
        Self {
            big: config.big.clone(),
            small: config.small.clone(),
        }
    }
}

impl Dataset {
    /// 按计划生成两个集合
    ///
    /// 先生成大项目再生成小项目，两者共用同一个随机源
    pub fn assemble<P, R>(
        generator: &ProjectGenerator<P>,
        plan: &DatasetPlan,
        rng: &mut R,
    ) -> Result<Self>
    where
        P: SyntheticTextProvider,
        R: Rng + ?Sized,
    {
        let big_projects = generator.generate(&plan.big.prefix, plan.big.count, rng)?;
        info!(
            prefix = %plan.big.prefix,
            count = big_projects.len(),
            "大项目生成完成"
        );

        let small_projects = generator.generate(&plan.small.prefix, plan.small.count, rng)?;
        info!(
            prefix = %plan.small.prefix,
            count = small_projects.len(),
            "小项目生成完成"
        );

        Ok(Self {
            big_projects,
            small_projects,
        })
    }

    /// 记录总数
    pub fn len(&self) -> usize {
        self.big_projects.len() + self.small_projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::{FakerTextProvider, GeneratorConfig};
    use chrono::NaiveDate;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn generator() -> ProjectGenerator<FakerTextProvider> {
        let today = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
        ProjectGenerator::new(GeneratorConfig::new(today), FakerTextProvider).unwrap()
    }

    #[test]
    fn test_default_plan() {
        let plan = DatasetPlan::default();
        assert_eq!(plan.big, CollectionConfig::new("BP", 1000));
        assert_eq!(plan.small, CollectionConfig::new("SP", 1000));
    }

    #[test]
    fn test_assemble_uses_plan() {
        let plan = DatasetPlan {
            big: CollectionConfig::new("BP", 3),
            small: CollectionConfig::new("SP", 5),
        };
        let mut rng = StdRng::seed_from_u64(10);

        let dataset = Dataset::assemble(&generator(), &plan, &mut rng).unwrap();

        assert_eq!(dataset.big_projects.len(), 3);
        assert_eq!(dataset.small_projects.len(), 5);
        assert_eq!(dataset.len(), 8);
        assert_eq!(dataset.big_projects[2].id.as_deref(), Some("BP003"));
        assert_eq!(dataset.small_projects[0].id.as_deref(), Some("SP001"));
    }

    #[test]
    fn test_assemble_empty_collections() {
        let plan = DatasetPlan {
            big: CollectionConfig::new("BP", 0),
            small: CollectionConfig::new("SP", 0),
        };
        let mut rng = StdRng::seed_from_u64(10);

        let dataset = Dataset::assemble(&generator(), &plan, &mut rng).unwrap();
        assert!(dataset.is_empty());

        let value = serde_json::to_value(&dataset).unwrap();
        assert_eq!(value, serde_json::json!({"big_projects": [], "small_projects": []}));
    }

    #[test]
    fn test_assemble_propagates_invalid_prefix() {
        let plan = DatasetPlan {
            big: CollectionConfig::new("BP", 1),
            small: CollectionConfig::new("", 1),
        };
        let mut rng = StdRng::seed_from_u64(10);

        assert!(Dataset::assemble(&generator(), &plan, &mut rng).is_err());
    }
}
