//! Fixture Generator
//!
//! 为政府项目地图看板生成模拟数据的 crate。
//!
//! # 主要模块
//!
//! - `models`: 项目记录及其枚举字段
//! - `generators`: 坐标、日期、文本与项目记录的随机生成
//! - `dataset`: 数据集组装、统计与 JSON 写出
//! - `runner`: 按配置执行一次完整生成
//!
//! # 使用示例
//!
//! ```rust
//! use chrono::NaiveDate;
//! use fixture_generator::dataset::{Dataset, DatasetPlan};
//! use fixture_generator::generators::{FakerTextProvider, GeneratorConfig, ProjectGenerator};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let today = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
//! let generator = ProjectGenerator::new(GeneratorConfig::new(today), FakerTextProvider).unwrap();
//!
//! // 固定种子，输出可复现
//! let mut rng = StdRng::seed_from_u64(42);
//! let records = generator.generate("BP", 2, &mut rng).unwrap();
//! assert_eq!(records[1].id.as_deref(), Some("BP002"));
//!
//! let dataset = Dataset::assemble(&generator, &DatasetPlan::default(), &mut rng).unwrap();
//! assert_eq!(dataset.len(), 2000);
//! ```

pub mod dataset;
pub mod generators;
pub mod models;
pub mod runner;

pub use runner::FixtureRunner;
