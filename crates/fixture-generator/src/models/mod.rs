//! 数据模型
//!
//! 政府项目记录及其枚举字段。

pub mod project;

pub use project::{Coordinate, OptionalMetric, ProjectRecord, ProjectStatus, ProjectType};
