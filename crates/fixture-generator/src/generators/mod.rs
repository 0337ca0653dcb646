//! 生成器模块
//!
//! 坐标、日期、文本以及完整项目记录的随机生成。

pub mod coordinate;
pub mod date_window;
pub mod project_generator;
pub mod text_provider;

pub use coordinate::{GeoBounds, generate_coordinates, round_to};
pub use date_window::DateWindow;
pub use project_generator::{GeneratorConfig, ProjectGenerator, format_project_id};
pub use text_provider::{
    FakerTextProvider, SyntheticTextProvider, TextProviderKind, WordListTextProvider,
};
