//! 政府项目模拟数据生成器
//!
//! 生成大项目与小项目各一组记录，写出到 government.json。
//! 没有命令行参数，所有参数来自配置文件与 FIXTURE_ 环境变量。

use anyhow::Context;
use fixture_generator::FixtureRunner;
use fixture_shared::config::AppConfig;
use fixture_shared::observability;

fn main() -> anyhow::Result<()> {
    let config = AppConfig::load("data-faker").context("加载配置失败")?;

    observability::init(&config.observability).context("初始化日志失败")?;

    FixtureRunner::new(config).run()?;

    Ok(())
}
