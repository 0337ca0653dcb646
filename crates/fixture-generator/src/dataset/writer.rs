//! JSON 写出
//!
//! 使用指定缩进的格式化输出，写入前截断已存在的文件。

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use fixture_shared::{FixtureError, Result};
use serde::Serialize;
use serde_json::Serializer;
use serde_json::ser::PrettyFormatter;

use super::Dataset;

/// 以 `indent` 个空格缩进序列化到任意 writer
fn serialize_into<W: Write>(dataset: &Dataset, writer: W, indent: usize) -> Result<()> {
    let indent = " ".repeat(indent);
    let formatter = PrettyFormatter::with_indent(indent.as_bytes());
    let mut serializer = Serializer::with_formatter(writer, formatter);
    dataset.serialize(&mut serializer)?;
    Ok(())
}

/// 序列化为格式化的 JSON 字节
pub fn render(dataset: &Dataset, indent: usize) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    serialize_into(dataset, &mut buf, indent)?;
    Ok(buf)
}

/// 写出数据集文件，返回写入的字节数
///
/// 文件不存在时创建，已存在时覆盖
pub fn write_dataset(dataset: &Dataset, path: &Path, indent: usize) -> Result<usize> {
    let bytes = render(dataset, indent)?;

    let file = File::create(path).map_err(|e| FixtureError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(&bytes)
        .and_then(|_| writer.flush())
        .map_err(|e| FixtureError::io(path, e))?;

    Ok(bytes.len())
}
