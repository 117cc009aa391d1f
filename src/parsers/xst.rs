//! # NAMD 扩展系统轨迹 (.xst) 解析器
//!
//! ## .xst 格式说明
//! ```text
//! # NAMD extended system trajectory file
//! #$LABELS step a_x a_y a_z b_x b_y b_z c_x c_y c_z o_x o_y o_z s_x ...
//! 0 48.0 0 0 0 48.0 0 0 0 48.0 0 0 0 ...
//! 1000 48.02 0.01 0 ...
//! ```
//! 每行一帧：第一列为步数（忽略），随后 9 列为按行展开的胞矩阵，
//! 其余列（原点、应力等）忽略。以 `#` 开头的行与空行跳过。
//!
//! ## 依赖关系
//! - 被 `parsers/mod.rs` 使用
//! - 使用 `models/cell.rs`, `models/trajectory.rs`

use crate::error::{CijError, Result};
use crate::models::{CellMatrix, Trajectory};

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::debug;

/// 每行至少需要的列数：步数 + 9 个矩阵分量
const MIN_COLUMNS: usize = 10;

/// 解析 .xst 文件
pub fn parse_xst_file(path: &Path) -> Result<Trajectory> {
    let file = File::open(path).map_err(|e| CijError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_xst_reader(BufReader::new(file), &path.display().to_string())
}

/// 从字符串内容解析 .xst 格式
#[cfg(test)]
pub fn parse_xst_content(content: &str, source_name: &str) -> Result<Trajectory> {
    parse_xst_reader(content.as_bytes(), source_name)
}

/// 逐行解析，任何非法行都会终止读取
pub fn parse_xst_reader<R: BufRead>(reader: R, source_name: &str) -> Result<Trajectory> {
    let mut frames = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.map_err(|e| CijError::FileReadError {
            path: source_name.to_string(),
            source: e,
        })?;

        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        frames.push(parse_frame_line(trimmed, source_name, line_no)?);
    }

    if frames.is_empty() {
        return Err(CijError::MalformedTrajectory(format!(
            "{}: no frames found",
            source_name
        )));
    }

    debug!(source = source_name, frames = frames.len(), "trajectory parsed");
    Ok(Trajectory::new(frames))
}

/// 解析单帧数据行
fn parse_frame_line(line: &str, source_name: &str, line_no: usize) -> Result<CellMatrix> {
    let malformed =
        |reason: String| CijError::MalformedTrajectory(format!("{}:{}: {}", source_name, line_no, reason));

    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() < MIN_COLUMNS {
        return Err(malformed(format!(
            "expected at least {} columns, found {}",
            MIN_COLUMNS,
            tokens.len()
        )));
    }

    let mut values = [0.0; 9];
    for (slot, token) in values.iter_mut().zip(&tokens[1..MIN_COLUMNS]) {
        *slot = token
            .parse::<f64>()
            .map_err(|_| malformed(format!("'{}' is not a number", token)))?;
    }

    CellMatrix::from_flat(&values).ok_or_else(|| malformed("non-finite cell matrix entry".to_string()))
}
