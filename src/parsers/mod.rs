//! # 解析器模块
//!
//! 提供胞矩阵轨迹文件的解析器。
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 使用 `models/` 数据模型
//! - 子模块: xst

pub mod xst;

use crate::error::{CijError, Result};
use crate::models::Trajectory;
use std::path::Path;

/// 读取轨迹文件
///
/// NAMD .xst/.xsc 以及任何"步数 + 9 个胞矩阵分量"的逐行文本都按同一格式读取。
pub fn parse_trajectory_file(path: &Path) -> Result<Trajectory> {
    if !path.is_file() {
        return Err(CijError::FileNotFound {
            path: path.display().to_string(),
        });
    }

    xst::parse_xst_file(path)
}
