//! # 轨迹数据模型
//!
//! 按时间顺序排列的胞矩阵序列。除丢弃平衡段外，所有统计量与帧顺序无关。
//!
//! ## 依赖关系
//! - 被 `parsers/xst.rs`, `commands/` 使用
//! - 使用 `models/cell.rs`

use crate::error::{CijError, Result};
use crate::models::CellMatrix;

/// 胞矩阵轨迹
#[derive(Debug, Clone, Default)]
pub struct Trajectory {
    frames: Vec<CellMatrix>,
}

impl Trajectory {
    pub fn new(frames: Vec<CellMatrix>) -> Self {
        Trajectory { frames }
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn frames(&self) -> &[CellMatrix] {
        &self.frames
    }

    /// 参考构型：第一帧
    pub fn reference(&self) -> Option<&CellMatrix> {
        self.frames.first()
    }

    /// 平衡段需丢弃的帧数 ⌊n · fraction⌋
    ///
    /// 加一个远小于 1 的偏移，避免 n · 0.2 这类乘积因舍入落在整数下方。
    pub fn discard_count(n: usize, fraction: f64) -> usize {
        ((n as f64 * fraction) + 1e-9).floor() as usize
    }

    /// 丢弃前 ⌊N · fraction⌋ 帧，返回新的轨迹
    pub fn discard_equilibration(mut self, fraction: f64) -> Result<Self> {
        if !(0.0..1.0).contains(&fraction) {
            return Err(CijError::InvalidArgument(format!(
                "equilibration fraction must be in [0, 1), got {}",
                fraction
            )));
        }

        let skip = Self::discard_count(self.frames.len(), fraction);
        self.frames.drain(..skip);
        Ok(self)
    }
}
