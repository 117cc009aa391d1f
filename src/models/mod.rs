//! # 数据模型模块
//!
//! 定义模拟胞矩阵与轨迹的数据模型。
//!
//! ## 依赖关系
//! - 被 `parsers/`, `elastic/` 和 `commands/` 使用
//! - 子模块: cell, trajectory

pub mod cell;
pub mod trajectory;

pub use cell::{CellMatrix, CellParameters};
pub use trajectory::Trajectory;
