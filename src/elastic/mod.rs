//! # 弹性常数计算模块
//!
//! 用应变涨落（Parrinello–Rahman）方法从胞矩阵轨迹计算弹性刚度张量。
//!
//! ## 数据流
//! ```text
//! 轨迹 ──┬── geometry   (晶胞平均值，仅用于报告)
//!        └── strain ── voigt ── compliance ── stiffness
//! ```
//! 每一步产生新的不可变值。逐帧的应变与 Voigt 缩并用 rayon 并行，
//! 统计归约按帧顺序串行完成，结果与线程数无关。
//!
//! ## 子模块
//! - `constants`: 物理常数与单位换算
//! - `config`: 计算参数
//! - `stats`: 补偿求和
//! - `geometry`: 晶胞几何统计
//! - `strain`: Green–Lagrange 应变
//! - `voigt`: Voigt 缩并
//! - `compliance`: 涨落柔度估计
//! - `stiffness`: 刚度矩阵求解
//! - `convergence`: 随轨迹长度的收敛分析
//! - `report`: 文本报告
//! - `export`: CSV 导出
//! - `plot`: 收敛曲线绘图
//!
//! ## 依赖关系
//! - 被 `commands/elastic.rs`, `commands/cell.rs` 调用
//! - 使用 `models/`, `linalg.rs`

pub mod compliance;
pub mod config;
pub mod constants;
pub mod convergence;
pub mod export;
pub mod geometry;
pub mod plot;
pub mod report;
pub mod stats;
pub mod stiffness;
pub mod strain;
pub mod voigt;

pub use compliance::ComplianceMatrix;
pub use config::ElasticConfig;
pub use geometry::CellAverages;
pub use stiffness::StiffnessMatrix;

use crate::error::{CijError, Result};
use crate::models::CellMatrix;
use strain::StrainEngine;
use voigt::VoigtVector;

use rayon::prelude::*;
use tracing::{debug, info, warn};

/// 一次弹性计算的完整结果
#[derive(Debug, Clone)]
pub struct ElasticResult {
    /// 参与统计的帧数
    pub frames: usize,
    /// 平均体积（原生单位，Å³）
    pub mean_volume: f64,
    pub compliance: ComplianceMatrix,
    pub stiffness: StiffnessMatrix,
}

/// 对每一帧计算相对参考胞的 Voigt 应变向量（并行，保持帧顺序）
pub fn voigt_strain_series(engine: &StrainEngine, frames: &[CellMatrix]) -> Vec<VoigtVector> {
    frames
        .par_iter()
        .map(|h| voigt::contract(&engine.strain(h)))
        .collect()
}

/// 从已丢弃平衡段的帧序列计算刚度矩阵
///
/// 参考胞为第一帧。少于两帧时在计算协方差之前即返回 `InsufficientSamples`。
pub fn compute_elastic_constants(frames: &[CellMatrix], config: &ElasticConfig) -> Result<ElasticResult> {
    config.validate()?;

    if frames.len() < 2 {
        return Err(CijError::InsufficientSamples {
            frames: frames.len(),
        });
    }

    let engine = StrainEngine::new(&frames[0])?;
    let series = voigt_strain_series(&engine, frames);
    debug!(frames = series.len(), "strain series computed");

    let mean_volume = geometry::mean_volume(frames).ok_or(CijError::InsufficientSamples { frames: 0 })?;
    let compliance = compliance::estimate_compliance(&series, mean_volume, config)?;
    let stiffness = stiffness::solve_stiffness(&compliance, config)?;

    if stiffness.is_mechanically_stable() {
        info!(
            frames = frames.len(),
            min_eigenvalue = stiffness.eigenvalues()[0],
            "stiffness matrix computed"
        );
    } else {
        warn!(
            non_positive = ?stiffness.non_positive_eigenvalues(),
            "stiffness matrix has non-positive eigenvalues"
        );
    }

    Ok(ElasticResult {
        frames: frames.len(),
        mean_volume,
        compliance,
        stiffness,
    })
}
