//! # 晶胞几何统计
//!
//! 逐帧计算晶格参数 (a, b, c, α, β, γ) 与体积，再对轨迹取算术平均。
//! 体积取各帧行列式的平均，而不是平均矩阵的行列式。
//!
//! 该模块只用于报告，与弹性计算流程互相独立。
//!
//! ## 依赖关系
//! - 被 `elastic/mod.rs`, `commands/` 使用
//! - 使用 `models/cell.rs`, `elastic/stats.rs`

use crate::elastic::stats::{self, Summary};
use crate::error::{CijError, Result};
use crate::models::{CellMatrix, CellParameters};

/// 晶胞平均值（角度单位：度）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellAverages {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub alpha: f64,
    pub beta: f64,
    pub gamma: f64,
    pub volume: f64,
    pub frames: usize,
}

impl CellAverages {
    /// 对所有帧求平均；角度先以弧度平均再换算为度
    pub fn from_frames(frames: &[CellMatrix]) -> Result<Self> {
        if frames.is_empty() {
            return Err(CijError::InsufficientSamples { frames: 0 });
        }

        let params: Vec<CellParameters> = frames.iter().map(CellMatrix::parameters).collect();
        let avg = |f: fn(&CellParameters) -> f64| stats::mean(params.iter().map(f)).unwrap_or(0.0);

        Ok(CellAverages {
            a: avg(|p| p.a),
            b: avg(|p| p.b),
            c: avg(|p| p.c),
            alpha: avg(|p| p.alpha).to_degrees(),
            beta: avg(|p| p.beta).to_degrees(),
            gamma: avg(|p| p.gamma).to_degrees(),
            volume: mean_volume(frames).unwrap_or(0.0),
            frames: frames.len(),
        })
    }
}

/// 平均体积：各帧行列式的算术平均
pub fn mean_volume(frames: &[CellMatrix]) -> Option<f64> {
    stats::mean(frames.iter().map(CellMatrix::volume))
}

/// 单个晶格参数的统计摘要
#[derive(Debug, Clone)]
pub struct ParameterSummary {
    pub name: &'static str,
    pub unit: &'static str,
    pub summary: Summary,
}

/// 每个参数（a, b, c, α, β, γ, V）的均值、标准差与极值
pub fn cell_statistics(frames: &[CellMatrix]) -> Result<Vec<ParameterSummary>> {
    if frames.is_empty() {
        return Err(CijError::InsufficientSamples { frames: 0 });
    }

    let params: Vec<CellParameters> = frames.iter().map(CellMatrix::parameters).collect();
    let angles: Vec<[f64; 3]> = params.iter().map(CellParameters::angles_deg).collect();
    let volumes: Vec<f64> = frames.iter().map(CellMatrix::volume).collect();

    let series: [(&'static str, &'static str, Vec<f64>); 7] = [
        ("a", "Å", params.iter().map(|p| p.a).collect()),
        ("b", "Å", params.iter().map(|p| p.b).collect()),
        ("c", "Å", params.iter().map(|p| p.c).collect()),
        ("alpha", "°", angles.iter().map(|g| g[0]).collect()),
        ("beta", "°", angles.iter().map(|g| g[1]).collect()),
        ("gamma", "°", angles.iter().map(|g| g[2]).collect()),
        ("volume", "Å³", volumes),
    ];

    Ok(series
        .into_iter()
        .filter_map(|(name, unit, values)| {
            Summary::of(&values).map(|summary| ParameterSummary {
                name,
                unit,
                summary,
            })
        })
        .collect())
}
