//! # 收敛分析
//!
//! 涨落法收敛慢。把保留下来的轨迹分成 `blocks` 段，对前 k 段
//! (k = 1..blocks) 分别重新计算刚度矩阵，观察对角元与最小本征值
//! 随采样长度的变化。各前缀互相独立，用 rayon 并行计算。
//!
//! ## 依赖关系
//! - 被 `commands/elastic.rs` 调用
//! - 使用 `elastic/mod.rs` 的 compute_elastic_constants

use crate::elastic::{compute_elastic_constants, ElasticConfig};
use crate::error::{CijError, Result};
use crate::models::CellMatrix;

use rayon::prelude::*;
use serde::Serialize;

/// 单个前缀的计算结果
#[derive(Debug, Clone)]
pub struct ConvergencePoint {
    /// 前缀帧数
    pub frames: usize,
    /// 成功时为 (C11..C66, 最小本征值)，失败时为错误描述
    pub outcome: std::result::Result<ConvergenceValues, String>,
}

/// 前缀刚度摘要 (GPa)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConvergenceValues {
    pub diagonal: [f64; 6],
    pub min_eigenvalue: f64,
}

/// CSV 行
#[derive(Debug, Serialize)]
pub struct ConvergenceRow {
    pub frames: usize,
    pub c11: Option<f64>,
    pub c22: Option<f64>,
    pub c33: Option<f64>,
    pub c44: Option<f64>,
    pub c55: Option<f64>,
    pub c66: Option<f64>,
    pub min_eigenvalue: Option<f64>,
    pub error: String,
}

impl From<&ConvergencePoint> for ConvergenceRow {
    fn from(point: &ConvergencePoint) -> Self {
        match &point.outcome {
            Ok(v) => ConvergenceRow {
                frames: point.frames,
                c11: Some(v.diagonal[0]),
                c22: Some(v.diagonal[1]),
                c33: Some(v.diagonal[2]),
                c44: Some(v.diagonal[3]),
                c55: Some(v.diagonal[4]),
                c66: Some(v.diagonal[5]),
                min_eigenvalue: Some(v.min_eigenvalue),
                error: String::new(),
            },
            Err(e) => ConvergenceRow {
                frames: point.frames,
                c11: None,
                c22: None,
                c33: None,
                c44: None,
                c55: None,
                c66: None,
                min_eigenvalue: None,
                error: e.clone(),
            },
        }
    }
}

/// 各前缀长度：k · N / blocks，k = 1..=blocks
pub fn prefix_lengths(n: usize, blocks: usize) -> Vec<usize> {
    (1..=blocks).map(|k| k * n / blocks).collect()
}

/// 对逐渐增长的轨迹前缀计算刚度矩阵
pub fn convergence_series(
    frames: &[CellMatrix],
    config: &ElasticConfig,
    blocks: usize,
) -> Result<Vec<ConvergencePoint>> {
    if blocks == 0 {
        return Err(CijError::InvalidArgument(
            "number of convergence blocks must be at least 1".to_string(),
        ));
    }

    let points = prefix_lengths(frames.len(), blocks)
        .into_par_iter()
        .map(|n| {
            let outcome = compute_elastic_constants(&frames[..n], config)
                .map(|r| ConvergenceValues {
                    diagonal: r.stiffness.diagonal(),
                    min_eigenvalue: r.stiffness.eigenvalues()[0],
                })
                .map_err(|e| e.to_string());
            ConvergencePoint { frames: n, outcome }
        })
        .collect();

    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cube(s: f64) -> CellMatrix {
        CellMatrix::from_rows([[s, 0.0, 0.0], [0.0, s, 0.0], [0.0, 0.0, s]]).unwrap()
    }

    #[test]
    fn test_prefix_lengths() {
        assert_eq!(prefix_lengths(100, 4), vec![25, 50, 75, 100]);
        assert_eq!(prefix_lengths(10, 3), vec![3, 6, 10]);
        assert_eq!(prefix_lengths(7, 1), vec![7]);
    }

    #[test]
    fn test_zero_blocks_rejected() {
        assert!(matches!(
            convergence_series(&[cube(1.0)], &ElasticConfig::default(), 0),
            Err(CijError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_failing_prefixes_are_reported_not_fatal() {
        // 只有各向同性涨落：剪切方差为零，每个前缀都奇异
        let frames: Vec<CellMatrix> = (0..40).map(|i| cube(10.0 + 0.01 * (i % 3) as f64)).collect();
        let points = convergence_series(&frames, &ElasticConfig::default(), 4).unwrap();

        assert_eq!(points.len(), 4);
        assert_eq!(points[3].frames, 40);
        for p in &points {
            let err = p.outcome.as_ref().unwrap_err();
            assert!(err.contains("singular"));
        }

        let row = ConvergenceRow::from(&points[0]);
        assert_eq!(row.frames, 10);
        assert!(row.c11.is_none());
        assert!(!row.error.is_empty());
    }
}
