//! # 刚度矩阵求解
//!
//! C = S⁻¹，再从 Pa 换算到 GPa。对称正定的刚度矩阵六个本征值均为正；
//! 出现非正本征值说明构型力学不稳定或轨迹采样不足，需要提示用户。
//!
//! ## 依赖关系
//! - 被 `elastic/mod.rs` 使用
//! - 使用 `elastic/compliance.rs`, `linalg.rs`

use crate::elastic::compliance::ComplianceMatrix;
use crate::elastic::config::ElasticConfig;
use crate::error::{CijError, Result};
use crate::linalg::{self, Matrix6};

/// 刚度矩阵 (GPa) 及其升序本征值
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StiffnessMatrix {
    matrix: Matrix6<f64>,
    eigenvalues: [f64; 6],
}

impl StiffnessMatrix {
    #[cfg(test)]
    pub fn as_matrix(&self) -> &Matrix6<f64> {
        &self.matrix
    }

    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.matrix[(i, j)]
    }

    /// 升序本征值 (GPa)
    pub fn eigenvalues(&self) -> &[f64; 6] {
        &self.eigenvalues
    }

    /// 对角元 C11 ... C66
    pub fn diagonal(&self) -> [f64; 6] {
        let mut d = [0.0; 6];
        for (i, slot) in d.iter_mut().enumerate() {
            *slot = self.matrix[(i, i)];
        }
        d
    }

    /// 所有本征值均为正
    pub fn is_mechanically_stable(&self) -> bool {
        self.eigenvalues.iter().all(|&v| v > 0.0)
    }

    /// 非正本征值
    pub fn non_positive_eigenvalues(&self) -> Vec<f64> {
        self.eigenvalues.iter().copied().filter(|&v| v <= 0.0).collect()
    }
}

/// 柔度矩阵求逆得到刚度矩阵
pub fn solve_stiffness(compliance: &ComplianceMatrix, config: &ElasticConfig) -> Result<StiffnessMatrix> {
    let inverse =
        linalg::invert6_symmetric(compliance.as_matrix()).ok_or(CijError::SingularCompliance)?;
    let matrix = inverse / config.pressure_to_gpa;
    let eigenvalues = linalg::symmetric_eigenvalues_sorted(&matrix);

    Ok(StiffnessMatrix {
        matrix,
        eigenvalues,
    })
}
