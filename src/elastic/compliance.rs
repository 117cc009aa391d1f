//! # 应变涨落柔度估计
//!
//! Parrinello–Rahman 涨落公式：
//! ```text
//! S[i,j] = f_i · f_j · V / (k_B T) · ( ⟨e_i e_j⟩ − ⟨e_i⟩⟨e_j⟩ )
//! ```
//! 其中 f = (1, 1, 1, 2, 2, 2) 为工程剪切因子，V 为平均体积。
//! 只计算下三角 (j ≤ i)，上三角由镜像得到，因此 S 严格对称。
//!
//! 协方差按先求均值、再对中心化乘积求平均的两遍法计算，
//! 与 ⟨e_i e_j⟩ − ⟨e_i⟩⟨e_j⟩ 代数等价，但不会因两大数相减丢失精度。
//!
//! ## 依赖关系
//! - 被 `elastic/mod.rs` 使用
//! - 使用 `elastic/voigt.rs`, `elastic/stats.rs`, `elastic/config.rs`

use crate::elastic::config::ElasticConfig;
use crate::elastic::stats::CompensatedSum;
use crate::elastic::voigt::{VoigtVector, VOIGT_FACTORS};
use crate::error::{CijError, Result};
use crate::linalg::Matrix6;

use tracing::debug;

/// 6×6 柔度矩阵 (Pa⁻¹)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComplianceMatrix(Matrix6<f64>);

impl ComplianceMatrix {
    /// 以下三角构造（上三角被镜像覆盖）
    #[cfg(test)]
    pub fn from_lower_triangle(mut m: Matrix6<f64>) -> Self {
        mirror_lower(&mut m);
        ComplianceMatrix(m)
    }

    pub fn as_matrix(&self) -> &Matrix6<f64> {
        &self.0
    }

    #[cfg(test)]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.0[(i, j)]
    }
}

/// Voigt 分量的总体协方差矩阵（除以 N，不含任何缩放因子）
pub fn strain_covariance(series: &[VoigtVector]) -> Result<Matrix6<f64>> {
    let n = series.len();
    if n < 2 {
        return Err(CijError::InsufficientSamples { frames: n });
    }
    let inv_n = 1.0 / n as f64;

    let mut means = [0.0; 6];
    for (i, m) in means.iter_mut().enumerate() {
        let mut acc = CompensatedSum::default();
        for v in series {
            acc.add(v.component(i));
        }
        *m = acc.total() * inv_n;
    }

    let mut cov = Matrix6::zeros();
    for i in 0..6 {
        for j in 0..=i {
            let mut acc = CompensatedSum::default();
            for v in series {
                acc.add((v.component(i) - means[i]) * (v.component(j) - means[j]));
            }
            cov[(i, j)] = acc.total() * inv_n;
        }
    }

    mirror_lower(&mut cov);
    Ok(cov)
}

/// 由 Voigt 应变序列估计柔度矩阵
///
/// `mean_volume` 使用原生体积单位（Å³），由 `config.volume_to_m3` 换算。
pub fn estimate_compliance(
    series: &[VoigtVector],
    mean_volume: f64,
    config: &ElasticConfig,
) -> Result<ComplianceMatrix> {
    let cov = strain_covariance(series)?;
    let factor = config.compliance_factor(mean_volume);

    let mut s = Matrix6::zeros();
    for i in 0..6 {
        for j in 0..=i {
            s[(i, j)] = VOIGT_FACTORS[i] * VOIGT_FACTORS[j] * factor * cov[(i, j)];
        }
    }
    mirror_lower(&mut s);

    debug!(frames = series.len(), factor, "compliance matrix estimated");
    Ok(ComplianceMatrix(s))
}

/// 用下三角覆盖上三角
fn mirror_lower(m: &mut Matrix6<f64>) {
    for i in 0..5 {
        for j in (i + 1)..6 {
            m[(i, j)] = m[(j, i)];
        }
    }
}
