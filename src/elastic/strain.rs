//! # Green–Lagrange 应变
//!
//! 相对固定参考胞 h0 的有限应变：
//! ```text
//! ε(h) = ½ · ( (h0⁻¹)ᵀ · hᵀ · h · h0⁻¹ − I )
//! ```
//! h0⁻¹ 只在构造时计算一次，之后对每一帧复用。
//!
//! ## 依赖关系
//! - 被 `elastic/mod.rs`, `elastic/voigt.rs` 使用
//! - 使用 `linalg.rs`, `models/cell.rs`

use crate::error::{CijError, Result};
use crate::linalg::{self, Matrix3};
use crate::models::CellMatrix;

/// 对称应变张量（无量纲）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrainTensor(Matrix3<f64>);

impl StrainTensor {
    pub fn zero() -> Self {
        StrainTensor(Matrix3::zeros())
    }

    /// 分量 ε[i, j]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.0[(i, j)]
    }

    #[cfg(test)]
    pub fn as_matrix(&self) -> &Matrix3<f64> {
        &self.0
    }
}

/// 相对参考胞的应变计算器
#[derive(Debug, Clone)]
pub struct StrainEngine {
    reference: CellMatrix,
    inv_reference: Matrix3<f64>,
    inv_reference_t: Matrix3<f64>,
}

impl StrainEngine {
    /// 以参考胞构造；参考胞体积为零（不可逆）时返回 `DegenerateReference`
    pub fn new(reference: &CellMatrix) -> Result<Self> {
        let inv_reference =
            linalg::invert3(reference.as_matrix()).ok_or(CijError::DegenerateReference {
                volume: reference.volume(),
            })?;

        Ok(StrainEngine {
            reference: *reference,
            inv_reference,
            inv_reference_t: inv_reference.transpose(),
        })
    }

    /// 计算单帧应变
    pub fn strain(&self, h: &CellMatrix) -> StrainTensor {
        // 参考构型本身的应变按定义为零，不经过浮点乘积
        if *h == self.reference {
            return StrainTensor::zero();
        }

        let h = h.as_matrix();
        let metric = self.inv_reference_t * (h.transpose() * h) * self.inv_reference;
        let eps = (metric - Matrix3::identity()) * 0.5;

        // 两侧乘积只在末位上不对称，取对称部分
        StrainTensor((eps + eps.transpose()) * 0.5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triclinic() -> CellMatrix {
        CellMatrix::from_rows([[10.0, 0.0, 0.0], [1.3, 9.5, 0.0], [-0.8, 0.6, 11.2]]).unwrap()
    }

    #[test]
    fn test_reference_has_exactly_zero_strain() {
        let h0 = triclinic();
        let engine = StrainEngine::new(&h0).unwrap();
        assert_eq!(engine.strain(&h0), StrainTensor::zero());
    }

    #[test]
    fn test_uniaxial_stretch() {
        let h0 = CellMatrix::from_rows([[10.0, 0.0, 0.0], [0.0, 10.0, 0.0], [0.0, 0.0, 10.0]]).unwrap();
        let h = CellMatrix::from_rows([[10.1, 0.0, 0.0], [0.0, 10.0, 0.0], [0.0, 0.0, 10.0]]).unwrap();
        let eps = StrainEngine::new(&h0).unwrap().strain(&h);

        // ε_xx = ½ (1.01² − 1)
        assert!((eps.get(0, 0) - 0.5 * (1.01_f64.powi(2) - 1.0)).abs() < 1e-14);
        assert!(eps.get(1, 1).abs() < 1e-15);
        assert!(eps.get(2, 0).abs() < 1e-15);
    }

    #[test]
    fn test_simple_shear_is_symmetric() {
        let h0 = triclinic();
        let mut rows = [[10.0, 0.0, 0.0], [1.3, 9.5, 0.0], [-0.8, 0.6, 11.2]];
        rows[2][0] += 0.05;
        let h = CellMatrix::from_rows(rows).unwrap();
        let eps = StrainEngine::new(&h0).unwrap().strain(&h);

        for i in 0..3 {
            for j in 0..3 {
                assert_eq!(eps.get(i, j), eps.get(j, i));
            }
        }
        assert!(eps.as_matrix().abs().max() > 0.0);
    }

    #[test]
    fn test_isotropic_scaling_gives_spherical_strain() {
        let h0 = triclinic();
        let scale = 1.02;
        let h = CellMatrix::from_rows([
            [10.0 * scale, 0.0, 0.0],
            [1.3 * scale, 9.5 * scale, 0.0],
            [-0.8 * scale, 0.6 * scale, 11.2 * scale],
        ])
        .unwrap();

        let eps = StrainEngine::new(&h0).unwrap().strain(&h);
        let expected = 0.5 * (scale * scale - 1.0);
        for i in 0..3 {
            assert!((eps.get(i, i) - expected).abs() < 1e-13);
            for j in 0..i {
                assert!(eps.get(i, j).abs() < 1e-13);
            }
        }
    }

    #[test]
    fn test_degenerate_reference() {
        let flat = CellMatrix::from_rows([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 0.0]]).unwrap();
        assert!(matches!(
            StrainEngine::new(&flat),
            Err(CijError::DegenerateReference { .. })
        ));
    }
}
