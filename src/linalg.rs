//! # 线性代数原语
//!
//! 对 `nalgebra` 的薄封装，集中提供弹性计算所需的全部矩阵运算：
//! 3×3 / 6×6 求逆、对称矩阵本征值、向量夹角。
//!
//! 调用方只通过这里访问求逆与本征分解，奇异性判据因此只有一处定义。
//!
//! ## 依赖关系
//! - 被 `models/cell.rs`, `elastic/` 使用
//! - 使用 `nalgebra`

pub use nalgebra::{Matrix3, Matrix6, Vector3};

use nalgebra::SymmetricEigen;
use std::f64::consts::PI;

/// 3×3 矩阵退化判据：|det| ≤ tol · |a||b||c|
pub const DEGENERACY_TOLERANCE: f64 = 1e-12;

/// 两向量夹角（弧度）
///
/// 单位化后点积若因浮点误差落在 [-1, 1] 之外，按几何退化处理：
/// 正值（平行）返回 0，负值（反平行）返回 π。零向量的点积为 NaN，同样落入
/// 退化分支并返回 π，因此本函数永远不会返回 NaN。
pub fn angle_between(v1: &Vector3<f64>, v2: &Vector3<f64>) -> f64 {
    let p = (v1 / v1.norm()).dot(&(v2 / v2.norm()));

    if p.is_nan() || p.abs() >= 1.0 {
        if p > 0.0 {
            0.0
        } else {
            PI
        }
    } else {
        p.acos()
    }
}

/// 3×3 矩阵求逆，体积相对于三行长度乘积过小时返回 `None`
pub fn invert3(m: &Matrix3<f64>) -> Option<Matrix3<f64>> {
    let scale: f64 = m.row_iter().map(|r| r.norm()).product();
    let det = m.determinant();

    if !det.is_finite() || scale == 0.0 || det.abs() <= DEGENERACY_TOLERANCE * scale {
        return None;
    }

    m.try_inverse()
}

/// 对称 6×6 矩阵求逆
///
/// 以本征值的最小/最大模之比作为条件数判据；全零矩阵、秩亏矩阵
/// 或逆矩阵含非有限值时返回 `None`。
pub fn invert6_symmetric(m: &Matrix6<f64>) -> Option<Matrix6<f64>> {
    let eigen = SymmetricEigen::new(*m);
    let max_abs = eigen.eigenvalues.iter().fold(0.0_f64, |acc, v| acc.max(v.abs()));
    let min_abs = eigen
        .eigenvalues
        .iter()
        .fold(f64::INFINITY, |acc, v| acc.min(v.abs()));

    if !max_abs.is_finite() || max_abs == 0.0 || min_abs <= max_abs * 6.0 * f64::EPSILON {
        return None;
    }

    let inverse = m.try_inverse()?;
    if inverse.iter().all(|v| v.is_finite()) {
        Some(inverse)
    } else {
        None
    }
}

/// 对称矩阵本征值，升序排列
///
/// 输入先做 (M + Mᵀ)/2 对称化，吸收求逆带来的末位不对称。
pub fn symmetric_eigenvalues_sorted(m: &Matrix6<f64>) -> [f64; 6] {
    let symmetric = (m + m.transpose()) * 0.5;
    let eigen = SymmetricEigen::new(symmetric);

    let mut values = [0.0; 6];
    for (slot, v) in values.iter_mut().zip(eigen.eigenvalues.iter()) {
        *slot = *v;
    }
    values.sort_by(|a, b| a.total_cmp(b));
    values
}

/// 逐元素严格相等的对称性检查
#[cfg(test)]
pub fn is_exactly_symmetric<const D: usize>(m: &nalgebra::SMatrix<f64, D, D>) -> bool {
    (0..D).all(|i| (0..i).all(|j| m[(i, j)] == m[(j, i)]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_angle_between_same_vector_is_zero() {
        let axis = Vector3::new(0.0, 0.0, 3.0);
        assert_eq!(angle_between(&axis, &axis), 0.0);

        let v = Vector3::new(0.3, -1.7, 2.2);
        assert!(angle_between(&v, &v).abs() < 1e-7);
    }

    #[test]
    fn test_angle_between_opposite_vectors_is_pi() {
        let v = Vector3::new(0.3, -1.7, 2.2);
        let angle = angle_between(&v, &(-v));
        assert!((angle - PI).abs() < 1e-7);
        assert!(!angle.is_nan());
    }

    #[test]
    fn test_angle_between_never_nan_for_many_directions() {
        for i in 0..200 {
            let t = i as f64 * 0.173;
            let v = Vector3::new(t.sin() * 1e3, t.cos() * 1e-3, (2.0 * t).sin());
            assert!(!angle_between(&v, &v).is_nan());
            assert!(!angle_between(&v, &(-v)).is_nan());
        }
    }

    #[test]
    fn test_angle_between_orthogonal() {
        let a = Vector3::new(1.0, 0.0, 0.0);
        let b = Vector3::new(0.0, 2.0, 0.0);
        assert!((angle_between(&a, &b) - PI / 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_angle_between_zero_vector_is_not_nan() {
        let a = Vector3::new(1.0, 0.0, 0.0);
        let zero = Vector3::zeros();
        assert_eq!(angle_between(&a, &zero), PI);
    }

    #[test]
    fn test_invert3_rejects_flat_cell() {
        let flat = Matrix3::new(1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 1.0, 1.0, 0.0);
        assert!(invert3(&flat).is_none());
    }

    #[test]
    fn test_invert3_triclinic() {
        let m = Matrix3::new(5.0, 0.0, 0.0, 1.2, 4.8, 0.0, 0.7, -0.4, 6.1);
        let inv = invert3(&m).unwrap();
        let product = m * inv;
        assert!((product - Matrix3::identity()).abs().max() < 1e-12);
    }

    #[test]
    fn test_invert6_rejects_zero_and_rank_deficient() {
        assert!(invert6_symmetric(&Matrix6::zeros()).is_none());

        let mut rank_five = Matrix6::identity();
        rank_five[(5, 5)] = 0.0;
        assert!(invert6_symmetric(&rank_five).is_none());
    }

    #[test]
    fn test_invert6_round_trip() {
        let mut m = Matrix6::identity() * 4.0;
        for i in 0..3 {
            for j in 0..3 {
                if i != j {
                    m[(i, j)] = 1.5;
                }
            }
        }
        let inv = invert6_symmetric(&m).unwrap();
        assert!((m * inv - Matrix6::identity()).abs().max() < 1e-12);
    }

    #[test]
    fn test_symmetric_eigenvalues_isotropic_stiffness() {
        // λ = 60, μ = 30 -> C11 = 120, C12 = 60, C44 = 30
        let (c11, c12, c44) = (120.0, 60.0, 30.0);
        let mut c = Matrix6::zeros();
        for i in 0..3 {
            for j in 0..3 {
                c[(i, j)] = if i == j { c11 } else { c12 };
            }
            c[(i + 3, i + 3)] = c44;
        }

        let values = symmetric_eigenvalues_sorted(&c);
        let expected = [30.0, 30.0, 30.0, 60.0, 60.0, 240.0];
        for (got, want) in values.iter().zip(expected.iter()) {
            assert!((got - want).abs() < 1e-9, "{} != {}", got, want);
        }
        assert!(values.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_is_exactly_symmetric() {
        let mut m = Matrix6::identity();
        m[(2, 4)] = 0.5;
        assert!(!is_exactly_symmetric(&m));
        m[(4, 2)] = 0.5;
        assert!(is_exactly_symmetric(&m));
    }
}
