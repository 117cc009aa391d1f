//! # 模拟胞矩阵数据模型
//!
//! 每一帧轨迹对应一个 3×3 胞矩阵，行向量依次为晶格矢量 a, b, c。
//!
//! ## 依赖关系
//! - 被 `parsers/xst.rs`, `elastic/` 使用
//! - 使用 `linalg.rs`

use crate::linalg::{self, Matrix3, Vector3};


/// 胞矩阵 (3x3)，行向量表示 a, b, c
///
/// 构造时保证所有元素均为有限数。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellMatrix {
    matrix: Matrix3<f64>,
}

/// 晶格参数，角度单位为弧度
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellParameters {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    /// b 与 c 的夹角
    pub alpha: f64,
    /// a 与 c 的夹角
    pub beta: f64,
    /// a 与 b 的夹角
    pub gamma: f64,
}

impl CellParameters {
    /// 三个夹角（度）
    pub fn angles_deg(&self) -> [f64; 3] {
        [
            self.alpha.to_degrees(),
            self.beta.to_degrees(),
            self.gamma.to_degrees(),
        ]
    }
}

impl CellMatrix {
    /// 从行向量数组创建，含 NaN/Inf 时返回 `None`
    pub fn from_rows(rows: [[f64; 3]; 3]) -> Option<Self> {
        if rows.iter().flatten().any(|v| !v.is_finite()) {
            return None;
        }

        Some(CellMatrix {
            matrix: Matrix3::from_fn(|i, j| rows[i][j]),
        })
    }

    /// 从按行展开的 9 个分量创建 (a_x a_y a_z b_x ... c_z)
    pub fn from_flat(values: &[f64; 9]) -> Option<Self> {
        Self::from_rows([
            [values[0], values[1], values[2]],
            [values[3], values[4], values[5]],
            [values[6], values[7], values[8]],
        ])
    }

    /// 从晶格参数 (a, b, c, alpha, beta, gamma) 创建，a 沿 x 轴、b 位于 xy 平面
    /// 角度单位：度
    #[cfg(test)]
    pub fn from_parameters(a: f64, b: f64, c: f64, alpha: f64, beta: f64, gamma: f64) -> Option<Self> {
        let cos_alpha = alpha.to_radians().cos();
        let cos_beta = beta.to_radians().cos();
        let (sin_gamma, cos_gamma) = gamma.to_radians().sin_cos();

        let c1 = c * cos_beta;
        let c2 = c * (cos_alpha - cos_beta * cos_gamma) / sin_gamma;
        let c3 = (c * c - c1 * c1 - c2 * c2).sqrt();

        Self::from_rows([
            [a, 0.0, 0.0],
            [b * cos_gamma, b * sin_gamma, 0.0],
            [c1, c2, c3],
        ])
    }

    /// 底层 nalgebra 矩阵
    pub fn as_matrix(&self) -> &Matrix3<f64> {
        &self.matrix
    }

    /// 第 i 个晶格矢量
    pub fn row(&self, i: usize) -> Vector3<f64> {
        self.matrix.row(i).transpose()
    }

    /// 三个晶格矢量的长度
    pub fn lengths(&self) -> [f64; 3] {
        [self.row(0).norm(), self.row(1).norm(), self.row(2).norm()]
    }

    /// 晶格参数 (a, b, c, α, β, γ)
    pub fn parameters(&self) -> CellParameters {
        let (a_vec, b_vec, c_vec) = (self.row(0), self.row(1), self.row(2));
        let [a, b, c] = self.lengths();

        CellParameters {
            a,
            b,
            c,
            alpha: linalg::angle_between(&b_vec, &c_vec),
            beta: linalg::angle_between(&a_vec, &c_vec),
            gamma: linalg::angle_between(&a_vec, &b_vec),
        }
    }

    /// 胞体积（行列式，右手系为正）
    pub fn volume(&self) -> f64 {
        self.matrix.determinant()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_cube_parameters() {
        let cell = CellMatrix::from_rows([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]).unwrap();
        let p = cell.parameters();

        assert_eq!((p.a, p.b, p.c), (1.0, 1.0, 1.0));
        for angle in p.angles_deg() {
            assert!((angle - 90.0).abs() < 1e-12);
        }
        assert_eq!(cell.volume(), 1.0);
    }

    #[test]
    fn test_from_parameters_hexagonal() {
        let cell = CellMatrix::from_parameters(3.0, 3.0, 5.0, 90.0, 90.0, 120.0).unwrap();
        let p = cell.parameters();
        let [alpha, beta, gamma] = p.angles_deg();

        assert!((p.a - 3.0).abs() < 1e-9);
        assert!((p.b - 3.0).abs() < 1e-9);
        assert!((p.c - 5.0).abs() < 1e-9);
        assert!((alpha - 90.0).abs() < 1e-9);
        assert!((beta - 90.0).abs() < 1e-9);
        assert!((gamma - 120.0).abs() < 1e-9);

        // V = a^2 c sin(120°)
        let expected = 9.0 * 5.0 * (120.0_f64).to_radians().sin();
        assert!((cell.volume() - expected).abs() < 1e-9);
    }

    #[test]
    fn test_from_flat_row_major() {
        let cell = CellMatrix::from_flat(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 10.0]).unwrap();
        assert_eq!(cell.row(1), Vector3::new(4.0, 5.0, 6.0));
        assert_eq!(cell.as_matrix()[(2, 2)], 10.0);
    }

    #[test]
    fn test_rejects_non_finite_entries() {
        assert!(CellMatrix::from_rows([[f64::NAN, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]).is_none());
        assert!(CellMatrix::from_rows([[1.0, 0.0, 0.0], [0.0, f64::INFINITY, 0.0], [0.0, 0.0, 1.0]]).is_none());
    }
}
