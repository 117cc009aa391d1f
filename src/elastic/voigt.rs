//! # Voigt 缩并
//!
//! 对称 3×3 张量按 (xx, yy, zz, yz, xz, xy) 顺序取 6 个独立分量。
//! 剪切分量的因子 2 不在这里乘入，只在柔度估计中参与。

use crate::elastic::strain::StrainTensor;

/// Voigt 下标到笛卡尔下标对的映射
pub const CARTESIAN_TO_VOIGT: [(usize, usize); 6] = [(0, 0), (1, 1), (2, 2), (2, 1), (2, 0), (1, 0)];

/// 工程剪切应变因子
pub const VOIGT_FACTORS: [f64; 6] = [1.0, 1.0, 1.0, 2.0, 2.0, 2.0];

/// 6 分量 Voigt 向量
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VoigtVector(pub [f64; 6]);

impl VoigtVector {
    pub fn component(&self, i: usize) -> f64 {
        self.0[i]
    }
}

/// 应变张量 -> Voigt 向量（不缩放）
pub fn contract(strain: &StrainTensor) -> VoigtVector {
    let mut v = [0.0; 6];
    for (slot, &(a, b)) in v.iter_mut().zip(CARTESIAN_TO_VOIGT.iter()) {
        *slot = strain.get(a, b);
    }
    VoigtVector(v)
}
