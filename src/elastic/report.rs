//! # 文本报告
//!
//! 生成晶胞平均值、刚度矩阵（只打印下三角）与本征值的纯文本报告。
//! 所有函数返回 `String`，由 `commands/` 负责输出。
//!
//! ## 依赖关系
//! - 被 `commands/elastic.rs`, `commands/cell.rs` 调用
//! - 使用 `elastic/geometry.rs`, `elastic/stiffness.rs`

use crate::elastic::{CellAverages, StiffnessMatrix};

use std::fmt::Write;

/// 矩阵与本征值的列宽
const COLUMN_WIDTH: usize = 8;

/// 晶胞平均值段落
pub fn format_cell_averages(averages: &CellAverages) -> String {
    let mut out = String::new();
    out.push_str("Unit cell averages:\n");
    let _ = writeln!(out, "       a = {:.3}", averages.a);
    let _ = writeln!(out, "       b = {:.3}", averages.b);
    let _ = writeln!(out, "       c = {:.3}", averages.c);
    let _ = writeln!(out, "   alpha = {:.3}", averages.alpha);
    let _ = writeln!(out, "    beta = {:.3}", averages.beta);
    let _ = writeln!(out, "   gamma = {:.3}", averages.gamma);
    let _ = writeln!(out, "  volume = {:.1}", averages.volume);
    out
}

/// 刚度矩阵段落：第 i 行打印 j ≤ i 的元素，上三角留空
pub fn format_stiffness_matrix(stiffness: &StiffnessMatrix) -> String {
    let mut out = String::new();
    out.push_str("Stiffness matrix C (GPa):\n");
    for i in 0..6 {
        out.push_str("    ");
        for j in 0..6 {
            if j <= i {
                let _ = write!(out, " {:>width$.2}", stiffness.get(i, j), width = COLUMN_WIDTH);
            } else {
                let _ = write!(out, " {:width$}", "", width = COLUMN_WIDTH);
            }
        }
        out.push('\n');
    }
    out
}

/// 本征值段落（升序）
pub fn format_eigenvalues(stiffness: &StiffnessMatrix) -> String {
    let mut out = String::new();
    out.push_str("Stiffness matrix eigenvalues (GPa):\n");
    for value in stiffness.eigenvalues() {
        let _ = write!(out, "{:>width$.2}", value, width = COLUMN_WIDTH);
    }
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elastic::compliance::ComplianceMatrix;
    use crate::elastic::stiffness::solve_stiffness;
    use crate::elastic::ElasticConfig;
    use crate::linalg::Matrix6;

    fn sample_averages() -> CellAverages {
        CellAverages {
            a: 48.01234,
            b: 47.9876,
            c: 48.5,
            alpha: 90.0,
            beta: 89.99951,
            gamma: 120.0004,
            volume: 96750.04,
            frames: 800,
        }
    }

    fn diagonal_stiffness() -> StiffnessMatrix {
        // S = diag(1/C) Pa⁻¹，C = (10, 20, 30, 4, 5, 6) GPa
        let gpa = [10.0, 20.0, 30.0, 4.0, 5.0, 6.0];
        let mut s = Matrix6::zeros();
        for (i, c) in gpa.iter().enumerate() {
            s[(i, i)] = 1.0 / (c * 1e9);
        }
        s[(1, 0)] = 1e-12;
        solve_stiffness(&ComplianceMatrix::from_lower_triangle(s), &ElasticConfig::default()).unwrap()
    }

    #[test]
    fn test_cell_averages_layout() {
        let text = format_cell_averages(&sample_averages());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Unit cell averages:");
        assert_eq!(lines[1], "       a = 48.012");
        assert_eq!(lines[4], "   alpha = 90.000");
        assert_eq!(lines[6], "   gamma = 120.000");
        assert_eq!(lines[7], "  volume = 96750.0");
    }

    #[test]
    fn test_stiffness_prints_lower_triangle_only() {
        let text = format_stiffness_matrix(&diagonal_stiffness());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Stiffness matrix C (GPa):");
        assert_eq!(lines.len(), 7);
        for (i, line) in lines[1..].iter().enumerate() {
            let numbers = line.split_whitespace().count();
            assert_eq!(numbers, i + 1, "row {}: '{}'", i, line);
            // 4 个前导空格 + 6 列 × (1 + 8)
            assert_eq!(line.len(), 4 + 6 * (1 + COLUMN_WIDTH));
        }
        assert!(lines[6].trim_end().ends_with("6.00"));
    }

    #[test]
    fn test_eigenvalues_line() {
        let text = format_eigenvalues(&diagonal_stiffness());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Stiffness matrix eigenvalues (GPa):");
        let values: Vec<f64> = lines[1]
            .split_whitespace()
            .map(|s| s.parse().unwrap())
            .collect();
        assert_eq!(values.len(), 6);
        assert!(values.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(values[0], 4.0);
    }
}
