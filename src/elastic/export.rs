//! # 数据导出
//!
//! 导出刚度矩阵与收敛分析结果到 CSV。
//!
//! ## 支持格式
//! - 刚度矩阵: 完整 6×6 对称矩阵 + 一行升序本征值 (GPa)
//! - 收敛分析: 每个前缀一行（帧数、C11..C66、最小本征值、错误信息）
//!
//! ## 依赖关系
//! - 被 `commands/elastic.rs` 调用
//! - 使用 `csv` 库写入 CSV 文件

use crate::elastic::convergence::{ConvergencePoint, ConvergenceRow};
use crate::elastic::StiffnessMatrix;
use crate::error::{CijError, Result};

use std::path::Path;

/// 导出刚度矩阵
pub fn stiffness_to_csv(stiffness: &StiffnessMatrix, output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path)?;

    wtr.write_record(["row", "c1", "c2", "c3", "c4", "c5", "c6"])?;

    for i in 0..6 {
        let mut record = vec![(i + 1).to_string()];
        record.extend((0..6).map(|j| format!("{:.6}", stiffness.get(i, j))));
        wtr.write_record(&record)?;
    }

    let mut eig_record = vec!["eigenvalues".to_string()];
    eig_record.extend(stiffness.eigenvalues().iter().map(|v| format!("{:.6}", v)));
    wtr.write_record(&eig_record)?;

    wtr.flush().map_err(|e| CijError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

/// 导出收敛分析
pub fn convergence_to_csv(points: &[ConvergencePoint], output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path)?;

    for point in points {
        wtr.serialize(ConvergenceRow::from(point))?;
    }

    wtr.flush().map_err(|e| CijError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}
