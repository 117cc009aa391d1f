//! # 统一错误处理模块
//!
//! 定义 cijfluct 的所有错误类型，使用 `thiserror` 派生。
//!
//! 弹性计算流程中的四类致命错误（参考胞退化、样本不足、柔度矩阵奇异、
//! 轨迹数据非法）都会终止当前计算，不做任何近似替代。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// cijfluct 统一错误类型
#[derive(Error, Debug)]
pub enum CijError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read file: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    // ─────────────────────────────────────────────────────────────
    // 轨迹数据错误
    // ─────────────────────────────────────────────────────────────
    #[error("Malformed trajectory: {0}")]
    MalformedTrajectory(String),

    // ─────────────────────────────────────────────────────────────
    // 弹性计算错误
    // ─────────────────────────────────────────────────────────────
    #[error("Degenerate reference cell (volume = {volume:e}), cannot invert")]
    DegenerateReference { volume: f64 },

    #[error("Insufficient samples: {frames} frame(s) after equilibration discard, at least 2 required")]
    InsufficientSamples { frames: usize },

    #[error("Compliance matrix is singular (zero or rank-deficient strain covariance)")]
    SingularCompliance,

    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    // ─────────────────────────────────────────────────────────────
    // 输出错误
    // ─────────────────────────────────────────────────────────────
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Failed to draw plot: {0}")]
    PlotError(String),

    // ─────────────────────────────────────────────────────────────
    // 其他
    // ─────────────────────────────────────────────────────────────
    #[error("{0}")]
    Other(String),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, CijError>;
