//! # elastic 子命令 CLI 定义
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/elastic.rs`

use crate::cli::TrajectoryArgs;
use clap::Args;
use std::path::PathBuf;

/// elastic 子命令参数
#[derive(Args, Debug)]
pub struct ElasticArgs {
    #[command(flatten)]
    pub trajectory: TrajectoryArgs,

    /// Simulation temperature in kelvin
    #[arg(short, long, default_value_t = 300.0, env = "CIJFLUCT_TEMPERATURE")]
    pub temperature: f64,

    /// Boltzmann constant in J/K (default: 2019 SI exact value)
    #[arg(long, default_value_t = 1.380649e-23, conflicts_with = "codata2014")]
    pub boltzmann: f64,

    /// Use the CODATA 2014 Boltzmann constant (1.3806488e-23 J/K) to reproduce older results
    #[arg(long, default_value_t = false)]
    pub codata2014: bool,

    /// Number of threads for per-frame strain evaluation (0 = auto)
    #[arg(short, long, default_value_t = 0)]
    pub jobs: usize,

    /// Write the full 6x6 stiffness matrix and its eigenvalues to CSV
    #[arg(long)]
    pub output_csv: Option<PathBuf>,

    /// Recompute the stiffness matrix on N growing prefixes of the trajectory
    #[arg(long, value_name = "BLOCKS")]
    pub convergence: Option<usize>,

    /// CSV output for the convergence analysis
    #[arg(long, requires = "convergence")]
    pub convergence_csv: Option<PathBuf>,

    /// Plot of the convergence analysis (PNG, or SVG by extension)
    #[arg(long, requires = "convergence")]
    pub convergence_plot: Option<PathBuf>,

    /// Figure width in pixels (for PNG) or points (for SVG)
    #[arg(long, default_value_t = 1200)]
    pub width: u32,

    /// Figure height in pixels (for PNG) or points (for SVG)
    #[arg(long, default_value_t = 800)]
    pub height: u32,
}
