//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `elastic`: 由胞矩阵涨落计算弹性刚度矩阵
//! - `cell`: 晶胞参数统计
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: elastic, cell

pub mod cell;
pub mod elastic;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// cijfluct - 应变涨落法弹性常数计算
#[derive(Parser)]
#[command(name = "cijfluct")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(about = "Elastic stiffness tensors from cell fluctuations in NPT molecular dynamics", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(flatten)]
    pub logging: LoggingArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// 全局日志参数
#[derive(Args, Debug)]
pub struct LoggingArgs {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Silence all log output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Also write the log to this file
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Compute the elastic stiffness matrix from a cell trajectory (.xst)
    Elastic(elastic::ElasticArgs),

    /// Report unit cell statistics of a cell trajectory (.xst)
    Cell(cell::CellArgs),
}

/// 轨迹输入参数（两个子命令共用）
#[derive(Args, Debug)]
pub struct TrajectoryArgs {
    /// Cell trajectory: one frame per line, step index followed by the 9 cell matrix entries
    pub input: PathBuf,

    /// Fraction of leading frames discarded as equilibration
    #[arg(long, default_value_t = 0.2, env = "CIJFLUCT_DISCARD")]
    pub discard: f64,
}
