//! # cell 子命令 CLI 定义
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/cell.rs`

use crate::cli::TrajectoryArgs;
use clap::Args;

/// cell 子命令参数
#[derive(Args, Debug)]
pub struct CellArgs {
    #[command(flatten)]
    pub trajectory: TrajectoryArgs,
}
