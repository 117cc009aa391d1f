//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `parsers/`, `elastic/`, `utils/`
//! - 子模块: elastic, cell

pub mod cell;
pub mod elastic;

use crate::cli::Commands;
use crate::error::{CijError, Result};
use crate::models::Trajectory;
use crate::parsers;
use crate::utils::{output, progress};

use std::path::Path;

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Elastic(args) => elastic::execute(args),
        Commands::Cell(args) => cell::execute(args),
    }
}

/// 读取轨迹并丢弃平衡段
fn load_trajectory(path: &Path, discard: f64) -> Result<Trajectory> {
    let spinner = progress::create_spinner(&format!("Reading '{}'", path.display()));
    let parsed = parsers::parse_trajectory_file(path);
    spinner.finish_and_clear();

    let trajectory = parsed?;
    let total = trajectory.len();
    let retained = trajectory.discard_equilibration(discard)?;
    if retained.is_empty() {
        return Err(CijError::InsufficientSamples { frames: 0 });
    }

    output::print_info(&format!(
        "Read {} frames, discarded {} as equilibration, {} retained",
        total,
        total - retained.len(),
        retained.len()
    ));

    Ok(retained)
}
