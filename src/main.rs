//! # cijfluct - 应变涨落法弹性常数
//!
//! 从 NPT 分子动力学的胞矩阵轨迹 (.xst) 出发，用 Parrinello–Rahman
//! 应变涨落公式计算 6×6 弹性刚度矩阵及其本征值。
//!
//! ## 子命令
//! - `elastic` - 刚度矩阵、本征值与收敛分析
//! - `cell`    - 晶胞参数统计
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── parsers/   (轨迹解析器)
//!   │     ├── elastic/   (涨落法计算、报告、导出、绘图)
//!   │     └── models/    (胞矩阵与轨迹)
//!   ├── linalg.rs   (3×3 / 6×6 线性代数)
//!   ├── utils/      (输出、进度条、日志)
//!   └── error.rs    (错误处理)
//! ```

mod cli;
mod commands;
mod elastic;
mod error;
mod linalg;
mod models;
mod parsers;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = utils::logging::setup_logging(
        cli.logging.verbose,
        cli.logging.quiet,
        cli.logging.log_file.as_deref(),
    ) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
