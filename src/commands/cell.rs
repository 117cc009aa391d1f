//! # cell 命令实现
//!
//! 只做晶胞几何统计，不进入弹性计算流程。
//!
//! ## 依赖关系
//! - 使用 `cli/cell.rs` 定义的参数
//! - 使用 `elastic/geometry.rs`, `elastic/report.rs`
//! - 使用 `utils/output.rs`

use crate::cli::cell::CellArgs;
use crate::elastic::geometry::{self, CellAverages};
use crate::elastic::report;
use crate::error::Result;
use crate::utils::output;

use tabled::{Table, Tabled};

/// 统计表格行
#[derive(Debug, Clone, Tabled)]
struct StatRow {
    #[tabled(rename = "Parameter")]
    name: String,
    #[tabled(rename = "Mean")]
    mean: String,
    #[tabled(rename = "Std")]
    std: String,
    #[tabled(rename = "Min")]
    min: String,
    #[tabled(rename = "Max")]
    max: String,
}

/// 执行 cell 命令
pub fn execute(args: CellArgs) -> Result<()> {
    output::print_header("Unit Cell Statistics");

    let trajectory = super::load_trajectory(&args.trajectory.input, args.trajectory.discard)?;
    let frames = trajectory.frames();

    let rows: Vec<StatRow> = geometry::cell_statistics(frames)?
        .into_iter()
        .map(|p| StatRow {
            name: format!("{} ({})", p.name, p.unit),
            mean: format!("{:.4}", p.summary.mean),
            std: format!("{:.4}", p.summary.std),
            min: format!("{:.4}", p.summary.min),
            max: format!("{:.4}", p.summary.max),
        })
        .collect();

    println!("{}", Table::new(&rows));
    println!();

    let averages = CellAverages::from_frames(frames)?;
    output::print_block(&report::format_cell_averages(&averages));

    Ok(())
}
