//! # elastic 命令实现
//!
//! 读取胞矩阵轨迹，丢弃平衡段后用涨落法计算刚度矩阵。
//!
//! ## 流程
//! 1. 解析轨迹并丢弃前 `--discard` 比例的帧
//! 2. 打印晶胞平均值（与弹性计算解耦，后续失败时仍保留）
//! 3. 在 `--jobs` 大小的线程池中计算刚度矩阵并打印报告
//! 4. 可选：CSV 导出、收敛分析表格、收敛 CSV 与收敛图
//!
//! ## 依赖关系
//! - 使用 `cli/elastic.rs` 定义的参数
//! - 使用 `elastic/` 的计算、报告、导出与绘图
//! - 使用 `utils/output.rs`

use crate::cli::elastic::ElasticArgs;
use crate::elastic::constants::BOLTZMANN_CODATA_2014;
use crate::elastic::convergence::{self, ConvergencePoint};
use crate::elastic::{self, export, plot, report, CellAverages, ElasticConfig};
use crate::error::{CijError, Result};
use crate::utils::output;

use tabled::{Table, Tabled};
use tracing::debug;

/// 收敛分析表格行
#[derive(Debug, Clone, Tabled)]
struct ConvergenceTableRow {
    #[tabled(rename = "Frames")]
    frames: usize,
    #[tabled(rename = "C11")]
    c11: String,
    #[tabled(rename = "C22")]
    c22: String,
    #[tabled(rename = "C33")]
    c33: String,
    #[tabled(rename = "C44")]
    c44: String,
    #[tabled(rename = "C55")]
    c55: String,
    #[tabled(rename = "C66")]
    c66: String,
    #[tabled(rename = "min λ")]
    min_eigenvalue: String,
}

impl From<&ConvergencePoint> for ConvergenceTableRow {
    fn from(point: &ConvergencePoint) -> Self {
        match &point.outcome {
            Ok(v) => {
                let d = v.diagonal.map(|x| format!("{:.2}", x));
                ConvergenceTableRow {
                    frames: point.frames,
                    c11: d[0].clone(),
                    c22: d[1].clone(),
                    c33: d[2].clone(),
                    c44: d[3].clone(),
                    c55: d[4].clone(),
                    c66: d[5].clone(),
                    min_eigenvalue: format!("{:.2}", v.min_eigenvalue),
                }
            }
            Err(e) => ConvergenceTableRow {
                frames: point.frames,
                c11: "-".to_string(),
                c22: "-".to_string(),
                c33: "-".to_string(),
                c44: "-".to_string(),
                c55: "-".to_string(),
                c66: "-".to_string(),
                min_eigenvalue: e.clone(),
            },
        }
    }
}

/// 由命令行参数构造计算参数
fn build_config(args: &ElasticArgs) -> Result<ElasticConfig> {
    let boltzmann = if args.codata2014 {
        BOLTZMANN_CODATA_2014
    } else {
        args.boltzmann
    };

    let config = ElasticConfig::default()
        .with_temperature(args.temperature)
        .with_boltzmann(boltzmann)
        .with_equilibration_fraction(args.trajectory.discard);
    config.validate()?;
    Ok(config)
}

/// 执行 elastic 命令
pub fn execute(args: ElasticArgs) -> Result<()> {
    output::print_header("Strain Fluctuation Elastic Constants");

    let config = build_config(&args)?;
    let trajectory = super::load_trajectory(&args.trajectory.input, config.equilibration_fraction)?;
    let frames = trajectory.frames();

    if let Some(h0) = trajectory.reference() {
        output::print_info(&format!("Reference cell volume: {:.1} Å³", h0.volume()));
    }

    let jobs = if args.jobs == 0 { num_cpus::get() } else { args.jobs };
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(jobs)
        .build()
        .map_err(|e| CijError::Other(format!("failed to build thread pool: {}", e)))?;

    output::print_info(&format!(
        "T = {} K, kB = {:e} J/K, {} threads",
        config.temperature, config.boltzmann, jobs
    ));
    println!();

    let averages = CellAverages::from_frames(frames)?;
    output::print_block(&report::format_cell_averages(&averages));
    println!();

    let result = pool.install(|| elastic::compute_elastic_constants(frames, &config))?;
    let stiffness = &result.stiffness;
    debug!(compliance = ?result.compliance, "compliance matrix (1/Pa)");

    output::print_info(&format!(
        "Fluctuations sampled over {} frames, mean volume {:.1} Å³",
        result.frames, result.mean_volume
    ));
    println!();

    output::print_block(&report::format_stiffness_matrix(stiffness));
    println!();
    output::print_block(&report::format_eigenvalues(stiffness));

    if !stiffness.is_mechanically_stable() {
        println!();
        output::print_warning(&format!(
            "Stiffness matrix is not positive definite (eigenvalues {:?} GPa); sample longer or check the trajectory",
            stiffness.non_positive_eigenvalues()
        ));
    }

    if let Some(ref path) = args.output_csv {
        export::stiffness_to_csv(stiffness, path)?;
        output::print_success(&format!("Stiffness matrix saved to '{}'", path.display()));
    }

    if let Some(blocks) = args.convergence {
        run_convergence(&args, frames, &config, blocks, &pool)?;
    }

    Ok(())
}

/// 收敛分析：表格、CSV 与图
fn run_convergence(
    args: &ElasticArgs,
    frames: &[crate::models::CellMatrix],
    config: &ElasticConfig,
    blocks: usize,
    pool: &rayon::ThreadPool,
) -> Result<()> {
    output::print_header(&format!("Convergence over {} Trajectory Prefixes", blocks));

    let points = pool.install(|| convergence::convergence_series(frames, config, blocks))?;

    let rows: Vec<ConvergenceTableRow> = points.iter().map(ConvergenceTableRow::from).collect();
    println!("{}", Table::new(&rows));

    let failed = points.iter().filter(|p| p.outcome.is_err()).count();
    if failed > 0 {
        output::print_warning(&format!("{} of {} prefixes did not yield a stiffness matrix", failed, points.len()));
    }

    if let Some(ref path) = args.convergence_csv {
        export::convergence_to_csv(&points, path)?;
        output::print_success(&format!("Convergence data saved to '{}'", path.display()));
    }

    if let Some(ref path) = args.convergence_plot {
        let title = format!("Stiffness convergence at {} K", config.temperature);
        plot::plot_convergence(&points, path, &title, args.width, args.height)?;
        output::print_success(&format!("Convergence plot saved to '{}'", path.display()));
    }

    Ok(())
}
