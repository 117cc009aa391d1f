//! # 收敛曲线绘图
//!
//! 使用 `plotters` 绘制刚度矩阵对角元 C11..C66 随前缀帧数的变化。
//! 输出格式由文件扩展名决定：`.svg` 为矢量图，其余为 PNG。
//!
//! ## 依赖关系
//! - 被 `commands/elastic.rs` 调用
//! - 使用 `elastic/convergence.rs` 的 ConvergencePoint
//! - 使用 `plotters` 渲染图表

use crate::elastic::convergence::{ConvergencePoint, ConvergenceValues};
use crate::error::{CijError, Result};

use plotters::prelude::*;
use std::path::Path;

const SERIES_LABELS: [&str; 6] = ["C11", "C22", "C33", "C44", "C55", "C66"];

/// 生成收敛曲线图
pub fn plot_convergence(
    points: &[ConvergencePoint],
    output_path: &Path,
    title: &str,
    width: u32,
    height: u32,
) -> Result<()> {
    let use_svg = output_path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("svg"))
        .unwrap_or(false);

    if use_svg {
        let root = SVGBackend::new(output_path, (width, height)).into_drawing_area();
        draw_convergence_chart(&root, points, title)?;
        root.present()
            .map_err(|e| CijError::PlotError(e.to_string()))?;
    } else {
        let root = BitMapBackend::new(output_path, (width, height)).into_drawing_area();
        draw_convergence_chart(&root, points, title)?;
        root.present()
            .map_err(|e| CijError::PlotError(e.to_string()))?;
    }
    Ok(())
}

/// 成功的前缀点
fn successful(points: &[ConvergencePoint]) -> Vec<(usize, ConvergenceValues)> {
    points
        .iter()
        .filter_map(|p| p.outcome.as_ref().ok().map(|v| (p.frames, *v)))
        .collect()
}

/// y 轴范围，上下各留 10% 余量
fn value_range(data: &[(usize, ConvergenceValues)]) -> (f64, f64) {
    let values = data.iter().flat_map(|(_, v)| v.diagonal.iter().copied());
    let (lo, hi) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });

    let margin = ((hi - lo).abs() * 0.1).max(1.0);
    (lo.min(0.0) - margin, hi + margin)
}

/// 绘制收敛图表的核心逻辑
fn draw_convergence_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, plotters::coord::Shift>,
    points: &[ConvergencePoint],
    title: &str,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    let data = successful(points);
    if data.is_empty() {
        return Err(CijError::PlotError(
            "no trajectory prefix produced a stiffness matrix".to_string(),
        ));
    }

    root.fill(&WHITE)
        .map_err(|e| CijError::PlotError(format!("{:?}", e)))?;

    let x_max = data.iter().map(|(n, _)| *n).max().unwrap_or(1) as f64;
    let (y_min, y_max) = value_range(&data);

    let mut chart = ChartBuilder::on(root)
        .caption(title, ("sans-serif", 28).into_font())
        .margin(30)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(0.0..x_max * 1.02, y_min..y_max)
        .map_err(|e| CijError::PlotError(format!("{:?}", e)))?;

    chart
        .configure_mesh()
        .x_desc("Frames")
        .y_desc("Stiffness (GPa)")
        .x_label_style(("sans-serif", 16))
        .y_label_style(("sans-serif", 16))
        .axis_desc_style(("sans-serif", 18))
        .draw()
        .map_err(|e| CijError::PlotError(format!("{:?}", e)))?;

    for (idx, label) in SERIES_LABELS.iter().enumerate() {
        let color = Palette99::pick(idx).to_rgba();
        let series: Vec<(f64, f64)> = data
            .iter()
            .map(|(n, v)| (*n as f64, v.diagonal[idx]))
            .collect();

        chart
            .draw_series(LineSeries::new(series.iter().copied(), color.stroke_width(2)))
            .map_err(|e| CijError::PlotError(format!("{:?}", e)))?
            .label(*label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2)));

        chart
            .draw_series(series.iter().map(|&(x, y)| Circle::new((x, y), 3, color.filled())))
            .map_err(|e| CijError::PlotError(format!("{:?}", e)))?;
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()
        .map_err(|e| CijError::PlotError(format!("{:?}", e)))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(frames: usize, c: f64) -> ConvergencePoint {
        ConvergencePoint {
            frames,
            outcome: Ok(ConvergenceValues {
                diagonal: [c, c, c, c / 2.0, c / 2.0, c / 2.0],
                min_eigenvalue: c / 2.0,
            }),
        }
    }

    #[test]
    fn test_successful_skips_failures() {
        let points = vec![
            ConvergencePoint {
                frames: 5,
                outcome: Err("singular".to_string()),
            },
            point(10, 100.0),
        ];
        let data = successful(&points);
        assert_eq!(data.len(), 1);
        assert_eq!(data[0].0, 10);
    }

    #[test]
    fn test_value_range_includes_zero_and_margin() {
        let data = successful(&[point(10, 100.0), point(20, 120.0)]);
        let (lo, hi) = value_range(&data);
        assert!(lo < 0.0);
        assert!(hi > 120.0);
    }
}
