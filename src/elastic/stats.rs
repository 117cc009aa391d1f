//! # 补偿求和与样本统计
//!
//! 轨迹可长达数十万帧，均值与协方差统一用 Neumaier 补偿求和，
//! 结果与帧的分块方式无关。

/// Neumaier 补偿累加器
#[derive(Debug, Clone, Copy, Default)]
pub struct CompensatedSum {
    sum: f64,
    compensation: f64,
}

impl CompensatedSum {
    pub fn add(&mut self, value: f64) {
        let t = self.sum + value;
        if self.sum.abs() >= value.abs() {
            self.compensation += (self.sum - t) + value;
        } else {
            self.compensation += (value - t) + self.sum;
        }
        self.sum = t;
    }

    pub fn total(&self) -> f64 {
        self.sum + self.compensation
    }
}

/// 算术平均，空序列返回 `None`
pub fn mean<I: IntoIterator<Item = f64>>(values: I) -> Option<f64> {
    let mut acc = CompensatedSum::default();
    let mut n = 0usize;
    for v in values {
        acc.add(v);
        n += 1;
    }
    (n > 0).then(|| acc.total() / n as f64)
}

/// 样本摘要：均值、总体标准差、最小值、最大值
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub max: f64,
}

impl Summary {
    pub fn of(values: &[f64]) -> Option<Self> {
        let avg = mean(values.iter().copied())?;
        let variance = mean(values.iter().map(|v| (v - avg) * (v - avg)))?;
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        Some(Summary {
            mean: avg,
            std: variance.sqrt(),
            min,
            max,
        })
    }
}
