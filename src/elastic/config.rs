//! # 弹性计算配置
//!
//! 温度、物理常数与单位换算全部显式传入，不依赖全局状态。
//!
//! ## 依赖关系
//! - 被 `elastic/compliance.rs`, `elastic/stiffness.rs`, `commands/elastic.rs` 使用
//! - 使用 `elastic/constants.rs`

use crate::elastic::constants::{
    ANGSTROM3_TO_M3, BOLTZMANN_SI_2019, DEFAULT_EQUILIBRATION_FRACTION, DEFAULT_TEMPERATURE,
    PA_PER_GPA,
};
use crate::error::{CijError, Result};

/// 弹性计算参数
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElasticConfig {
    /// 模拟温度 (K)
    pub temperature: f64,
    /// 玻尔兹曼常数 (J/K)
    pub boltzmann: f64,
    /// 体积单位换算到 m³ 的乘数
    pub volume_to_m3: f64,
    /// 压强从 Pa 换算到输出单位的除数
    pub pressure_to_gpa: f64,
    /// 轨迹开头丢弃的平衡段比例
    pub equilibration_fraction: f64,
}

impl Default for ElasticConfig {
    fn default() -> Self {
        ElasticConfig {
            temperature: DEFAULT_TEMPERATURE,
            boltzmann: BOLTZMANN_SI_2019,
            volume_to_m3: ANGSTROM3_TO_M3,
            pressure_to_gpa: PA_PER_GPA,
            equilibration_fraction: DEFAULT_EQUILIBRATION_FRACTION,
        }
    }
}

impl ElasticConfig {
    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_boltzmann(mut self, boltzmann: f64) -> Self {
        self.boltzmann = boltzmann;
        self
    }

    pub fn with_equilibration_fraction(mut self, fraction: f64) -> Self {
        self.equilibration_fraction = fraction;
        self
    }

    /// 检查参数合法性
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("temperature", self.temperature),
            ("boltzmann constant", self.boltzmann),
            ("volume conversion", self.volume_to_m3),
            ("pressure conversion", self.pressure_to_gpa),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(CijError::InvalidArgument(format!(
                    "{} must be a positive number, got {}",
                    name, value
                )));
            }
        }

        if !(0.0..1.0).contains(&self.equilibration_fraction) {
            return Err(CijError::InvalidArgument(format!(
                "equilibration fraction must be in [0, 1), got {}",
                self.equilibration_fraction
            )));
        }

        Ok(())
    }

    /// 柔度前因子 V / (k_B T)，V 以原生体积单位给出
    pub fn compliance_factor(&self, mean_volume: f64) -> f64 {
        (mean_volume * self.volume_to_m3) / (self.boltzmann * self.temperature)
    }
}
