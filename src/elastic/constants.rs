//! # 物理常数与单位换算
//!
//! 这些值只作为 `ElasticConfig` 的默认值，计算过程本身不直接读取。

/// 玻尔兹曼常数 (J/K)，2019 SI 精确值
pub const BOLTZMANN_SI_2019: f64 = 1.380649e-23;

/// 玻尔兹曼常数 (J/K)，CODATA 2014 值，仅供与旧结果比对
pub const BOLTZMANN_CODATA_2014: f64 = 1.3806488e-23;

/// Å³ -> m³
pub const ANGSTROM3_TO_M3: f64 = 1e-30;

/// Pa -> GPa 的除数
pub const PA_PER_GPA: f64 = 1e9;

/// 默认模拟温度 (K)
pub const DEFAULT_TEMPERATURE: f64 = 300.0;

/// 默认丢弃的平衡段比例
pub const DEFAULT_EQUILIBRATION_FRACTION: f64 = 0.2;
