// crates/wl_waves/src/params.rs

//! 波动求解器参数
//!
//! 定义 [`WaveParams`] 及其验证逻辑。所有字段支持 serde 序列化，
//! 便于从 TOML 配置文件加载。
//!
//! ## 稳定性条件
//!
//! 显式格式要求波速满足
//!
//! $$ c < \frac{\Delta x}{2 \Delta t} \sqrt{\mu \Delta t + 2} $$
//!
//! 其中 $\mu$ 为阻尼系数。超出上限时数值解发散，
//! 因此 [`WaveParams::validate`] 在构建求解器前强制检查。

use serde::{Deserialize, Serialize};
use wl_foundation::{ensure, WlError, WlResult};

/// 波动求解器参数
///
/// 默认值对应一个 200x200、间距 0.8 的水面网格。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaveParams {
    /// 行数（z 方向节点数）
    #[serde(default = "default_rows")]
    pub rows: usize,

    /// 列数（x 方向节点数）
    #[serde(default = "default_columns")]
    pub columns: usize,

    /// 网格间距 [m]
    #[serde(default = "default_spacing")]
    pub spacing: f32,

    /// 固定时间步长 [s]
    #[serde(default = "default_timestep")]
    pub timestep: f32,

    /// 波速 [m/s]
    #[serde(default = "default_speed")]
    pub speed: f32,

    /// 阻尼系数 [1/s]
    #[serde(default = "default_damping")]
    pub damping: f32,
}

fn default_rows() -> usize {
    200
}
fn default_columns() -> usize {
    200
}
fn default_spacing() -> f32 {
    0.8
}
fn default_timestep() -> f32 {
    0.03
}
fn default_speed() -> f32 {
    3.25
}
fn default_damping() -> f32 {
    0.4
}

impl Default for WaveParams {
    fn default() -> Self {
        Self {
            rows: default_rows(),
            columns: default_columns(),
            spacing: default_spacing(),
            timestep: default_timestep(),
            speed: default_speed(),
            damping: default_damping(),
        }
    }
}

impl WaveParams {
    /// 当前 (spacing, timestep, damping) 下的最大稳定波速 [m/s]
    pub fn max_stable_speed(&self) -> f32 {
        self.spacing / (2.0 * self.timestep) * (self.damping * self.timestep + 2.0).sqrt()
    }

    /// 验证参数
    ///
    /// 检查网格尺寸、几何与时间参数的取值范围，以及显式格式的稳定性条件。
    pub fn validate(&self) -> WlResult<()> {
        ensure!(
            self.rows >= 3,
            WlError::out_of_range("rows", self.rows as f64, 3.0, f64::MAX)
        );
        ensure!(
            self.columns >= 3,
            WlError::out_of_range("columns", self.columns as f64, 3.0, f64::MAX)
        );
        ensure!(
            self.spacing > 0.0 && self.spacing.is_finite(),
            WlError::invalid_config("spacing", self.spacing.to_string(), "必须为正有限值")
        );
        ensure!(
            self.timestep > 0.0 && self.timestep.is_finite(),
            WlError::invalid_config("timestep", self.timestep.to_string(), "必须为正有限值")
        );
        ensure!(
            self.damping >= 0.0 && self.damping.is_finite(),
            WlError::invalid_config("damping", self.damping.to_string(), "必须为非负有限值")
        );
        ensure!(
            self.speed > 0.0 && self.speed.is_finite(),
            WlError::invalid_config("speed", self.speed.to_string(), "必须为正有限值")
        );

        let max_speed = self.max_stable_speed();
        ensure!(
            self.speed < max_speed,
            WlError::unstable_scheme(self.speed as f64, max_speed as f64)
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_params_valid() {
        assert!(WaveParams::default().validate().is_ok());
    }

    #[test]
    fn test_max_stable_speed() {
        let p = WaveParams {
            spacing: 1.0,
            timestep: 0.5,
            damping: 0.0,
            ..WaveParams::default()
        };
        // dx/(2dt)*sqrt(2) = 1/1 * sqrt(2)
        assert!((p.max_stable_speed() - 2.0_f32.sqrt()).abs() < 1e-6);
    }

    #[test]
    fn test_rejects_small_grid() {
        let p = WaveParams {
            rows: 2,
            ..WaveParams::default()
        };
        assert!(p.validate().is_err());
    }

    #[test]
    fn test_rejects_unstable_speed() {
        let mut p = WaveParams::default();
        p.speed = p.max_stable_speed() * 2.0;
        assert!(matches!(
            p.validate(),
            Err(WlError::UnstableScheme { .. })
        ));
    }

    #[test]
    fn test_rejects_nonpositive_timestep() {
        let p = WaveParams {
            timestep: 0.0,
            ..WaveParams::default()
        };
        assert!(p.validate().is_err());
    }

    #[test]
    fn test_rejects_negative_damping() {
        let p = WaveParams {
            damping: -0.1,
            ..WaveParams::default()
        };
        assert!(p.validate().is_err());
    }

    #[test]
    fn test_toml_roundtrip_defaults() {
        // 缺省字段由 serde default 填充
        let p: WaveParams = toml::from_str("rows = 50\ncolumns = 60").unwrap();
        assert_eq!(p.rows, 50);
        assert_eq!(p.columns, 60);
        assert!((p.spacing - 0.8).abs() < 1e-6);
    }
}
