// apps/wl_cli/src/commands/validate.rs

//! 验证求解器参数命令
//!
//! 检查取值范围与显式格式稳定性条件，报告当前参数下的
//! 最大稳定波速。参数非法时以错误退出。

use anyhow::{bail, Result};
use clap::Args;
use std::path::PathBuf;
use tracing::{info, warn};
use wl_waves::WaveParams;

/// 验证命令参数
#[derive(Args)]
pub struct ValidateArgs {
    /// 配置文件路径（TOML，优先于命令行网格参数）
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// 网格行数
    #[arg(long, default_value = "200")]
    pub rows: usize,

    /// 网格列数
    #[arg(long, default_value = "200")]
    pub columns: usize,

    /// 网格间距 [m]
    #[arg(long, default_value = "0.8")]
    pub spacing: f32,

    /// 求解器固定步长 [s]
    #[arg(long, default_value = "0.03")]
    pub timestep: f32,

    /// 波速 [m/s]
    #[arg(long, default_value = "3.25")]
    pub speed: f32,

    /// 阻尼系数 [1/s]
    #[arg(long, default_value = "0.4")]
    pub damping: f32,
}

/// 执行验证命令
pub fn execute(args: ValidateArgs) -> Result<()> {
    let params = match &args.config {
        Some(path) => super::load_params(path)?,
        None => WaveParams {
            rows: args.rows,
            columns: args.columns,
            spacing: args.spacing,
            timestep: args.timestep,
            speed: args.speed,
            damping: args.damping,
        },
    };

    info!(
        "参数: {}x{} 节点, 间距={} m, 步长={} s, 波速={} m/s, 阻尼={}",
        params.rows, params.columns, params.spacing, params.timestep, params.speed, params.damping
    );
    info!("最大稳定波速: {:.4} m/s", params.max_stable_speed());

    match params.validate() {
        Ok(()) => {
            info!("参数验证通过");
            Ok(())
        }
        Err(e) => {
            warn!("参数验证失败: {e}");
            bail!("参数验证失败: {e}");
        }
    }
}
