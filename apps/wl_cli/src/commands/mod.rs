// apps/wl_cli/src/commands/mod.rs

//! 子命令实现

pub mod info;
pub mod run;
pub mod validate;

use anyhow::{Context, Result};
use std::path::Path;
use wl_waves::WaveParams;

/// 从 TOML 文件加载求解器参数
pub fn load_params(path: &Path) -> Result<WaveParams> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("读取配置文件 {} 失败", path.display()))?;
    let params: WaveParams =
        toml::from_str(&text).with_context(|| format!("解析配置文件 {} 失败", path.display()))?;
    Ok(params)
}
