// apps/wl_cli/src/commands/run.rs

//! 运行波浪模拟命令
//!
//! 以固定帧长无头推进波浪场景，周期性输出高度场统计，
//! 结束时可选导出网格快照。

use anyhow::{bail, Context, Result};
use clap::Args;
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;
use wl_scene::WavesScene;
use wl_waves::WaveParams;

/// 运行模拟参数
#[derive(Args)]
pub struct RunArgs {
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

    /// 模拟时长 [s]
    #[arg(short = 't', long, default_value = "10.0")]
    pub duration: f32,

    /// 帧长 [s]
    #[arg(long, default_value = "0.016")]
    pub frame_dt: f32,

    /// 随机扰动间隔 [s]
    #[arg(long, default_value = "0.25")]
    pub disturb_interval: f32,

    /// 随机种子
    #[arg(long, default_value = "1")]
    pub seed: u64,

    /// 统计输出间隔 [s]
    #[arg(long, default_value = "1.0")]
    pub report_interval: f32,

    /// 结束时导出 OBJ 快照
    #[arg(short, long)]
    pub export: Option<PathBuf>,
}

/// 帧长必须为正的有限值，否则模拟循环无法推进
fn check_frame_dt(frame_dt: f32) -> Result<()> {
    if !(frame_dt > 0.0 && frame_dt.is_finite()) {
        bail!("帧长必须为正的有限值: {frame_dt}");
    }
    Ok(())
}

/// 执行运行命令
pub fn execute(args: RunArgs) -> Result<()> {
    check_frame_dt(args.frame_dt)?;
    info!("=== WaveLab 波浪模拟启动 ===");

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
        "网格: {}x{} 节点, 间距={} m, 步长={} s",
        params.rows, params.columns, params.spacing, params.timestep
    );
    info!(
        "波速={} m/s (稳定上限 {:.3} m/s), 阻尼={}",
        params.speed,
        params.max_stable_speed(),
        params.damping
    );

    let mut scene = WavesScene::new(&params, args.seed)
        .context("构建波浪场景失败")?
        .with_disturb_interval(args.disturb_interval);

    info!(
        "场景: {} 顶点, {} 三角形, 种子={}",
        scene.mesh().vertex_count(),
        scene.mesh().triangle_count(),
        args.seed
    );

    // 固定帧长推进
    let start = Instant::now();
    let mut sim_time = 0.0f32;
    let mut last_report = 0.0f32;
    let mut frames = 0u64;

    info!("开始模拟: 时长={} s, 帧长={} s", args.duration, args.frame_dt);

    while sim_time < args.duration {
        scene.update(args.frame_dt);
        sim_time += args.frame_dt;
        frames += 1;

        if sim_time - last_report >= args.report_interval {
            let stats = scene.stats();
            info!(
                "t={:.2} s: h_min={:+.4} m, h_max={:+.4} m, 扰动={}",
                sim_time, stats.min_height, stats.max_height, scene.disturb_count()
            );
            last_report = sim_time;
        }
    }

    let elapsed = start.elapsed();
    info!("=== 模拟完成 ===");
    info!("总帧数: {}", frames);
    info!("扰动次数: {}", scene.disturb_count());
    info!("计算时间: {:.2} s", elapsed.as_secs_f64());
    if frames > 0 {
        info!(
            "平均帧耗时: {:.3} ms",
            elapsed.as_secs_f64() * 1000.0 / frames as f64
        );
    }

    if let Some(path) = &args.export {
        wl_mesh::save_obj(scene.mesh(), path)
            .with_context(|| format!("导出 {} 失败", path.display()))?;
        info!("网格快照已导出: {}", path.display());
    }

    Ok(())
}
