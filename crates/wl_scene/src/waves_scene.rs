// crates/wl_scene/src/waves_scene.rs

//! 无头波浪场景
//!
//! 将波动求解器与网格顶点缓冲连接起来的场景驱动：
//! 每隔固定间隔随机扰动一个内部节点，推进求解器，
//! 再把高度场同步回顶点并重建法线。
//! 不含任何渲染调用，可在测试与 CLI 中直接运行。

use glam::Vec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use wl_foundation::{ensure, WlError, WlResult};
use wl_mesh::{generate_grid, MeshData};
use wl_waves::{WaveGrid, WaveParams};

/// 随机扰动的默认间隔 [s]
pub const DEFAULT_DISTURB_INTERVAL: f32 = 0.25;

/// 随机扰动与边界的最小距离（节点数）
const DISTURB_MARGIN: usize = 4;

/// 波浪高度场统计
#[derive(Debug, Clone, Copy)]
pub struct WaveStats {
    /// 最小波高
    pub min_height: f32,
    /// 最大波高
    pub max_height: f32,
}

/// 无头波浪场景
pub struct WavesScene {
    wave: WaveGrid,
    mesh: MeshData,
    rng: StdRng,
    /// 扰动间隔 [s]
    disturb_interval: f32,
    /// 扰动计时累加器 [s]
    disturb_clock: f32,
    /// 已执行的扰动次数
    disturb_count: u64,
}

impl WavesScene {
    /// 创建场景
    ///
    /// 网格顶点与求解器节点一一对应。`seed` 固定随机扰动序列，
    /// 相同参数与种子的两次运行逐位一致。
    /// 网格两个方向都必须超过 `2·DISTURB_MARGIN` 个节点，
    /// 否则没有可扰动的内部节点，返回错误。
    pub fn new(params: &WaveParams, seed: u64) -> WlResult<Self> {
        ensure!(
            params.rows > 2 * DISTURB_MARGIN && params.columns > 2 * DISTURB_MARGIN,
            WlError::invalid_input(format!(
                "场景网格至少需要 {0}x{0} 节点, 实际 {1}x{2}",
                2 * DISTURB_MARGIN + 1,
                params.rows,
                params.columns
            ))
        );
        let wave = WaveGrid::new(params)?;
        let mesh = generate_grid(
            wave.width(),
            wave.depth(),
            params.rows - 1,
            params.columns - 1,
        );

        Ok(Self {
            wave,
            mesh,
            rng: StdRng::seed_from_u64(seed),
            disturb_interval: DEFAULT_DISTURB_INTERVAL,
            disturb_clock: 0.0,
            disturb_count: 0,
        })
    }

    /// 覆盖扰动间隔
    pub fn with_disturb_interval(mut self, interval: f32) -> Self {
        self.disturb_interval = interval.max(1e-3);
        self
    }

    /// 推进场景
    ///
    /// 扰动计时器按间隔扣减而非清零，长帧不会丢失扰动节拍。
    pub fn update(&mut self, dt: f32) {
        self.disturb_clock += dt;
        if self.disturb_clock >= self.disturb_interval {
            self.disturb_clock -= self.disturb_interval;
            self.random_disturb();
        }

        self.wave.update(dt);
        self.sync_mesh();
    }

    /// 对随机内部节点施加随机扰动
    fn random_disturb(&mut self) {
        let i = self
            .rng
            .gen_range(DISTURB_MARGIN..self.wave.rows() - DISTURB_MARGIN);
        let j = self
            .rng
            .gen_range(DISTURB_MARGIN..self.wave.columns() - DISTURB_MARGIN);
        let magnitude = self.rng.gen_range(1.0..2.0);

        // 节点距边界至少 DISTURB_MARGIN，扰动必然合法
        if self.wave.disturb(i, j, magnitude).is_ok() {
            self.disturb_count += 1;
            debug!(i, j, magnitude, "施加随机扰动");
        }
    }

    /// 将高度场同步到网格顶点并重建法线
    ///
    /// 内部节点用中心差分法线，边界保持 +y。
    fn sync_mesh(&mut self) {
        let rows = self.wave.rows();
        let cols = self.wave.columns();
        let inv_2dx = 1.0 / (2.0 * self.wave.spacing());
        let positions = self.wave.positions();

        for (v, p) in self.mesh.vertices.iter_mut().zip(positions) {
            v.position.y = p.y;
        }

        for i in 1..rows - 1 {
            for j in 1..cols - 1 {
                let dhdx = (positions[i * cols + j + 1].y - positions[i * cols + j - 1].y) * inv_2dx;
                // z 随行号递减，行向差分取反
                let dhdz = (positions[(i - 1) * cols + j].y - positions[(i + 1) * cols + j].y) * inv_2dx;
                self.mesh.vertices[i * cols + j].normal =
                    Vec3::new(-dhdx, 1.0, -dhdz).normalize();
            }
        }
    }

    /// 波动求解器
    pub fn wave(&self) -> &WaveGrid {
        &self.wave
    }

    /// 当前网格
    pub fn mesh(&self) -> &MeshData {
        &self.mesh
    }

    /// 已执行的扰动次数
    pub fn disturb_count(&self) -> u64 {
        self.disturb_count
    }

    /// 当前高度场统计
    pub fn stats(&self) -> WaveStats {
        let mut min_height = f32::MAX;
        let mut max_height = f32::MIN;
        for p in self.wave.positions() {
            min_height = min_height.min(p.y);
            max_height = max_height.max(p.y);
        }
        WaveStats {
            min_height,
            max_height,
        }
    }
}
