// crates/wl_waves/src/grid.rs

//! 波动网格求解器
//!
//! 对固定网格上的阻尼二维波动方程做显式有限差分积分：
//!
//! $$ \frac{\partial^2 h}{\partial t^2} + \mu \frac{\partial h}{\partial t}
//!    = c^2 \nabla^2 h $$
//!
//! 离散格式为经典五点模板，系数在构造时一次性预计算：
//!
//! - `d = μ·dt + 2`
//! - `e = c²·dt²/dx²`
//! - `k1 = (μ·dt − 2)/d`, `k2 = (4 − 8e)/d`, `k3 = 2e/d`
//!
//! 网格位置双缓冲（`prev`/`curr`），模板结果原地写入 `prev` 后交换。
//! 边界节点从不更新，等价于零 Dirichlet 边界条件。
//!
//! 内部行扫描在网格较大时使用 rayon 并行。

use glam::Vec3;
use rayon::prelude::*;
use wl_foundation::{ensure, WlError, WlResult};

use crate::params::WaveParams;

/// 节点数低于该阈值时走串行路径
const PARALLEL_THRESHOLD: usize = 4096;

/// 波动高度场
///
/// rows×columns 的节点网格，x/z 在初始化时固定，y 为波高。
#[derive(Debug, Clone)]
pub struct WaveGrid {
    rows: usize,
    columns: usize,
    spacing: f32,
    timestep: f32,

    /// 模板系数
    k1: f32,
    k2: f32,
    k3: f32,

    /// 固定步长累加器 [s]
    clock: f32,

    /// 上一步位置（行主序）
    prev: Vec<Vec3>,
    /// 当前位置（行主序）
    curr: Vec<Vec3>,
}

impl WaveGrid {
    /// 按给定参数创建静止的平坦网格
    ///
    /// 参数未通过 [`WaveParams::validate`] 时返回错误。
    pub fn new(params: &WaveParams) -> WlResult<Self> {
        params.validate()?;

        let dt = params.timestep;
        let dx = params.spacing;
        let d = params.damping * dt + 2.0;
        let e = (params.speed * params.speed) * (dt * dt) / (dx * dx);
        let k1 = (params.damping * dt - 2.0) / d;
        let k2 = (4.0 - 8.0 * e) / d;
        let k3 = 2.0 * e / d;

        let rows = params.rows;
        let columns = params.columns;
        let half_width = (columns - 1) as f32 * dx * 0.5;
        let half_depth = (rows - 1) as f32 * dx * 0.5;

        let mut rest = Vec::with_capacity(rows * columns);
        for i in 0..rows {
            let z = half_depth - i as f32 * dx;
            for j in 0..columns {
                let x = -half_width + j as f32 * dx;
                rest.push(Vec3::new(x, 0.0, z));
            }
        }

        Ok(Self {
            rows,
            columns,
            spacing: dx,
            timestep: dt,
            k1,
            k2,
            k3,
            clock: 0.0,
            prev: rest.clone(),
            curr: rest,
        })
    }

    // ========================================================================
    // 访问器
    // ========================================================================

    /// 行数
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// 列数
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// 节点总数
    pub fn vertex_count(&self) -> usize {
        self.rows * self.columns
    }

    /// 三角形总数
    pub fn triangle_count(&self) -> usize {
        (self.rows - 1) * (self.columns - 1) * 2
    }

    /// 网格间距 [m]
    pub fn spacing(&self) -> f32 {
        self.spacing
    }

    /// x 方向总宽度 [m]
    pub fn width(&self) -> f32 {
        (self.columns - 1) as f32 * self.spacing
    }

    /// z 方向总深度 [m]
    pub fn depth(&self) -> f32 {
        (self.rows - 1) as f32 * self.spacing
    }

    /// 固定时间步长 [s]
    pub fn timestep(&self) -> f32 {
        self.timestep
    }

    /// 节点位置
    #[inline]
    pub fn position(&self, i: usize, j: usize) -> Vec3 {
        self.curr[i * self.columns + j]
    }

    /// 节点波高
    #[inline]
    pub fn height(&self, i: usize, j: usize) -> f32 {
        self.curr[i * self.columns + j].y
    }

    /// 当前位置缓冲（行主序）
    pub fn positions(&self) -> &[Vec3] {
        &self.curr
    }

    // ========================================================================
    // 模拟
    // ========================================================================

    /// 推进模拟
    ///
    /// 将 `dt` 累加进内部时钟；达到固定步长时执行一次模板更新并清零时钟。
    /// 时钟清零而非减去步长，与原始节拍保持一致。
    pub fn update(&mut self, dt: f32) {
        self.clock += dt;
        if self.clock >= self.timestep {
            self.step();
            self.clock = 0.0;
        }
    }

    /// 对单个节点施加扰动
    ///
    /// 在 `(i, j)` 处叠加 `magnitude`，四个轴向邻居各叠加 `magnitude/2`。
    /// 扰动点必须与边界保持两个节点的距离，否则返回错误。
    pub fn disturb(&mut self, i: usize, j: usize, magnitude: f32) -> WlResult<()> {
        ensure!(
            i > 1 && i + 2 < self.rows,
            WlError::out_of_range("disturb row", i as f64, 2.0, (self.rows - 3) as f64)
        );
        ensure!(
            j > 1 && j + 2 < self.columns,
            WlError::out_of_range("disturb column", j as f64, 2.0, (self.columns - 3) as f64)
        );

        let n = self.columns;
        let half = 0.5 * magnitude;
        self.curr[i * n + j].y += magnitude;
        self.curr[i * n + j + 1].y += half;
        self.curr[i * n + j - 1].y += half;
        self.curr[(i + 1) * n + j].y += half;
        self.curr[(i - 1) * n + j].y += half;
        Ok(())
    }

    /// 执行一次模板更新
    ///
    /// 对所有内部节点计算
    /// `next = k1·prev + k2·curr + k3·(四邻居之和)`，
    /// 原地写入 `prev` 缓冲后交换。边界节点保持不变。
    fn step(&mut self) {
        let n = self.columns;
        let rows = self.rows;
        let (k1, k2, k3) = (self.k1, self.k2, self.k3);
        let curr = &self.curr;

        let update_row = |i: usize, row: &mut [Vec3]| {
            for j in 1..n - 1 {
                let neighbors = curr[(i + 1) * n + j].y
                    + curr[(i - 1) * n + j].y
                    + curr[i * n + j + 1].y
                    + curr[i * n + j - 1].y;
                row[j].y = k1 * row[j].y + k2 * curr[i * n + j].y + k3 * neighbors;
            }
        };

        if self.vertex_count() < PARALLEL_THRESHOLD {
            for (i, row) in self
                .prev
                .chunks_exact_mut(n)
                .enumerate()
                .skip(1)
                .take(rows - 2)
            {
                update_row(i, row);
            }
        } else {
            self.prev
                .par_chunks_exact_mut(n)
                .enumerate()
                .skip(1)
                .take(rows - 2)
                .for_each(|(i, row)| update_row(i, row));
        }

        std::mem::swap(&mut self.prev, &mut self.curr);
    }
}

impl std::ops::Index<(usize, usize)> for WaveGrid {
    type Output = Vec3;

    #[inline]
    fn index(&self, (i, j): (usize, usize)) -> &Vec3 {
        &self.curr[i * self.columns + j]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_params() -> WaveParams {
        WaveParams {
            rows: 9,
            columns: 9,
            spacing: 1.0,
            timestep: 0.05,
            speed: 4.0,
            damping: 0.2,
        }
    }

    #[test]
    fn test_counts() {
        let grid = WaveGrid::new(&small_params()).unwrap();
        assert_eq!(grid.vertex_count(), 81);
        assert_eq!(grid.triangle_count(), 8 * 8 * 2);
        assert!((grid.width() - 8.0).abs() < 1e-6);
        assert!((grid.depth() - 8.0).abs() < 1e-6);
    }

    #[test]
    fn test_index_operator() {
        let grid = WaveGrid::new(&small_params()).unwrap();
        assert_eq!(grid[(4, 4)], grid.position(4, 4));
    }

    #[test]
    fn test_parallel_path_deterministic() {
        // 4900 节点，超过并行阈值；两次相同的运行必须逐位一致
        let mut big = WaveParams::default();
        big.rows = 70;
        big.columns = 70;
        let mut a = WaveGrid::new(&big).unwrap();
        let mut b = a.clone();

        a.disturb(35, 35, 1.0).unwrap();
        b.disturb(35, 35, 1.0).unwrap();
        for _ in 0..10 {
            a.update(big.timestep);
            b.update(big.timestep);
        }
        for idx in 0..a.vertex_count() {
            assert_eq!(a.positions()[idx].y, b.positions()[idx].y);
        }
    }
}
