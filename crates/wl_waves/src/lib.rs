// crates/wl_waves/src/lib.rs

//! 波动求解器模块
//!
//! 在固定网格上积分阻尼二维波动方程，为实时水面渲染提供高度场：
//!
//! - [`WaveParams`]: 求解器参数与稳定性验证
//! - [`WaveGrid`]: 双缓冲高度场与显式模板更新
//!
//! # 示例
//!
//! ```
//! use wl_waves::{WaveGrid, WaveParams};
//!
//! let params = WaveParams {
//!     rows: 16,
//!     columns: 16,
//!     ..WaveParams::default()
//! };
//! let mut grid = WaveGrid::new(&params).unwrap();
//! grid.disturb(8, 8, 1.5).unwrap();
//! grid.update(params.timestep);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod grid;
pub mod params;

pub use grid::WaveGrid;
pub use params::WaveParams;
