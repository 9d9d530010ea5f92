// crates/wl_terrain/src/lib.rs

//! 地形层
//!
//! 提供演示场景的高度场来源：
//!
//! - [`height_fn`]: 解析丘陵高度函数及其法线
//! - [`heightmap`]: 8 位灰度 RAW 高度图的加载、平滑与采样
//! - [`displace`]: 将高度场应用到平面网格
//!
//! # 示例
//!
//! ```
//! use wl_mesh::generate_grid;
//! use wl_terrain::{displace_grid_analytic, hills_height, hills_normal};
//!
//! let mut mesh = generate_grid(160.0, 160.0, 50, 50);
//! displace_grid_analytic(&mut mesh, hills_height, hills_normal);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod displace;
pub mod height_fn;
pub mod heightmap;

// 重导出常用类型
pub use displace::{displace_grid, displace_grid_analytic, displace_grid_with_heightmap};
pub use height_fn::{hills_height, hills_normal};
pub use heightmap::Heightmap;
