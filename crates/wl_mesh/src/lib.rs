// crates/wl_mesh/src/lib.rs

//! 程序化网格生成模块
//!
//! 提供演示场景所需的几何体：
//!
//! - [`vertex`]: 顶点布局与网格数据容器
//! - [`primitives`]: 盒体、UV 球、测地球、圆柱
//! - [`grid`]: 平面网格与互锁瓦片
//! - [`normals`]: 位移后法线重建
//! - [`export`]: Wavefront OBJ 导出
//!
//! 所有生成器均为纯函数，输出大小由参数唯一确定。
//!
//! # 示例
//!
//! ```
//! use wl_mesh::primitives::generate_box;
//!
//! let mesh = generate_box(1.0, 2.0, 3.0);
//! assert_eq!(mesh.vertex_count(), 24);
//! assert_eq!(mesh.index_count(), 36);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod export;
pub mod grid;
pub mod normals;
pub mod primitives;
pub mod vertex;

// 重导出常用类型
pub use export::{export_obj, save_obj};
pub use grid::{generate_grid, generate_tiled_grid, TILE_CONTROL_POINTS};
pub use normals::recompute_normals;
pub use primitives::{
    generate_box, generate_cylinder, generate_geosphere, generate_sphere,
    MAX_GEOSPHERE_SUBDIVISIONS,
};
pub use vertex::{MeshData, Vertex};
