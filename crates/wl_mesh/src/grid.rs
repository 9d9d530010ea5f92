// crates/wl_mesh/src/grid.rs

//! 平面网格与互锁瓦片生成器
//!
//! - [`generate_grid`]: xz 平面上的规则三角网格
//! - [`generate_tiled_grid`]: 同一顶点布局下的互锁瓦片索引，
//!   供硬件细分阶段使用

use glam::{Vec2, Vec3};

use crate::vertex::{MeshData, Vertex};

/// 每个瓦片的控制点数：4 个角点 + 8 个一环邻居
pub const TILE_CONTROL_POINTS: usize = 12;

/// 生成以原点为中心、位于 xz 平面的规则网格
///
/// `rows`/`cols` 为单元数，顶点数 `(rows+1)(cols+1)`，
/// 三角形数 `rows·cols·2`。纹理坐标在两个方向线性铺满 `[0,1]`。
pub fn generate_grid(width: f32, depth: f32, rows: usize, cols: usize) -> MeshData {
    let rows = rows.max(1);
    let cols = cols.max(1);

    let half_width = 0.5 * width;
    let half_depth = 0.5 * depth;
    let dx = width / cols as f32;
    let dz = depth / rows as f32;
    let du = 1.0 / cols as f32;
    let dv = 1.0 / rows as f32;

    let n = cols + 1;
    let mut mesh = MeshData::with_capacity((rows + 1) * n, rows * cols * 6);

    for i in 0..=rows {
        let z = half_depth - i as f32 * dz;
        for j in 0..=cols {
            let x = -half_width + j as f32 * dx;
            let tex = Vec2::new(j as f32 * du, i as f32 * dv);
            mesh.vertices.push(Vertex::flat(Vec3::new(x, 0.0, z), tex));
        }
    }

    for i in 0..rows {
        for j in 0..cols {
            let a = (i * n + j) as u32;
            let b = (i * n + j + 1) as u32;
            let c = ((i + 1) * n + j) as u32;
            let d = ((i + 1) * n + j + 1) as u32;
            mesh.indices.extend_from_slice(&[a, b, c, c, b, d]);
        }
    }

    mesh
}

/// 生成互锁瓦片网格
///
/// 顶点布局与 [`generate_grid`] 完全一致；索引不再描述三角形，
/// 而是每瓦片 [`TILE_CONTROL_POINTS`] 个控制点，顺序为：
///
/// 1. 四个角点：`(r,c) (r,c+1) (r+1,c) (r+1,c+1)`
/// 2. -z 侧邻居：`(r-1,c) (r-1,c+1)`
/// 3. +z 侧邻居：`(r+2,c) (r+2,c+1)`
/// 4. -x 侧邻居：`(r,c-1) (r+1,c-1)`
/// 5. +x 侧邻居：`(r,c+2) (r+1,c+2)`
///
/// 越过网格边缘的邻居坐标被钳制到边缘，使相邻瓦片在细分时
/// 共享一致的边缘信息，避免接缝裂缝。
pub fn generate_tiled_grid(width: f32, depth: f32, rows: usize, cols: usize) -> MeshData {
    let rows = rows.max(1);
    let cols = cols.max(1);

    let mut mesh = generate_grid(width, depth, rows, cols);
    mesh.indices.clear();
    mesh.indices.reserve(rows * cols * TILE_CONTROL_POINTS);

    let n = cols + 1;
    // 邻居坐标钳制到 [0, rows] × [0, cols]
    let clamped = |i: isize, j: isize| -> u32 {
        let i = i.clamp(0, rows as isize) as usize;
        let j = j.clamp(0, cols as isize) as usize;
        (i * n + j) as u32
    };

    for r in 0..rows as isize {
        for c in 0..cols as isize {
            mesh.indices.extend_from_slice(&[
                // 角点
                clamped(r, c),
                clamped(r, c + 1),
                clamped(r + 1, c),
                clamped(r + 1, c + 1),
                // -z 侧
                clamped(r - 1, c),
                clamped(r - 1, c + 1),
                // +z 侧
                clamped(r + 2, c),
                clamped(r + 2, c + 1),
                // -x 侧
                clamped(r, c - 1),
                clamped(r + 1, c - 1),
                // +x 侧
                clamped(r, c + 2),
                clamped(r + 1, c + 2),
            ]);
        }
    }

    mesh
}
