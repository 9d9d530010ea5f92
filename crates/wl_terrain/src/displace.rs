// crates/wl_terrain/src/displace.rs

//! 网格位移
//!
//! 将高度函数或高度图应用到平面网格的顶点上，并重建法线。

use glam::Vec3;
use wl_mesh::{recompute_normals, MeshData};

use crate::heightmap::Heightmap;

/// 按高度函数位移网格，法线由面法线平均重建
pub fn displace_grid<F>(mesh: &mut MeshData, height: F)
where
    F: Fn(f32, f32) -> f32,
{
    for v in &mut mesh.vertices {
        v.position.y = height(v.position.x, v.position.z);
    }
    recompute_normals(mesh);
}

/// 按高度函数位移网格，法线取解析值
pub fn displace_grid_analytic<F, G>(mesh: &mut MeshData, height: F, normal: G)
where
    F: Fn(f32, f32) -> f32,
    G: Fn(f32, f32) -> Vec3,
{
    for v in &mut mesh.vertices {
        v.position.y = height(v.position.x, v.position.z);
        v.normal = normal(v.position.x, v.position.z);
    }
}

/// 按高度图位移网格
///
/// 通过顶点纹理坐标对高度图做双线性采样，随后重建法线。
pub fn displace_grid_with_heightmap(mesh: &mut MeshData, map: &Heightmap) {
    for v in &mut mesh.vertices {
        v.position.y = map.sample(v.tex.x, v.tex.y);
    }
    recompute_normals(mesh);
}
