// crates/wl_mesh/src/normals.rs

//! 法线重建
//!
//! 顶点位移后按面积加权平均重建顶点法线。

use glam::Vec3;

use crate::vertex::MeshData;

/// 按面法线的面积加权平均重建所有顶点法线
///
/// 叉积未归一化，大三角形权重更高。退化三角形贡献为零。
/// 孤立顶点（未被索引引用）的法线退化为 +y。
pub fn recompute_normals(mesh: &mut MeshData) {
    let mut accum = vec![Vec3::ZERO; mesh.vertices.len()];

    for tri in mesh.indices.chunks_exact(3) {
        let (a, b, c) = (tri[0] as usize, tri[1] as usize, tri[2] as usize);
        let p0 = mesh.vertices[a].position;
        let p1 = mesh.vertices[b].position;
        let p2 = mesh.vertices[c].position;
        let face = (p1 - p0).cross(p2 - p0);
        accum[a] += face;
        accum[b] += face;
        accum[c] += face;
    }

    for (v, n) in mesh.vertices.iter_mut().zip(accum) {
        v.normal = n.normalize_or(Vec3::Y);
    }
}
