// crates/wl_mesh/src/vertex.rs

//! 顶点与网格数据类型
//!
//! [`Vertex`] 为标准顶点布局（位置/法线/切线/纹理坐标），
//! `#[repr(C)]` + bytemuck Pod，可直接作为 GPU 顶点缓冲的字节源。

use bytemuck::{Pod, Zeroable};
use glam::{Vec2, Vec3};

/// 标准顶点
///
/// 44 字节，无填充。
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    /// 位置
    pub position: Vec3,
    /// 单位法线
    pub normal: Vec3,
    /// 单位切线（u 方向）
    pub tangent: Vec3,
    /// 纹理坐标
    pub tex: Vec2,
}

impl Vertex {
    /// 构造顶点
    pub fn new(position: Vec3, normal: Vec3, tangent: Vec3, tex: Vec2) -> Self {
        Self {
            position,
            normal,
            tangent,
            tex,
        }
    }

    /// 位于给定位置、朝上的顶点
    pub fn flat(position: Vec3, tex: Vec2) -> Self {
        Self {
            position,
            normal: Vec3::Y,
            tangent: Vec3::X,
            tex,
        }
    }
}

/// 网格数据：顶点数组 + 索引数组
#[derive(Debug, Clone, Default)]
pub struct MeshData {
    /// 顶点
    pub vertices: Vec<Vertex>,
    /// 索引（u32）
    pub indices: Vec<u32>,
}

impl MeshData {
    /// 创建空网格
    pub fn new() -> Self {
        Self::default()
    }

    /// 预分配容量
    pub fn with_capacity(vertices: usize, indices: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertices),
            indices: Vec::with_capacity(indices),
        }
    }

    /// 顶点数
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// 索引数
    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    /// 三角形数（索引按三角形列表解释）
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// 顶点缓冲的原始字节视图
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// 索引缓冲的原始字节视图
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_layout() {
        assert_eq!(std::mem::size_of::<Vertex>(), 44);
        assert_eq!(std::mem::align_of::<Vertex>(), 4);
    }

    #[test]
    fn test_vertex_bytes() {
        let mut mesh = MeshData::new();
        mesh.vertices.push(Vertex::flat(Vec3::ZERO, Vec2::ZERO));
        mesh.indices.extend_from_slice(&[0, 0, 0]);
        assert_eq!(mesh.vertex_bytes().len(), 44);
        assert_eq!(mesh.index_bytes().len(), 12);
        assert_eq!(mesh.triangle_count(), 1);
    }
}
