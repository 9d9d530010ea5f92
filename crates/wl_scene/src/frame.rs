// crates/wl_scene/src/frame.rs

//! 每帧 / 每物体参数块
//!
//! 渲染循环每帧上传一次 [`PerFrame`]，每个绘制调用上传一次
//! [`PerObject`]。布局与常量缓冲逐字节对应。

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};

use crate::lighting::{DirectionalLight, Material};

/// 每帧参数（272 字节）
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct PerFrame {
    /// 视图投影矩阵
    pub view_proj: Mat4,
    /// 最多三盏方向光
    pub dir_lights: [DirectionalLight; 3],
    /// 相机位置
    pub eye_pos: Vec3,
    /// 启用的方向光数量
    pub light_count: u32,
}

impl Default for PerFrame {
    fn default() -> Self {
        Self {
            view_proj: Mat4::IDENTITY,
            dir_lights: [DirectionalLight::default(); 3],
            eye_pos: Vec3::ZERO,
            light_count: 1,
        }
    }
}

/// 每物体参数（256 字节）
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct PerObject {
    /// 世界矩阵
    pub world: Mat4,
    /// 世界矩阵的逆转置，变换法线
    pub world_inv_transpose: Mat4,
    /// 纹理坐标变换
    pub tex_transform: Mat4,
    /// 材质
    pub material: Material,
}

impl Default for PerObject {
    fn default() -> Self {
        Self {
            world: Mat4::IDENTITY,
            world_inv_transpose: Mat4::IDENTITY,
            tex_transform: Mat4::IDENTITY,
            material: Material::default(),
        }
    }
}

impl PerObject {
    /// 由世界矩阵构造，自动求逆转置
    pub fn from_world(world: Mat4, material: Material) -> Self {
        Self {
            world,
            world_inv_transpose: inverse_transpose(world),
            tex_transform: Mat4::IDENTITY,
            material,
        }
    }
}

/// 求矩阵的逆转置，用于法线变换
///
/// 先清除平移分量：法线变换不含平移，保留会在非均匀缩放
/// 与平移复合时引入错误。
pub fn inverse_transpose(m: Mat4) -> Mat4 {
    let mut a = m;
    a.w_axis = glam::Vec4::W;
    a.inverse().transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::size_of;

    #[test]
    fn test_block_sizes() {
        assert_eq!(size_of::<PerFrame>(), 272);
        assert_eq!(size_of::<PerObject>(), 256);
    }

    #[test]
    fn test_inverse_transpose_identity() {
        let it = inverse_transpose(Mat4::IDENTITY);
        assert!(it.abs_diff_eq(Mat4::IDENTITY, 1e-6));
    }

    #[test]
    fn test_inverse_transpose_scale() {
        // 非均匀缩放 (2,1,1)：法线矩阵应缩放 (0.5,1,1)
        let m = Mat4::from_scale(Vec3::new(2.0, 1.0, 1.0));
        let it = inverse_transpose(m);
        let n = it.transform_vector3(Vec3::X);
        assert!((n.x - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_inverse_transpose_ignores_translation() {
        let m = Mat4::from_translation(Vec3::new(5.0, -3.0, 2.0));
        let it = inverse_transpose(m);
        assert!(it.abs_diff_eq(Mat4::IDENTITY, 1e-6));
    }

    #[test]
    fn test_from_world() {
        let world = Mat4::from_scale(Vec3::splat(2.0));
        let obj = PerObject::from_world(world, Material::default());
        assert_eq!(obj.world, world);
        assert_eq!(obj.tex_transform, Mat4::IDENTITY);
    }
}
