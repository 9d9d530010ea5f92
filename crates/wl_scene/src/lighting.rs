// crates/wl_scene/src/lighting.rs

//! 光照与材质参数块
//!
//! 与着色器常量缓冲逐字节对应的 `#[repr(C)]` 结构：
//! 16 字节对齐、显式填充字段。通过 bytemuck 直接取字节上传。

use bytemuck::{Pod, Zeroable};
use glam::{Vec3, Vec4};

/// 方向光（64 字节）
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct DirectionalLight {
    /// 环境光颜色
    pub ambient: Vec4,
    /// 漫反射颜色
    pub diffuse: Vec4,
    /// 镜面反射颜色
    pub specular: Vec4,
    /// 光照方向（单位向量）
    pub direction: Vec3,
    /// 对齐填充
    pub _pad: f32,
}

impl Default for DirectionalLight {
    fn default() -> Self {
        Self {
            ambient: Vec4::new(0.2, 0.2, 0.2, 1.0),
            diffuse: Vec4::new(0.5, 0.5, 0.5, 1.0),
            specular: Vec4::new(0.5, 0.5, 0.5, 1.0),
            direction: Vec3::new(0.577_35, -0.577_35, 0.577_35),
            _pad: 0.0,
        }
    }
}

/// 点光（80 字节）
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct PointLight {
    /// 环境光颜色
    pub ambient: Vec4,
    /// 漫反射颜色
    pub diffuse: Vec4,
    /// 镜面反射颜色
    pub specular: Vec4,
    /// 光源位置
    pub position: Vec3,
    /// 作用半径
    pub range: f32,
    /// 衰减系数 (常数, 线性, 二次)
    pub att: Vec3,
    /// 对齐填充
    pub _pad: f32,
}

impl Default for PointLight {
    fn default() -> Self {
        Self {
            ambient: Vec4::new(0.3, 0.3, 0.3, 1.0),
            diffuse: Vec4::new(0.7, 0.7, 0.7, 1.0),
            specular: Vec4::new(0.7, 0.7, 0.7, 1.0),
            position: Vec3::ZERO,
            range: 25.0,
            att: Vec3::new(0.0, 0.1, 0.0),
            _pad: 0.0,
        }
    }
}

/// 聚光灯（96 字节）
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct SpotLight {
    /// 环境光颜色
    pub ambient: Vec4,
    /// 漫反射颜色
    pub diffuse: Vec4,
    /// 镜面反射颜色
    pub specular: Vec4,
    /// 光源位置
    pub position: Vec3,
    /// 作用半径
    pub range: f32,
    /// 照射方向（单位向量）
    pub direction: Vec3,
    /// 聚光指数，越大光锥越窄
    pub spot: f32,
    /// 衰减系数 (常数, 线性, 二次)
    pub att: Vec3,
    /// 对齐填充
    pub _pad: f32,
}

impl Default for SpotLight {
    fn default() -> Self {
        Self {
            ambient: Vec4::new(0.0, 0.0, 0.0, 1.0),
            diffuse: Vec4::new(1.0, 1.0, 0.0, 1.0),
            specular: Vec4::ONE,
            position: Vec3::ZERO,
            range: 10000.0,
            direction: Vec3::NEG_Y,
            spot: 96.0,
            att: Vec3::new(1.0, 0.0, 0.0),
            _pad: 0.0,
        }
    }
}

/// 材质（64 字节）
///
/// `specular.w` 为镜面反射指数，`reflect` 供立方体贴图反射使用。
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Material {
    /// 环境光反射率
    pub ambient: Vec4,
    /// 漫反射率
    pub diffuse: Vec4,
    /// 镜面反射率，w 为光泽指数
    pub specular: Vec4,
    /// 环境反射率
    pub reflect: Vec4,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            ambient: Vec4::new(0.48, 0.77, 0.46, 1.0),
            diffuse: Vec4::new(0.48, 0.77, 0.46, 1.0),
            specular: Vec4::new(0.2, 0.2, 0.2, 16.0),
            reflect: Vec4::ZERO,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::size_of;

    #[test]
    fn test_block_sizes() {
        assert_eq!(size_of::<DirectionalLight>(), 64);
        assert_eq!(size_of::<PointLight>(), 80);
        assert_eq!(size_of::<SpotLight>(), 96);
        assert_eq!(size_of::<Material>(), 64);
    }

    #[test]
    fn test_pod_roundtrip() {
        let light = DirectionalLight::default();
        let bytes = bytemuck::bytes_of(&light);
        assert_eq!(bytes.len(), 64);
        let back: DirectionalLight = *bytemuck::from_bytes(bytes);
        assert_eq!(back, light);
    }

    #[test]
    fn test_default_direction_unit() {
        let light = DirectionalLight::default();
        assert!((light.direction.length() - 1.0).abs() < 1e-4);
    }
}
