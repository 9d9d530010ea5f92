// crates/wl_terrain/src/height_fn.rs

//! 解析高度函数
//!
//! 经典的"丘陵"地形函数及其解析法线。位移网格时优先使用解析
//! 法线，比有限差分重建更平滑。

use glam::Vec3;

/// 丘陵高度：`h(x,z) = 0.3·(z·sin(0.1x) + x·cos(0.1z))`
#[inline]
pub fn hills_height(x: f32, z: f32) -> f32 {
    0.3 * (z * (0.1 * x).sin() + x * (0.1 * z).cos())
}

/// 丘陵法线：`normalize(-∂h/∂x, 1, -∂h/∂z)`
#[inline]
pub fn hills_normal(x: f32, z: f32) -> Vec3 {
    Vec3::new(
        -0.03 * z * (0.1 * x).cos() - 0.3 * (0.1 * z).cos(),
        1.0,
        -0.3 * (0.1 * x).sin() + 0.03 * x * (0.1 * z).sin(),
    )
    .normalize()
}
