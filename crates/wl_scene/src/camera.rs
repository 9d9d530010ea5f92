// crates/wl_scene/src/camera.rs

//! 轨道相机
//!
//! 球坐标参数化的观察相机：绕目标点旋转、推拉与平移。
//! 视图/投影矩阵采用左手坐标系，与演示场景的其余约定一致。

use glam::{Mat4, Vec3};
use std::f32::consts::PI;

/// 仰角钳制余量，避免到达极点时上向量退化
const PHI_MARGIN: f32 = 0.1;

/// 轨道相机
#[derive(Debug, Clone)]
pub struct OrbitCamera {
    /// 观察目标
    pub target: Vec3,
    /// 到目标的距离
    radius: f32,
    /// 方位角 [rad]
    theta: f32,
    /// 仰角 [rad]，钳制在 (0, π) 内
    phi: f32,
    /// 距离下限
    pub radius_min: f32,
    /// 距离上限
    pub radius_max: f32,

    /// 垂直视场角 [rad]
    fov_y: f32,
    /// 宽高比
    aspect: f32,
    /// 近平面
    z_near: f32,
    /// 远平面
    z_far: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            target: Vec3::ZERO,
            radius: 15.0,
            theta: 1.5 * PI,
            phi: 0.25 * PI,
            radius_min: 3.0,
            radius_max: 200.0,
            fov_y: 0.25 * PI,
            aspect: 1.0,
            z_near: 1.0,
            z_far: 1000.0,
        }
    }
}

impl OrbitCamera {
    /// 创建默认相机
    pub fn new() -> Self {
        Self::default()
    }

    /// 设置投影参数
    pub fn set_lens(&mut self, fov_y: f32, aspect: f32, z_near: f32, z_far: f32) {
        self.fov_y = fov_y;
        self.aspect = aspect;
        self.z_near = z_near;
        self.z_far = z_far;
    }

    /// 绕目标旋转
    ///
    /// 仰角钳制在极点附近的安全区间内。
    pub fn orbit(&mut self, d_theta: f32, d_phi: f32) {
        self.theta += d_theta;
        self.phi = (self.phi + d_phi).clamp(PHI_MARGIN, PI - PHI_MARGIN);
    }

    /// 推拉：调整到目标的距离
    pub fn zoom(&mut self, delta: f32) {
        self.radius = (self.radius + delta).clamp(self.radius_min, self.radius_max);
    }

    /// 平移：沿相机右/上方向移动目标点
    pub fn pan(&mut self, dx: f32, dy: f32) {
        let view_dir = (self.target - self.position()).normalize();
        let right = Vec3::Y.cross(view_dir).normalize();
        let up = view_dir.cross(right);
        self.target += right * dx + up * dy;
    }

    /// 当前距离
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// 相机位置（球坐标 → 笛卡尔）
    pub fn position(&self) -> Vec3 {
        let x = self.radius * self.phi.sin() * self.theta.cos();
        let z = self.radius * self.phi.sin() * self.theta.sin();
        let y = self.radius * self.phi.cos();
        self.target + Vec3::new(x, y, z)
    }

    /// 视图矩阵（左手）
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_lh(self.position(), self.target, Vec3::Y)
    }

    /// 投影矩阵（左手）
    pub fn proj_matrix(&self) -> Mat4 {
        Mat4::perspective_lh(self.fov_y, self.aspect, self.z_near, self.z_far)
    }

    /// 视图投影矩阵
    pub fn view_proj(&self) -> Mat4 {
        self.proj_matrix() * self.view_matrix()
    }
}
