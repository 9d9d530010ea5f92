// crates/wl_foundation/src/float.rs

//! 浮点工具与数值常量
//!
//! 提供浮点相等比较和几何/模拟计算的默认容差。

/// f32 相等性比较的默认容差
pub const EPS_F32: f32 = 1e-6;

/// f64 相等性比较的默认容差
pub const EPS_F64: f64 = 1e-12;

/// 安全除法的最小分母阈值
pub const SAFE_DIV_EPS: f32 = 1e-12;

/// f32 近似相等
#[inline]
pub fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPS_F32
}

/// f32 按给定容差近似相等
#[inline]
pub fn approx_eq_eps(a: f32, b: f32, eps: f32) -> bool {
    (a - b).abs() < eps
}

/// f64 近似相等
#[inline]
pub fn approx_eq_f64(a: f64, b: f64) -> bool {
    (a - b).abs() < EPS_F64
}

/// 安全除法：分母过小时返回 0
#[inline]
pub fn safe_div(num: f32, den: f32) -> f32 {
    if den.abs() < SAFE_DIV_EPS {
        0.0
    } else {
        num / den
    }
}
