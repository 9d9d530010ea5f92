// crates/wl_foundation/src/lib.rs

//! WaveLab Foundation Layer
//!
//! 基础层，提供整个项目的公共抽象。
//!
//! # 模块概览
//!
//! - [`error`]: 统一错误类型
//! - [`float`]: 浮点工具和数值常量
//! - [`timing`]: 帧计时器
//!
//! # 设计原则
//!
//! 1. **依赖最小化**: 仅依赖 thiserror
//! 2. **零开销抽象**: release 模式下最小化运行时开销
//!
//! # 示例
//!
//! ```
//! use wl_foundation::{
//!     error::{WlError, WlResult},
//!     timing::FrameTimer,
//! };
//!
//! let mut timer = FrameTimer::new();
//! timer.tick();
//! assert!(timer.delta_time() >= 0.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod float;
pub mod timing;

// 重导出常用类型
pub use error::{WlError, WlResult};
pub use timing::FrameTimer;

/// Prelude 模块，包含常用类型
pub mod prelude {
    pub use crate::error::{WlError, WlResult};
    pub use crate::float::{approx_eq, approx_eq_eps, safe_div, EPS_F32, EPS_F64};
    pub use crate::timing::FrameTimer;
    pub use crate::{ensure, require};
}
