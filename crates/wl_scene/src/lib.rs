// crates/wl_scene/src/lib.rs

//! 场景层
//!
//! 演示场景的 CPU 侧组成部分：
//!
//! - [`camera`]: 轨道相机与视图/投影矩阵
//! - [`lighting`]: 光照与材质参数块
//! - [`frame`]: 每帧 / 每物体参数块
//! - [`shader`]: 着色器字节码加载
//! - [`waves_scene`]: 无头波浪场景驱动
//!
//! 本层不包含任何图形 API 调用；参数块按常量缓冲布局定义，
//! 由上层渲染后端取字节上传。

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod camera;
pub mod frame;
pub mod lighting;
pub mod shader;
pub mod waves_scene;

// 重导出常用类型
pub use camera::OrbitCamera;
pub use frame::{inverse_transpose, PerFrame, PerObject};
pub use lighting::{DirectionalLight, Material, PointLight, SpotLight};
pub use shader::load_bytecode;
pub use waves_scene::{WaveStats, WavesScene, DEFAULT_DISTURB_INTERVAL};
