// crates/wl_foundation/src/timing.rs

//! 帧计时器
//!
//! 提供 [`FrameTimer`]，驱动每帧更新循环：
//! - `tick()` 计算相邻两帧的间隔
//! - `total_time()` 返回自 `reset()` 以来的累计时间，不含暂停时段
//! - `stop()` / `start()` 支持暂停与恢复
//!
//! 计时基于 `std::time::Instant`，单调且与系统时钟无关。

use std::time::{Duration, Instant};

/// 帧计时器
///
/// 暂停期间 `tick()` 的帧间隔为 0，累计时间不增长。
#[derive(Debug, Clone)]
pub struct FrameTimer {
    /// 计时起点
    base: Instant,
    /// 暂停时段的累计时长
    paused: Duration,
    /// 当前暂停的起始时刻（运行中为 None）
    stop_point: Option<Instant>,
    /// 上一帧时刻
    prev: Instant,
    /// 上一帧间隔 [s]
    delta: f64,
}

impl FrameTimer {
    /// 创建并立即开始计时
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            base: now,
            paused: Duration::ZERO,
            stop_point: None,
            prev: now,
            delta: 0.0,
        }
    }

    /// 重置计时起点，清除暂停状态
    pub fn reset(&mut self) {
        let now = Instant::now();
        self.base = now;
        self.paused = Duration::ZERO;
        self.stop_point = None;
        self.prev = now;
        self.delta = 0.0;
    }

    /// 从暂停状态恢复
    ///
    /// 未暂停时调用无效果。
    pub fn start(&mut self) {
        if let Some(stopped_at) = self.stop_point.take() {
            let now = Instant::now();
            self.paused += now - stopped_at;
            self.prev = now;
        }
    }

    /// 暂停计时
    ///
    /// 已暂停时调用无效果。
    pub fn stop(&mut self) {
        if self.stop_point.is_none() {
            self.stop_point = Some(Instant::now());
        }
    }

    /// 是否处于暂停状态
    pub fn is_stopped(&self) -> bool {
        self.stop_point.is_some()
    }

    /// 推进一帧，更新帧间隔
    pub fn tick(&mut self) {
        if self.stop_point.is_some() {
            self.delta = 0.0;
            return;
        }
        let now = Instant::now();
        self.delta = (now - self.prev).as_secs_f64();
        self.prev = now;
    }

    /// 上一帧间隔 [s]
    pub fn delta_time(&self) -> f64 {
        self.delta
    }

    /// 自 `reset()` 以来的累计时间 [s]，不含暂停时段
    pub fn total_time(&self) -> f64 {
        let end = self.stop_point.unwrap_or_else(Instant::now);
        ((end - self.base) - self.paused).as_secs_f64()
    }
}

impl Default for FrameTimer {
    fn default() -> Self {
        Self::new()
    }
}
