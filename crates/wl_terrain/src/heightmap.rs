// crates/wl_terrain/src/heightmap.rs

//! RAW 高度图
//!
//! 读取 8 位灰度 RAW 高度图（每纹素 1 字节，行主序），
//! 归一化到 `[0,1]` 后按比例缩放为实际高度。
//! 提供 3×3 盒式平滑与双线性采样。

use std::fs;
use std::path::Path;

use wl_foundation::{ensure, WlError, WlResult};

/// 高度图
#[derive(Debug, Clone)]
pub struct Heightmap {
    /// 高度值（行主序），已缩放
    heights: Vec<f32>,
    /// 宽度（列数）
    width: usize,
    /// 高度（行数）
    height: usize,
}

impl Heightmap {
    /// 由高度数组创建
    ///
    /// `width`/`height` 必须为正，`heights.len()` 必须等于 `width·height`。
    pub fn from_heights(heights: Vec<f32>, width: usize, height: usize) -> WlResult<Self> {
        ensure!(
            width > 0 && height > 0,
            WlError::invalid_input(format!("高度图尺寸必须为正: {width}x{height}"))
        );
        WlError::check_size("heightmap", width * height, heights.len())?;
        Ok(Self {
            heights,
            width,
            height,
        })
    }

    /// 从 RAW 文件加载
    ///
    /// 文件必须恰好包含 `width·height` 字节。
    /// 每字节按 `byte/255·scale` 转换为高度。
    pub fn load_from_raw(
        path: impl AsRef<Path>,
        width: usize,
        height: usize,
        scale: f32,
    ) -> WlResult<Self> {
        ensure!(
            width > 0 && height > 0,
            WlError::invalid_input(format!("高度图尺寸必须为正: {width}x{height}"))
        );
        let path = path.as_ref();
        ensure!(path.exists(), WlError::file_not_found(path));

        let bytes = fs::read(path)
            .map_err(|e| WlError::io_with_source(format!("读取 {} 失败", path.display()), e))?;
        WlError::check_size("raw heightmap", width * height, bytes.len())?;

        let heights = bytes
            .iter()
            .map(|&b| b as f32 / 255.0 * scale)
            .collect();

        Ok(Self {
            heights,
            width,
            height,
        })
    }

    /// 宽度（列数）
    pub fn width(&self) -> usize {
        self.width
    }

    /// 高度（行数）
    pub fn height(&self) -> usize {
        self.height
    }

    /// 坐标是否位于图内
    #[inline]
    pub fn in_bounds(&self, i: isize, j: isize) -> bool {
        i >= 0 && (i as usize) < self.height && j >= 0 && (j as usize) < self.width
    }

    /// 读取纹素，越界返回 None
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> Option<f32> {
        if i < self.height && j < self.width {
            Some(self.heights[i * self.width + j])
        } else {
            None
        }
    }

    /// 写入纹素，越界忽略
    #[inline]
    pub fn set(&mut self, i: usize, j: usize, value: f32) {
        if i < self.height && j < self.width {
            self.heights[i * self.width + j] = value;
        }
    }

    /// 原始高度数据（行主序）
    pub fn heights(&self) -> &[f32] {
        &self.heights
    }

    /// 3×3 邻域内有效纹素的平均值
    fn average(&self, i: usize, j: usize) -> f32 {
        let mut sum = 0.0;
        let mut count = 0u32;
        for di in -1..=1isize {
            for dj in -1..=1isize {
                let ni = i as isize + di;
                let nj = j as isize + dj;
                if self.in_bounds(ni, nj) {
                    sum += self.heights[ni as usize * self.width + nj as usize];
                    count += 1;
                }
            }
        }
        sum / count as f32
    }

    /// 对整图做一次 3×3 盒式平滑
    pub fn smooth(&mut self) {
        let mut dest = vec![0.0f32; self.heights.len()];
        for i in 0..self.height {
            for j in 0..self.width {
                dest[i * self.width + j] = self.average(i, j);
            }
        }
        self.heights = dest;
    }

    /// 双线性采样
    ///
    /// `(u, v)` 按 `[0,1]²` 解释并钳制；u 对应列方向，v 对应行方向。
    pub fn sample(&self, u: f32, v: f32) -> f32 {
        let u = u.clamp(0.0, 1.0);
        let v = v.clamp(0.0, 1.0);

        let x = u * (self.width - 1) as f32;
        let y = v * (self.height - 1) as f32;
        let j0 = x.floor() as usize;
        let i0 = y.floor() as usize;
        let j1 = (j0 + 1).min(self.width - 1);
        let i1 = (i0 + 1).min(self.height - 1);
        let tx = x - j0 as f32;
        let ty = y - i0 as f32;

        let h00 = self.heights[i0 * self.width + j0];
        let h01 = self.heights[i0 * self.width + j1];
        let h10 = self.heights[i1 * self.width + j0];
        let h11 = self.heights[i1 * self.width + j1];

        let top = h00 + (h01 - h00) * tx;
        let bottom = h10 + (h11 - h10) * tx;
        top + (bottom - top) * ty
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_raw(bytes: &[u8]) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("height.raw");
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(bytes).unwrap();
        (dir, path)
    }

    #[test]
    fn test_load_from_raw_scales() {
        let (_dir, path) = write_raw(&[0, 51, 102, 255]);
        let map = Heightmap::load_from_raw(&path, 2, 2, 10.0).unwrap();
        assert_eq!(map.get(0, 0), Some(0.0));
        assert!((map.get(0, 1).unwrap() - 2.0).abs() < 1e-5);
        assert!((map.get(1, 0).unwrap() - 4.0).abs() < 1e-5);
        assert!((map.get(1, 1).unwrap() - 10.0).abs() < 1e-5);
    }

    #[test]
    fn test_load_rejects_size_mismatch() {
        let (_dir, path) = write_raw(&[0, 1, 2]);
        assert!(matches!(
            Heightmap::load_from_raw(&path, 2, 2, 1.0),
            Err(WlError::SizeMismatch { .. })
        ));
    }

    #[test]
    fn test_load_missing_file() {
        assert!(matches!(
            Heightmap::load_from_raw("/no/such/file.raw", 2, 2, 1.0),
            Err(WlError::FileNotFound { .. })
        ));
    }

    #[test]
    fn test_rejects_zero_dimensions() {
        assert!(matches!(
            Heightmap::from_heights(vec![], 0, 0),
            Err(WlError::InvalidInput { .. })
        ));
        assert!(matches!(
            Heightmap::from_heights(vec![], 4, 0),
            Err(WlError::InvalidInput { .. })
        ));
        let (_dir, path) = write_raw(&[]);
        assert!(matches!(
            Heightmap::load_from_raw(&path, 0, 0, 1.0),
            Err(WlError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_single_texel_sample() {
        let map = Heightmap::from_heights(vec![7.0], 1, 1).unwrap();
        assert!((map.sample(0.5, 0.5) - 7.0).abs() < 1e-6);
    }

    #[test]
    fn test_bounds_and_access() {
        let map = Heightmap::from_heights(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 3, 2).unwrap();
        assert!(map.in_bounds(0, 0));
        assert!(map.in_bounds(1, 2));
        assert!(!map.in_bounds(-1, 0));
        assert!(!map.in_bounds(2, 0));
        assert!(!map.in_bounds(0, 3));
        assert_eq!(map.get(1, 2), Some(6.0));
        assert_eq!(map.get(2, 0), None);
    }

    #[test]
    fn test_smooth_uniform_unchanged() {
        let mut map = Heightmap::from_heights(vec![2.0; 16], 4, 4).unwrap();
        map.smooth();
        for &h in map.heights() {
            assert!((h - 2.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_smooth_spike() {
        // 中心尖峰被摊平：3x3 邻域均值
        let mut heights = vec![0.0; 9];
        heights[4] = 9.0;
        let mut map = Heightmap::from_heights(heights, 3, 3).unwrap();
        map.smooth();
        assert!((map.get(1, 1).unwrap() - 1.0).abs() < 1e-6);
        // 角点邻域只有 4 个纹素
        assert!((map.get(0, 0).unwrap() - 9.0 / 4.0).abs() < 1e-6);
    }

    #[test]
    fn test_sample_corners_and_center() {
        let map = Heightmap::from_heights(vec![0.0, 1.0, 2.0, 3.0], 2, 2).unwrap();
        assert!((map.sample(0.0, 0.0) - 0.0).abs() < 1e-6);
        assert!((map.sample(1.0, 0.0) - 1.0).abs() < 1e-6);
        assert!((map.sample(0.0, 1.0) - 2.0).abs() < 1e-6);
        assert!((map.sample(1.0, 1.0) - 3.0).abs() < 1e-6);
        assert!((map.sample(0.5, 0.5) - 1.5).abs() < 1e-6);
    }

    #[test]
    fn test_sample_clamps() {
        let map = Heightmap::from_heights(vec![0.0, 1.0, 2.0, 3.0], 2, 2).unwrap();
        assert!((map.sample(-1.0, -1.0) - 0.0).abs() < 1e-6);
        assert!((map.sample(2.0, 2.0) - 3.0).abs() < 1e-6);
    }
}
