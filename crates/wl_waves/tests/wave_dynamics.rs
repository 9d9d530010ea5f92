// crates/wl_waves/tests/wave_dynamics.rs

//! 波动求解器行为测试
//!
//! 覆盖初始状态、点扰动、固定步长节拍、边界条件与长期衰减。

use wl_waves::{WaveGrid, WaveParams};

const EPS: f32 = 1e-6;

fn params(rows: usize, columns: usize) -> WaveParams {
    WaveParams {
        rows,
        columns,
        spacing: 1.0,
        timestep: 0.05,
        speed: 4.0,
        damping: 0.2,
    }
}

// ============================================================
// 初始状态
// ============================================================

#[test]
fn test_init_flat_at_rest() {
    let grid = WaveGrid::new(&params(11, 7)).unwrap();

    for i in 0..11 {
        for j in 0..7 {
            assert_eq!(grid.height(i, j), 0.0);
        }
    }

    // 平坦布局：x 从 -half_width 起按列递增，z 从 half_depth 起按行递减
    let p00 = grid.position(0, 0);
    assert!((p00.x - (-3.0)).abs() < EPS);
    assert!((p00.z - 5.0).abs() < EPS);

    let p_last = grid.position(10, 6);
    assert!((p_last.x - 3.0).abs() < EPS);
    assert!((p_last.z - (-5.0)).abs() < EPS);

    let p_mid = grid.position(5, 3);
    assert!(p_mid.x.abs() < EPS);
    assert!(p_mid.z.abs() < EPS);
}

#[test]
fn test_counts() {
    let grid = WaveGrid::new(&params(11, 7)).unwrap();
    assert_eq!(grid.rows(), 11);
    assert_eq!(grid.columns(), 7);
    assert_eq!(grid.vertex_count(), 77);
    assert_eq!(grid.triangle_count(), 10 * 6 * 2);
}

// ============================================================
// 点扰动
// ============================================================

#[test]
fn test_disturb_exact_deltas() {
    let mut grid = WaveGrid::new(&params(9, 9)).unwrap();
    grid.disturb(4, 5, 2.0).unwrap();

    assert!((grid.height(4, 5) - 2.0).abs() < EPS);
    assert!((grid.height(4, 6) - 1.0).abs() < EPS);
    assert!((grid.height(4, 4) - 1.0).abs() < EPS);
    assert!((grid.height(5, 5) - 1.0).abs() < EPS);
    assert!((grid.height(3, 5) - 1.0).abs() < EPS);

    // 其余节点不受影响
    assert_eq!(grid.height(0, 0), 0.0);
    assert_eq!(grid.height(4, 7), 0.0);
    assert_eq!(grid.height(6, 5), 0.0);
}

#[test]
fn test_disturb_accumulates() {
    let mut grid = WaveGrid::new(&params(9, 9)).unwrap();
    grid.disturb(4, 4, 1.0).unwrap();
    grid.disturb(4, 4, 1.0).unwrap();
    assert!((grid.height(4, 4) - 2.0).abs() < EPS);
}

#[test]
fn test_disturb_rejects_near_boundary() {
    let mut grid = WaveGrid::new(&params(9, 9)).unwrap();

    // 合法范围是 (1, rows-2) × (1, cols-2) 的开区间，即 2..=rows-3
    assert!(grid.disturb(0, 4, 1.0).is_err());
    assert!(grid.disturb(1, 4, 1.0).is_err());
    assert!(grid.disturb(7, 4, 1.0).is_err());
    assert!(grid.disturb(8, 4, 1.0).is_err());
    assert!(grid.disturb(4, 0, 1.0).is_err());
    assert!(grid.disturb(4, 1, 1.0).is_err());
    assert!(grid.disturb(4, 7, 1.0).is_err());
    assert!(grid.disturb(4, 8, 1.0).is_err());

    // 边界扰动被拒绝后网格保持不变
    for i in 0..9 {
        for j in 0..9 {
            assert_eq!(grid.height(i, j), 0.0);
        }
    }

    assert!(grid.disturb(2, 2, 1.0).is_ok());
    assert!(grid.disturb(6, 6, 1.0).is_ok());
}

// ============================================================
// 固定步长节拍
// ============================================================

#[test]
fn test_update_below_timestep_is_noop() {
    let mut grid = WaveGrid::new(&params(9, 9)).unwrap();
    grid.disturb(4, 4, 1.0).unwrap();
    let before: Vec<f32> = grid.positions().iter().map(|p| p.y).collect();

    // 累计 0.04 < 0.05，不触发模板更新
    grid.update(0.02);
    grid.update(0.02);

    let after: Vec<f32> = grid.positions().iter().map(|p| p.y).collect();
    assert_eq!(before, after);
}

#[test]
fn test_update_applies_single_step_and_resets_clock() {
    let mut grid = WaveGrid::new(&params(9, 9)).unwrap();
    grid.disturb(4, 4, 1.0).unwrap();

    // 第三次累加越过步长，触发一次更新并清零时钟
    grid.update(0.02);
    grid.update(0.02);
    grid.update(0.02);
    let after_step: Vec<f32> = grid.positions().iter().map(|p| p.y).collect();
    assert!((after_step[4 * 9 + 4] - 1.0).abs() > EPS);

    // 时钟清零后再累加 0.04 仍不足一个步长
    grid.update(0.02);
    grid.update(0.02);
    let still: Vec<f32> = grid.positions().iter().map(|p| p.y).collect();
    assert_eq!(after_step, still);
}

#[test]
fn test_large_dt_applies_exactly_one_step() {
    let mut a = WaveGrid::new(&params(9, 9)).unwrap();
    let mut b = WaveGrid::new(&params(9, 9)).unwrap();
    a.disturb(4, 4, 1.0).unwrap();
    b.disturb(4, 4, 1.0).unwrap();

    // 单次传入 10 个步长也只推进一步
    a.update(0.5);
    b.update(0.05);

    for idx in 0..a.vertex_count() {
        assert_eq!(a.positions()[idx].y, b.positions()[idx].y);
    }
}

// ============================================================
// 边界与对称性
// ============================================================

#[test]
fn test_boundary_never_moves() {
    let mut grid = WaveGrid::new(&params(15, 15)).unwrap();
    grid.disturb(7, 7, 3.0).unwrap();

    for _ in 0..100 {
        grid.update(0.05);
    }

    for i in 0..15 {
        assert_eq!(grid.height(i, 0), 0.0);
        assert_eq!(grid.height(i, 14), 0.0);
    }
    for j in 0..15 {
        assert_eq!(grid.height(0, j), 0.0);
        assert_eq!(grid.height(14, j), 0.0);
    }
}

#[test]
fn test_center_disturb_preserves_symmetry() {
    let mut grid = WaveGrid::new(&params(15, 15)).unwrap();
    grid.disturb(7, 7, 2.0).unwrap();

    for _ in 0..20 {
        grid.update(0.05);
    }

    for i in 0..15 {
        for j in 0..15 {
            let h = grid.height(i, j);
            assert!((h - grid.height(14 - i, j)).abs() < 1e-4);
            assert!((h - grid.height(i, 14 - j)).abs() < 1e-4);
            // 网格为正方形，行列互换也对称
            assert!((h - grid.height(j, i)).abs() < 1e-4);
        }
    }
}

// ============================================================
// 长期行为
// ============================================================

#[test]
fn test_damped_amplitude_decays() {
    let mut grid = WaveGrid::new(&params(21, 21)).unwrap();
    grid.disturb(10, 10, 2.0).unwrap();

    let peak0: f32 = grid
        .positions()
        .iter()
        .map(|p| p.y.abs())
        .fold(0.0, f32::max);

    for _ in 0..500 {
        grid.update(0.05);
    }

    let peak1: f32 = grid
        .positions()
        .iter()
        .map(|p| p.y.abs())
        .fold(0.0, f32::max);

    assert!(peak1.is_finite());
    assert!(peak1 < peak0 * 0.5, "阻尼应使振幅衰减: {peak0} -> {peak1}");
}

#[test]
fn test_stable_params_stay_bounded() {
    let mut grid = WaveGrid::new(&WaveParams::default()).unwrap();
    grid.disturb(100, 100, 2.0).unwrap();

    for _ in 0..200 {
        grid.update(0.03);
    }

    for p in grid.positions() {
        assert!(p.y.is_finite());
        assert!(p.y.abs() < 10.0);
    }
}
