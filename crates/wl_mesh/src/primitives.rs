// crates/wl_mesh/src/primitives.rs

//! 基本几何体生成器
//!
//! 提供盒体、UV 球、测地球（二十面体细分）与圆柱的闭式参数化采样。
//! 所有函数为纯函数，输出大小由参数唯一确定。

use std::collections::HashMap;
use std::f32::consts::PI;

use glam::{Vec2, Vec3};

use crate::vertex::{MeshData, Vertex};

/// 测地球细分层级上限，防止组合爆炸
pub const MAX_GEOSPHERE_SUBDIVISIONS: u32 = 6;

// ============================================================================
// 盒体
// ============================================================================

/// 生成以原点为中心的盒体
///
/// 每面 4 个独立顶点（法线/切线逐面），共 24 顶点 / 36 索引。
pub fn generate_box(width: f32, height: f32, depth: f32) -> MeshData {
    let w = 0.5 * width;
    let h = 0.5 * height;
    let d = 0.5 * depth;

    let mut mesh = MeshData::with_capacity(24, 36);

    // 每面按左下、左上、右上、右下的顺序给出角点
    // +z 面（远面）
    push_face(
        &mut mesh,
        [
            Vec3::new(w, -h, d),
            Vec3::new(w, h, d),
            Vec3::new(-w, h, d),
            Vec3::new(-w, -h, d),
        ],
        Vec3::Z,
        Vec3::NEG_X,
    );
    // -z 面（近面）
    push_face(
        &mut mesh,
        [
            Vec3::new(-w, -h, -d),
            Vec3::new(-w, h, -d),
            Vec3::new(w, h, -d),
            Vec3::new(w, -h, -d),
        ],
        Vec3::NEG_Z,
        Vec3::X,
    );
    // +y 面（顶面）
    push_face(
        &mut mesh,
        [
            Vec3::new(-w, h, -d),
            Vec3::new(-w, h, d),
            Vec3::new(w, h, d),
            Vec3::new(w, h, -d),
        ],
        Vec3::Y,
        Vec3::X,
    );
    // -y 面（底面）
    push_face(
        &mut mesh,
        [
            Vec3::new(-w, -h, d),
            Vec3::new(-w, -h, -d),
            Vec3::new(w, -h, -d),
            Vec3::new(w, -h, d),
        ],
        Vec3::NEG_Y,
        Vec3::NEG_X,
    );
    // -x 面（左面）
    push_face(
        &mut mesh,
        [
            Vec3::new(-w, -h, d),
            Vec3::new(-w, h, d),
            Vec3::new(-w, h, -d),
            Vec3::new(-w, -h, -d),
        ],
        Vec3::NEG_X,
        Vec3::NEG_Z,
    );
    // +x 面（右面）
    push_face(
        &mut mesh,
        [
            Vec3::new(w, -h, -d),
            Vec3::new(w, h, -d),
            Vec3::new(w, h, d),
            Vec3::new(w, -h, d),
        ],
        Vec3::X,
        Vec3::Z,
    );

    mesh
}

/// 追加一个四边形面：两个三角形
fn push_face(mesh: &mut MeshData, corners: [Vec3; 4], normal: Vec3, tangent: Vec3) {
    let base = mesh.vertices.len() as u32;
    let uvs = [
        Vec2::new(0.0, 1.0),
        Vec2::new(0.0, 0.0),
        Vec2::new(1.0, 0.0),
        Vec2::new(1.0, 1.0),
    ];
    for (corner, uv) in corners.into_iter().zip(uvs) {
        mesh.vertices.push(Vertex::new(corner, normal, tangent, uv));
    }
    mesh.indices
        .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
}

// ============================================================================
// UV 球
// ============================================================================

/// 生成以原点为中心的 UV 球
///
/// 顶点数 `2 + (stacks-1)(slices+1)`；两极各一个顶点，
/// 中间为 `stacks-1` 圈、每圈 `slices+1` 个顶点（首尾重复以闭合纹理缝）。
pub fn generate_sphere(radius: f32, slices: u32, stacks: u32) -> MeshData {
    let slices = slices.max(3);
    let stacks = stacks.max(2);

    let mut mesh = MeshData::new();

    // 北极
    mesh.vertices.push(Vertex::new(
        Vec3::new(0.0, radius, 0.0),
        Vec3::Y,
        Vec3::X,
        Vec2::ZERO,
    ));

    let phi_step = PI / stacks as f32;
    let theta_step = 2.0 * PI / slices as f32;

    for i in 1..stacks {
        let phi = i as f32 * phi_step;
        for j in 0..=slices {
            let theta = j as f32 * theta_step;

            let position = Vec3::new(
                radius * phi.sin() * theta.cos(),
                radius * phi.cos(),
                radius * phi.sin() * theta.sin(),
            );
            let tangent = Vec3::new(-phi.sin() * theta.sin(), 0.0, phi.sin() * theta.cos())
                .normalize_or_zero();
            let normal = position.normalize();
            let tex = Vec2::new(theta / (2.0 * PI), phi / PI);

            mesh.vertices.push(Vertex::new(position, normal, tangent, tex));
        }
    }

    // 南极
    mesh.vertices.push(Vertex::new(
        Vec3::new(0.0, -radius, 0.0),
        Vec3::NEG_Y,
        Vec3::X,
        Vec2::new(0.0, 1.0),
    ));

    // 北极扇
    for j in 1..=slices {
        mesh.indices.extend_from_slice(&[0, j + 1, j]);
    }

    // 中间环带
    let ring = slices + 1;
    let base = 1u32;
    for i in 0..stacks - 2 {
        for j in 0..slices {
            let a = base + i * ring + j;
            let b = base + i * ring + j + 1;
            let c = base + (i + 1) * ring + j;
            let d = base + (i + 1) * ring + j + 1;
            mesh.indices.extend_from_slice(&[a, b, d, a, d, c]);
        }
    }

    // 南极扇
    let south = mesh.vertices.len() as u32 - 1;
    let last_ring = south - ring;
    for j in 0..slices {
        mesh.indices
            .extend_from_slice(&[south, last_ring + j, last_ring + j + 1]);
    }

    mesh
}

// ============================================================================
// 测地球
// ============================================================================

/// 生成测地球：二十面体递归细分后投影到球面
///
/// 细分层级 0 为基础二十面体（12 顶点 / 60 索引），
/// 每提高一级三角形数 ×4。层级超过
/// [`MAX_GEOSPHERE_SUBDIVISIONS`] 时按上限截断。
pub fn generate_geosphere(radius: f32, subdivisions: u32) -> MeshData {
    let subdivisions = subdivisions.min(MAX_GEOSPHERE_SUBDIVISIONS);

    // 基础二十面体：黄金矩形构造
    const X: f32 = 0.525_731;
    const Z: f32 = 0.850_651;

    let mut positions: Vec<Vec3> = vec![
        Vec3::new(-X, 0.0, Z),
        Vec3::new(X, 0.0, Z),
        Vec3::new(-X, 0.0, -Z),
        Vec3::new(X, 0.0, -Z),
        Vec3::new(0.0, Z, X),
        Vec3::new(0.0, Z, -X),
        Vec3::new(0.0, -Z, X),
        Vec3::new(0.0, -Z, -X),
        Vec3::new(Z, X, 0.0),
        Vec3::new(-Z, X, 0.0),
        Vec3::new(Z, -X, 0.0),
        Vec3::new(-Z, -X, 0.0),
    ];

    let mut indices: Vec<u32> = vec![
        1, 4, 0, 4, 9, 0, 4, 5, 9, 8, 5, 4, 1, 8, 4, //
        1, 10, 8, 10, 3, 8, 8, 3, 5, 3, 2, 5, 3, 7, 2, //
        3, 10, 7, 10, 6, 7, 6, 11, 7, 6, 0, 11, 6, 1, 0, //
        10, 1, 6, 11, 0, 9, 2, 11, 9, 5, 2, 9, 11, 2, 7,
    ];

    for _ in 0..subdivisions {
        subdivide(&mut positions, &mut indices);
    }

    // 投影到球面并补全属性
    let mut mesh = MeshData::with_capacity(positions.len(), indices.len());
    for p in positions {
        let normal = p.normalize();
        let position = normal * radius;

        let mut theta = position.z.atan2(position.x);
        if theta < 0.0 {
            theta += 2.0 * PI;
        }
        let phi = (position.y / radius).clamp(-1.0, 1.0).acos();

        let tangent =
            Vec3::new(-phi.sin() * theta.sin(), 0.0, phi.sin() * theta.cos()).normalize_or(Vec3::X);
        let tex = Vec2::new(theta / (2.0 * PI), phi / PI);

        mesh.vertices.push(Vertex::new(position, normal, tangent, tex));
    }
    mesh.indices = indices;

    mesh
}

/// 对三角形网格做一次 1→4 细分，中点顶点按边去重
fn subdivide(positions: &mut Vec<Vec3>, indices: &mut Vec<u32>) {
    let mut midpoints: HashMap<(u32, u32), u32> = HashMap::new();
    let mut midpoint = |a: u32, b: u32, positions: &mut Vec<Vec3>| -> u32 {
        let key = if a < b { (a, b) } else { (b, a) };
        *midpoints.entry(key).or_insert_with(|| {
            let m = (positions[a as usize] + positions[b as usize]) * 0.5;
            positions.push(m);
            positions.len() as u32 - 1
        })
    };

    let old = std::mem::take(indices);
    indices.reserve(old.len() * 4);
    for tri in old.chunks_exact(3) {
        let (a, b, c) = (tri[0], tri[1], tri[2]);
        let ab = midpoint(a, b, positions);
        let bc = midpoint(b, c, positions);
        let ca = midpoint(c, a, positions);
        indices.extend_from_slice(&[
            a, ab, ca, //
            ab, b, bc, //
            ca, bc, c, //
            ab, bc, ca,
        ]);
    }
}

// ============================================================================
// 圆柱
// ============================================================================

/// 生成沿 y 轴、以原点为中心的圆柱（含上下端盖）
///
/// 侧面顶点数 `(stacks+1)(slices+1)`，两端盖各 `slices+2`。
/// 上下半径可不同，法线按母线斜率计算。
pub fn generate_cylinder(
    bottom_radius: f32,
    top_radius: f32,
    height: f32,
    slices: u32,
    stacks: u32,
) -> MeshData {
    let slices = slices.max(3);
    let stacks = stacks.max(1);

    let mut mesh = MeshData::new();

    let stack_height = height / stacks as f32;
    let radius_step = (top_radius - bottom_radius) / stacks as f32;
    let theta_step = 2.0 * PI / slices as f32;
    let dr = bottom_radius - top_radius;

    // 侧面环
    for i in 0..=stacks {
        let y = -0.5 * height + i as f32 * stack_height;
        let r = bottom_radius + i as f32 * radius_step;

        for j in 0..=slices {
            let theta = j as f32 * theta_step;
            let (s, c) = theta.sin_cos();

            let position = Vec3::new(r * c, y, r * s);
            let tangent = Vec3::new(-s, 0.0, c);
            // 母线方向，与切线叉乘得到外法线
            let bitangent = Vec3::new(dr * c, -height, dr * s);
            let normal = tangent.cross(bitangent).normalize();
            let tex = Vec2::new(j as f32 / slices as f32, 1.0 - i as f32 / stacks as f32);

            mesh.vertices.push(Vertex::new(position, normal, tangent, tex));
        }
    }

    let ring = slices + 1;
    for i in 0..stacks {
        for j in 0..slices {
            let a = i * ring + j;
            let b = (i + 1) * ring + j;
            let c = (i + 1) * ring + j + 1;
            let d = i * ring + j + 1;
            mesh.indices.extend_from_slice(&[a, b, c, a, c, d]);
        }
    }

    push_cap(&mut mesh, top_radius, 0.5 * height, slices, theta_step, true);
    push_cap(
        &mut mesh,
        bottom_radius,
        -0.5 * height,
        slices,
        theta_step,
        false,
    );

    mesh
}

/// 追加端盖：一圈顶点 + 中心点的三角形扇
fn push_cap(mesh: &mut MeshData, radius: f32, y: f32, slices: u32, theta_step: f32, top: bool) {
    let base = mesh.vertices.len() as u32;
    let normal = if top { Vec3::Y } else { Vec3::NEG_Y };

    for j in 0..=slices {
        let theta = j as f32 * theta_step;
        let x = radius * theta.cos();
        let z = radius * theta.sin();
        // 端盖纹理按平面投影，范围随半径缩放
        let tex = Vec2::new(x / radius.max(1e-6) * 0.5 + 0.5, z / radius.max(1e-6) * 0.5 + 0.5);
        mesh.vertices
            .push(Vertex::new(Vec3::new(x, y, z), normal, Vec3::X, tex));
    }
    // 中心点
    let center = mesh.vertices.len() as u32;
    mesh.vertices.push(Vertex::new(
        Vec3::new(0.0, y, 0.0),
        normal,
        Vec3::X,
        Vec2::new(0.5, 0.5),
    ));

    for j in 0..slices {
        if top {
            mesh.indices.extend_from_slice(&[center, base + j + 1, base + j]);
        } else {
            mesh.indices.extend_from_slice(&[center, base + j, base + j + 1]);
        }
    }
}

// ============================================================================
// 测试
// ============================================================================
