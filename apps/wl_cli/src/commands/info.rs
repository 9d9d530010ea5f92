// apps/wl_cli/src/commands/info.rs

//! 几何体信息命令
//!
//! 打印各生成器在给定参数下的顶点/索引/三角形规模。

use anyhow::Result;
use clap::{Args, ValueEnum};
use tracing::info;
use wl_mesh::{
    generate_box, generate_cylinder, generate_geosphere, generate_grid, generate_sphere,
    generate_tiled_grid, MeshData, TILE_CONTROL_POINTS,
};

/// 几何体类型
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shape {
    /// 盒体
    Box,
    /// UV 球
    Sphere,
    /// 测地球
    Geosphere,
    /// 圆柱
    Cylinder,
    /// 平面网格
    Grid,
    /// 互锁瓦片网格
    Tiles,
}

/// 信息命令参数
#[derive(Args)]
pub struct InfoArgs {
    /// 几何体类型
    #[arg(value_enum)]
    pub shape: Shape,

    /// 宽度 / 直径 [m]
    #[arg(long, default_value = "10.0")]
    pub width: f32,

    /// 高度 [m]
    #[arg(long, default_value = "10.0")]
    pub height: f32,

    /// 深度 [m]
    #[arg(long, default_value = "10.0")]
    pub depth: f32,

    /// 半径 [m]
    #[arg(long, default_value = "5.0")]
    pub radius: f32,

    /// 切片数（圆周方向）
    #[arg(long, default_value = "16")]
    pub slices: u32,

    /// 堆叠数（轴向）
    #[arg(long, default_value = "16")]
    pub stacks: u32,

    /// 细分层级（测地球）
    #[arg(long, default_value = "2")]
    pub subdivisions: u32,

    /// 行数（网格单元）
    #[arg(long, default_value = "50")]
    pub rows: usize,

    /// 列数（网格单元）
    #[arg(long, default_value = "50")]
    pub cols: usize,
}

/// 执行信息命令
pub fn execute(args: InfoArgs) -> Result<()> {
    let mesh: MeshData = match args.shape {
        Shape::Box => generate_box(args.width, args.height, args.depth),
        Shape::Sphere => generate_sphere(args.radius, args.slices, args.stacks),
        Shape::Geosphere => generate_geosphere(args.radius, args.subdivisions),
        Shape::Cylinder => {
            generate_cylinder(args.radius, args.radius * 0.5, args.height, args.slices, args.stacks)
        }
        Shape::Grid => generate_grid(args.width, args.depth, args.rows, args.cols),
        Shape::Tiles => generate_tiled_grid(args.width, args.depth, args.rows, args.cols),
    };

    info!("几何体: {:?}", args.shape);
    info!("顶点数: {}", mesh.vertex_count());
    info!("索引数: {}", mesh.index_count());
    match args.shape {
        Shape::Tiles => {
            info!("瓦片数: {}", mesh.index_count() / TILE_CONTROL_POINTS);
            info!("每瓦片控制点: {}", TILE_CONTROL_POINTS);
        }
        _ => info!("三角形数: {}", mesh.triangle_count()),
    }
    info!("顶点缓冲: {} 字节", mesh.vertex_bytes().len());
    info!("索引缓冲: {} 字节", mesh.index_bytes().len());

    Ok(())
}
