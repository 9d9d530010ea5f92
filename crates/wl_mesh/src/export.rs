// crates/wl_mesh/src/export.rs

//! Wavefront OBJ 导出
//!
//! 将 [`MeshData`] 的三角形列表写出为文本 OBJ，便于在外部工具中
//! 检查生成结果。索引按瓦片解释的网格不适用本导出。

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use wl_foundation::{ensure, WlError, WlResult};

use crate::vertex::MeshData;

/// 将网格写入任意 `Write` 目标
///
/// 索引数不是 3 的倍数时返回错误。
pub fn export_obj<W: Write>(mesh: &MeshData, writer: &mut W) -> WlResult<()> {
    ensure!(
        mesh.indices.len() % 3 == 0,
        WlError::invalid_input("索引数不是 3 的倍数，无法按三角形列表导出")
    );

    writeln!(writer, "# wavelab mesh export")?;
    writeln!(
        writer,
        "# {} vertices, {} triangles",
        mesh.vertex_count(),
        mesh.triangle_count()
    )?;

    for v in &mesh.vertices {
        writeln!(
            writer,
            "v {} {} {}",
            v.position.x, v.position.y, v.position.z
        )?;
    }
    for v in &mesh.vertices {
        // OBJ 的 v 轴向上，与贴图坐标相反
        writeln!(writer, "vt {} {}", v.tex.x, 1.0 - v.tex.y)?;
    }
    for v in &mesh.vertices {
        writeln!(writer, "vn {} {} {}", v.normal.x, v.normal.y, v.normal.z)?;
    }

    for tri in mesh.indices.chunks_exact(3) {
        // OBJ 索引从 1 开始
        let (a, b, c) = (tri[0] + 1, tri[1] + 1, tri[2] + 1);
        writeln!(writer, "f {a}/{a}/{a} {b}/{b}/{b} {c}/{c}/{c}")?;
    }

    Ok(())
}

/// 将网格写入文件
pub fn save_obj(mesh: &MeshData, path: impl AsRef<Path>) -> WlResult<()> {
    let path = path.as_ref();
    let file = File::create(path)
        .map_err(|e| WlError::io_with_source(format!("无法创建 {}", path.display()), e))?;
    let mut writer = BufWriter::new(file);
    export_obj(mesh, &mut writer)?;
    writer.flush()?;
    Ok(())
}
