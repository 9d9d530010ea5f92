// crates/wl_scene/src/shader.rs

//! 着色器字节码加载
//!
//! 读取离线编译好的着色器二进制文件。文件内容不做解析，
//! 仅校验存在性与非空。

use std::fs;
use std::path::Path;

use wl_foundation::{ensure, WlError, WlResult};

/// 加载编译后的着色器字节码
pub fn load_bytecode(path: impl AsRef<Path>) -> WlResult<Vec<u8>> {
    let path = path.as_ref();
    ensure!(path.exists(), WlError::file_not_found(path));

    let bytes = fs::read(path)
        .map_err(|e| WlError::io_with_source(format!("读取 {} 失败", path.display()), e))?;
    ensure!(
        !bytes.is_empty(),
        WlError::invalid_input(format!("着色器字节码为空: {}", path.display()))
    );

    Ok(bytes)
}
