//! # 路径处理工具
//!
//! 提供扩展名归一化与冲突避免路径生成。
//!
//! ## 功能
//! - 扩展名点前缀归一化与合法性校验
//! - 目标路径冲突时生成 `stem-1.ext`, `stem-2.ext`, … 递增候选
//!
//! ## 依赖关系
//! - 被 `commands/rename.rs` 和 `rename/engine.rs` 使用
//! - 无外部模块依赖

use crate::error::{Result, ZiprenError};
use std::path::{Path, PathBuf};

/// 归一化扩展名：去除首尾空白，补全点前缀
///
/// 空白或含路径分隔符的扩展名视为参数错误。
pub fn ensure_dot_prefix(ext: &str) -> Result<String> {
    let ext = ext.trim();
    if ext.is_empty() || ext == "." {
        return Err(ZiprenError::InvalidArgument(
            "Extension cannot be empty.".to_string(),
        ));
    }
    if ext.contains('/') || ext.contains('\\') {
        return Err(ZiprenError::InvalidArgument(format!(
            "Extension cannot contain path separators: '{}'",
            ext
        )));
    }
    if ext.starts_with('.') {
        Ok(ext.to_string())
    } else {
        Ok(format!(".{}", ext))
    }
}

/// 返回不与现有文件冲突的目标路径
///
/// `target` 不存在时原样返回；否则在扩展名前插入 `-1`, `-2`, …
/// 递增后缀直到找到未占用的路径。与外部进程的竞争不做保证。
pub fn next_available_path(target: &Path) -> PathBuf {
    if !target.exists() {
        return target.to_path_buf();
    }

    let stem = target
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let suffix = target
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default();

    let mut i: u64 = 1;
    loop {
        let candidate = target.with_file_name(format!("{}-{}{}", stem, i, suffix));
        if !candidate.exists() {
            return candidate;
        }
        i += 1;
    }
}
