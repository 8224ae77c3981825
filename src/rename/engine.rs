//! # 重命名引擎
//!
//! 对单个文件执行扩展名变更：跳过 / 重命名 / 覆盖 / 预览。
//!
//! ## 功能
//! - 常规文件校验与可选 ZIP 结构校验
//! - dry-run 预览，不触碰文件系统
//! - 覆盖模式下原子替换，否则自动递增后缀避让冲突
//!
//! ## 依赖关系
//! - 被 `commands/rename.rs` 调用
//! - 使用 `archive/` 做 ZIP 校验
//! - 使用 `utils/path.rs` 做扩展名归一化与冲突避让

use crate::archive;
use crate::error::Result;
use crate::utils::path as path_util;

use std::fs;
use std::path::Path;

/// 单文件处理结果
///
/// 每个变体携带面向用户的结果消息；只有 `Renamed`
/// （含 dry-run 预览）计为成功。
#[derive(Debug, Clone)]
pub enum RenameOutcome {
    /// 重命名成功（或 dry-run 预览）
    Renamed(String),
    /// 跳过（非常规文件 / 未通过 ZIP 校验）
    Skipped(String),
    /// 重命名系统调用失败
    Failed(String),
}

impl RenameOutcome {
    /// 该结果是否计为成功
    pub fn is_ok(&self) -> bool {
        matches!(self, RenameOutcome::Renamed(_))
    }

    /// 结果消息
    pub fn message(&self) -> &str {
        match self {
            RenameOutcome::Renamed(msg)
            | RenameOutcome::Skipped(msg)
            | RenameOutcome::Failed(msg) => msg,
        }
    }
}

/// 重命名选项
#[derive(Debug, Clone, Copy)]
pub struct RenameOptions {
    /// 是否校验 ZIP 结构
    pub verify_zip: bool,
    /// 目标存在时是否覆盖
    pub overwrite: bool,
    /// 仅预览，不执行
    pub dry_run: bool,
}

/// 将单个文件的扩展名变更为 `new_extension`
///
/// 预期内的失败（跳过、重命名失败）折算进 `RenameOutcome`；
/// 只有归一化后仍然非法的扩展名才返回 `Err`，CLI 层已先行
/// 校验过，这里属于调用方缺陷。
pub fn change_extension(
    path: &Path,
    new_extension: &str,
    opts: RenameOptions,
) -> Result<RenameOutcome> {
    if !path.is_file() {
        return Ok(RenameOutcome::Skipped(format!(
            "Skip: '{}' is not a file.",
            path.display()
        )));
    }

    // 防御性归一化；CLI 默认值保证非空
    let ext = path_util::ensure_dot_prefix(new_extension)?;

    if opts.verify_zip && !archive::is_zip_file(path) {
        return Ok(RenameOutcome::Skipped(format!(
            "Skip: '{}' is not a valid ZIP (use --no-verify to force).",
            path.display()
        )));
    }

    // 只替换最后一段后缀，目录与主干保持不变
    let dst = path.with_extension(ext.trim_start_matches('.'));

    if opts.dry_run {
        let exists_note = if opts.overwrite && dst.exists() {
            " (will overwrite)"
        } else {
            ""
        };
        return Ok(RenameOutcome::Renamed(format!(
            "Would rename: {} -> {}{}",
            file_name(path),
            file_name(&dst),
            exists_note
        )));
    }

    if opts.overwrite && dst.exists() {
        // fs::rename 在 Unix 与 Windows 上均原子替换已有目标
        return Ok(match fs::rename(path, &dst) {
            Ok(()) => RenameOutcome::Renamed(format!(
                "Renamed (overwrote): {} -> {}",
                file_name(path),
                file_name(&dst)
            )),
            Err(e) => RenameOutcome::Failed(format!(
                "Error renaming '{}': {}",
                path.display(),
                e
            )),
        });
    }

    let final_dst = if opts.overwrite {
        dst.clone()
    } else {
        path_util::next_available_path(&dst)
    };

    Ok(match fs::rename(path, &final_dst) {
        Ok(()) => {
            let suffix_note = if final_dst == dst {
                String::new()
            } else {
                format!(" (renamed to avoid conflict: {})", file_name(&final_dst))
            };
            RenameOutcome::Renamed(format!(
                "Renamed: {} -> {}{}",
                file_name(path),
                file_name(&final_dst),
                suffix_note
            ))
        }
        Err(e) => RenameOutcome::Failed(format!(
            "Error renaming '{}': {}",
            path.display(),
            e
        )),
    })
}

/// 取路径末段用于结果消息
fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
