//! # rename 命令实现
//!
//! 批量重命名 ZIP 归档的扩展名。
//!
//! ## 功能
//! - 合并位置参数与 --pattern 输入并展开
//! - 逐文件调用重命名引擎并打印结果行
//! - 汇总统计并折算进程退出码
//!
//! ## 依赖关系
//! - 使用 `cli/mod.rs` 定义的参数
//! - 使用 `batch/`, `rename/`
//! - 使用 `utils/output.rs`, `utils/path.rs`

use crate::batch;
use crate::cli::Cli;
use crate::error::Result;
use crate::rename::{change_extension, RenameOptions, RenameOutcome};
use crate::utils::output;
use crate::utils::path as path_util;

/// 批量处理结果统计
#[derive(Debug, Default)]
struct RenameStats {
    /// 成功数量（含 dry-run 预览）
    renamed: usize,
    /// 跳过数量
    skipped: usize,
    /// 失败数量
    failed: usize,
}

impl RenameStats {
    /// 合并单文件结果
    fn merge(&mut self, outcome: &RenameOutcome) {
        match outcome {
            RenameOutcome::Renamed(_) => self.renamed += 1,
            RenameOutcome::Skipped(_) => self.skipped += 1,
            RenameOutcome::Failed(_) => self.failed += 1,
        }
    }
}

/// 执行批量重命名，返回进程退出码
///
/// 0 = 全部成功；1 = 存在失败/跳过，或输入未命中任何现存路径；
/// 2 = 完全没有提供输入。
pub fn execute(cli: Cli) -> Result<i32> {
    // 先行校验目标扩展名，非法参数立即终止
    let ext = path_util::ensure_dot_prefix(&cli.to)?;

    let mut inputs = cli.paths.clone();
    inputs.extend(cli.pattern.iter().cloned());

    if inputs.is_empty() {
        output::print_warning("No inputs provided. Specify files or use --pattern.");
        return Ok(2);
    }

    let files = batch::expand_inputs(&inputs);

    // 所有 token 都未命中磁盘上的现存路径，视为解析落空
    if !files.iter().any(|p| p.exists()) {
        output::print_warning("No files matched the provided paths/patterns.");
        return Ok(1);
    }

    if cli.dry_run {
        output::print_info("Dry run: no changes will be made");
    }
    output::print_info(&format!("Found {} file(s) to process", files.len()));

    let opts = RenameOptions {
        verify_zip: !cli.no_verify,
        overwrite: cli.force,
        dry_run: cli.dry_run,
    };

    let mut stats = RenameStats::default();
    let mut overall_ok = true;
    for file in &files {
        let outcome = change_extension(file, &ext, opts)?;
        match &outcome {
            RenameOutcome::Renamed(_) => output::print_success(outcome.message()),
            RenameOutcome::Skipped(_) => output::print_skip(outcome.message()),
            RenameOutcome::Failed(_) => output::print_failed(outcome.message()),
        }
        overall_ok = overall_ok && outcome.is_ok();
        stats.merge(&outcome);
    }

    output::print_done(&format!(
        "{} renamed, {} skipped, {} failed",
        stats.renamed, stats.skipped, stats.failed
    ));

    Ok(if overall_ok { 0 } else { 1 })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn cli(paths: Vec<String>, pattern: Vec<String>) -> Cli {
        Cli {
            paths,
            pattern,
            to: ".ben".to_string(),
            force: false,
            no_verify: false,
            dry_run: false,
        }
    }

    #[test]
    fn test_no_inputs_is_usage_error() {
        let code = execute(cli(vec![], vec![])).unwrap();
        assert_eq!(code, 2);
    }

    #[test]
    fn test_unmatched_pattern_is_resolution_miss() {
        let dir = tempfile::tempdir().unwrap();
        let pattern = format!("{}/*.zip", dir.path().display());

        let code = execute(cli(vec![], vec![pattern])).unwrap();
        assert_eq!(code, 1);
    }

    #[test]
    fn test_successful_batch_exits_zero() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.zip"), b"raw").unwrap();

        let mut args = cli(vec![dir.path().join("a.zip").display().to_string()], vec![]);
        args.no_verify = true;

        let code = execute(args).unwrap();
        assert_eq!(code, 0);
        assert!(dir.path().join("a.ben").exists());
    }

    #[test]
    fn test_skipped_file_yields_failure_exit() {
        let dir = tempfile::tempdir().unwrap();
        // 非 ZIP 内容，校验开启时被跳过
        fs::write(dir.path().join("a.zip"), b"raw").unwrap();

        let code = execute(cli(
            vec![dir.path().join("a.zip").display().to_string()],
            vec![],
        ))
        .unwrap();
        assert_eq!(code, 1);
        assert!(dir.path().join("a.zip").exists());
    }

    #[test]
    fn test_invalid_extension_propagates() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.zip"), b"raw").unwrap();

        let mut args = cli(vec![dir.path().join("a.zip").display().to_string()], vec![]);
        args.to = "  ".to_string();

        assert!(execute(args).is_err());
    }
}
