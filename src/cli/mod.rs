//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数。工具只有一种操作，
//! 不设子命令，路径与模式直接作为顶层位置参数。
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 参数传递给 `commands/rename.rs`

use clap::Parser;

/// zipren - ZIP 归档批量重命名工具
#[derive(Parser, Debug)]
#[command(name = "zipren")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(
    about = "Rename ZIP archives to another extension (default .ben). Supports globs.",
    long_about = None
)]
pub struct Cli {
    /// File paths or glob patterns to process (e.g., uploads/*.zip)
    pub paths: Vec<String>,

    /// Glob pattern(s) of files to rename. Can be given multiple times
    #[arg(short, long)]
    pub pattern: Vec<String>,

    /// Target extension
    #[arg(short, long, default_value = ".ben")]
    pub to: String,

    /// Overwrite destination if it exists. Without this, a numeric suffix is added
    #[arg(short, long, default_value_t = false)]
    pub force: bool,

    /// Do not verify that the input files are ZIP archives
    #[arg(long, default_value_t = false)]
    pub no_verify: bool,

    /// Show what would happen without making changes
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,
}
