//! # zipren - ZIP 归档批量重命名工具
//!
//! 将 .zip 文件批量重命名为指定扩展名（默认 .ben）。
//!
//! ## 功能
//! - glob 模式与字面路径混合输入
//! - 可选 ZIP 结构校验
//! - 冲突自动避让或强制覆盖
//! - dry-run 预览
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   ├── batch/      (输入展开)
//!   ├── rename/     (重命名引擎)
//!   ├── archive/    (ZIP 结构检测)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod archive;
mod batch;
mod cli;
mod commands;
mod error;
mod rename;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    match commands::run(cli) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            utils::output::print_error(&format!("{}", e));
            std::process::exit(1);
        }
    }
}
