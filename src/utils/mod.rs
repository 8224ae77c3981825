//! # 工具函数模块
//!
//! 提供美化输出和路径处理工具。
//!
//! ## 依赖关系
//! - 被 `commands/`, `rename/` 模块使用
//! - 子模块: output, path

pub mod output;
pub mod path;
