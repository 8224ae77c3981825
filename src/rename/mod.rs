//! # 重命名模块
//!
//! 单文件扩展名变更的决策与执行。
//!
//! ## 依赖关系
//! - 被 `commands/rename.rs` 使用
//! - 子模块: engine

pub mod engine;

pub use engine::{change_extension, RenameOptions, RenameOutcome};
