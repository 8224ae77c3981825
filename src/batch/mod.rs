//! # 批量输入模块
//!
//! 将混合的字面路径与 glob 模式展开为待处理文件列表。
//!
//! ## 依赖关系
//! - 被 `commands/rename.rs` 使用
//! - 使用 `glob` crate 做模式展开
//! - 子模块: expander

pub mod expander;

pub use expander::expand_inputs;
