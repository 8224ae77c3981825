//! # 统一错误处理模块
//!
//! 定义 zipren 的所有错误类型，使用 `thiserror` 派生。
//!
//! 预期内的单文件失败（跳过、重命名失败）不是错误，由
//! `rename::RenameOutcome` 承载并折算进退出码；此处只保留
//! 会终止整个进程的参数类错误。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// zipren 统一错误类型
#[derive(Error, Debug)]
pub enum ZiprenError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, ZiprenError>;
