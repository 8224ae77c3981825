//! # 输入展开器
//!
//! 逐个展开输入 token：先尝试 glob 匹配（支持递归 `**`），
//! 零匹配或模式非法时回退为字面路径，交由后续重命名阶段
//! 判定是否存在。
//!
//! ## 功能
//! - glob 模式展开与字面路径回退
//! - 已存在路径规范化，跨不同写法去重
//! - 保持首次出现顺序
//!
//! ## 依赖关系
//! - 被 `commands/rename.rs` 调用
//! - 使用 `glob` crate

use std::collections::HashSet;
use std::path::PathBuf;

/// 展开字面路径与 glob 模式的混合列表
///
/// 去重基于规范化路径（仅对已存在的路径规范化），同一文件
/// 被多个模式覆盖时只处理一次；不存在的字面路径原样传递。
pub fn expand_inputs(inputs: &[String]) -> Vec<PathBuf> {
    let mut seen: HashSet<PathBuf> = HashSet::new();
    let mut results: Vec<PathBuf> = Vec::new();

    for item in inputs {
        let mut matches: Vec<PathBuf> = match glob::glob(item) {
            Ok(paths) => paths.filter_map(|entry| entry.ok()).collect(),
            // 非法模式与零匹配一样回退为字面路径
            Err(_) => Vec::new(),
        };

        if matches.is_empty() {
            matches.push(PathBuf::from(item));
        }

        for path in matches {
            let resolved = if path.exists() {
                path.canonicalize().unwrap_or(path)
            } else {
                path
            };
            if seen.insert(resolved.clone()) {
                results.push(resolved);
            }
        }
    }

    results
}
