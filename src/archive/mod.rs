//! # 归档检测模块
//!
//! 判断文件是否为结构完整的 ZIP 容器。
//!
//! 检测只读取归档目录结构，不解压、不校验条目内容。
//!
//! ## 依赖关系
//! - 被 `rename/engine.rs` 使用
//! - 使用 `zip` crate 解析中央目录

use std::fs::File;
use std::path::Path;
use zip::ZipArchive;

/// 判断文件是否为合法 ZIP 归档
///
/// 任何 I/O 或格式错误都视为「不是 ZIP」，本函数不会失败。
pub fn is_zip_file(path: &Path) -> bool {
    let file = match File::open(path) {
        Ok(f) => f,
        Err(_) => return false,
    };
    ZipArchive::new(file).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Write;
    use zip::write::SimpleFileOptions;
    use zip::ZipWriter;

    fn write_zip(path: &Path, entries: &[(&str, &[u8])]) {
        let file = fs::File::create(path).unwrap();
        let mut writer = ZipWriter::new(file);
        for (name, data) in entries {
            writer
                .start_file(name.to_string(), SimpleFileOptions::default())
                .unwrap();
            writer.write_all(data).unwrap();
        }
        writer.finish().unwrap();
    }

    #[test]
    fn test_accepts_real_zip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ok.zip");
        write_zip(&path, &[("a.txt", b"hello")]);
        assert!(is_zip_file(&path));
    }

    #[test]
    fn test_accepts_empty_archive() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.zip");
        write_zip(&path, &[]);
        assert!(is_zip_file(&path));
    }

    #[test]
    fn test_rejects_text_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("note.zip");
        fs::write(&path, b"this is not an archive").unwrap();
        assert!(!is_zip_file(&path));
    }

    #[test]
    fn test_rejects_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("zero.zip");
        fs::write(&path, b"").unwrap();
        assert!(!is_zip_file(&path));
    }

    #[test]
    fn test_rejects_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        assert!(!is_zip_file(&dir.path().join("nowhere.zip")));
    }
}
