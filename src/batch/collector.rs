//! # 文件收集器
//!
//! 根据目录和 glob 模式收集待重命名的目录项列表。
//!
//! ## 功能
//! - 只扫描目录顶层（不递归）
//! - 匹配任意类型的目录项：文件、子目录、符号链接（含失效链接）
//! - glob 模式匹配（`*` 不匹配以 `.` 开头的文件名）
//! - 非 UTF-8 文件名按有损转换后的名称匹配，仍保留原始路径
//! - 按文件名字典序排序，保证处理顺序可复现
//!
//! ## 依赖关系
//! - 被 `commands/rename.rs` 调用
//! - 使用 `walkdir` 遍历目录，`glob` 匹配文件名

use crate::error::{RenumberError, Result};

use glob::{MatchOptions, Pattern};
use std::path::PathBuf;
use walkdir::WalkDir;

/// 文件收集器
pub struct FileCollector {
    /// 输入目录
    dir: PathBuf,
    /// 匹配模式
    pattern: String,
}

impl FileCollector {
    /// 创建新的文件收集器（默认匹配所有文件）
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            pattern: "*".to_string(),
        }
    }

    /// 设置匹配模式
    pub fn with_pattern(mut self, pattern: &str) -> Self {
        self.pattern = pattern.to_string();
        self
    }

    /// 收集所有匹配的目录项，按文件名字典序返回
    pub fn collect(&self) -> Result<Vec<PathBuf>> {
        if !self.dir.is_dir() {
            return Err(RenumberError::DirectoryNotFound {
                path: self.dir.display().to_string(),
            });
        }

        let pattern = Pattern::new(&self.pattern).map_err(|e| {
            RenumberError::InvalidArgument(format!("Invalid pattern '{}': {}", self.pattern, e))
        })?;

        let options = MatchOptions {
            case_sensitive: true,
            require_literal_separator: true,
            require_literal_leading_dot: true,
        };

        let mut files = Vec::new();

        for entry in WalkDir::new(&self.dir).min_depth(1).max_depth(1) {
            let entry = entry.map_err(|e| RenumberError::DirectoryReadError {
                path: self.dir.display().to_string(),
                source: e,
            })?;

            // 不跟随符号链接，也不区分目录项类型
            let matched = pattern.matches_with(&entry.file_name().to_string_lossy(), options);
            if matched {
                files.push(entry.into_path());
            }
        }

        files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        Ok(files)
    }
}
