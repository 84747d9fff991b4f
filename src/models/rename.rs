//! # 重命名目标数据模型
//!
//! 描述目标文件名的构成：`<prefix>_<counter>.<extension>`。
//!
//! ## 依赖关系
//! - 被 `batch/collector.rs`, `batch/plan.rs`, `batch/runner.rs` 使用
//! - 被 `commands/rename.rs` 使用

use crate::error::{RenumberError, Result};

use std::path::PathBuf;

/// glob 元字符，不允许出现在扩展名中
const GLOB_META: &[char] = &['*', '?', '[', ']', '{', '}', '!'];

/// 重命名目标（前缀 + 扩展名）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameTarget {
    /// 目标文件名前缀，如 `audio`
    prefix: String,
    /// 扩展名（不含前导点），如 `json`
    extension: String,
}

impl RenameTarget {
    /// 创建并校验重命名目标
    ///
    /// 扩展名允许带一个前导点（`.wav` 与 `wav` 等价）。
    pub fn new(prefix: &str, extension: &str) -> Result<Self> {
        let extension = extension.strip_prefix('.').unwrap_or(extension);

        if extension.is_empty() {
            return Err(RenumberError::InvalidArgument(
                "extension must not be empty".to_string(),
            ));
        }
        if extension.contains(std::path::is_separator) || extension.contains(GLOB_META) {
            return Err(RenumberError::InvalidArgument(format!(
                "invalid extension '{}'",
                extension
            )));
        }
        if prefix.is_empty() {
            return Err(RenumberError::InvalidArgument(
                "prefix must not be empty".to_string(),
            ));
        }
        if prefix.contains(std::path::is_separator) {
            return Err(RenumberError::InvalidArgument(format!(
                "prefix '{}' must not contain a path separator",
                prefix
            )));
        }

        Ok(Self {
            prefix: prefix.to_string(),
            extension: extension.to_string(),
        })
    }

    /// 源文件匹配模式，如 `*.json`
    pub fn pattern(&self) -> String {
        format!("*.{}", self.extension)
    }

    /// 第 `counter` 号目标文件名
    pub fn file_name(&self, counter: u64) -> String {
        format!("{}_{}.{}", self.prefix, counter, self.extension)
    }
}

/// 单个文件的重命名条目
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameEntry {
    /// 原路径
    pub source: PathBuf,
    /// 目标路径（与原路径同目录）
    pub target: PathBuf,
    /// 分配的计数值
    pub counter: u64,
}

impl RenameEntry {
    /// 原文件名（用于输出）
    pub fn source_name(&self) -> String {
        file_name_lossy(&self.source)
    }

    /// 目标文件名（用于输出）
    pub fn target_name(&self) -> String {
        file_name_lossy(&self.target)
    }
}

fn file_name_lossy(path: &std::path::Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
