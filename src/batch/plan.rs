//! # 重命名计划
//!
//! 将排好序的源文件列表映射为目标文件名，不触碰文件系统。
//!
//! 计划是源 -> 目标的双射：第 i 个源文件对应 `<prefix>_<start + i>.<ext>`。
//!
//! ## 依赖关系
//! - 被 `batch/runner.rs` 执行
//! - 被 `commands/rename.rs` 构建和预览
//! - 使用 `models/rename.rs`

use crate::error::{RenumberError, Result};
use crate::models::{RenameEntry, RenameTarget};

use std::path::PathBuf;

/// 有序的重命名计划
#[derive(Debug, Clone, Default)]
pub struct RenamePlan {
    entries: Vec<RenameEntry>,
}

impl RenamePlan {
    /// 按给定顺序为每个文件分配计数值
    ///
    /// 目标路径与源文件位于同一目录。
    pub fn build(files: Vec<PathBuf>, target: &RenameTarget, start: u64) -> Result<Self> {
        let count = files.len();
        if count > 0 {
            let last_offset = (count - 1) as u64;
            if start.checked_add(last_offset).is_none() {
                return Err(RenumberError::CounterOverflow { start, count });
            }
        }

        let entries = files
            .into_iter()
            .enumerate()
            .map(|(i, source)| {
                let counter = start + i as u64;
                let target_path = source.with_file_name(target.file_name(counter));
                RenameEntry {
                    source,
                    target: target_path,
                    counter,
                }
            })
            .collect();

        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[RenameEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 计数值范围（首, 尾），空计划返回 None
    pub fn counter_range(&self) -> Option<(u64, u64)> {
        match (self.entries.first(), self.entries.last()) {
            (Some(first), Some(last)) => Some((first.counter, last.counter)),
            _ => None,
        }
    }
}
