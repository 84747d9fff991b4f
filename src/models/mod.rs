//! # 数据模型模块
//!
//! 定义重命名目标与重命名条目。
//!
//! ## 依赖关系
//! - 被 `batch/` 和 `commands/` 使用
//! - 子模块: rename

pub mod rename;

pub use rename::{RenameEntry, RenameTarget};
