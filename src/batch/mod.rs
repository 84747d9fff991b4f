//! # 批量重命名模块
//!
//! 提供文件收集、重命名计划与串行执行。
//!
//! ## 功能
//! - 收集目录中匹配的文件并排序
//! - 生成源 -> 目标映射
//! - 逐个执行重命名
//!
//! ## 依赖关系
//! - 被 `commands/rename.rs` 使用
//! - 使用 `walkdir`, `glob` 收集文件

pub mod collector;
pub mod plan;
pub mod runner;

pub use collector::FileCollector;
pub use plan::RenamePlan;
pub use runner::{BatchRenamer, BatchResult, RenameMode};
