//! # 统一错误处理模块
//!
//! 定义 renumber 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// renumber 统一错误类型
#[derive(Error, Debug)]
pub enum RenumberError {
    // ─────────────────────────────────────────────────────────────
    // 目录错误
    // ─────────────────────────────────────────────────────────────
    #[error("Directory not found: {path}")]
    DirectoryNotFound { path: String },

    #[error("Failed to read directory: {path}")]
    DirectoryReadError {
        path: String,
        #[source]
        source: walkdir::Error,
    },

    // ─────────────────────────────────────────────────────────────
    // 重命名错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to rename '{from}' -> '{to}'")]
    RenameFailed {
        from: String,
        to: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Staging name already exists: {path}")]
    StagingNameTaken { path: String },

    #[error("Failed to write progress output")]
    OutputError(#[source] std::io::Error),

    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Counter overflow: start {start} + {count} file(s) exceeds u64::MAX")]
    CounterOverflow { start: u64, count: usize },
}

impl RenumberError {
    /// 包含底层错误原因的完整消息
    pub fn full_message(&self) -> String {
        use std::error::Error as _;

        let mut msg = self.to_string();
        let mut cause = self.source();
        while let Some(err) = cause {
            msg.push_str(&format!("\nCaused by: {}", err));
            cause = err.source();
        }
        msg
    }
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, RenumberError>;
