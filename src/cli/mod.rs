//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `json`: 重编号 `*.json` 文件
//! - `wav`: 重编号 `*.wav` 文件
//! - `ext`: 重编号任意扩展名的文件
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: rename

pub mod rename;

use clap::{Parser, Subcommand};

/// renumber - 批量顺序重命名工具
#[derive(Parser)]
#[command(name = "renumber")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(about = "Rename files in a directory to <prefix>_<n>.<ext> in sorted order", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Renumber *.json files to audio_<n>.json
    Json(rename::RenameArgs),

    /// Renumber *.wav files to audio_<n>.wav
    Wav(rename::RenameArgs),

    /// Renumber files of any extension
    Ext(rename::ExtArgs),
}
