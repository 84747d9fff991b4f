//! # 重命名子命令 CLI 定义
//!
//! `json`、`wav` 与 `ext` 三个子命令共用同一组参数。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/rename.rs`

use clap::Args;
use std::path::PathBuf;

/// 默认起始计数
pub const DEFAULT_START: u64 = 8000;

/// 默认目标前缀
pub const DEFAULT_PREFIX: &str = "audio";

/// 重命名公共参数
#[derive(Args, Debug, Clone)]
pub struct RenameArgs {
    /// Directory containing the files to renumber
    #[arg(short, long, env = "RENUMBER_DIR", default_value = ".")]
    pub dir: PathBuf,

    /// First counter value
    #[arg(short, long, env = "RENUMBER_START", default_value_t = DEFAULT_START)]
    pub start: u64,

    /// Prefix of the new file names (<prefix>_<n>.<ext>)
    #[arg(short, long, env = "RENUMBER_PREFIX", default_value = DEFAULT_PREFIX)]
    pub prefix: String,

    /// Print the rename plan without touching any file
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,

    /// Rename through hidden temporary names first to avoid clobbering
    #[arg(long, default_value_t = false)]
    pub two_pass: bool,

    /// Do not draw the progress bar
    #[arg(long, default_value_t = false)]
    pub no_progress: bool,
}

/// ext 子命令参数
#[derive(Args, Debug, Clone)]
pub struct ExtArgs {
    /// File extension to match (e.g. "flac" matches *.flac)
    pub extension: String,

    #[command(flatten)]
    pub common: RenameArgs,
}
