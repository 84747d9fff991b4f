//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。三个子命令只是扩展名不同，
//! 统一交给 `rename::execute`。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `batch/`, `models/`, `utils/`
//! - 子模块: rename

pub mod rename;

use crate::cli::Commands;
use crate::error::Result;

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Json(args) => rename::execute("json", args),
        Commands::Wav(args) => rename::execute("wav", args),
        Commands::Ext(args) => rename::execute(&args.extension, args.common),
    }
}
