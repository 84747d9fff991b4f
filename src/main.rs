//! # renumber - 批量顺序重命名工具
//!
//! 将目录中同一扩展名的文件按文件名字典序重命名为
//! `<prefix>_<n>.<ext>`，计数从指定值（默认 8000）开始。
//!
//! ## 子命令
//! - `json` - 重编号 `*.json`
//! - `wav`  - 重编号 `*.wav`
//! - `ext`  - 重编号任意扩展名
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── batch/     (收集、计划、执行)
//!   │     └── models/    (数据模型)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod error;
mod models;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&e.full_message());
        std::process::exit(1);
    }
}
