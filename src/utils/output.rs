//! # 美化输出工具
//!
//! 提供统一的终端输出样式。
//!
//! 标准输出只保留每个文件一行的处理记录（以及 dry-run 预览表），
//! 其余状态消息一律写到标准错误，便于重定向。
//!
//! ## 依赖关系
//! - 被所有 `commands/` 模块使用
//! - 使用 `colored` crate

use colored::Colorize;
use std::io::{self, Write};

/// 打印成功消息
pub fn print_success(msg: &str) {
    eprintln!("{} {}", "[OK]".green().bold(), msg);
}

/// 打印错误消息
pub fn print_error(msg: &str) {
    eprintln!("{} {}", "[ERR]".red().bold(), msg);
}

/// 打印警告消息
pub fn print_warning(msg: &str) {
    eprintln!("{} {}", "[WARN]".yellow().bold(), msg);
}

/// 打印信息消息
pub fn print_info(msg: &str) {
    eprintln!("{} {}", "[*]".blue().bold(), msg);
}

/// 打印完成消息
pub fn print_done(msg: &str) {
    eprintln!("{} {}", "[DONE]".green().bold(), msg);
}

/// 打印标题栏
pub fn print_header(title: &str) {
    let line = "─".repeat(60);
    eprintln!("\n{}", line.dimmed());
    eprintln!("  {}", title.bold());
    eprintln!("{}\n", line.dimmed());
}

/// 单个文件的处理记录（名称两侧各两个空格）
pub fn processing_line(name: &str, counter: u64) -> String {
    format!("Current File Being Processed is:  {}  {}", name, counter)
}

/// 写出单个文件的处理记录（命令层传入标准输出）
pub fn write_processing<W: Write>(out: &mut W, name: &str, counter: u64) -> io::Result<()> {
    writeln!(out, "{}", processing_line(name, counter))
}
