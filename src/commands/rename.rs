//! # 重命名命令实现
//!
//! 将目录中的 `*.<ext>` 文件按文件名字典序重命名为 `<prefix>_<n>.<ext>`。
//!
//! ## 功能
//! - 收集并排序匹配文件
//! - 生成重命名计划，可仅预览（dry-run）
//! - 串行执行，每个文件输出一行处理记录
//! - 可选两阶段重命名避免覆盖
//!
//! ## 依赖关系
//! - 使用 `cli/rename.rs` 定义的参数
//! - 使用 `batch/`, `models/`
//! - 使用 `utils/output.rs`, `utils/progress.rs`

use crate::batch::{BatchRenamer, BatchResult, FileCollector, RenameMode, RenamePlan};
use crate::cli::rename::RenameArgs;
use crate::error::{RenumberError, Result};
use crate::models::RenameTarget;
use crate::utils::{output, progress};

use std::io::{self, Write};
use tabled::{Table, Tabled};

/// 预览表行
#[derive(Debug, Clone, Tabled)]
struct PreviewRow {
    #[tabled(rename = "#")]
    counter: u64,
    #[tabled(rename = "From")]
    from: String,
    #[tabled(rename = "To")]
    to: String,
}

/// 执行重命名命令，处理记录写到标准输出
pub fn execute(extension: &str, args: RenameArgs) -> Result<()> {
    let stdout = io::stdout();
    execute_with(extension, args, &mut stdout.lock())
}

/// 执行重命名命令，处理记录与预览表写到 `out`
pub fn execute_with<W: Write>(extension: &str, args: RenameArgs, out: &mut W) -> Result<()> {
    let target = RenameTarget::new(&args.prefix, extension)?;

    output::print_header(&format!(
        "Renumbering {} -> {}",
        target.pattern(),
        target.file_name(args.start)
    ));

    let files = FileCollector::new(&args.dir)
        .with_pattern(&target.pattern())
        .collect()?;
    let plan = RenamePlan::build(files, &target, args.start)?;

    if plan.is_empty() {
        output::print_warning(&format!(
            "No files matched '{}' in {}",
            target.pattern(),
            args.dir.display()
        ));
        return Ok(());
    }

    output::print_info(&format!(
        "Found {} file(s) in {}",
        plan.len(),
        args.dir.display()
    ));

    if args.dry_run {
        print_preview(&plan, out)?;
        output::print_success("Dry run: no files were renamed");
        return Ok(());
    }

    let mode = if args.two_pass {
        RenameMode::TwoPass
    } else {
        RenameMode::Direct
    };

    let result = apply(&plan, mode, !args.no_progress, out)?;

    if result.unchanged > 0 {
        output::print_info(&format!(
            "{} file(s) already had their target name",
            result.unchanged
        ));
    }

    if let Some((first, last)) = plan.counter_range() {
        output::print_done(&format!(
            "Renamed {} file(s): {} .. {}",
            result.renamed,
            target.file_name(first),
            target.file_name(last)
        ));
    }

    Ok(())
}

/// 执行计划并输出进度
fn apply<W: Write>(
    plan: &RenamePlan,
    mode: RenameMode,
    show_progress: bool,
    out: &mut W,
) -> Result<BatchResult> {
    let pb = progress::bar_for(plan.len() as u64, "Renaming", show_progress);
    let mut write_error: Option<io::Error> = None;

    let result = BatchRenamer::new(mode).run(plan, |entry| {
        pb.suspend(|| {
            let line = output::write_processing(&mut *out, &entry.source_name(), entry.counter);
            if let Err(e) = line {
                write_error.get_or_insert(e);
            }
        });
        pb.inc(1);
    });

    match result {
        Ok(result) => {
            pb.finish_and_clear();
            match write_error {
                Some(e) => Err(RenumberError::OutputError(e)),
                None => Ok(result),
            }
        }
        Err(e) => {
            pb.abandon();
            Err(e)
        }
    }
}

/// 打印重命名预览表
fn print_preview<W: Write>(plan: &RenamePlan, out: &mut W) -> Result<()> {
    let rows: Vec<PreviewRow> = plan
        .entries()
        .iter()
        .map(|e| PreviewRow {
            counter: e.counter,
            from: e.source_name(),
            to: e.target_name(),
        })
        .collect();

    let table = Table::new(&rows);
    writeln!(out, "{}", table).map_err(RenumberError::OutputError)
}
