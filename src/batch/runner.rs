//! # 批量重命名执行器
//!
//! 按计划顺序逐个重命名文件。
//!
//! ## 功能
//! - 严格串行：每次重命名完成后才开始下一次
//! - 每个文件处理前回调（用于进度输出）
//! - 任一失败立即中止，已完成的重命名保留
//! - 可选两阶段模式：先改为临时名，再改为目标名
//!
//! ## 依赖关系
//! - 被 `commands/rename.rs` 调用
//! - 执行 `batch/plan.rs` 生成的计划

use super::plan::RenamePlan;
use crate::error::{RenumberError, Result};
use crate::models::RenameEntry;

use std::fs;
use std::path::{Path, PathBuf};

/// 重命名模式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RenameMode {
    /// 直接改为目标名（目标已存在时的行为取决于平台）
    #[default]
    Direct,
    /// 先改为隐藏临时名，再统一改为目标名
    TwoPass,
}

/// 批量重命名结果统计
#[derive(Debug, Default, PartialEq, Eq)]
pub struct BatchResult {
    /// 完成的重命名数量
    pub renamed: usize,
    /// 其中源名与目标名相同的数量
    pub unchanged: usize,
}

/// 批量重命名执行器
pub struct BatchRenamer {
    mode: RenameMode,
}

impl BatchRenamer {
    pub fn new(mode: RenameMode) -> Self {
        Self { mode }
    }

    /// 执行计划，`on_entry` 在每个文件改为目标名之前调用
    pub fn run<F>(&self, plan: &RenamePlan, on_entry: F) -> Result<BatchResult>
    where
        F: FnMut(&RenameEntry),
    {
        match self.mode {
            RenameMode::Direct => run_direct(plan, on_entry),
            RenameMode::TwoPass => run_two_pass(plan, on_entry),
        }
    }
}

fn run_direct<F>(plan: &RenamePlan, mut on_entry: F) -> Result<BatchResult>
where
    F: FnMut(&RenameEntry),
{
    let mut result = BatchResult::default();

    for entry in plan.entries() {
        on_entry(entry);
        rename(&entry.source, &entry.target)?;
        result.record(entry);
    }

    Ok(result)
}

fn run_two_pass<F>(plan: &RenamePlan, mut on_entry: F) -> Result<BatchResult>
where
    F: FnMut(&RenameEntry),
{
    let staged: Vec<PathBuf> = plan
        .entries()
        .iter()
        .enumerate()
        .map(|(i, entry)| staging_path(&entry.source, i))
        .collect();

    // 临时名必须空闲，否则在任何改动之前中止
    for path in &staged {
        if fs::symlink_metadata(path).is_ok() {
            return Err(RenumberError::StagingNameTaken {
                path: path.display().to_string(),
            });
        }
    }

    for (entry, stage) in plan.entries().iter().zip(&staged) {
        rename(&entry.source, stage)?;
    }

    let mut result = BatchResult::default();
    for (entry, stage) in plan.entries().iter().zip(&staged) {
        on_entry(entry);
        rename(stage, &entry.target)?;
        result.record(entry);
    }

    Ok(result)
}

/// 第 `index` 个文件的临时名：`.renumber-<index>.tmp`
///
/// 以 `.` 开头，因此不会被 `*.<ext>` 匹配。
fn staging_path(source: &Path, index: usize) -> PathBuf {
    source.with_file_name(format!(".renumber-{}.tmp", index))
}

fn rename(from: &Path, to: &Path) -> Result<()> {
    fs::rename(from, to).map_err(|e| RenumberError::RenameFailed {
        from: from.display().to_string(),
        to: to.display().to_string(),
        source: e,
    })
}

impl BatchResult {
    fn record(&mut self, entry: &RenameEntry) {
        self.renamed += 1;
        if entry.source == entry.target {
            self.unchanged += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::batch::FileCollector;
    use crate::models::RenameTarget;

    fn write(dir: &Path, name: &str, content: &str) {
        fs::write(dir.join(name), content).unwrap();
    }

    fn read(dir: &Path, name: &str) -> String {
        fs::read_to_string(dir.join(name)).unwrap()
    }

    fn listing(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    fn plan_for(dir: &Path, prefix: &str, ext: &str, start: u64) -> RenamePlan {
        let target = RenameTarget::new(prefix, ext).unwrap();
        let files = FileCollector::new(dir)
            .with_pattern(&target.pattern())
            .collect()
            .unwrap();
        RenamePlan::build(files, &target, start).unwrap()
    }

    #[test]
    fn test_renames_in_sorted_order() {
        let temp_dir = tempfile::tempdir().unwrap();
        let dir = temp_dir.path();
        for name in ["b.json", "a.json", "c.json"] {
            write(dir, name, name);
        }

        let plan = plan_for(dir, "audio", "json", 8000);
        let mut seen = Vec::new();
        let result = BatchRenamer::new(RenameMode::Direct)
            .run(&plan, |e| seen.push((e.source_name(), e.counter)))
            .unwrap();

        assert_eq!(result.renamed, 3);
        assert_eq!(
            seen,
            vec![
                ("a.json".to_string(), 8000),
                ("b.json".to_string(), 8001),
                ("c.json".to_string(), 8002),
            ]
        );
        assert_eq!(
            listing(dir),
            vec!["audio_8000.json", "audio_8001.json", "audio_8002.json"]
        );
        // 内容不变，只改名
        assert_eq!(read(dir, "audio_8000.json"), "a.json");
        assert_eq!(read(dir, "audio_8001.json"), "b.json");
        assert_eq!(read(dir, "audio_8002.json"), "c.json");
    }

    #[test]
    fn test_non_matching_files_untouched() {
        let temp_dir = tempfile::tempdir().unwrap();
        let dir = temp_dir.path();
        write(dir, "take1.wav", "1");
        write(dir, "take2.wav", "2");
        write(dir, "meta.json", "{}");
        write(dir, "readme.txt", "hi");

        let plan = plan_for(dir, "audio", "wav", 8000);
        BatchRenamer::new(RenameMode::Direct)
            .run(&plan, |_| {})
            .unwrap();

        assert_eq!(
            listing(dir),
            vec!["audio_8000.wav", "audio_8001.wav", "meta.json", "readme.txt"]
        );
    }

    #[test]
    fn test_empty_plan_does_nothing() {
        let temp_dir = tempfile::tempdir().unwrap();
        let dir = temp_dir.path();
        write(dir, "readme.txt", "hi");

        let plan = plan_for(dir, "audio", "json", 8000);
        let mut calls = 0;
        let result = BatchRenamer::new(RenameMode::Direct)
            .run(&plan, |_| calls += 1)
            .unwrap();

        assert_eq!(result, BatchResult::default());
        assert_eq!(calls, 0);
        assert_eq!(listing(dir), vec!["readme.txt"]);
    }

    #[test]
    fn test_rerun_same_start_is_noop() {
        let temp_dir = tempfile::tempdir().unwrap();
        let dir = temp_dir.path();
        write(dir, "x.json", "x");
        write(dir, "y.json", "y");

        let plan = plan_for(dir, "audio", "json", 8000);
        BatchRenamer::new(RenameMode::Direct).run(&plan, |_| {}).unwrap();

        let plan = plan_for(dir, "audio", "json", 8000);
        let result = BatchRenamer::new(RenameMode::Direct).run(&plan, |_| {}).unwrap();

        assert_eq!(result.unchanged, 2);
        assert_eq!(listing(dir), vec!["audio_8000.json", "audio_8001.json"]);
        assert_eq!(read(dir, "audio_8000.json"), "x");
        assert_eq!(read(dir, "audio_8001.json"), "y");
    }

    #[test]
    fn test_rerun_with_other_start_shifts_names() {
        let temp_dir = tempfile::tempdir().unwrap();
        let dir = temp_dir.path();
        write(dir, "x.json", "x");
        write(dir, "y.json", "y");

        let plan = plan_for(dir, "audio", "json", 8000);
        BatchRenamer::new(RenameMode::Direct).run(&plan, |_| {}).unwrap();

        let plan = plan_for(dir, "audio", "json", 9000);
        BatchRenamer::new(RenameMode::Direct).run(&plan, |_| {}).unwrap();

        assert_eq!(listing(dir), vec!["audio_9000.json", "audio_9001.json"]);
        assert_eq!(read(dir, "audio_9000.json"), "x");
        assert_eq!(read(dir, "audio_9001.json"), "y");
    }

    /// POSIX rename(2) 会静默替换已存在的目标
    #[cfg(unix)]
    #[test]
    fn test_direct_collision_overwrites_on_unix() {
        let temp_dir = tempfile::tempdir().unwrap();
        let dir = temp_dir.path();
        // "a.json" 排在 "audio_8000.json" 之前，其目标正好是后者
        write(dir, "a.json", "new");
        write(dir, "audio_8000.json", "old");

        let plan = plan_for(dir, "audio", "json", 8000);
        BatchRenamer::new(RenameMode::Direct).run(&plan, |_| {}).unwrap();

        assert_eq!(listing(dir), vec!["audio_8001.json"]);
        assert_eq!(read(dir, "audio_8001.json"), "new");
    }

    #[test]
    fn test_two_pass_avoids_collision() {
        let temp_dir = tempfile::tempdir().unwrap();
        let dir = temp_dir.path();
        write(dir, "a.json", "new");
        write(dir, "audio_8000.json", "old");

        let plan = plan_for(dir, "audio", "json", 8000);
        let mut seen = Vec::new();
        let result = BatchRenamer::new(RenameMode::TwoPass)
            .run(&plan, |e| seen.push(e.counter))
            .unwrap();

        assert_eq!(result.renamed, 2);
        assert_eq!(seen, vec![8000, 8001]);
        assert_eq!(listing(dir), vec!["audio_8000.json", "audio_8001.json"]);
        assert_eq!(read(dir, "audio_8000.json"), "new");
        assert_eq!(read(dir, "audio_8001.json"), "old");
    }

    #[test]
    fn test_two_pass_staging_name_taken() {
        let temp_dir = tempfile::tempdir().unwrap();
        let dir = temp_dir.path();
        write(dir, "a.json", "a");
        write(dir, ".renumber-0.tmp", "leftover");

        let plan = plan_for(dir, "audio", "json", 8000);
        let err = BatchRenamer::new(RenameMode::TwoPass)
            .run(&plan, |_| {})
            .unwrap_err();

        assert!(matches!(err, RenumberError::StagingNameTaken { .. }));
        assert_eq!(listing(dir), vec![".renumber-0.tmp", "a.json"]);
    }

    #[test]
    fn test_vanished_source_aborts_remaining() {
        let temp_dir = tempfile::tempdir().unwrap();
        let dir = temp_dir.path();
        for name in ["a.wav", "b.wav", "c.wav"] {
            write(dir, name, name);
        }

        let plan = plan_for(dir, "audio", "wav", 8000);
        fs::remove_file(dir.join("b.wav")).unwrap();

        let mut seen = Vec::new();
        let err = BatchRenamer::new(RenameMode::Direct)
            .run(&plan, |e| seen.push(e.source_name()))
            .unwrap_err();

        match err {
            RenumberError::RenameFailed { from, to, source } => {
                assert!(from.ends_with("b.wav"));
                assert!(to.ends_with("audio_8001.wav"));
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(seen, vec!["a.wav", "b.wav"]);
        // 已完成的保留，未处理的保持原名
        assert_eq!(listing(dir), vec!["audio_8000.wav", "c.wav"]);
    }
}
