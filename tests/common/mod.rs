//! Shared test utilities and fixture generators

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use chartconv::convert::{CommandOutcome, CommandRunner, Invocation};
use tempfile::TempDir;

/// Runner that records every invocation instead of spawning a process.
///
/// Invocations whose arguments contain `fail_on` report a non-zero exit.
#[derive(Debug, Default)]
pub struct RecordingRunner {
    pub calls: Vec<Invocation>,
    pub fail_on: Option<String>,
}

impl RecordingRunner {
    pub fn failing_on(pattern: &str) -> Self {
        Self {
            calls: Vec::new(),
            fail_on: Some(pattern.to_string()),
        }
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&mut self, invocation: &Invocation) -> CommandOutcome {
        self.calls.push(invocation.clone());
        let fails = self
            .fail_on
            .as_deref()
            .is_some_and(|p| invocation.args.iter().any(|a| a.contains(p)));
        if fails {
            CommandOutcome::failed(Some(1), "ERROR 4: unable to open datasource")
        } else {
            CommandOutcome::succeeded("")
        }
    }
}

/// Create an empty file (and its parent directories) under `root`
pub fn touch(root: &Path, relative: &str) -> PathBuf {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, b"").unwrap();
    path
}

/// Create a chart tree mixing all three input kinds with unrelated files
///
/// Layout:
/// - `ENC_ROOT/US1/US1AK90M.000`, `ENC_ROOT/US5/US5MA11M.000`, `ENC_ROOT/US5/US5MA11M.001`
/// - `BSB_ROOT/12300_1.KAP`, `BSB_ROOT/12300_2.kap`
/// - `shapes/coast.shp`, `shapes/coast.dbf`, `shapes/coast.shx`
/// - `readme.txt`
pub fn create_chart_tree() -> TempDir {
    let dir = TempDir::new().unwrap();
    let root = dir.path().join("charts");
    for file in [
        "ENC_ROOT/US1/US1AK90M.000",
        "ENC_ROOT/US5/US5MA11M.000",
        "ENC_ROOT/US5/US5MA11M.001",
        "BSB_ROOT/12300_1.KAP",
        "BSB_ROOT/12300_2.kap",
        "shapes/coast.shp",
        "shapes/coast.dbf",
        "shapes/coast.shx",
        "readme.txt",
    ] {
        touch(&root, file);
    }
    dir
}

/// Source root of the tree built by [`create_chart_tree`]
pub fn charts_root(dir: &TempDir) -> PathBuf {
    dir.path().join("charts")
}
