//! Conversion run summary

use std::path::PathBuf;
use std::time::Duration;

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, Table};
use console::style;

use crate::convert::{Invocation, Mode, RunConfig};

/// One input whose external command failed.
#[derive(Debug, Clone)]
pub struct FileFailure {
    pub input: PathBuf,
    pub invocation: Invocation,
    /// Exit code, `None` when the program could not be started
    pub status: Option<i32>,
    pub output: String,
}

/// Outcome of a whole run
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub mode: Mode,
    pub root_dir: PathBuf,
    pub output_dir: PathBuf,
    pub layer_name: Option<String>,
    pub simplify: bool,
    /// Files whose name matched the mode's extension
    pub matched: usize,
    /// Non-matching files seen during the walk
    pub skipped: usize,
    /// Output paths of successful conversions
    pub converted: Vec<PathBuf>,
    pub failures: Vec<FileFailure>,
    pub elapsed: Duration,
}

impl RunSummary {
    pub fn new(config: &RunConfig) -> Self {
        Self {
            mode: config.mode,
            root_dir: config.root_dir.clone(),
            output_dir: config.output_dir.clone(),
            layer_name: config.layer_name.clone(),
            simplify: config.simplify,
            matched: 0,
            skipped: 0,
            converted: Vec::new(),
            failures: Vec::new(),
            elapsed: Duration::ZERO,
        }
    }

    pub fn failure_count(&self) -> usize {
        self.failures.len()
    }

    /// True when every matched file converted.
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn display(&self) {
        println!();
        println!(
            "    {} {}",
            style("📋").cyan(),
            style(format!("{} CONVERSION SUMMARY", self.mode)).white().bold()
        );
        println!("    {}", style("─".repeat(50)).dim());
        println!();

        let mut table = Table::new();
        table.load_preset(UTF8_FULL_CONDENSED);
        table.set_header(vec![
            Cell::new("Metric").add_attribute(Attribute::Bold),
            Cell::new("Value").add_attribute(Attribute::Bold),
        ]);

        table.add_row(vec![Cell::new("📁 Matched Files"), Cell::new(self.matched)]);

        table.add_row(vec![
            Cell::new("✅ Converted"),
            Cell::new(self.converted.len())
                .fg(Color::Green)
                .add_attribute(Attribute::Bold),
        ]);

        table.add_row(vec![
            Cell::new("❌ Failed"),
            Cell::new(self.failures.len()).fg(if self.failures.is_empty() {
                Color::White
            } else {
                Color::Red
            }),
        ]);

        table.add_row(vec![Cell::new("⏭️  Skipped"), Cell::new(self.skipped)]);

        table.add_row(vec![
            Cell::new("⏱️  Elapsed"),
            Cell::new(format!("{:.2}s", self.elapsed.as_secs_f64())),
        ]);

        for line in table.to_string().lines() {
            println!("    {}", line);
        }

        if !self.failures.is_empty() {
            println!();
            println!(
                "      {} {}:",
                style("Failed Inputs").yellow(),
                style(format!("({})", self.failures.len())).dim()
            );
            for failure in &self.failures {
                println!("        {} {}", style("•").dim(), failure.input.display());
            }
        }
    }
}
