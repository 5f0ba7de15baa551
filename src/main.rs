//! chartconv: Chart to GeoJSON Batch Converter
//!
//! A command-line tool that finds ENC, BSB or shapefile charts under a
//! directory and converts each one to GeoJSON with ogr2ogr or gdal_polygonize.py.

use anyhow::{Context, Result};
use clap::Parser;

use chartconv::cli::Cli;
use chartconv::convert::{run_batch, SystemRunner};
use chartconv::report::export_run_report;
use chartconv::utils::{
    print_banner, print_completion, print_config, print_success, print_warning,
};

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    // Validate arguments before touching the filesystem
    let config = match cli.run_config() {
        Ok(config) => config,
        Err(e) => {
            if e.is_usage() {
                print_warning("Use --help | -h to see usage");
            }
            return Err(e.into());
        }
    };

    print_banner(env!("CARGO_PKG_VERSION"));
    print_config(&config);

    let mut runner = SystemRunner;
    let summary = run_batch(&config, &mut runner)
        .with_context(|| format!("{} conversion aborted", config.mode))?;

    summary.display();

    if let Some(report_path) = &cli.report {
        export_run_report(&summary, report_path)?;
        print_success(&format!("Run report written to {}", report_path.display()));
    }

    if summary.is_success() {
        print_completion();
    } else {
        print_warning(&format!(
            "{} of {} file(s) failed to convert",
            summary.failure_count(),
            summary.matched
        ));
        if cli.strict {
            anyhow::bail!(
                "{} file(s) failed to convert (--strict)",
                summary.failure_count()
            );
        }
    }

    Ok(())
}
