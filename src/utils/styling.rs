//! Terminal styling utilities

use console::{style, Emoji};

use crate::convert::{Invocation, RunConfig};

// Emoji icons with fallbacks for terminals that don't support them
pub static INFO: Emoji<'_, '_> = Emoji("ℹ️  ", "[*] ");
pub static ROCKET: Emoji<'_, '_> = Emoji("🚀 ", ">> ");
pub static FOLDER: Emoji<'_, '_> = Emoji("📂 ", "");
pub static SAVE: Emoji<'_, '_> = Emoji("💾 ", "");
pub static LAYER: Emoji<'_, '_> = Emoji("🗺️  ", "");

/// Print the application banner
pub fn print_banner(version: &str) {
    println!();
    println!(
        "    {} {}",
        style("chartconv").cyan().bold(),
        style("ENC / BSB / shapefile to GeoJSON").dim()
    );
    println!("    {}", style(format!("v{}", version)).dim());
    println!("    {}", style("━".repeat(50)).dim());
    println!();
}

/// Print configuration card
pub fn print_config(config: &RunConfig) {
    println!(
        "    {} {}",
        style(format!("{}", config.mode)).cyan().bold(),
        style(format!("→ {}", config.mode.program())).dim()
    );
    println!("      {} Source: {}", FOLDER, config.root_dir.display());
    println!("      {} Output: {}", SAVE, config.layer_dir().display());
    if let Some(layer) = &config.layer_name {
        println!("      {} Layer:  {}", LAYER, style(layer).yellow());
    }
    if config.simplify {
        println!("      Simplify: {}", style("on").yellow());
    }
    println!();
}

/// Print a per-file progress line
pub fn print_progress(message: &str) {
    println!("    {} {}", style("›").cyan(), message);
}

/// Format a failed external command as a runnable command line plus its captured output
pub fn format_file_error(invocation: &Invocation, output: &str) -> String {
    format!(
        "{} Error running {}: {}",
        style("✗").red().bold(),
        style(invocation).red(),
        output.trim_end()
    )
}

/// Print a failed external command with its captured output
pub fn print_file_error(invocation: &Invocation, output: &str) {
    println!("    {}", format_file_error(invocation, output));
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("    {} {}", style("✓").green().bold(), style(message).green());
}

/// Print an info message
pub fn print_info(message: &str) {
    println!("    {} {}", INFO, message);
}

/// Print a warning message
pub fn print_warning(message: &str) {
    println!("    {} {}", style("⚠").yellow().bold(), style(message).yellow());
}

/// Print the final completion message
pub fn print_completion() {
    println!();
    println!(
        "    {} {}",
        ROCKET,
        style("Conversion complete!").green().bold()
    );
    println!();
}
