//! Command-line argument definitions using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::convert::{ConvertError, Mode, RunConfig};

/// chartconv - Batch-convert ENC, BSB and shapefile charts to GeoJSON
#[derive(Parser, Debug)]
#[command(name = "chartconv")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output directory.
    /// Defaults to ./enc_output, ./bsb_output or ./shp_output depending on the subcommand.
    #[arg(short, long, global = true)]
    pub output_dir: Option<PathBuf>,

    /// Write a JSON report of the run (converted files and failures) to this path
    #[arg(long, global = true)]
    pub report: Option<PathBuf>,

    /// Exit with an error if any file fails to convert
    #[arg(long, global = true, default_value = "false")]
    pub strict: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert S-57 ENC files (*.000) to GeoJSON, one layer per run
    #[command(visible_alias = "e")]
    #[command(override_usage = "chartconv enc <ROOT_DIR> [LAYER_NAME] [-s | --simplify]")]
    Enc {
        /// Root directory to search
        #[arg(value_name = "ROOT_DIR")]
        root_dir: Option<String>,

        /// Layer to extract from each cell (default: LNDARE)
        #[arg(value_name = "LAYER_NAME", allow_hyphen_values = true)]
        layer_name: Option<String>,

        /// Simplify geometries (ogr2ogr -simplify 0.125)
        #[arg(short, long, default_value = "false")]
        simplify: bool,
    },

    /// Polygonize BSB raster charts (*.kap) to GeoJSON
    #[command(visible_alias = "b")]
    #[command(override_usage = "chartconv bsb <ROOT_DIR>")]
    Bsb {
        /// Root directory to search
        #[arg(value_name = "ROOT_DIR")]
        root_dir: Option<String>,

        /// Accepted and ignored
        #[arg(value_name = "EXTRA", allow_hyphen_values = true, hide = true)]
        extra: Option<String>,
    },

    /// Convert shapefiles (*.shp) to GeoJSON
    #[command(visible_alias = "shp")]
    #[command(override_usage = "chartconv shape <ROOT_DIR> [-s | --simplify]")]
    Shape {
        /// Root directory to search
        #[arg(value_name = "ROOT_DIR")]
        root_dir: Option<String>,

        /// Accepted and ignored, except that a literal -s/--simplify enables simplification
        #[arg(value_name = "EXTRA", allow_hyphen_values = true, hide = true)]
        extra: Option<String>,

        /// Simplify geometries (ogr2ogr -simplify 0.125)
        #[arg(short, long, default_value = "false")]
        simplify: bool,
    },
}

impl Commands {
    pub fn mode(&self) -> Mode {
        match self {
            Commands::Enc { .. } => Mode::Enc,
            Commands::Bsb { .. } => Mode::Bsb,
            Commands::Shape { .. } => Mode::Shp,
        }
    }

    /// Positional tokens in command-line order, at most two.
    pub fn positionals(&self) -> Vec<String> {
        let (first, second) = match self {
            Commands::Enc {
                root_dir,
                layer_name,
                ..
            } => (root_dir, layer_name),
            Commands::Bsb { root_dir, extra } | Commands::Shape { root_dir, extra, .. } => {
                (root_dir, extra)
            }
        };
        first.iter().chain(second.iter()).cloned().collect()
    }
}

impl Cli {
    /// Validate the positional arguments and build the run configuration.
    ///
    /// Fails with a usage error before anything touches the filesystem.
    pub fn run_config(&self) -> Result<RunConfig, ConvertError> {
        let simplify = match &self.command {
            Commands::Enc { simplify, .. } | Commands::Shape { simplify, .. } => *simplify,
            Commands::Bsb { .. } => false,
        };

        RunConfig::from_positionals(
            self.command.mode(),
            &self.command.positionals(),
            simplify,
            self.output_dir.clone(),
        )
    }
}
