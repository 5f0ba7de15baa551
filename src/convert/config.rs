//! Run configuration built once from the command line

use std::path::{Path, PathBuf};

use super::{ConvertError, Invocation, Mode};

/// ENC layer converted when none is given.
pub const DEFAULT_LAYER: &str = "LNDARE";

/// Tolerance passed to `ogr2ogr -simplify`.
pub const SIMPLIFY_TOLERANCE: &str = "0.125";

/// Everything a single conversion run needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub mode: Mode,
    pub root_dir: PathBuf,
    pub output_dir: PathBuf,
    /// Only set for ENC runs
    pub layer_name: Option<String>,
    /// Never set for BSB runs
    pub simplify: bool,
}

impl RunConfig {
    /// Build a config from a subcommand's positional arguments.
    ///
    /// Every mode takes one or two positionals: the root directory and an
    /// optional second token. For ENC the second token is the layer name; for
    /// BSB and SHP it is ignored, except that a literal `-s`/`--simplify` left
    /// among SHP positionals still enables simplification.
    pub fn from_positionals(
        mode: Mode,
        positionals: &[String],
        simplify: bool,
        output_dir: Option<PathBuf>,
    ) -> Result<Self, ConvertError> {
        if positionals.is_empty() || positionals.len() > 2 {
            return Err(ConvertError::Usage {
                command: mode.command_name(),
                got: positionals.len(),
            });
        }

        let root_dir = PathBuf::from(&positionals[0]);

        let layer_name = match mode {
            Mode::Enc => Some(
                positionals
                    .get(1)
                    .filter(|s| !s.is_empty())
                    .cloned()
                    .unwrap_or_else(|| DEFAULT_LAYER.to_string()),
            ),
            Mode::Bsb | Mode::Shp => None,
        };

        let simplify = match mode {
            Mode::Enc => simplify,
            Mode::Shp => {
                simplify
                    || positionals
                        .iter()
                        .any(|a| a == "-s" || a == "--simplify")
            }
            Mode::Bsb => false,
        };

        Ok(Self {
            mode,
            root_dir,
            output_dir: output_dir.unwrap_or_else(|| mode.default_output_dir()),
            layer_name,
            simplify,
        })
    }

    /// Directory the converted files land in: `<outdir>/<layer>` for ENC, `<outdir>` otherwise.
    pub fn layer_dir(&self) -> PathBuf {
        match &self.layer_name {
            Some(layer) => self.output_dir.join(layer),
            None => self.output_dir.clone(),
        }
    }

    /// Output path for one input file: `<layer_dir>/<filename>.json`.
    pub fn output_file(&self, input: &Path) -> PathBuf {
        let file_name = input
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| input.display().to_string());
        self.layer_dir().join(format!("{}.json", file_name))
    }

    /// Build the external command for one input file.
    pub fn invocation(&self, input: &Path) -> Invocation {
        let out_file = self.output_file(input).display().to_string();
        let in_file = input.display().to_string();

        let mut args: Vec<String> = match self.mode {
            Mode::Enc => {
                let layer = self.layer_name.as_deref().unwrap_or(DEFAULT_LAYER);
                vec![
                    "-f".into(),
                    "GeoJSON".into(),
                    out_file,
                    in_file,
                    layer.to_string(),
                ]
            }
            Mode::Bsb => vec![in_file, "-f".into(), "GeoJSON".into(), out_file],
            Mode::Shp => vec!["-f".into(), "GeoJSON".into(), out_file, in_file],
        };

        if self.simplify && self.mode.supports_simplify() {
            let mut simplified = vec!["-simplify".to_string(), SIMPLIFY_TOLERANCE.to_string()];
            simplified.append(&mut args);
            args = simplified;
        }

        Invocation::new(self.mode.program(), args)
    }
}
