//! Conversion modes and their per-mode contract

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

/// Which kind of chart a run converts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// S-57 vector charts (`.000`), converted one layer at a time with `ogr2ogr`
    Enc,
    /// BSB raster charts (`.kap`), polygonized with `gdal_polygonize.py`
    Bsb,
    /// ESRI shapefiles (`.shp`), converted with `ogr2ogr`
    Shp,
}

impl Mode {
    /// File name suffix selecting input files. Matching is case-sensitive.
    pub fn extension(self) -> &'static str {
        match self {
            Mode::Enc => ".000",
            Mode::Bsb => ".kap",
            Mode::Shp => ".shp",
        }
    }

    /// External program invoked once per input file.
    pub fn program(self) -> &'static str {
        match self {
            Mode::Enc | Mode::Shp => "ogr2ogr",
            Mode::Bsb => "gdal_polygonize.py",
        }
    }

    /// Output directory used when none is given, relative to the working directory.
    pub fn default_output_dir(self) -> PathBuf {
        PathBuf::from(match self {
            Mode::Enc => "./enc_output",
            Mode::Bsb => "./bsb_output",
            Mode::Shp => "./shp_output",
        })
    }

    /// Subcommand name, used in messages.
    pub fn command_name(self) -> &'static str {
        match self {
            Mode::Enc => "enc",
            Mode::Bsb => "bsb",
            Mode::Shp => "shape",
        }
    }

    /// Whether `-simplify` can be passed to this mode's converter.
    pub fn supports_simplify(self) -> bool {
        matches!(self, Mode::Enc | Mode::Shp)
    }

    /// Test a file name against the mode's extension.
    ///
    /// The name needs at least one character before the extension, so a file
    /// literally called `.shp` is skipped.
    pub fn matches(self, file_name: &str) -> bool {
        let ext = self.extension();
        file_name.len() > ext.len() && file_name.ends_with(ext)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Mode::Enc => "ENC",
            Mode::Bsb => "BSB",
            Mode::Shp => "SHP",
        };
        f.write_str(s)
    }
}
