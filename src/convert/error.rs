//! Error types for batch conversion.
//!
//! Only fatal conditions live here. A failing external command for a single
//! file is not an error of the run; it is recorded as a
//! [`FileFailure`](crate::report::FileFailure) in the run summary.

use std::path::PathBuf;

use thiserror::Error;

/// Fatal errors that stop a conversion run.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Wrong number of positional arguments for a subcommand.
    ///
    /// Raised before any filesystem work is done.
    #[error("too few or too many arguments for '{command}' (got {got}, expected 1 or 2)")]
    Usage {
        /// Subcommand name as typed on the command line
        command: &'static str,
        /// Number of positional arguments received
        got: usize,
    },

    /// The output directory (or ENC layer directory) could not be created.
    #[error("failed to create output directory {}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Walking the source tree failed.
    #[error("failed to walk {}", root.display())]
    Walk {
        root: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// The JSON run report could not be written.
    #[error("failed to write run report {}", path.display())]
    Report {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ConvertError {
    /// True for argument errors, which the binary follows with a `--help` hint.
    pub fn is_usage(&self) -> bool {
        matches!(self, ConvertError::Usage { .. })
    }
}
