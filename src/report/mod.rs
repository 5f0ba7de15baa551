//! Report module - summarizing conversion runs

pub mod run_report;
pub mod summary;

pub use run_report::*;
pub use summary::*;
