//! chartconv: Chart to GeoJSON Batch Converter
//!
//! A library for walking a directory tree of ENC (S-57), BSB and shapefile
//! charts and converting each file to GeoJSON with the GDAL command-line tools.

pub mod cli;
pub mod convert;
pub mod report;
pub mod utils;
