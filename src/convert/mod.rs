//! Convert module - builds and dispatches the external GDAL commands

pub mod batch;
pub mod config;
pub mod error;
pub mod invocation;
pub mod mode;

pub use batch::*;
pub use config::*;
pub use error::ConvertError;
pub use invocation::*;
pub use mode::Mode;
