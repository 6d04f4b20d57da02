//! Library components of the `address-standardizer` command line tool.

pub mod logging;
pub mod pipeline;
pub mod types;
