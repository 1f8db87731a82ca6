//! Library half of the `interesting-aircraft` binary: file layout, stage
//! drivers and logging setup.

pub mod logging;
pub mod paths;
pub mod pipeline;
pub mod types;
