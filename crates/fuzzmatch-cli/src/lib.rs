//! Library side of the `fuzzmatch` binary: logging setup and the
//! load/match/report pipeline.

pub mod logging;
pub mod pipeline;
pub mod types;
