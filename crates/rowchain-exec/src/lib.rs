#![forbid(unsafe_code)]
//! rowchain-exec: instrumented, synchronous execution of operator chains.
//!
//! Runs one batch at a time on the calling thread. Each stage is timed and
//! reported through `tracing`; no subscriber is installed here.

pub mod metrics;
pub mod runtime;

pub use metrics::StageMetrics;
pub use runtime::{Engine, ExecError, RunReport};
