#![forbid(unsafe_code)]
//! rowchain: a chain of unary operators transforming in-memory row batches.
//!
//! This facade re-exports the workspace crates:
//! - [`data`]: `Cell`, `Row`, `RowSet`, `Schema`, `Table`, config and errors
//! - [`operators`]: `Limit`, `Selection`, `Filter`, `RowCompute`, `Sort`, chains
//! - [`planner`]: YAML/JSON pipelines lowered to chains
//! - [`exec`]: the instrumented `Engine`

pub use rowchain_core as data;
pub use rowchain_exec as exec;
pub use rowchain_operators as operators;
pub use rowchain_planner as planner;

pub use rowchain_core::row;
