#![forbid(unsafe_code)]
//! rowchain-planner: declarative pipelines → operator chains.
//!
//! - `dsl`: serde model of a linear pipeline, with YAML and JSON front-ends
//! - `registry`: named compute functions referenced by `compute` steps
//! - `lower`: builds the `UnaryOperator` chain for a pipeline
//!
//! No optimization happens here; steps run exactly in the order listed.

pub mod dsl;
pub mod error;
pub mod lower;
pub mod registry;

pub use dsl::yaml::parse_yaml_pipeline;
pub use dsl::{parse_json_pipeline, Pipeline, PipelineConfig, Step};
pub use error::PlanError;
pub use lower::lower_to_chain;
pub use registry::FunctionRegistry;
