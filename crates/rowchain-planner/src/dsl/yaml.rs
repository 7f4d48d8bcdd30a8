//! YAML front-end for linear pipelines.
//!
//! Example:
//! ```yaml
//! config:
//!   filter_policy: strict
//! steps:
//!   - op: arith
//!     left: 0
//!     operator: add
//!     right: 1
//!   - op: sort
//!     column: 2
//!     direction: descending
//!   - op: select
//!     columns: [2, 0]
//!   - op: limit
//!     limit: 10
//! ```

use crate::dsl::Pipeline;
use crate::error::PlanError;

pub fn parse_yaml_pipeline(yaml_src: &str) -> Result<Pipeline, PlanError> {
    let doc: Pipeline = serde_yaml::from_str(yaml_src)?;
    tracing::debug!(steps = doc.steps.len(), "parsed yaml pipeline");
    Ok(doc)
}
