//! Declarative description of a linear pipeline.
//!
//! Steps are listed in execution order: the first step becomes the leaf of
//! the chain and each later step consumes the previous one's output.

pub mod yaml;

use serde::{Deserialize, Serialize};

use rowchain_core::config::FilterLengthPolicy;
use rowchain_core::hash::{hash_serde, Hash256};
use rowchain_core::types::ArithOp;
use rowchain_operators::SortDirection;

use crate::error::PlanError;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Pipeline {
    #[serde(default)]
    pub config: Option<PipelineConfig>,
    pub steps: Vec<Step>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Overrides `ExecConfig::filter_policy` for every filter in this pipeline.
    pub filter_policy: Option<FilterLengthPolicy>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "op")]
pub enum Step {
    Limit {
        limit: i64,
    },

    Select {
        columns: Vec<usize>,
    },

    Filter {
        flags: Vec<bool>,
        #[serde(default)]
        policy: Option<FilterLengthPolicy>,
    },

    Sort {
        column: usize,
        #[serde(default)]
        direction: SortDirection,
    },

    /// Named function looked up in a `FunctionRegistry`.
    Compute {
        function: String,
        #[serde(default)]
        alias: Option<String>,
    },

    /// `row[left] <operator> row[right]` appended as a new column.
    Arith {
        left: usize,
        operator: ArithOp,
        right: usize,
        #[serde(default)]
        alias: Option<String>,
    },
}

impl Step {
    pub fn key(&self) -> &'static str {
        match self {
            Step::Limit { .. } => "limit",
            Step::Select { .. } => "select",
            Step::Filter { .. } => "filter",
            Step::Sort { .. } => "sort",
            Step::Compute { .. } => "compute",
            Step::Arith { .. } => "arith",
        }
    }
}

impl Pipeline {
    pub fn new(steps: Vec<Step>) -> Self {
        Self {
            config: None,
            steps,
        }
    }

    /// Stable hash of config and steps; equal pipelines share a fingerprint.
    pub fn fingerprint(&self) -> Result<Hash256, PlanError> {
        Ok(hash_serde(self)?)
    }
}

/// Parse a JSON document into a `Pipeline`.
pub fn parse_json_pipeline(src: &str) -> Result<Pipeline, PlanError> {
    Ok(serde_json::from_str(src)?)
}
