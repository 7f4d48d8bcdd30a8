use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlanError {
    #[error("yaml pipeline: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("json pipeline: {0}")]
    Json(#[from] serde_json::Error),

    #[error("pipeline has no steps")]
    Empty,

    #[error("pipeline has {steps} steps, limit is {limit}")]
    TooDeep { steps: usize, limit: usize },

    #[error("unknown compute function '{0}'")]
    UnknownFunction(String),

    #[error(transparent)]
    Core(#[from] rowchain_core::error::Error),
}
