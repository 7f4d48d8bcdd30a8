//! Execution configuration that downstream crates can serialize/deserialize.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// How a filter treats a flag vector whose length differs from the batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterLengthPolicy {
    /// Consider only positions covered by both; extra rows are dropped and
    /// extra flags ignored.
    #[default]
    Truncate,
    /// Lengths must match exactly.
    Strict,
}

impl FromStr for FilterLengthPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "truncate" | "prefix" => Ok(Self::Truncate),
            "strict" | "exact" => Ok(Self::Strict),
            other => Err(Error::Config(format!("unknown filter policy '{}'", other))),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExecConfig {
    /// Policy applied to filters that do not declare their own.
    pub filter_policy: FilterLengthPolicy,

    /// Longest operator chain the engine accepts.
    pub max_chain_depth: usize,

    /// Check a chain against the input schema before executing it.
    pub validate_plan: bool,
}

impl Default for ExecConfig {
    fn default() -> Self {
        Self {
            filter_policy: FilterLengthPolicy::Truncate,
            max_chain_depth: 256,
            validate_plan: true,
        }
    }
}

impl ExecConfig {
    /// Create a config from environment variables, falling back to defaults.
    ///
    /// Environment variables:
    /// - `ROWCHAIN_FILTER_POLICY`: `truncate` or `strict`
    /// - `ROWCHAIN_MAX_CHAIN_DEPTH`: maximum number of chained operators
    /// - `ROWCHAIN_VALIDATE_PLAN`: `true`/`false`
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ExecConfig::from_env`] with an injectable variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut cfg = Self::default();

        if let Some(s) = lookup("ROWCHAIN_FILTER_POLICY") {
            if let Ok(v) = s.parse::<FilterLengthPolicy>() {
                cfg.filter_policy = v;
            }
        }

        if let Some(s) = lookup("ROWCHAIN_MAX_CHAIN_DEPTH") {
            if let Ok(v) = s.parse::<usize>() {
                cfg.max_chain_depth = v;
            }
        }

        if let Some(s) = lookup("ROWCHAIN_VALIDATE_PLAN") {
            if let Ok(v) = s.parse::<bool>() {
                cfg.validate_plan = v;
            }
        }

        cfg
    }
}
