//! Per-stage metrics and their tracing hooks.
//!
//! Nothing here installs a subscriber; wire one up in the binary layer.

use std::time::Duration;

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StageMetrics {
    /// Position in execution order (leaf = 0).
    pub stage: usize,
    pub operator: &'static str,
    pub rows_in: usize,
    pub rows_out: usize,
    pub elapsed: Duration,
}

pub fn emit_stage(m: &StageMetrics) {
    tracing::debug!(
        stage = m.stage,
        operator = m.operator,
        rows_in = m.rows_in,
        rows_out = m.rows_out,
        elapsed_us = m.elapsed.as_micros() as u64,
        "stage"
    );
}

/// Compact JSON line summarizing a run's stages.
pub fn summarize(stages: &[StageMetrics]) -> String {
    serde_json::to_string(stages).unwrap_or_else(|e| format!("{{\"error\":\"{}\"}}", e))
}
