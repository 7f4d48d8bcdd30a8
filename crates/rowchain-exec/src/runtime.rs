//! Runtime: execute an operator chain stage by stage and report on it.
//!
//! Output is identical to `UnaryOperator::execute_all`; the engine adds the
//! depth guard, optional plan validation, tracing, and per-stage metrics.

use std::time::Instant;

use thiserror::Error;

use rowchain_core::config::ExecConfig;
use rowchain_core::error::ErrorKind;
use rowchain_core::hash::Hash256;
use rowchain_core::row::RowSet;
use rowchain_core::table::Table;

use rowchain_operators::{OpError, UnaryOperator};
use rowchain_planner::{lower_to_chain, FunctionRegistry, Pipeline, PlanError};

use crate::metrics::{emit_stage, summarize, StageMetrics};

#[derive(Debug, Error)]
pub enum ExecError {
    #[error("operator exec: {0}")]
    Operator(#[from] OpError),
    #[error("invalid plan: {0}")]
    Invalid(String),
    #[error("planning: {0}")]
    Plan(#[from] PlanError),
}

impl ExecError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ExecError::Operator(e) => e.kind(),
            ExecError::Plan(PlanError::Core(e)) => e.kind(),
            ExecError::Invalid(_) | ExecError::Plan(_) => ErrorKind::InvalidArgument,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RunReport {
    pub output: RowSet,
    pub stages: Vec<StageMetrics>,
    /// Set when the run came from a declarative `Pipeline`.
    pub fingerprint: Option<Hash256>,
}

impl RunReport {
    pub fn rows_out(&self) -> usize {
        self.output.len()
    }
}

#[derive(Debug, Clone, Default)]
pub struct Engine {
    cfg: ExecConfig,
}

impl Engine {
    pub fn new(cfg: ExecConfig) -> Self {
        Self { cfg }
    }

    pub fn from_env() -> Self {
        Self::new(ExecConfig::from_env())
    }

    /// Execute `chain` on `input`, leaf first.
    pub fn run(&self, chain: &UnaryOperator, input: RowSet) -> Result<RunReport, ExecError> {
        let stages = chain.stages();
        if stages.len() > self.cfg.max_chain_depth {
            return Err(ExecError::Invalid(format!(
                "chain has {} stages, limit is {}",
                stages.len(),
                self.cfg.max_chain_depth
            )));
        }

        let span = tracing::info_span!("rowchain.run", stages = stages.len(), rows_in = input.len());
        let _guard = span.enter();

        let mut rows = input;
        let mut metrics = Vec::with_capacity(stages.len());
        for (stage, op) in stages.into_iter().enumerate() {
            let rows_in = rows.len();
            let started = Instant::now();
            rows = op.operate(rows).map_err(|e| {
                tracing::warn!(stage, operator = op.name(), error = %e, "stage failed");
                e
            })?;
            let m = StageMetrics {
                stage,
                operator: op.name(),
                rows_in,
                rows_out: rows.len(),
                elapsed: started.elapsed(),
            };
            emit_stage(&m);
            metrics.push(m);
        }

        tracing::info!(rows_out = rows.len(), summary = %summarize(&metrics), "run complete");
        Ok(RunReport {
            output: rows,
            stages: metrics,
            fingerprint: None,
        })
    }

    /// Execute `chain` over a table's rows, checking the chain against the
    /// table schema first when `validate_plan` is set.
    pub fn run_table(&self, table: &Table, chain: &UnaryOperator) -> Result<RunReport, ExecError> {
        if self.cfg.validate_plan {
            let out = chain.plan(&table.schema)?;
            tracing::debug!(table = %table.name, output_fields = out.len(), "plan validated");
        }
        self.run(chain, table.rows().clone())
    }

    /// Lower `pipeline` with this engine's config and run it.
    pub fn run_pipeline(
        &self,
        pipeline: &Pipeline,
        registry: &FunctionRegistry,
        input: RowSet,
    ) -> Result<RunReport, ExecError> {
        let chain = lower_to_chain(pipeline, registry, &self.cfg)?;
        let fingerprint = pipeline.fingerprint()?;
        let mut report = self.run(&chain, input)?;
        report.fingerprint = Some(fingerprint);
        Ok(report)
    }
}
