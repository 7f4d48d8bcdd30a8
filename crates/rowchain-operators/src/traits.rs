//! Operator trait + common interfaces.
//!
//! Every node of a chain holds one `Box<dyn Operator>`. The chain calls
//! `plan(...)` to infer the output schema ahead of time and `operate(...)` to
//! transform one batch.

use rowchain_core::error::{Error, ErrorKind};
use rowchain_core::row::RowSet;
use rowchain_core::schema::Schema;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum OpError {
    #[error(transparent)]
    Data(#[from] Error),

    #[error("operator '{operator}' does not implement operate")]
    Unimplemented { operator: &'static str },
}

impl OpError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            OpError::Data(e) => e.kind(),
            OpError::Unimplemented { .. } => ErrorKind::UnimplementedOperator,
        }
    }
}

/// Trait that all operators must implement.
///
/// Invariants:
/// - `operate` consumes its input and returns an independent batch.
/// - `operate` must be deterministic given the same input.
/// - Any failure aborts the whole batch; no rows are skipped.
pub trait Operator: Send + Sync {
    /// Human-readable operator name (stable).
    fn name(&self) -> &'static str;

    /// Output schema for a given input schema. Pass-through by default.
    fn plan(&self, input: &Schema) -> Result<Schema, OpError> {
        Ok(input.clone())
    }

    /// Transform one batch. Required: placeholders such as `BaseOperator`
    /// return `OpError::Unimplemented` explicitly.
    fn operate(&self, rows: RowSet) -> Result<RowSet, OpError>;
}
