//! Linear execution plans built from single-child operator nodes.
//!
//! A `UnaryOperator` owns one operator and optionally the node feeding it.
//! `execute_all` walks to the leaf, runs the leaf on the caller's batch, and
//! applies every ancestor's `operate` on the way back up, so chains of any
//! length evaluate fully.

use std::fmt;

use rowchain_core::row::RowSet;
use rowchain_core::schema::Schema;

use crate::traits::{OpError, Operator};

/// Placeholder operator with no transform of its own.
///
/// Running it fails with `Unimplemented`; planning passes the schema through.
#[derive(Debug, Clone, Copy, Default)]
pub struct BaseOperator;

impl Operator for BaseOperator {
    fn name(&self) -> &'static str {
        "unary"
    }

    fn operate(&self, _rows: RowSet) -> Result<RowSet, OpError> {
        Err(OpError::Unimplemented {
            operator: self.name(),
        })
    }
}

pub struct UnaryOperator {
    op: Box<dyn Operator>,
    child: Option<Box<UnaryOperator>>,
}

impl UnaryOperator {
    /// Leaf node.
    pub fn new(op: impl Operator + 'static) -> Self {
        Self::from_boxed(Box::new(op))
    }

    pub fn from_boxed(op: Box<dyn Operator>) -> Self {
        Self { op, child: None }
    }

    /// Node consuming `child`'s output.
    pub fn with_child(op: impl Operator + 'static, child: UnaryOperator) -> Self {
        Self {
            op: Box::new(op),
            child: Some(Box::new(child)),
        }
    }

    /// Unspecialized leaf.
    pub fn base() -> Self {
        Self::new(BaseOperator)
    }

    /// Wrap `self` as the child of a new root running `op`.
    pub fn then(self, op: impl Operator + 'static) -> Self {
        Self::with_child(op, self)
    }

    pub fn then_boxed(self, op: Box<dyn Operator>) -> Self {
        Self {
            op,
            child: Some(Box::new(self)),
        }
    }

    /// Number of nodes from this one down to the leaf.
    pub fn depth(&self) -> usize {
        self.stages().len()
    }

    /// Operators in execution order (leaf first, `self` last).
    pub fn stages(&self) -> Vec<&dyn Operator> {
        let mut stages = Vec::new();
        let mut node = Some(self);
        while let Some(n) = node {
            stages.push(n.op.as_ref());
            node = n.child.as_deref();
        }
        stages.reverse();
        stages
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.stages().iter().map(|op| op.name()).collect()
    }

    /// Run this node's operator alone, ignoring the child.
    pub fn operate(&self, rows: RowSet) -> Result<RowSet, OpError> {
        self.op.operate(rows)
    }

    /// Run the whole chain rooted here on `input`.
    pub fn execute_all(&self, input: RowSet) -> Result<RowSet, OpError> {
        let mut rows = input;
        for (depth, op) in self.stages().into_iter().enumerate() {
            let rows_in = rows.len();
            rows = op.operate(rows)?;
            tracing::trace!(
                stage = depth,
                operator = op.name(),
                rows_in,
                rows_out = rows.len(),
                "stage complete"
            );
        }
        Ok(rows)
    }

    /// Infer the chain's output schema, leaf to root.
    pub fn plan(&self, input: &Schema) -> Result<Schema, OpError> {
        self.stages()
            .into_iter()
            .try_fold(input.clone(), |schema, op| op.plan(&schema))
    }
}

// Unlink iteratively; the derived drop would recurse once per node.
impl Drop for UnaryOperator {
    fn drop(&mut self) {
        let mut next = self.child.take();
        while let Some(mut node) = next {
            next = node.child.take();
        }
    }
}

impl fmt::Debug for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnaryOperator")
            .field("stages", &self.names())
            .finish()
    }
}
