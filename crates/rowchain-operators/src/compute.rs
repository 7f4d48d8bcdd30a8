//! Derived-column operator: append one computed cell to every row.

use std::fmt;
use std::sync::Arc;

use rowchain_core::error::Result as CoreResult;
use rowchain_core::row::{Row, RowSet};
use rowchain_core::schema::{Field, Schema};
use rowchain_core::types::{ArithOp, Cell};

use crate::traits::{OpError, Operator};

/// Pure function deriving one cell from a row.
pub type ComputeFn = Arc<dyn Fn(&Row) -> CoreResult<Cell> + Send + Sync>;

#[derive(Clone)]
pub struct RowCompute {
    func: ComputeFn,
    /// Field appended to the schema at plan time.
    pub output: Field,
}

impl RowCompute {
    pub fn new<F>(func: F) -> Self
    where
        F: Fn(&Row) -> CoreResult<Cell> + Send + Sync + 'static,
    {
        Self::from_fn(Arc::new(func))
    }

    pub fn from_fn(func: ComputeFn) -> Self {
        Self {
            func,
            output: Field::untyped("computed"),
        }
    }

    pub fn with_output(mut self, output: Field) -> Self {
        self.output = output;
        self
    }

    /// `row[left] <op> row[right]`, kind-checked by [`Cell::apply`].
    pub fn arith(left: usize, op: ArithOp, right: usize) -> Self {
        Self::new(move |row: &Row| row.get(left)?.apply(op, row.get(right)?))
    }

    fn operate_row(&self, mut row: Row) -> CoreResult<Row> {
        let cell = (self.func)(&row)?;
        row.append(cell);
        Ok(row)
    }
}

impl fmt::Debug for RowCompute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RowCompute")
            .field("output", &self.output)
            .finish_non_exhaustive()
    }
}

impl Operator for RowCompute {
    fn name(&self) -> &'static str {
        "row_compute"
    }

    fn plan(&self, input: &Schema) -> Result<Schema, OpError> {
        let mut schema = input.clone();
        schema.fields.push(self.output.clone());
        Ok(schema)
    }

    fn operate(&self, rows: RowSet) -> Result<RowSet, OpError> {
        let mut out = RowSet::with_capacity(rows.len());
        for (idx, row) in rows.into_iter().enumerate() {
            let row = self.operate_row(row).map_err(|e| {
                tracing::debug!(row = idx, error = %e, "row compute failed");
                e
            })?;
            out.append(row);
        }
        Ok(out)
    }
}
