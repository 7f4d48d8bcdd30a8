//! Column projection by position.
//!
//! Output columns follow the index list, so indexes may repeat or reorder.

use rowchain_core::error::Error;
use rowchain_core::row::{Row, RowSet};
use rowchain_core::schema::Schema;

use crate::traits::{OpError, Operator};

#[derive(Debug, Clone, Default)]
pub struct Selection {
    pub indexes: Vec<usize>,
}

impl Selection {
    pub fn new(indexes: Vec<usize>) -> Self {
        Self { indexes }
    }

    fn project(&self, row: &Row) -> Result<Row, Error> {
        self.indexes.iter().map(|&i| row.get(i).cloned()).collect()
    }
}

impl Operator for Selection {
    fn name(&self) -> &'static str {
        "selection"
    }

    fn plan(&self, input: &Schema) -> Result<Schema, OpError> {
        let fields = self
            .indexes
            .iter()
            .map(|&i| input.field(i).cloned())
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Schema::new(fields))
    }

    fn operate(&self, rows: RowSet) -> Result<RowSet, OpError> {
        let mut out = RowSet::with_capacity(rows.len());
        for row in rows.iter() {
            out.append(self.project(row)?);
        }
        Ok(out)
    }
}
