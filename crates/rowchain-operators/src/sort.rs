//! In-memory stable sort on one column.
//!
//! Rows are decorated with their key cell, every key is checked to share one
//! kind, and the decorated vector is stably sorted. Equal keys keep their
//! input order in both directions.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use rowchain_core::error::Error;
use rowchain_core::row::{Row, RowSet};
use rowchain_core::schema::Schema;
use rowchain_core::types::Cell;

use crate::traits::{OpError, Operator};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

#[derive(Debug, Clone, Copy)]
pub struct Sort {
    pub column: usize,
    pub direction: SortDirection,
}

impl Sort {
    pub fn new(column: usize, direction: SortDirection) -> Self {
        Self { column, direction }
    }

    pub fn ascending(column: usize) -> Self {
        Self::new(column, SortDirection::Ascending)
    }

    pub fn descending(column: usize) -> Self {
        Self::new(column, SortDirection::Descending)
    }
}

impl Operator for Sort {
    fn name(&self) -> &'static str {
        "sort"
    }

    fn plan(&self, input: &Schema) -> Result<Schema, OpError> {
        input.field(self.column)?;
        Ok(input.clone())
    }

    fn operate(&self, rows: RowSet) -> Result<RowSet, OpError> {
        let mut keyed: Vec<(Cell, Row)> = Vec::with_capacity(rows.len());
        for row in rows {
            let key = row.get(self.column)?.clone();
            if let Some((first, _)) = keyed.first() {
                if first.kind() != key.kind() {
                    return Err(Error::TypeMismatch {
                        expected: first.kind(),
                        found: key.kind(),
                    }
                    .into());
                }
            }
            keyed.push((key, row));
        }

        // Kinds are uniform here, so `compare` cannot fail.
        let descending = self.direction == SortDirection::Descending;
        keyed.sort_by(|(a, _), (b, _)| {
            let ord = a.compare(b).unwrap_or(Ordering::Equal);
            if descending {
                ord.reverse()
            } else {
                ord
            }
        });

        Ok(keyed.into_iter().map(|(_, row)| row).collect())
    }
}
