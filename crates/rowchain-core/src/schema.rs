//! Logical schema types. Pure data.
//!
//! Rows carry no schema of their own; a `Schema` is attached to a `Table` or
//! inferred from a batch so that operator chains can be checked before they run.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::row::{Row, RowSet};
use crate::types::CellKind;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    /// `None` when the kind is not known until execution (e.g. computed columns).
    pub kind: Option<CellKind>,
}

impl Field {
    pub fn new(name: impl Into<String>, kind: CellKind) -> Self {
        Self {
            name: name.into(),
            kind: Some(kind),
        }
    }

    pub fn untyped(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    pub fields: Vec<Field>,
}

impl Schema {
    pub fn new(fields: Vec<Field>) -> Self {
        Self { fields }
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn field(&self, idx: usize) -> Result<&Field> {
        self.fields.get(idx).ok_or(Error::IndexOutOfRange {
            index: idx,
            len: self.fields.len(),
        })
    }

    /// Derive a schema from the first row, naming columns `col0`, `col1`, ...
    /// An empty batch yields an empty schema.
    pub fn infer(rows: &RowSet) -> Self {
        let fields = rows
            .rows()
            .first()
            .map(|r| {
                r.iter()
                    .enumerate()
                    .map(|(i, c)| Field::new(format!("col{}", i), c.kind()))
                    .collect()
            })
            .unwrap_or_default();
        Self { fields }
    }

    /// Check arity and declared kinds of one row.
    pub fn check_row(&self, row: &Row) -> Result<()> {
        if row.len() != self.fields.len() {
            return Err(Error::Schema(format!(
                "row has {} cells, schema has {} fields",
                row.len(),
                self.fields.len()
            )));
        }
        for (field, cell) in self.fields.iter().zip(row.iter()) {
            if let Some(kind) = field.kind {
                if kind != cell.kind() {
                    return Err(Error::Schema(format!(
                        "field '{}' expects {}, found {}",
                        field.name,
                        kind,
                        cell.kind()
                    )));
                }
            }
        }
        Ok(())
    }
}
