//! Named batch. Storage and retrieval of tables live outside this workspace;
//! a `Table` is only the hand-off shape between a producer and a chain.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::row::RowSet;
use crate::schema::Schema;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Table {
    pub name: String,
    pub schema: Schema,
    data: RowSet,
}

impl Table {
    /// Build a table, checking every row against `schema`.
    pub fn new(name: impl Into<String>, schema: Schema, data: RowSet) -> Result<Self> {
        for row in data.iter() {
            schema.check_row(row)?;
        }
        Ok(Self {
            name: name.into(),
            schema,
            data,
        })
    }

    /// Build a table whose schema is inferred from the first row.
    pub fn inferred(name: impl Into<String>, data: RowSet) -> Result<Self> {
        let schema = Schema::infer(&data);
        Self::new(name, schema, data)
    }

    pub fn rows(&self) -> &RowSet {
        &self.data
    }

    pub fn into_rows(self) -> RowSet {
        self.data
    }
}
