//! Keep the first `limit` rows.

use rowchain_core::error::Error;
use rowchain_core::row::RowSet;
use rowchain_core::schema::Schema;

use crate::traits::{OpError, Operator};

#[derive(Debug, Clone, Copy)]
pub struct Limit {
    /// Signed so that a negative count from configuration surfaces as an error.
    pub limit: i64,
}

impl Limit {
    pub fn new(limit: i64) -> Self {
        Self { limit }
    }

    fn count(&self) -> Result<usize, OpError> {
        if self.limit < 0 {
            return Err(Error::InvalidArgument(format!(
                "limit must be non-negative, got {}",
                self.limit
            ))
            .into());
        }
        Ok(usize::try_from(self.limit).unwrap_or(usize::MAX))
    }
}

impl Operator for Limit {
    fn name(&self) -> &'static str {
        "limit"
    }

    fn plan(&self, input: &Schema) -> Result<Schema, OpError> {
        self.count()?;
        Ok(input.clone())
    }

    fn operate(&self, rows: RowSet) -> Result<RowSet, OpError> {
        let n = self.count()?;
        Ok(rows.into_iter().take(n).collect())
    }
}
