//! Row selection by a precomputed flag vector.
//!
//! The operator does not evaluate predicates; flags are produced upstream.
//! `flags[i]` decides whether input row `i` is kept. When lengths differ the
//! configured [`FilterLengthPolicy`] applies.

use rowchain_core::config::FilterLengthPolicy;
use rowchain_core::error::Error;
use rowchain_core::row::RowSet;

use crate::traits::{OpError, Operator};

#[derive(Debug, Clone, Default)]
pub struct Filter {
    pub flags: Vec<bool>,
    pub policy: FilterLengthPolicy,
}

impl Filter {
    pub fn new(flags: Vec<bool>) -> Self {
        Self {
            flags,
            policy: FilterLengthPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: FilterLengthPolicy) -> Self {
        self.policy = policy;
        self
    }
}

impl Operator for Filter {
    fn name(&self) -> &'static str {
        "filter"
    }

    fn operate(&self, rows: RowSet) -> Result<RowSet, OpError> {
        if self.flags.len() != rows.len() {
            match self.policy {
                FilterLengthPolicy::Strict => {
                    return Err(Error::InvalidArgument(format!(
                        "filter has {} flags for {} rows",
                        self.flags.len(),
                        rows.len()
                    ))
                    .into());
                }
                FilterLengthPolicy::Truncate => {
                    tracing::debug!(
                        flags = self.flags.len(),
                        rows = rows.len(),
                        "filter length mismatch; using covered prefix"
                    );
                }
            }
        }

        Ok(rows
            .into_iter()
            .zip(self.flags.iter())
            .filter_map(|(row, &keep)| keep.then_some(row))
            .collect())
    }
}
