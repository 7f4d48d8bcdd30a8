//! Convenient re-exports for downstream crates.

pub use crate::config::{ExecConfig, FilterLengthPolicy};
pub use crate::error::{Error, ErrorKind, Result};
pub use crate::row::{Row, RowSet};
pub use crate::schema::{Field, Schema};
pub use crate::table::Table;
pub use crate::types::{ArithOp, Cell, CellKind};
