#![forbid(unsafe_code)]
//! rowchain-operators: unary operators (limit/select/filter/compute/sort)
//! and the single-child chains that compose them.
//!
//! Design intent:
//! - Pure and synchronous; every `operate` runs to completion.
//! - Operators never mutate their input in place; each stage returns a fresh
//!   `RowSet`, so every stage after the first materializes a full copy.
//! - Any failure aborts the batch and propagates to the caller.

pub mod chain;
pub mod compute;
pub mod filter;
pub mod limit;
pub mod selection;
pub mod sort;
pub mod traits;

pub use chain::{BaseOperator, UnaryOperator};
pub use compute::{ComputeFn, RowCompute};
pub use filter::Filter;
pub use limit::Limit;
pub use selection::Selection;
pub use sort::{Sort, SortDirection};
pub use traits::{OpError, Operator};
