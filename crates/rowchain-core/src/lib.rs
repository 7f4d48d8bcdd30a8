#![forbid(unsafe_code)]
//! rowchain-core: the data model shared by every pipeline crate.
//!
//! - `types`: the `Cell` scalar and its kind-checked comparison/arithmetic
//! - `row`: `Row` (one record) and `RowSet` (one batch)
//! - `schema` / `table`: optional typing for batches handed to a chain
//! - `config`, `error`, `hash`: ambient pieces reused by the upper crates

pub mod config;
pub mod error;
pub mod hash;
pub mod prelude;
pub mod row;
pub mod schema;
pub mod table;
pub mod types;
