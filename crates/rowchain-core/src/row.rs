//! Row-oriented batches: `Row` is one record, `RowSet` is one batch.
//!
//! Both are plain values. Cloning a `RowSet` yields an independent copy, and
//! operators always hand back a fresh batch rather than mutating their input.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::Cell;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Row {
    cells: Vec<Cell>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(cap: usize) -> Self {
        Self {
            cells: Vec::with_capacity(cap),
        }
    }

    /// Bounds-checked positional access.
    pub fn get(&self, index: usize) -> Result<&Cell> {
        self.cells.get(index).ok_or(Error::IndexOutOfRange {
            index,
            len: self.cells.len(),
        })
    }

    /// Replace the cell at `index`, returning the previous value.
    pub fn set(&mut self, index: usize, cell: impl Into<Cell>) -> Result<Cell> {
        let len = self.cells.len();
        let slot = self
            .cells
            .get_mut(index)
            .ok_or(Error::IndexOutOfRange { index, len })?;
        Ok(slot.update(cell))
    }

    pub fn append(&mut self, cell: impl Into<Cell>) {
        self.cells.push(cell.into());
    }

    /// Copies of every cell, in column order.
    pub fn values(&self) -> Vec<Cell> {
        self.cells.clone()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Cell> {
        self.cells.iter()
    }
}

impl From<Vec<Cell>> for Row {
    fn from(cells: Vec<Cell>) -> Self {
        Self { cells }
    }
}

impl FromIterator<Cell> for Row {
    fn from_iter<I: IntoIterator<Item = Cell>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Row {
    type Item = Cell;
    type IntoIter = std::vec::IntoIter<Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.into_iter()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RowSet {
    rows: Vec<Row>,
}

impl RowSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(cap: usize) -> Self {
        Self {
            rows: Vec::with_capacity(cap),
        }
    }

    pub fn append(&mut self, row: Row) {
        self.rows.push(row);
    }

    /// Bounds-checked row access.
    pub fn get(&self, index: usize) -> Result<&Row> {
        self.rows.get(index).ok_or(Error::IndexOutOfRange {
            index,
            len: self.rows.len(),
        })
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<Row> {
        self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Row> {
        self.rows.iter()
    }

    /// Cells of column `index` across all rows; any short row is an error.
    pub fn column(&self, index: usize) -> Result<Vec<&Cell>> {
        self.rows.iter().map(|r| r.get(index)).collect()
    }
}

impl From<Vec<Row>> for RowSet {
    fn from(rows: Vec<Row>) -> Self {
        Self { rows }
    }
}

impl FromIterator<Row> for RowSet {
    fn from_iter<I: IntoIterator<Item = Row>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for RowSet {
    type Item = Row;
    type IntoIter = std::vec::IntoIter<Row>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}

impl<'a> IntoIterator for &'a RowSet {
    type Item = &'a Row;
    type IntoIter = std::slice::Iter<'a, Row>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

/// Build a [`Row`] from values convertible into [`Cell`].
///
/// ```
/// use rowchain_core::{row, types::Cell};
/// let r = row![1, "a", 'c', 2.5];
/// assert_eq!(r.get(1).unwrap(), &Cell::from("a"));
/// ```
#[macro_export]
macro_rules! row {
    () => { $crate::row::Row::new() };
    ($($v:expr),+ $(,)?) => {
        $crate::row::Row::from(vec![$($crate::types::Cell::from($v)),+])
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn row_access_is_bounds_checked() {
        let r = row![1, "x"];
        assert_eq!(r.get(0).unwrap(), &Cell::Int(1));
        assert_eq!(
            r.get(2).unwrap_err(),
            Error::IndexOutOfRange { index: 2, len: 2 }
        );
    }

    #[test]
    fn append_and_set() {
        let mut r = Row::new();
        assert!(r.is_empty());
        r.append(3);
        r.append('z');
        assert_eq!(r.len(), 2);
        let old = r.set(0, "three").unwrap();
        assert_eq!(old, Cell::Int(3));
        assert_eq!(r.values(), vec![Cell::from("three"), Cell::Char('z')]);
        assert_eq!(r.set(5, 1).unwrap_err().kind(), ErrorKind::IndexOutOfRange);
    }

    #[test]
    fn rowset_clone_is_independent() {
        let original = RowSet::from(vec![row![1], row![2]]);
        let mut copy = original.clone();
        copy.append(row![3]);
        assert_eq!(original.len(), 2);
        assert_eq!(copy.len(), 3);
        assert!(original.get(2).is_err());
    }

    #[test]
    fn column_requires_every_row() {
        let rs = RowSet::from(vec![row![1, "a"], row![2]]);
        assert_eq!(rs.column(0).unwrap().len(), 2);
        assert!(rs.column(1).is_err());
    }
}
