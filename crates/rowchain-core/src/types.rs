//! Scalar cell values.
//!
//! A `Cell` holds exactly one value out of a closed set of kinds. The kind is
//! authoritative at read time: accessors, comparisons, and arithmetic check it
//! explicitly and never coerce between kinds.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellKind {
    Int,
    Float,
    Text,
    Char,
}

impl fmt::Display for CellKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CellKind::Int => "integer",
            CellKind::Float => "float",
            CellKind::Text => "text",
            CellKind::Char => "char",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Cell {
    Int(i64),
    Float(f64),
    Text(String),
    Char(char),
}

/// Binary arithmetic understood by [`Cell::apply`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArithOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl fmt::Display for ArithOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ArithOp::Add => "add",
            ArithOp::Sub => "sub",
            ArithOp::Mul => "mul",
            ArithOp::Div => "div",
        };
        f.write_str(s)
    }
}

impl Cell {
    pub fn kind(&self) -> CellKind {
        match self {
            Cell::Int(_) => CellKind::Int,
            Cell::Float(_) => CellKind::Float,
            Cell::Text(_) => CellKind::Text,
            Cell::Char(_) => CellKind::Char,
        }
    }

    /// Replace the value in place, possibly changing its kind.
    /// Returns the previous value.
    pub fn update(&mut self, value: impl Into<Cell>) -> Cell {
        std::mem::replace(self, value.into())
    }

    pub fn as_int(&self) -> Result<i64> {
        match self {
            Cell::Int(v) => Ok(*v),
            other => Err(Error::mismatch(CellKind::Int, other.kind())),
        }
    }

    pub fn as_float(&self) -> Result<f64> {
        match self {
            Cell::Float(v) => Ok(*v),
            other => Err(Error::mismatch(CellKind::Float, other.kind())),
        }
    }

    pub fn as_text(&self) -> Result<&str> {
        match self {
            Cell::Text(v) => Ok(v),
            other => Err(Error::mismatch(CellKind::Text, other.kind())),
        }
    }

    pub fn as_char(&self) -> Result<char> {
        match self {
            Cell::Char(v) => Ok(*v),
            other => Err(Error::mismatch(CellKind::Char, other.kind())),
        }
    }

    /// Kind-aware total order between two cells of the same kind.
    ///
    /// Floats order NaN after every other value. Cells of different kinds are
    /// not comparable and yield `TypeMismatch`.
    pub fn compare(&self, other: &Cell) -> Result<Ordering> {
        match (self, other) {
            (Cell::Int(a), Cell::Int(b)) => Ok(a.cmp(b)),
            (Cell::Float(a), Cell::Float(b)) => Ok(float_cmp(*a, *b)),
            (Cell::Text(a), Cell::Text(b)) => Ok(a.cmp(b)),
            (Cell::Char(a), Cell::Char(b)) => Ok(a.cmp(b)),
            _ => Err(Error::mismatch(self.kind(), other.kind())),
        }
    }

    /// Apply `op` with `self` on the left. Both operands must share a kind.
    ///
    /// Integers use checked arithmetic; overflow and division by zero are
    /// `InvalidArgument`. Text supports `Add` as concatenation only.
    pub fn apply(&self, op: ArithOp, rhs: &Cell) -> Result<Cell> {
        match (self, rhs) {
            (Cell::Int(a), Cell::Int(b)) => {
                let out = match op {
                    ArithOp::Add => a.checked_add(*b),
                    ArithOp::Sub => a.checked_sub(*b),
                    ArithOp::Mul => a.checked_mul(*b),
                    ArithOp::Div => {
                        if *b == 0 {
                            return Err(Error::InvalidArgument("integer division by zero".into()));
                        }
                        a.checked_div(*b)
                    }
                };
                out.map(Cell::Int).ok_or_else(|| {
                    Error::InvalidArgument(format!("integer overflow in {} of {} and {}", op, a, b))
                })
            }
            (Cell::Float(a), Cell::Float(b)) => Ok(Cell::Float(match op {
                ArithOp::Add => a + b,
                ArithOp::Sub => a - b,
                ArithOp::Mul => a * b,
                ArithOp::Div => a / b,
            })),
            (Cell::Text(a), Cell::Text(b)) => match op {
                ArithOp::Add => Ok(Cell::Text(format!("{}{}", a, b))),
                _ => Err(Error::InvalidArgument(format!("{} is not defined for text", op))),
            },
            (Cell::Char(_), Cell::Char(_)) => Err(Error::InvalidArgument(format!(
                "{} is not defined for char",
                op
            ))),
            _ => Err(Error::mismatch(self.kind(), rhs.kind())),
        }
    }
}

fn float_cmp(x: f64, y: f64) -> Ordering {
    if x.is_nan() && y.is_nan() {
        Ordering::Equal
    } else if x.is_nan() {
        Ordering::Greater
    } else if y.is_nan() {
        Ordering::Less
    } else {
        x.partial_cmp(&y).unwrap_or(Ordering::Equal)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Int(v) => write!(f, "{}", v),
            Cell::Float(v) => write!(f, "{}", v),
            Cell::Text(v) => f.write_str(v),
            Cell::Char(v) => write!(f, "{}", v),
        }
    }
}

impl From<i64> for Cell {
    fn from(v: i64) -> Self {
        Cell::Int(v)
    }
}

impl From<i32> for Cell {
    fn from(v: i32) -> Self {
        Cell::Int(v as i64)
    }
}

impl From<f64> for Cell {
    fn from(v: f64) -> Self {
        Cell::Float(v)
    }
}

impl From<String> for Cell {
    fn from(v: String) -> Self {
        Cell::Text(v)
    }
}

impl From<&str> for Cell {
    fn from(v: &str) -> Self {
        Cell::Text(v.to_string())
    }
}

impl From<char> for Cell {
    fn from(v: char) -> Self {
        Cell::Char(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn update_changes_kind() {
        let mut cell = Cell::from(7);
        let old = cell.update("seven");
        assert_eq!(old, Cell::Int(7));
        assert_eq!(cell.kind(), CellKind::Text);
        assert_eq!(cell.as_text().unwrap(), "seven");
    }

    #[test]
    fn accessors_do_not_coerce() {
        let cell = Cell::Int(1);
        let err = cell.as_float().unwrap_err();
        assert_eq!(
            err,
            Error::TypeMismatch {
                expected: CellKind::Float,
                found: CellKind::Int
            }
        );
        assert!(Cell::Char('x').as_text().is_err());
    }

    #[test]
    fn compare_same_kind() {
        assert_eq!(Cell::Int(1).compare(&Cell::Int(2)).unwrap(), Ordering::Less);
        assert_eq!(
            Cell::from("b").compare(&Cell::from("a")).unwrap(),
            Ordering::Greater
        );
        assert_eq!(
            Cell::Char('q').compare(&Cell::Char('q')).unwrap(),
            Ordering::Equal
        );
        assert_eq!(
            Cell::Float(f64::NAN).compare(&Cell::Float(1.0)).unwrap(),
            Ordering::Greater
        );
    }

    #[test]
    fn compare_rejects_mixed_kinds() {
        let err = Cell::from("a").compare(&Cell::Int(1)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TypeMismatch);
        // integer vs float is still a mismatch: no numeric widening
        assert!(Cell::Int(1).compare(&Cell::Float(1.0)).is_err());
    }

    #[test]
    fn arithmetic_is_kind_checked() {
        assert_eq!(
            Cell::Int(6).apply(ArithOp::Mul, &Cell::Int(7)).unwrap(),
            Cell::Int(42)
        );
        assert_eq!(
            Cell::Float(1.5).apply(ArithOp::Add, &Cell::Float(0.5)).unwrap(),
            Cell::Float(2.0)
        );
        assert_eq!(
            Cell::from("ab").apply(ArithOp::Add, &Cell::from("cd")).unwrap(),
            Cell::from("abcd")
        );
        assert_eq!(
            Cell::Int(1)
                .apply(ArithOp::Add, &Cell::Float(1.0))
                .unwrap_err()
                .kind(),
            ErrorKind::TypeMismatch
        );
        assert_eq!(
            Cell::Int(1)
                .apply(ArithOp::Div, &Cell::Int(0))
                .unwrap_err()
                .kind(),
            ErrorKind::InvalidArgument
        );
        assert!(Cell::Int(i64::MAX).apply(ArithOp::Add, &Cell::Int(1)).is_err());
        assert!(Cell::from("a").apply(ArithOp::Sub, &Cell::from("a")).is_err());
    }
}
