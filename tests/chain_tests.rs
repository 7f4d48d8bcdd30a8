//! End-to-end operator chain scenarios

use rowchain_core::prelude::*;
use rowchain_core::row;
use rowchain_operators::{
    Filter, Limit, OpError, Operator, RowCompute, Selection, Sort, SortDirection, UnaryOperator,
};

fn sample() -> RowSet {
    // columns: int, text
    RowSet::from(vec![row![1, "b"], row![3, "a"], row![2, "a"]])
}

#[test]
fn test_sort_ascending_on_text_keeps_ties() {
    let out = Sort::new(1, SortDirection::Ascending).operate(sample()).unwrap();
    assert_eq!(out, RowSet::from(vec![row![3, "a"], row![2, "a"], row![1, "b"]]));
}

#[test]
fn test_limit_two_on_original() {
    let out = Limit::new(2).operate(sample()).unwrap();
    assert_eq!(out, RowSet::from(vec![row![1, "b"], row![3, "a"]]));
}

#[test]
fn test_selection_of_text_column() {
    let out = Selection::new(vec![1]).operate(sample()).unwrap();
    assert_eq!(out, RowSet::from(vec![row!["b"], row!["a"], row!["a"]]));
}

#[test]
fn test_base_operator_is_unimplemented() {
    let err = UnaryOperator::base().operate(sample()).unwrap_err();
    assert!(matches!(err, OpError::Unimplemented { .. }));
    assert_eq!(err.kind(), ErrorKind::UnimplementedOperator);
}

#[test]
fn test_derived_column_then_sort_then_project() {
    // price, qty -> total; order by total desc; keep total only
    let rows = RowSet::from(vec![
        row![2.5, 4.0],
        row![10.0, 1.0],
        row![1.0, 1.0],
        row![5.0, 2.0],
    ]);
    let chain = UnaryOperator::new(RowCompute::arith(0, ArithOp::Mul, 1))
        .then(Sort::descending(2))
        .then(Selection::new(vec![2]));
    let out = chain.execute_all(rows).unwrap();
    let totals: Vec<Cell> = out.into_iter().map(|r| r.get(0).unwrap().clone()).collect();
    // three rows tie at 10.0
    assert_eq!(
        totals,
        vec![Cell::Float(10.0), Cell::Float(10.0), Cell::Float(10.0), Cell::Float(1.0)]
    );
}

#[test]
fn test_stability_visible_through_payload() {
    let rows = RowSet::from(vec![
        row![2, 'a'],
        row![1, 'b'],
        row![2, 'c'],
        row![1, 'd'],
        row![2, 'e'],
    ]);
    let tags = |rs: RowSet| -> String {
        rs.into_iter()
            .map(|r| r.get(1).unwrap().as_char().unwrap())
            .collect()
    };
    assert_eq!(tags(Sort::ascending(0).operate(rows.clone()).unwrap()), "bdace");
    assert_eq!(tags(Sort::descending(0).operate(rows).unwrap()), "acebd");
}

#[test]
fn test_filter_from_computed_flags() {
    // flags produced outside the filter, here from column 0
    let rows = sample();
    let flags: Vec<bool> = rows
        .iter()
        .map(|r| r.get(0).unwrap().as_int().unwrap() > 1)
        .collect();
    let out = Filter::new(flags).operate(rows).unwrap();
    assert_eq!(out, RowSet::from(vec![row![3, "a"], row![2, "a"]]));
}

#[test]
fn test_compute_failure_aborts_chain() {
    let chain = UnaryOperator::new(RowCompute::new(|r: &Row| {
        Ok(Cell::Int(r.get(0)?.as_int()? * 10))
    }))
    .then(Limit::new(10));
    let rows = RowSet::from(vec![row![1], row!['x'], row![3]]);
    let err = chain.execute_all(rows).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::TypeMismatch);
}

#[test]
fn test_sort_over_mixed_numeric_kinds_fails() {
    let rows = RowSet::from(vec![row![1], row![1.5]]);
    let err = Sort::descending(0).operate(rows).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::TypeMismatch);
}
