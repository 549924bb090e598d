use crate::engine::core::store::{MinMaxPositions, MinMaxScanner};

fn scan(values: &[Option<f64>]) -> MinMaxPositions {
    let mut scanner = MinMaxScanner::new();
    for (pos, v) in values.iter().enumerate() {
        scanner.observe(pos, *v);
    }
    scanner.finish()
}

#[test]
fn ties_are_collected_for_both_extremes() {
    let result = scan(&[Some(5.0), Some(3.0), Some(3.0), Some(7.0), Some(7.0), None]);
    assert_eq!(result.min, vec![1, 2]);
    assert_eq!(result.max, vec![3, 4]);
}

#[test]
fn nothing_observed_yields_empty_lists() {
    assert_eq!(scan(&[]), MinMaxPositions::default());
    assert!(scan(&[None, None, None]).is_empty());
}

#[test]
fn leading_nulls_do_not_seed_extremes() {
    let result = scan(&[None, Some(10.0), None, Some(2.0)]);
    assert_eq!(result.min, vec![3]);
    assert_eq!(result.max, vec![1]);
}

#[test]
fn single_value_is_both_min_and_max() {
    let result = scan(&[None, Some(4.2)]);
    assert_eq!(result.min, vec![1]);
    assert_eq!(result.max, vec![1]);
}

#[test]
fn constant_values_tie_everywhere() {
    let result = scan(&[Some(1.0), Some(1.0), None, Some(1.0)]);
    assert_eq!(result.min, vec![0, 1, 3]);
    assert_eq!(result.max, vec![0, 1, 3]);
}

#[test]
fn new_minimum_discards_earlier_ties() {
    let mut scanner = MinMaxScanner::new();
    scanner.observe(10, Some(4.0));
    scanner.observe(11, Some(4.0));
    scanner.observe(12, Some(1.0));
    assert_eq!(scanner.extremes(), Some((1.0, 4.0)));

    let result = scanner.finish();
    assert_eq!(result.min, vec![12]);
    assert_eq!(result.max, vec![10, 11]);
}
