use crate::engine::core::column::ColumnVector;
use crate::engine::errors::ColumnError;

#[test]
fn append_tracks_nulls_by_position() {
    let inputs = [Some(1.5), None, Some(-2.0), None, Some(0.0)];
    let mut col = ColumnVector::<f64>::new("Temperature");
    for v in inputs {
        col.append(v);
    }

    assert_eq!(col.len(), inputs.len());
    for (i, v) in inputs.iter().enumerate() {
        assert_eq!(col.is_null(i).unwrap(), v.is_none(), "position {}", i);
    }
    assert_eq!(col.null_count(), 2);
}

#[test]
fn get_returns_value_or_placeholder() {
    let mut col = ColumnVector::<String>::new("Timestamp");
    col.append(Some("2003-01-01 00:00".into()));
    col.append(None);

    assert_eq!(col.get(0).unwrap(), "2003-01-01 00:00");
    assert_eq!(col.get(1).unwrap(), "");
    assert_eq!(col.value_at(1).unwrap(), None);
    assert_eq!(col.value_at(0).unwrap().map(String::as_str), Some("2003-01-01 00:00"));
}

#[test]
fn out_of_range_access_fails() {
    let mut col = ColumnVector::<f64>::new("Humidity");
    col.append(Some(80.0));

    let err = col.get(1).unwrap_err();
    assert!(matches!(
        err,
        ColumnError::OutOfRange { ref field, position: 1, len: 1 } if field == "Humidity"
    ));
    assert!(matches!(col.is_null(5), Err(ColumnError::OutOfRange { .. })));
}

#[test]
fn empty_vector_rejects_every_position() {
    let col = ColumnVector::<f64>::new("Humidity");
    assert!(col.is_empty());
    assert!(col.get(0).is_err());
    assert!(col.is_null(0).is_err());
}

#[test]
fn iter_pairs_positions_with_optional_values() {
    let mut col = ColumnVector::<f64>::new("Temperature");
    col.append(Some(3.0));
    col.append(None);
    col.append(Some(4.0));

    let seen: Vec<(usize, Option<f64>)> = col.iter().map(|(i, v)| (i, v.copied())).collect();
    assert_eq!(seen, vec![(0, Some(3.0)), (1, None), (2, Some(4.0))]);
    assert_eq!(col.validity().to_positions(), vec![0, 2]);
}
