use std::collections::HashSet;

use crate::engine::core::column::CategoricalColumn;

fn set(values: &[&str]) -> HashSet<String> {
    values.iter().map(|s| s.to_string()).collect()
}

#[test]
fn categories_are_distinct_non_null_values() {
    let mut col = CategoricalColumn::<String>::new("Station");
    for v in [Some("Changi"), None, Some("Paya Lebar"), Some("Changi"), None] {
        col.append(v.map(String::from));
    }

    assert_eq!(col.categories(), &set(&["Changi", "Paya Lebar"]));
    assert_eq!(col.len(), 5);
    assert_eq!(col.null_count(), 2);
    assert!(col.is_null(1).unwrap());
    assert_eq!(col.get(3).unwrap(), "Changi");
}

#[test]
fn categories_do_not_depend_on_append_order() {
    let values = ["2003", "2013", "2003", "2008"];

    let mut forward = CategoricalColumn::<String>::new("Year");
    for v in values {
        forward.append(Some(v.to_string()));
    }
    let mut backward = CategoricalColumn::<String>::new("Year");
    for v in values.iter().rev() {
        backward.append(Some(v.to_string()));
    }

    assert_eq!(forward.categories(), backward.categories());
    assert_eq!(forward.categories(), &set(&["2003", "2008", "2013"]));
}

#[test]
fn all_null_column_has_no_categories() {
    let mut col = CategoricalColumn::<String>::new("Month");
    col.append(None);
    col.append(None);

    assert!(col.categories().is_empty());
    assert_eq!(col.as_vector().null_count(), 2);
}
