use crate::engine::core::store::ColumnStore;
use crate::engine::query::{MemoryDatabase, QueryPredicates, ResultRow, RowFields, min_max_rows};

const FIELDS: RowFields<'static> = RowFields {
    date: "Date",
    group: "Station",
};

fn database(rows: &[(&str, Option<f64>)]) -> MemoryDatabase {
    let mut store = ColumnStore::new();
    store.define_text("Date").unwrap();
    store.define_categorical("Station").unwrap();
    store.define_real("Temperature").unwrap();
    for (date, temperature) in rows {
        store.append_text("Date", Some(date.to_string())).unwrap();
        store.append_category("Station", Some("X".to_string())).unwrap();
        store.append_real("Temperature", *temperature).unwrap();
    }
    MemoryDatabase::new(store)
}

fn row(date: &str, category: &str, value: &str) -> ResultRow {
    ResultRow {
        date: date.to_string(),
        group_key: "X".to_string(),
        category: category.to_string(),
        value: value.to_string(),
    }
}

#[test]
fn min_rows_precede_max_rows() {
    let db = database(&[
        ("2003-01-01", Some(25.0)),
        ("2003-01-02", Some(21.5)),
        ("2003-01-03", None),
    ]);
    let predicates = QueryPredicates::new().with("Station", "X");

    let rows = min_max_rows(&db, &predicates, "Temperature", FIELDS).unwrap();
    assert_eq!(
        rows,
        vec![
            row("2003-01-02", "Min Temperature", "21.5"),
            row("2003-01-01", "Max Temperature", "25.0"),
        ]
    );
}

#[test]
fn consecutive_duplicates_collapse_but_separated_ones_repeat() {
    let db = database(&[
        ("2003-01-01", Some(20.0)),
        ("2003-01-01", Some(20.0)),
        ("2003-01-02", Some(20.0)),
        ("2003-01-01", Some(20.0)),
        ("2003-01-03", Some(30.0)),
    ]);
    let predicates = QueryPredicates::new().with("Station", "X");

    let rows = min_max_rows(&db, &predicates, "Temperature", FIELDS).unwrap();
    assert_eq!(
        rows,
        vec![
            row("2003-01-01", "Min Temperature", "20.0"),
            row("2003-01-02", "Min Temperature", "20.0"),
            row("2003-01-01", "Min Temperature", "20.0"),
            row("2003-01-03", "Max Temperature", "30.0"),
        ]
    );
}

#[test]
fn single_reading_is_both_min_and_max() {
    let db = database(&[("2003-01-01", Some(24.0))]);
    let predicates = QueryPredicates::new().with("Station", "X");

    let rows = min_max_rows(&db, &predicates, "Temperature", FIELDS).unwrap();
    assert_eq!(
        rows,
        vec![
            row("2003-01-01", "Min Temperature", "24.0"),
            row("2003-01-01", "Max Temperature", "24.0"),
        ]
    );
}

#[test]
fn no_match_gives_no_rows() {
    let db = database(&[("2003-01-01", Some(24.0))]);
    let predicates = QueryPredicates::new().with("Station", "Nowhere");

    assert!(
        min_max_rows(&db, &predicates, "Temperature", FIELDS)
            .unwrap()
            .is_empty()
    );
}
