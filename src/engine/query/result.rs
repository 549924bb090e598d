use tracing::debug;

use crate::engine::errors::QueryError;
use crate::engine::query::{QueryBackend, QueryPredicates};

/// One output line: `(date, group key, "Min <field>" | "Max <field>", value)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRow {
    pub date: String,
    pub group_key: String,
    pub category: String,
    pub value: String,
}

/// Field names the result rows are assembled from.
#[derive(Debug, Clone, Copy)]
pub struct RowFields<'a> {
    /// Text column holding each row's calendar date.
    pub date: &'a str,
    /// Predicate whose category labels every row.
    pub group: &'a str,
}

/// Runs `predicates`, scans `field` for extremes and renders one row per
/// extremal position, min rows first.
///
/// A row is dropped only when it equals the row emitted just before it, so
/// identical rows separated by a different one both survive.
pub fn min_max_rows<B>(
    backend: &B,
    predicates: &QueryPredicates,
    field: &str,
    fields: RowFields<'_>,
) -> Result<Vec<ResultRow>, QueryError>
where
    B: QueryBackend + ?Sized,
{
    let extremes = backend.min_max_for(predicates, field)?;
    if extremes.is_empty() {
        return Ok(Vec::new());
    }

    let positions: Vec<usize> = extremes
        .min
        .iter()
        .chain(extremes.max.iter())
        .copied()
        .collect();
    let dates = backend.texts_at(fields.date, &positions)?;
    let values = backend.texts_at(field, &positions)?;
    let group_key = predicates.get(fields.group).unwrap_or_default();

    let labels = std::iter::repeat_n(format!("Min {}", field), extremes.min.len())
        .chain(std::iter::repeat_n(format!("Max {}", field), extremes.max.len()));

    let mut rows: Vec<ResultRow> = Vec::with_capacity(positions.len());
    for ((category, date), value) in labels.zip(dates).zip(values) {
        let row = ResultRow {
            date: date.unwrap_or_default(),
            group_key: group_key.to_string(),
            category,
            value: value.unwrap_or_default(),
        };
        if rows.last() != Some(&row) {
            rows.push(row);
        }
    }

    debug!(
        target: "col_db::query",
        backend = backend.name(),
        field = %field,
        extremal = positions.len(),
        rows = rows.len(),
        "Result rows built"
    );
    Ok(rows)
}
