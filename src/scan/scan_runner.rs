use tracing::info;

use crate::engine::errors::QueryError;
use crate::engine::query::{QueryBackend, ResultRow, RowFields, min_max_rows};
use crate::ingest::schema::{DATE, STATION};
use crate::scan::ScanPlan;

const ROW_FIELDS: RowFields<'static> = RowFields {
    date: DATE,
    group: STATION,
};

/// One query per (year, month) of `plan`; rows are grouped by query, then by
/// field in plan order.
pub fn run_scan<B>(backend: &B, plan: &ScanPlan) -> Result<Vec<ResultRow>, QueryError>
where
    B: QueryBackend + ?Sized,
{
    let mut rows = Vec::new();
    for year in &plan.years {
        info!(
            target: "col_db::scan",
            backend = backend.name(),
            station = %plan.station,
            year = %year,
            "Started scanning"
        );
        for month in &plan.months {
            let predicates = plan.predicates(year, month);
            for field in &plan.fields {
                rows.extend(min_max_rows(backend, &predicates, field, ROW_FIELDS)?);
            }
        }
        info!(target: "col_db::scan", year = %year, rows = rows.len(), "Finished year");
    }
    Ok(rows)
}
