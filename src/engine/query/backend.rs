use crate::engine::errors::QueryError;
use crate::engine::query::{MinMaxPositions, QueryPredicates};

/// Query surface shared by the in-memory and on-disk databases. Both must
/// return identical results for the same data.
pub trait QueryBackend {
    fn name(&self) -> &'static str;

    /// Ascending positions matching every predicate.
    fn evaluate(&self, predicates: &QueryPredicates) -> Result<Vec<usize>, QueryError>;

    /// Tie-aware min/max of the real column `field` restricted to `positions`.
    fn min_max_among(
        &self,
        field: &str,
        positions: &[usize],
    ) -> Result<MinMaxPositions, QueryError>;

    /// Value text of `field` at each of `positions`, `None` for nulls.
    fn texts_at(&self, field: &str, positions: &[usize])
    -> Result<Vec<Option<String>>, QueryError>;

    fn min_max_for(
        &self,
        predicates: &QueryPredicates,
        field: &str,
    ) -> Result<MinMaxPositions, QueryError> {
        let positions = self.evaluate(predicates)?;
        self.min_max_among(field, &positions)
    }
}
