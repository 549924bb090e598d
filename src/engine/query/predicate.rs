use std::fmt;

use indexmap::IndexMap;

/// Conjunction of `field = category` terms.
///
/// Terms keep insertion order for display only; evaluation and equality do not
/// depend on it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryPredicates {
    terms: IndexMap<String, String>,
}

impl QueryPredicates {
    pub fn new() -> Self {
        Self {
            terms: IndexMap::new(),
        }
    }

    pub fn with(mut self, field: impl Into<String>, category: impl Into<String>) -> Self {
        self.insert(field, category);
        self
    }

    /// Adds or replaces the term for `field`.
    pub fn insert(&mut self, field: impl Into<String>, category: impl Into<String>) {
        self.terms.insert(field.into(), category.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.terms.get(field).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.terms.iter().map(|(f, c)| (f.as_str(), c.as_str()))
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

impl<F, C> FromIterator<(F, C)> for QueryPredicates
where
    F: Into<String>,
    C: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (F, C)>>(iter: I) -> Self {
        let mut predicates = Self::new();
        for (field, category) in iter {
            predicates.insert(field, category);
        }
        predicates
    }
}

impl fmt::Display for QueryPredicates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (field, category)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, " AND ")?;
            }
            write!(f, "{}={:?}", field, category)?;
        }
        Ok(())
    }
}
