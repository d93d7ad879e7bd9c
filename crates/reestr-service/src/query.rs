//! In-memory search and pagination over the dataset.

use reestr_core::{Organization, PageRequest, PageResult};

/// A normalized search term: the raw input, lowercased.
///
/// Whitespace is significant, so `" "` only matches values containing a
/// space. Matching is a case-insensitive substring test against every searchable
/// attribute and every single name part. Absent attributes never match and
/// never fail; an empty term matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchTerm(String);

impl SearchTerm {
    /// Normalizes raw user input.
    #[must_use]
    pub fn new(raw: &str) -> Self {
        Self(raw.to_lowercase())
    }

    /// The normalized text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the term matches every record.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Tests one record.
    #[must_use]
    pub fn matches(&self, org: &Organization) -> bool {
        if self.is_empty() {
            return true;
        }

        org.searchable_attributes()
            .into_iter()
            .flatten()
            .chain(org.name_parts.iter().map(String::as_str))
            .any(|value| value.to_lowercase().contains(&self.0))
    }
}

impl From<&str> for SearchTerm {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

/// Stateless filter-then-paginate over a dataset.
pub struct QueryEngine;

impl QueryEngine {
    /// Records matching `term`, in dataset order.
    #[must_use]
    pub fn filter<'a>(dataset: &'a [Organization], term: &SearchTerm) -> Vec<&'a Organization> {
        dataset.iter().filter(|org| term.matches(org)).collect()
    }

    /// One page of the records matching `term`.
    ///
    /// `page` is clamped to at least 1; past the last page the items are
    /// empty while `current_page` and `total_pages` still describe the
    /// request.
    #[must_use]
    pub fn page(dataset: &[Organization], term: &SearchTerm, page: i64) -> PageResult<Organization> {
        let request = PageRequest::new(page);
        let matching = Self::filter(dataset, term);
        let items = matching[request.bounds(matching.len())]
            .iter()
            .map(|org| (*org).clone())
            .collect();

        PageResult::new(items, request, matching.len())
    }
}
