//! Results pipeline and search session
//!
//! `compute` applies the text filter and then the tag filter. The two
//! predicates commute; only the final set matters.
//!
//! `SearchSession` is what a front-end holds: the (possibly absent)
//! catalog plus the search state. Every read recomputes from scratch, so
//! a mutation is observable by the very next call.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::facets::{facet_checkboxes, tags_count, FacetCheckbox, TagCount};
use super::tags::tags_search;
use super::text::text_search;
use super::SearchState;
use crate::catalog::{CanonicalCatalog, Package};

/// Default number of facet checkboxes shown before collapsing
pub const DEFAULT_FACET_LIMIT: usize = 15;

/// Filter `packages` by the state's query, then by its tags
///
/// An absent query or tag filter leaves the input untouched.
pub fn compute<'a, I>(packages: I, state: &SearchState) -> Vec<&'a Package>
where
    I: IntoIterator<Item = &'a Package>,
{
    let by_text: Vec<&Package> = match state.query() {
        Some(query) => text_search(packages, query),
        None => packages.into_iter().collect(),
    };

    match state.tags() {
        Some(tags) => tags_search(by_text, tags),
        None => by_text,
    }
}

/// The `N results for "query".` line shown above the results
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultsSummary {
    pub count: usize,
    pub query: String,
}

impl fmt::Display for ResultsSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} results for \"{}\".", self.count, self.query)
    }
}

/// A catalog paired with the user's search state
#[derive(Debug, Clone, Default)]
pub struct SearchSession {
    catalog: Option<CanonicalCatalog>,
    state: SearchState,
}

impl SearchSession {
    /// Start a session; `catalog` is `None` when the index failed to load
    pub fn new(catalog: Option<CanonicalCatalog>, initial_query: Option<String>) -> Self {
        debug!(
            catalog_available = catalog.is_some(),
            packages = catalog.as_ref().map_or(0, CanonicalCatalog::len),
            "Starting search session"
        );
        Self {
            catalog,
            state: SearchState::new(initial_query),
        }
    }

    pub fn catalog(&self) -> Option<&CanonicalCatalog> {
        self.catalog.as_ref()
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    /// Mutable access for the state's setters
    pub fn state_mut(&mut self) -> &mut SearchState {
        &mut self.state
    }

    /// Filtered packages, or `None` when no catalog is available
    pub fn results(&self) -> Option<Vec<&Package>> {
        self.catalog
            .as_ref()
            .map(|catalog| compute(catalog, &self.state))
    }

    /// Whether the filtered result set is empty (false without a catalog)
    pub fn is_empty(&self) -> bool {
        self.results().is_some_and(|r| r.is_empty())
    }

    /// Tag counts over the whole catalog, unaffected by the filters
    pub fn tag_counts(&self) -> Vec<TagCount> {
        self.catalog
            .as_ref()
            .map(|catalog| tags_count(catalog))
            .unwrap_or_default()
    }

    /// Checkbox list for the filter panel
    pub fn facets(&self) -> Vec<FacetCheckbox> {
        facet_checkboxes(&self.tag_counts(), &self.state)
    }

    /// Result summary, present only while a query is active and a
    /// catalog is available
    pub fn summary(&self) -> Option<ResultsSummary> {
        let query = self.state.query()?;
        let results = self.results()?;
        Some(ResultsSummary {
            count: results.len(),
            query: query.to_string(),
        })
    }
}
