//! Search state: the current query and tag filter
//!
//! Both fields are independently optional. Setting either to an empty
//! value clears it, so "absent" has exactly one representation.

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::facets::FacetCheckbox;
use crate::catalog::{tag_key, tags_equal};

/// Session-scoped filter state driving every recomputation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchState {
    query: Option<String>,
    tags: Option<Vec<String>>,
}

impl SearchState {
    /// Create a state with an optional initial query (e.g. from a deep link)
    pub fn new(initial_query: Option<String>) -> Self {
        let mut state = Self::default();
        state.set_query(initial_query);
        state
    }

    /// Current query, if any
    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    /// Current tag filter, if any, in selection order and original casing
    pub fn tags(&self) -> Option<&[String]> {
        self.tags.as_deref()
    }

    /// Replace the query; an empty string clears it
    pub fn set_query(&mut self, value: Option<String>) {
        self.query = value.filter(|q| !q.is_empty());
        trace!(query = ?self.query, "Search query updated");
    }

    /// Replace the tag filter; an empty set clears it
    ///
    /// Tags equal under case-insensitive comparison are collapsed,
    /// keeping the first casing seen.
    pub fn set_tags<I, S>(&mut self, values: Option<I>)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = values.and_then(|values| {
            let mut seen = Vec::<String>::new();
            let mut tags = Vec::new();
            for tag in values {
                let tag = tag.into();
                let key = tag_key(&tag);
                if !seen.contains(&key) {
                    seen.push(key);
                    tags.push(tag);
                }
            }
            (!tags.is_empty()).then_some(tags)
        });
        trace!(tags = ?self.tags, "Search tags updated");
    }

    /// Drop the query ("Clear search")
    pub fn clear_query(&mut self) {
        self.set_query(None);
    }

    /// Drop the tag filter
    pub fn clear_tags(&mut self) {
        self.set_tags(None::<Vec<String>>);
    }

    /// Replace the filter with exactly one tag (clicking a tag badge)
    pub fn select_only_tag(&mut self, tag: &str) {
        self.set_tags(Some([tag]));
    }

    /// Remove one tag from the filter; the filter clears when none remain
    pub fn remove_tag(&mut self, tag: &str) {
        let remaining: Vec<String> = self
            .tags
            .iter()
            .flatten()
            .filter(|t| !tags_equal(t, tag))
            .cloned()
            .collect();
        self.set_tags(Some(remaining));
    }

    /// Use the checked checkbox keys as the tag filter
    pub fn apply_checkboxes(&mut self, items: &[FacetCheckbox]) {
        let checked = items
            .iter()
            .filter(|item| item.checked)
            .map(|item| item.key.clone());
        self.set_tags(Some(checked));
    }

    /// Whether `tag` is part of the filter, ignoring case
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags
            .iter()
            .flatten()
            .any(|t| tags_equal(t, tag))
    }
}
