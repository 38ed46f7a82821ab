//! Tag facets for the filter checkbox list
//!
//! Facet counts are computed over the full canonical catalog, never over
//! the filtered results: selecting filters does not change the counts.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::SearchState;
use crate::catalog::{tag_key, Package};

/// How many packages carry a tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagCount {
    /// Tag in the casing it was first seen with
    pub tag: String,
    pub count: usize,
}

/// A checkbox in the tag filter list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetCheckbox {
    /// Tag written back into the search state when checked
    pub key: String,
    /// `"<tag> (<count>)"`
    pub label: String,
    pub checked: bool,
}

/// Count packages per distinct tag, in first-seen order
///
/// Tags differing only in case are one facet. A package is counted at
/// most once per facet.
pub fn tags_count<'a, I>(packages: I) -> Vec<TagCount>
where
    I: IntoIterator<Item = &'a Package>,
{
    let mut counts: IndexMap<String, TagCount> = IndexMap::new();

    for package in packages {
        let mut seen_here: Vec<String> = Vec::with_capacity(package.tags.len());
        for tag in &package.tags {
            let key = tag_key(tag);
            if seen_here.contains(&key) {
                continue;
            }
            counts
                .entry(key.clone())
                .and_modify(|c| c.count += 1)
                .or_insert_with(|| TagCount {
                    tag: tag.clone(),
                    count: 1,
                });
            seen_here.push(key);
        }
    }

    counts.into_values().collect()
}

/// Checkbox items for `counts`, checked where the state holds the tag
pub fn facet_checkboxes(counts: &[TagCount], state: &SearchState) -> Vec<FacetCheckbox> {
    counts
        .iter()
        .map(|c| FacetCheckbox {
            key: c.tag.clone(),
            label: format!("{} ({})", c.tag, c.count),
            checked: state.has_tag(&c.tag),
        })
        .collect()
}
