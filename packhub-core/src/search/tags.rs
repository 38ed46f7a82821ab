//! Tag membership filter with AND semantics

use tracing::trace;

use crate::catalog::{tag_key, Package};

/// Packages carrying every tag in `tags`, compared case-insensitively
///
/// Relative order is preserved. An empty tag set matches everything.
pub fn tags_search<'a, I, S>(packages: I, tags: &[S]) -> Vec<&'a Package>
where
    I: IntoIterator<Item = &'a Package>,
    S: AsRef<str>,
{
    let wanted: Vec<String> = tags.iter().map(|t| tag_key(t.as_ref())).collect();

    let results: Vec<&Package> = packages
        .into_iter()
        .filter(|package| {
            let carried: Vec<String> = package.tags.iter().map(|t| tag_key(t)).collect();
            wanted.iter().all(|tag| carried.contains(tag))
        })
        .collect();

    trace!(tags = ?wanted, matches = results.len(), "Tag search");
    results
}
