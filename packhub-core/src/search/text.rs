//! Free-text package filter
//!
//! A plain case-insensitive substring predicate over name and
//! description. No tokenization, ranking or fuzzy matching.

use tracing::trace;

use crate::catalog::Package;

/// Packages whose name or description contains `query`, ignoring case
///
/// Relative order is preserved. An empty query matches everything.
pub fn text_search<'a, I>(packages: I, query: &str) -> Vec<&'a Package>
where
    I: IntoIterator<Item = &'a Package>,
{
    let query_lower = query.to_lowercase();

    let results: Vec<&Package> = packages
        .into_iter()
        .filter(|package| matches_text(package, &query_lower))
        .collect();

    trace!(query, matches = results.len(), "Text search");
    results
}

fn matches_text(package: &Package, query_lower: &str) -> bool {
    package.name.to_lowercase().contains(query_lower)
        || package.description.to_lowercase().contains(query_lower)
}

#[cfg(test)]
mod text_tests {
    use super::*;

    fn package(id: &str, name: &str, description: &str) -> Package {
        Package {
            id: id.to_string(),
            version: "1.0.0".to_string(),
            name: name.to_string(),
            description: description.to_string(),
            tags: vec![],
            author: None,
            title: None,
            archive_url: None,
            archive_sha256_url: None,
        }
    }

    fn sample() -> Vec<Package> {
        vec![
            package("a", "email-signatures", "Signatures for your Mail client"),
            package("b", "lorem", "Placeholder text"),
            package("c", "gmail-shortcuts", "Snippets"),
        ]
    }

    #[test]
    fn test_matches_name_and_description() {
        let packages = sample();

        let ids: Vec<&str> = text_search(&packages, "mail")
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(ids, vec!["a", "c"]);

        let results = text_search(&packages, "placeholder");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "b");
    }

    #[test]
    fn test_case_insensitive() {
        let packages = sample();
        assert_eq!(text_search(&packages, "MAIL CLIENT").len(), 1);
        assert_eq!(text_search(&packages, "LoReM").len(), 1);
    }

    #[test]
    fn test_empty_query_is_identity() {
        let packages = sample();
        let results = text_search(&packages, "");
        assert_eq!(results.len(), packages.len());
        for (result, package) in results.iter().zip(&packages) {
            assert_eq!(*result, package);
        }
    }

    #[test]
    fn test_no_match() {
        let packages = sample();
        assert!(text_search(&packages, "nonexistent").is_empty());
    }

    #[test]
    fn test_tags_are_not_searched() {
        let mut packages = sample();
        packages[1].tags = vec!["unicorn".to_string()];
        assert!(text_search(&packages, "unicorn").is_empty());
    }
}
