//! Integration tests for the catalog module

#[cfg(test)]
mod integration_tests {
    use crate::catalog::{canonicalize, decode, CanonicalCatalog, Package, VersionGroup};
    use indexmap::IndexMap;

    fn package(id: &str, version: &str, tags: &[&str]) -> Package {
        Package {
            id: id.to_string(),
            version: version.to_string(),
            name: id.to_string(),
            description: format!("{id} package"),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            author: None,
            title: None,
            archive_url: None,
            archive_sha256_url: None,
        }
    }

    /// Every id maps to exactly the first element of its group
    #[test]
    fn test_one_package_per_id() {
        let mut groups = IndexMap::new();
        groups.insert(
            "email".to_string(),
            vec![
                package("email", "1.1.0", &["email"]),
                package("email", "1.0.0", &["email", "old"]),
            ],
        );
        groups.insert(
            "math".to_string(),
            vec![package("math", "0.3.0", &["math"])],
        );

        let group = VersionGroup::from_groups(groups).unwrap();
        let catalog = canonicalize(group.clone());

        assert_eq!(catalog.len(), group.package_count());
        for (id, versions) in group.iter() {
            assert_eq!(catalog.get(id), Some(&versions[0]));
        }
    }

    /// Round trip from raw JSON through to the canonical list
    #[test]
    fn test_load_keeps_index_order() {
        let json = r#"{
  "packages": [
    {"id": "b", "version": "2.0.0", "name": "b", "description": "", "tags": []},
    {"id": "a", "version": "1.0.0", "name": "a", "description": "", "tags": []},
    {"id": "b", "version": "1.0.0", "name": "b", "description": "", "tags": []}
  ]
}"#;
        let catalog = CanonicalCatalog::load(json).unwrap();
        let ids: Vec<&str> = catalog.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
        assert_eq!(catalog.get("b").unwrap().version, "2.0.0");
    }

    /// One bad record anywhere invalidates the catalog
    #[test]
    fn test_no_partial_admission() {
        let json = r#"{
  "packages": [
    {"id": "good", "version": "1.0.0", "name": "good", "description": "", "tags": []},
    {"id": "bad", "version": 3, "name": "bad", "description": "", "tags": []}
  ]
}"#;
        assert!(decode(json).is_err());
        assert!(CanonicalCatalog::load(json).is_none());
    }
}
