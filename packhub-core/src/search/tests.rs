//! Scenario tests for the search module

#[cfg(test)]
mod scenario_tests {
    use crate::catalog::{CanonicalCatalog, Package};
    use crate::search::{
        compute, tags_count, tags_search, text_search, SearchSession, SearchState, TagCount,
    };
    use pretty_assertions::assert_eq;

    fn email_catalog() -> CanonicalCatalog {
        CanonicalCatalog::load(
            r#"{"packages": [
  {"id": "a", "version": "1.1.0", "name": "signatures", "description": "Email signatures for mail clients", "tags": ["email", "productivity"]},
  {"id": "a", "version": "1.0.0", "name": "signatures", "description": "Old", "tags": ["legacy"]},
  {"id": "b", "version": "0.4.0", "name": "greetings", "description": "Greetings for any mail", "tags": ["email"]}
]}"#,
        )
        .unwrap()
    }

    fn ids(packages: &[&Package]) -> Vec<String> {
        packages.iter().map(|p| p.id.clone()).collect()
    }

    #[test]
    fn test_email_facet_counts() {
        let catalog = email_catalog();
        assert_eq!(
            tags_count(&catalog),
            vec![
                TagCount {
                    tag: "email".to_string(),
                    count: 2
                },
                TagCount {
                    tag: "productivity".to_string(),
                    count: 1
                },
            ]
        );
    }

    #[test]
    fn test_email_tag_and_text_search() {
        let catalog = email_catalog();

        assert_eq!(
            ids(&tags_search(&catalog, &["email", "productivity"])),
            vec!["a"]
        );
        assert_eq!(ids(&text_search(&catalog, "mail")), vec!["a", "b"]);
        assert_eq!(ids(&text_search(&catalog, "")), vec!["a", "b"]);
    }

    /// Older versions never leak into search results or facets
    #[test]
    fn test_only_canonical_versions_are_searched() {
        let catalog = email_catalog();
        assert!(text_search(&catalog, "old").is_empty());
        assert!(tags_search(&catalog, &["legacy"]).is_empty());
    }

    #[test]
    fn test_clearing_tags_restores_catalog() {
        let catalog = email_catalog();
        let mut state = SearchState::default();
        let unfiltered = ids(&compute(&catalog, &state));

        state.set_tags(Some(["email", "productivity"]));
        assert_eq!(ids(&compute(&catalog, &state)), vec!["a"]);

        state.set_tags(None::<Vec<String>>);
        assert_eq!(ids(&compute(&catalog, &state)), unfiltered);
    }

    /// Counts describe the whole catalog even while filters are active
    #[test]
    fn test_counts_do_not_narrow_with_filters() {
        let mut session = SearchSession::new(Some(email_catalog()), None);
        session.state_mut().set_tags(Some(["productivity"]));

        let filtered = session.results().unwrap();
        assert_eq!(ids(&filtered), vec!["a"]);

        let from_filtered = tags_count(filtered.iter().copied());
        let from_session = session.tag_counts();
        assert_ne!(from_session, from_filtered);
        assert_eq!(from_session, tags_count(session.catalog().unwrap()));
        assert_eq!(from_session[0].count, 2);
    }

    #[test]
    fn test_badge_click_and_removal_flow() {
        let mut session = SearchSession::new(Some(email_catalog()), Some("mail".to_string()));

        session.state_mut().select_only_tag("Productivity");
        assert_eq!(ids(&session.results().unwrap()), vec!["a"]);
        assert_eq!(session.summary().unwrap().to_string(), "1 results for \"mail\".");

        session.state_mut().remove_tag("productivity");
        assert_eq!(ids(&session.results().unwrap()), vec!["a", "b"]);

        session.state_mut().clear_query();
        assert!(session.summary().is_none());
    }

    #[test]
    fn test_checkbox_round_trip() {
        let mut session = SearchSession::new(Some(email_catalog()), None);

        let mut items = session.facets();
        assert!(items.iter().all(|item| !item.checked));

        items[1].checked = true;
        session.state_mut().apply_checkboxes(&items);
        assert!(session.state().has_tag("productivity"));
        assert!(session.facets()[1].checked);
        assert_eq!(session.facets()[1].label, "productivity (1)");
    }
}
