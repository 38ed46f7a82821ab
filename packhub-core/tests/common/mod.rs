//! Shared helpers for packhub-core integration tests

use packhub_core::catalog::Package;
use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize logging for tests (only once per test run)
#[allow(dead_code)]
pub fn init_test_logging() {
    INIT.call_once(|| {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let _ = tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .with_test_writer()
                    .with_target(true)
                    .with_level(true),
            )
            .with(tracing_subscriber::filter::EnvFilter::from_default_env())
            .try_init();
    });
}

/// Build a package with the given tags; name and description derive from the id
#[allow(dead_code)]
pub fn package(id: &str, version: &str, tags: &[&str]) -> Package {
    Package {
        id: id.to_string(),
        version: version.to_string(),
        name: id.to_string(),
        description: format!("Snippets for {id}"),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        author: None,
        title: None,
        archive_url: None,
        archive_sha256_url: None,
    }
}

/// Serialize packages into a `{ "packages": [...] }` index document
#[allow(dead_code)]
pub fn index_json(packages: &[Package]) -> String {
    serde_json::json!({ "lastUpdate": 1700000000, "packages": packages }).to_string()
}
