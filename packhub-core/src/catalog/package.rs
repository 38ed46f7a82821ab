//! Package records as listed in the index
//!
//! A `Package` is one version of a catalog entry. Tags keep the casing
//! the author wrote; every comparison goes through [`tag_key`].

use serde::{Deserialize, Serialize};

/// One version of a catalog package
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Package {
    /// Identifier shared by every version of the same package
    pub id: String,

    /// Version string (semver-like, newest listed first by the producer)
    pub version: String,

    /// Display name
    pub name: String,

    /// Free-text description
    pub description: String,

    /// Tags in their original casing
    pub tags: Vec<String>,

    /// Package author
    #[serde(default)]
    pub author: Option<String>,

    /// Human-friendly title
    #[serde(default)]
    pub title: Option<String>,

    /// Download URL of the package archive
    #[serde(default, alias = "archive_url")]
    pub archive_url: Option<String>,

    /// URL of the archive's SHA-256 checksum
    #[serde(default, alias = "archive_sha256_url")]
    pub archive_sha256_url: Option<String>,
}

/// Normalized form of a tag, used only for comparison and lookup.
pub fn tag_key(tag: &str) -> String {
    tag.to_lowercase()
}

/// Case-insensitive tag equality
pub fn tags_equal(a: &str, b: &str) -> bool {
    a == b || tag_key(a) == tag_key(b)
}

impl Package {
    /// Whether the package carries `tag`, ignoring case
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| tags_equal(t, tag))
    }

    /// Title if present, otherwise the name
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.name)
    }

    /// Get tags as a comma-separated string
    pub fn tags_display(&self) -> String {
        self.tags.join(", ")
    }

    /// Truncate description to first line
    pub fn short_description(&self) -> &str {
        self.description
            .lines()
            .next()
            .unwrap_or(&self.description)
            .trim()
    }
}
