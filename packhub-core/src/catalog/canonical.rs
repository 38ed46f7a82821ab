//! Canonical catalog: one representative version per package
//!
//! The head of each version group is the canonical package. No version
//! comparison takes part in the selection; the producer's newest-first
//! ordering is the contract. The optional order check only reports
//! groups that appear to break it.

use indexmap::IndexMap;
use tracing::{debug, warn};

use super::index::{decode, decode_yaml, VersionGroup};
use super::Package;
use crate::error::Result;

/// Mapping from package id to exactly one package, in index order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CanonicalCatalog {
    packages: IndexMap<String, Package>,
}

/// Select the first element of every group
pub fn canonicalize(group: VersionGroup) -> CanonicalCatalog {
    canonicalize_checked(group, false)
}

/// Select the first element of every group, optionally warning about
/// groups whose head is not the newest parseable version
pub fn canonicalize_checked(group: VersionGroup, check_version_order: bool) -> CanonicalCatalog {
    let mut packages = IndexMap::with_capacity(group.package_count());

    for (id, versions) in group.into_groups() {
        if check_version_order {
            if let Some(newer) = newer_than_head(&versions) {
                warn!(
                    package = %id,
                    head = %versions[0].version,
                    newer = %newer.version,
                    "Version group is not ordered newest-first; keeping the first entry"
                );
            }
        }

        // Groups are non-empty by construction.
        if let Some(head) = versions.into_iter().next() {
            packages.insert(id, head);
        }
    }

    debug!(packages = packages.len(), "Canonicalized package catalog");
    CanonicalCatalog { packages }
}

/// A later entry whose version is strictly newer than the head, if any
fn newer_than_head(versions: &[Package]) -> Option<&Package> {
    let (head, rest) = versions.split_first()?;
    let head_version = parse_version(&head.version)?;

    rest.iter()
        .filter_map(|p| parse_version(&p.version).map(|v| (p, v)))
        .filter(|(_, v)| *v > head_version)
        .max_by(|a, b| a.1.cmp(&b.1))
        .map(|(p, _)| p)
}

fn parse_version(raw: &str) -> Option<semver::Version> {
    semver::Version::parse(raw.trim_start_matches('v')).ok()
}

impl CanonicalCatalog {
    /// Decode a JSON index and canonicalize it
    ///
    /// Returns `None` when the index fails to decode; no partial catalog
    /// is ever produced. The version-order check always runs here; use
    /// [`CanonicalCatalog::from_decoded`] to honor
    /// `HubConfig::check_version_order`.
    pub fn load(raw: &str) -> Option<Self> {
        Self::from_decoded(decode(raw), true)
    }

    /// Decode a YAML index and canonicalize it, with the version-order check
    pub fn load_yaml(raw: &str) -> Option<Self> {
        Self::from_decoded(decode_yaml(raw), true)
    }

    /// Turn a decode result into a catalog, logging why it is absent
    ///
    /// `check_version_order` is the `HubConfig` setting of the same name.
    pub fn from_decoded(decoded: Result<VersionGroup>, check_version_order: bool) -> Option<Self> {
        match decoded {
            Ok(group) => Some(canonicalize_checked(group, check_version_order)),
            Err(e) => {
                warn!("No catalog available: {}", e);
                None
            }
        }
    }

    /// Get the canonical package for an id
    pub fn get(&self, id: &str) -> Option<&Package> {
        self.packages.get(id)
    }

    /// Iterate canonical packages in index order
    pub fn iter(&self) -> impl Iterator<Item = &Package> {
        self.packages.values()
    }

    /// All canonical packages in index order
    pub fn packages(&self) -> Vec<&Package> {
        self.iter().collect()
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }
}

impl<'a> IntoIterator for &'a CanonicalCatalog {
    type Item = &'a Package;
    type IntoIter = indexmap::map::Values<'a, String, Package>;

    fn into_iter(self) -> Self::IntoIter {
        self.packages.values()
    }
}
