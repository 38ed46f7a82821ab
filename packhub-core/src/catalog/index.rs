//! Raw package index parsing and version grouping
//!
//! The index document lists every published version of every package.
//! Decoding validates the whole document and groups versions by package
//! id, keeping the producer's order (newest first) inside each group.

use indexmap::IndexMap;
use serde_json::Value;
use tracing::debug;

use super::Package;
use crate::error::{DecodeError, Result};

/// Package records, either flat or already grouped by id
#[derive(Debug)]
enum RawPackages {
    /// Flat list; versions of one package appear newest first
    List(Vec<Package>),

    /// `id -> [newest, ..., oldest]`
    Grouped(IndexMap<String, Vec<Package>>),
}

/// Mapping from package id to its non-empty, newest-first version list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VersionGroup {
    groups: IndexMap<String, Vec<Package>>,
}

/// Decode a JSON index document into version groups
///
/// Accepts the `{ "packages": ... }` envelope, a bare list of records,
/// or a bare `id -> [records]` map.
pub fn decode(raw: &str) -> Result<VersionGroup> {
    let value: Value = serde_json::from_str(raw)?;
    decode_value(value)
}

/// Decode a YAML index document into version groups
pub fn decode_yaml(raw: &str) -> Result<VersionGroup> {
    let value: Value = serde_yaml_ng::from_str(raw)?;
    decode_value(value)
}

fn decode_value(value: Value) -> Result<VersionGroup> {
    // The envelope wins over a bare map that happens to hold an id "packages".
    let records = match value {
        Value::Object(mut map) => match map.remove("packages") {
            Some(packages) => packages,
            None => Value::Object(map),
        },
        other => other,
    };

    // Decode each shape directly so serde reports the offending field.
    let packages = if records.is_array() {
        RawPackages::List(serde_json::from_value(records)?)
    } else {
        RawPackages::Grouped(serde_json::from_value(records)?)
    };

    VersionGroup::from_raw(packages)
}

impl VersionGroup {
    fn from_raw(packages: RawPackages) -> Result<Self> {
        let groups = match packages {
            RawPackages::Grouped(groups) => groups,
            RawPackages::List(records) => {
                let mut groups: IndexMap<String, Vec<Package>> = IndexMap::new();
                for record in records {
                    if record.id.is_empty() {
                        return Err(DecodeError::EmptyField {
                            group: String::new(),
                            field: "id",
                        });
                    }
                    groups.entry(record.id.clone()).or_default().push(record);
                }
                groups
            }
        };

        Self::from_groups(groups)
    }

    /// Build from pre-grouped records, validating every group and record
    pub fn from_groups(groups: IndexMap<String, Vec<Package>>) -> Result<Self> {
        for (id, versions) in &groups {
            if versions.is_empty() {
                return Err(DecodeError::EmptyGroup { id: id.clone() });
            }
            for record in versions {
                validate_record(id, record)?;
            }
        }

        let group = Self { groups };
        debug!(
            packages = group.package_count(),
            versions = group.version_count(),
            "Decoded package index"
        );
        Ok(group)
    }

    /// Get all versions of a package, newest first
    pub fn versions(&self, id: &str) -> Option<&[Package]> {
        self.groups.get(id).map(Vec::as_slice)
    }

    /// Get a specific version of a package
    pub fn version(&self, id: &str, version: &str) -> Option<&Package> {
        self.groups
            .get(id)
            .and_then(|versions| versions.iter().find(|p| p.version == version))
    }

    /// Iterate groups in index order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Package])> {
        self.groups
            .iter()
            .map(|(id, versions)| (id.as_str(), versions.as_slice()))
    }

    /// Get total number of unique packages
    pub fn package_count(&self) -> usize {
        self.groups.len()
    }

    /// Get total number of versions across all packages
    pub fn version_count(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub(crate) fn into_groups(self) -> IndexMap<String, Vec<Package>> {
        self.groups
    }
}

fn validate_record(group: &str, record: &Package) -> Result<()> {
    let required = [
        ("id", &record.id),
        ("version", &record.version),
        ("name", &record.name),
    ];
    for (field, value) in required {
        if value.is_empty() {
            return Err(DecodeError::EmptyField {
                group: group.to_string(),
                field,
            });
        }
    }

    if record.id != group {
        return Err(DecodeError::IdMismatch {
            group: group.to_string(),
            found: record.id.clone(),
        });
    }

    Ok(())
}
