//! Packhub Catalog - package index decoding and canonicalization
//!
//! This module turns the raw, multi-version package index handed over by
//! the index loader into the one-entry-per-package catalog that search
//! and facets operate on.
//!
//! # Overview
//!
//! ```text
//! Index loader (external)
//!     │
//!     └── { lastUpdate, packages }  ← every version of every package
//!            │
//!            ▼  decode()
//!     VersionGroup                  ← id -> [newest, ..., oldest]
//!            │
//!            ▼  canonicalize()
//!     CanonicalCatalog              ← id -> head of its group
//! ```
//!
//! Decoding is all-or-nothing. A single malformed record rejects the
//! entire index, and [`CanonicalCatalog::load`] reports that as an
//! absent catalog.

mod canonical;
mod index;
mod package;

pub use canonical::{canonicalize, canonicalize_checked, CanonicalCatalog};
pub use index::{decode, decode_yaml, VersionGroup};
pub use package::{tag_key, tags_equal, Package};

#[cfg(test)]
mod tests;
