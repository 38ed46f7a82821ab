//! Packhub Search - text and tag filtering over the canonical catalog
//!
//! # Overview
//!
//! ```text
//! CanonicalCatalog ──┬──────────────────────────► tags_count ─► facet checkboxes
//!                    │
//!                    └─► text_search ─► tags_search ─► filtered packages
//!                          ▲               ▲
//!                          └── SearchState ┘
//! ```
//!
//! Every function here is pure and total over an in-memory catalog.
//! Facet counts always describe the whole catalog; the filters never
//! narrow them.

mod facets;
mod pipeline;
mod state;
mod tags;
mod text;

pub use facets::{facet_checkboxes, tags_count, FacetCheckbox, TagCount};
pub use pipeline::{compute, ResultsSummary, SearchSession, DEFAULT_FACET_LIMIT};
pub use state::SearchState;
pub use tags::tags_search;
pub use text::text_search;

#[cfg(test)]
mod tests;
