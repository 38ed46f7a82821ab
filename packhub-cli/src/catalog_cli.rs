//! Packhub catalog commands
//!
//! Reads a local index file, runs it through the core search session
//! and prints what a browsing UI would show.

use anyhow::{Context, Result};
use clap::Subcommand;
use std::path::{Path, PathBuf};
use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};

use packhub_core::catalog::{canonicalize_checked, decode, decode_yaml, Package, VersionGroup};
use packhub_core::config::HubConfig;
use packhub_core::search::{FacetCheckbox, SearchSession};

/// Where people are sent when nothing fits
const CREATE_PACKAGE_URL: &str = "https://espanso.org/docs/next/packages/creating-a-package/";

#[derive(Subcommand, Debug)]
pub enum CatalogSubcommand {
    /// Search packages by text and tags
    Search {
        /// Search query (matches name and description)
        query: Option<String>,

        /// Only show packages carrying this tag (repeatable, all must match)
        #[clap(long = "tag")]
        tags: Vec<String>,

        /// Index file (JSON or YAML)
        #[clap(long)]
        index: Option<PathBuf>,

        /// Output results as JSON
        #[clap(long)]
        json: bool,
    },

    /// List tag facets across the whole catalog
    Tags {
        /// Mark these tags as selected
        #[clap(long = "tag")]
        tags: Vec<String>,

        /// Index file (JSON or YAML)
        #[clap(long)]
        index: Option<PathBuf>,

        /// Show every facet instead of the configured limit
        #[clap(long)]
        all: bool,

        /// Output as JSON
        #[clap(long)]
        json: bool,
    },

    /// Show details and versions of a package
    Show {
        /// Package id
        id: String,

        /// Index file (JSON or YAML)
        #[clap(long)]
        index: Option<PathBuf>,

        /// Output as JSON
        #[clap(long)]
        json: bool,
    },
}

impl CatalogSubcommand {
    pub fn execute(self, config: &HubConfig) -> Result<()> {
        match self {
            CatalogSubcommand::Search {
                query,
                tags,
                index,
                json,
            } => execute_search(config, index.as_deref(), query, tags, json),
            CatalogSubcommand::Tags {
                tags,
                index,
                all,
                json,
            } => execute_tags(config, index.as_deref(), tags, all, json),
            CatalogSubcommand::Show { id, index, json } => {
                execute_show(config, index.as_deref(), &id, json)
            }
        }
    }
}

/// Read and decode the index; a decode failure means no catalog at all
fn load_versions(config: &HubConfig, index: Option<&Path>) -> Result<VersionGroup> {
    let path = index
        .or(config.index_path.as_deref())
        .context("No index file given. Pass --index or set indexPath in the config file")?;

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read index: {}", path.display()))?;

    let is_yaml = path
        .extension()
        .is_some_and(|ext| ext == "yaml" || ext == "yml");
    let decoded = if is_yaml {
        decode_yaml(&content)
    } else {
        decode(&content)
    };

    match decoded {
        Ok(group) => Ok(group),
        Err(e) => {
            tracing::warn!("Failed to decode {}: {}", path.display(), e);
            anyhow::bail!("No catalog available: {e}")
        }
    }
}

fn start_session(
    config: &HubConfig,
    index: Option<&Path>,
    query: Option<String>,
    tags: Vec<String>,
) -> Result<SearchSession> {
    let group = load_versions(config, index)?;
    let catalog = canonicalize_checked(group, config.check_version_order);

    let mut session = SearchSession::new(Some(catalog), query);
    session.state_mut().set_tags(Some(tags));
    Ok(session)
}

/// Table row for search results
#[derive(Tabled)]
struct SearchResultRow {
    #[tabled(rename = "Id")]
    id: String,
    #[tabled(rename = "Version")]
    version: String,
    #[tabled(rename = "Tags")]
    tags: String,
    #[tabled(rename = "Description")]
    description: String,
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        let head: String = text.chars().take(max.saturating_sub(3)).collect();
        format!("{head}...")
    } else {
        text.to_string()
    }
}

fn execute_search(
    config: &HubConfig,
    index: Option<&Path>,
    query: Option<String>,
    tags: Vec<String>,
    json_output: bool,
) -> Result<()> {
    let session = start_session(config, index, query, tags)?;
    let results = session.results().unwrap_or_default();

    if json_output {
        let output = serde_json::json!({
            "query": session.state().query(),
            "tags": session.state().tags(),
            "count": results.len(),
            "results": results,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    if let Some(summary) = session.summary() {
        println!("{summary}");
    }
    if let Some(active) = session.state().tags() {
        println!("Tags: {}", active.join(", "));
    }

    if results.is_empty() {
        println!("\nSorry! No results found!");
        println!("Can't find what you're looking for? Create your own package!");
        println!("  {CREATE_PACKAGE_URL}");
        return Ok(());
    }

    let table_rows: Vec<SearchResultRow> = results
        .iter()
        .map(|package| SearchResultRow {
            id: package.id.clone(),
            version: package.version.clone(),
            tags: package.tags_display(),
            description: truncate(package.short_description(), 50),
        })
        .collect();

    let table = Table::new(&table_rows)
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()))
        .to_string();

    println!("{table}");
    println!("\nNothing fits you? Create your own package!");
    println!("  {CREATE_PACKAGE_URL}");

    Ok(())
}

fn facet_line(item: &FacetCheckbox) -> String {
    let mark = if item.checked { "[x]" } else { "[ ]" };
    format!("{mark} {}", item.label)
}

fn execute_tags(
    config: &HubConfig,
    index: Option<&Path>,
    tags: Vec<String>,
    all: bool,
    json_output: bool,
) -> Result<()> {
    let session = start_session(config, index, None, tags)?;
    let facets = session.facets();

    let shown = if all {
        facets.len()
    } else {
        config.facet_limit.min(facets.len())
    };

    if json_output {
        println!("{}", serde_json::to_string_pretty(&facets[..shown])?);
        return Ok(());
    }

    println!("Filters");
    for item in &facets[..shown] {
        println!("  {}", facet_line(item));
    }
    if shown < facets.len() {
        println!("  ... and {} more (use --all)", facets.len() - shown);
    }

    Ok(())
}

fn execute_show(
    config: &HubConfig,
    index: Option<&Path>,
    id: &str,
    json_output: bool,
) -> Result<()> {
    let group = load_versions(config, index)?;

    let versions = group
        .versions(id)
        .with_context(|| format!("Package '{id}' not found in catalog"))?;
    let latest: &Package = versions.first().context("No versions available")?;

    if json_output {
        let output = serde_json::json!({
            "package": latest,
            "available_versions": versions.iter().map(|v| &v.version).collect::<Vec<_>>(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!();
    println!("Package: {} ({})", latest.display_title(), latest.id);
    println!("Latest:  v{}", latest.version);
    if let Some(author) = &latest.author {
        println!("Author:  {author}");
    }
    if !latest.tags.is_empty() {
        println!("Tags:    {}", latest.tags_display());
    }

    println!();
    println!("Description:");
    for line in latest.description.lines() {
        println!("  {line}");
    }

    println!();
    println!("Available versions:");
    for (i, v) in versions.iter().enumerate() {
        let marker = if i == 0 { " (latest)" } else { "" };
        println!("  v{}{}", v.version, marker);
    }

    Ok(())
}

#[cfg(test)]
mod catalog_cli_tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 50), "short");
        assert_eq!(truncate("abcdefghij", 8), "abcde...");
    }

    #[test]
    fn test_facet_line() {
        let item = FacetCheckbox {
            key: "email".to_string(),
            label: "email (2)".to_string(),
            checked: true,
        };
        assert_eq!(facet_line(&item), "[x] email (2)");
    }
}
