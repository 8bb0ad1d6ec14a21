// Rust guideline compliant 2026-10-14

//! Implementation of the `smc feed` command.
//!
//! Pages through the fixture with a list view the way a reader scrolls a
//! category feed: the first page loads on open and every further page
//! loads when the last rendered post reaches the visibility margin.

use crate::{Fixture, FixtureBackend, OutputFormatter};
use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use samachar_core::{
    Category, Completion, Config, ContentItem, Filters, ListView, ModerationStatus, QueryCache,
};
use std::path::Path;

/// Filters and paging for a feed run.
#[derive(Debug, Clone, Default)]
pub struct FeedOptions {
    /// Category key; falls back to the configured default.
    pub category: Option<String>,
    /// Status filter, or `all`.
    pub status: Option<String>,
    /// Restrict to verified or unverified posts.
    pub verified: Option<bool>,
    /// Only breaking news.
    pub breaking: bool,
    /// Case-insensitive title search.
    pub search: Option<String>,
    /// Earliest creation date, `YYYY-MM-DD`.
    pub since: Option<String>,
    /// Latest creation date, `YYYY-MM-DD`.
    pub until: Option<String>,
    /// Number of pages to load.
    pub pages: u32,
}

/// Accumulated feed after a run.
#[derive(Debug, Clone)]
pub struct FeedResult {
    /// Posts in feed order.
    pub posts: Vec<ContentItem>,
    /// Whether more pages exist.
    pub has_more: bool,
    /// Pages appended.
    pub pages_loaded: u32,
}

/// Builds the filter set for `options`.
///
/// # Errors
///
/// Returns an error for an unknown category or status, or a malformed
/// date bound.
pub fn build_filters(options: &FeedOptions, config: &Config) -> Result<Filters> {
    let category = match &options.category {
        Some(key) => key.parse::<Category>()?,
        None => config.category(),
    };
    let mut filters = category.filters();

    if let Some(status) = &options.status {
        if status != "all" {
            status.parse::<ModerationStatus>()?;
        }
        filters.insert("status", status.as_str());
    }
    if let Some(verified) = options.verified {
        filters.insert("verified", verified.to_string());
    }
    if options.breaking {
        filters.insert("breaking", "true");
    }
    if let Some(search) = &options.search {
        filters.insert("search", search.as_str());
    }
    for (key, value) in [("startDate", &options.since), ("endDate", &options.until)] {
        if let Some(date) = value {
            NaiveDate::parse_from_str(date, "%Y-%m-%d")
                .with_context(|| format!("Invalid date '{date}', expected YYYY-MM-DD"))?;
            filters.insert(key, date.as_str());
        }
    }
    Ok(filters)
}

/// Loads up to `pages` pages of the feed.
///
/// # Errors
///
/// Returns an error if the page size is invalid or a page fails to load.
pub fn collect(
    backend: &mut FixtureBackend,
    filters: Filters,
    pages: u32,
    config: &Config,
) -> Result<FeedResult> {
    let mut view: ListView<ContentItem> = ListView::new(QueryCache::shared(), filters, config)?;
    let mut loaded = 0;

    while loaded < pages {
        let completion = if loaded == 0 {
            view.load_next(backend)
        } else {
            // The reader scrolls the sentinel post into view.
            let Some(target) = view.trigger().target().map(str::to_string) else {
                break;
            };
            view.report_visibility(&target, 0.0, backend)
        };

        match completion {
            Some(Completion::Appended { .. }) => loaded += 1,
            Some(Completion::Failed) => match view.error() {
                Some(err) => bail!("Failed to load page {}: {err}", loaded + 1),
                None => bail!("Failed to load page {}", loaded + 1),
            },
            None => break,
        }
    }

    Ok(FeedResult {
        posts: view.items().to_vec(),
        has_more: view.has_more(),
        pages_loaded: loaded,
    })
}

/// Prints a feed from the fixture at `fixture_path`.
///
/// # Errors
///
/// Returns an error if the fixture cannot be read or the filters are
/// invalid.
pub fn execute(
    fixture_path: &Path,
    options: FeedOptions,
    config: &Config,
    formatter: &dyn OutputFormatter,
) -> Result<()> {
    let fixture = Fixture::load(fixture_path)
        .with_context(|| format!("Failed to read fixture {}", fixture_path.display()))?;
    let filters = build_filters(&options, config)?;
    let mut backend = FixtureBackend::new(fixture);

    let result = collect(&mut backend, filters, options.pages, config)?;
    tracing::info!(
        posts = result.posts.len(),
        pages = result.pages_loaded,
        requests = backend.requests(),
        "feed loaded"
    );
    println!("{}", formatter.format_posts(&result.posts, result.has_more));
    Ok(())
}
