// Rust guideline compliant 2026-10-14

//! Implementation of the `smc stats` command.

use crate::{Fixture, OutputFormatter};
use anyhow::{Context, Result};
use samachar_core::{Category, ModerationStats};
use std::path::Path;

/// Counts moderation states over the fixture, optionally within one
/// category.
#[must_use]
pub fn compute(fixture: &Fixture, category: Option<Category>) -> ModerationStats {
    match category {
        Some(category) => {
            let posts: Vec<_> = fixture
                .posts
                .iter()
                .filter(|p| category.accepts(&p.category))
                .cloned()
                .collect();
            ModerationStats::from_items(&posts)
        }
        None => ModerationStats::from_items(&fixture.posts),
    }
}

/// Prints moderation stats.
///
/// # Errors
///
/// Returns an error if the category is unknown or the fixture cannot be
/// read.
pub fn execute(
    fixture_path: &Path,
    category: Option<String>,
    formatter: &dyn OutputFormatter,
) -> Result<()> {
    let category = category.map(|key| key.parse::<Category>()).transpose()?;
    let fixture = Fixture::load(fixture_path)
        .with_context(|| format!("Failed to read fixture {}", fixture_path.display()))?;
    println!("{}", formatter.format_stats(&compute(&fixture, category)));
    Ok(())
}
