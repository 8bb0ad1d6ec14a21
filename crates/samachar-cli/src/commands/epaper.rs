// Rust guideline compliant 2026-10-14

//! Implementation of the `smc epaper` commands.
//!
//! `show` opens the edition for one date the way a reader does; `list`
//! and `apply` are the admin desk.

use super::authorize;
use crate::{Fixture, FixtureBackend, OutputFormatter};
use anyhow::{bail, Context, Result};
use chrono::{Local, NaiveDate};
use samachar_core::{
    active_edition, Acknowledgement, Config, EPaper, EPaperAction, Error, Filters, ListView,
    Moderator, QueryCache, Role, Viewer,
};
use std::path::Path;

/// Action names accepted on the command line.
pub const ACTIONS: [&str; 3] = ["activate", "deactivate", "delete"];

/// Parses an action name.
///
/// # Errors
///
/// Returns an error for an unknown action.
pub fn parse_action(name: &str) -> Result<EPaperAction> {
    let action = match name {
        "activate" => EPaperAction::Activate,
        "deactivate" => EPaperAction::Deactivate,
        "delete" => EPaperAction::Delete,
        other => bail!("Unknown e-paper action '{other}'"),
    };
    Ok(action)
}

/// Parses a `YYYY-MM-DD` date, defaulting to today.
///
/// # Errors
///
/// Returns an error for a malformed date.
pub fn parse_date(value: Option<&str>) -> Result<NaiveDate> {
    match value {
        Some(date) => NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .with_context(|| format!("Invalid date '{date}', expected YYYY-MM-DD")),
        None => Ok(Local::now().date_naive()),
    }
}

/// Loads every edition matching `active`, newest first.
///
/// # Errors
///
/// Returns an error if the page size is invalid or a page fails.
pub fn collect(
    backend: &mut FixtureBackend,
    active: Option<bool>,
    config: &Config,
) -> Result<Vec<EPaper>> {
    let mut filters = Filters::new();
    if let Some(active) = active {
        filters.insert("active", active.to_string());
    }

    let mut view: ListView<EPaper> = ListView::new(QueryCache::shared(), filters, config)?;
    while view.has_more() {
        if view.load_next(backend).is_none() {
            break;
        }
        if let Some(err) = view.error() {
            bail!("Failed to load e-papers: {err}");
        }
    }
    Ok(view.items().to_vec())
}

/// Applies `action` to edition `id` on the backend.
///
/// # Errors
///
/// Returns `NotFound` for an unknown edition, `InvalidTransition` if a
/// guard rejects the action, or the backend's error.
pub fn apply(
    backend: &mut FixtureBackend,
    id: &str,
    action: EPaperAction,
    viewer: Viewer,
) -> samachar_core::Result<Acknowledgement<EPaper>> {
    let edition = backend
        .epaper(id)
        .cloned()
        .ok_or_else(|| Error::NotFound(format!("e-paper {id}")))?;
    let mut cache = QueryCache::new();
    Moderator::new(viewer, &mut cache).transition(&edition, &action, backend)
}

/// Prints the active edition for `date`.
///
/// # Errors
///
/// Returns a `NotFound` error if no active edition exists for the date, or
/// an error if the fixture cannot be read.
pub fn show(fixture_path: &Path, date: NaiveDate, formatter: &dyn OutputFormatter) -> Result<()> {
    let fixture = Fixture::load(fixture_path)
        .with_context(|| format!("Failed to read fixture {}", fixture_path.display()))?;
    let mut backend = FixtureBackend::new(fixture);
    let edition = active_edition(&mut backend, date)?;
    println!("{}", formatter.format_epaper(&edition));
    Ok(())
}

/// Lists editions from the fixture.
///
/// # Errors
///
/// Returns an error if the role is insufficient or the fixture cannot be
/// read.
pub fn list(
    fixture_path: &Path,
    active: Option<bool>,
    role: Role,
    config: &Config,
    formatter: &dyn OutputFormatter,
) -> Result<()> {
    authorize(role, Role::Admin)?;
    let fixture = Fixture::load(fixture_path)
        .with_context(|| format!("Failed to read fixture {}", fixture_path.display()))?;
    let mut backend = FixtureBackend::new(fixture);
    let editions = collect(&mut backend, active, config)?;
    println!("{}", formatter.format_epapers(&editions));
    Ok(())
}

/// Toggles or deletes an edition and writes the fixture back.
///
/// # Errors
///
/// Returns an error if the role is insufficient, the transition is
/// rejected, or the fixture cannot be read or written.
pub fn execute(
    fixture_path: &Path,
    id: &str,
    action: EPaperAction,
    role: Role,
    formatter: &dyn OutputFormatter,
) -> Result<()> {
    let viewer = authorize(role, Role::Admin)?;
    let fixture = Fixture::load(fixture_path)
        .with_context(|| format!("Failed to read fixture {}", fixture_path.display()))?;
    let mut backend = FixtureBackend::new(fixture);

    let ack = apply(&mut backend, id, action, viewer)?;
    backend
        .into_fixture()
        .save(fixture_path)
        .with_context(|| format!("Failed to write fixture {}", fixture_path.display()))?;

    match ack {
        Acknowledgement::Updated(edition) => println!("{}", formatter.format_epaper(&edition)),
        Acknowledgement::Removed => println!("{}", formatter.format_removed("e-paper", id)),
    }
    Ok(())
}
