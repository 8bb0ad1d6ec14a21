// Rust guideline compliant 2026-10-14

//! Implementation of the `smc reporter` commands.
//!
//! Lists reporter accounts and applies account moderation actions.

use super::authorize;
use crate::{Fixture, FixtureBackend, OutputFormatter};
use anyhow::{bail, Context, Result};
use samachar_core::{
    Acknowledgement, Config, Error, Filters, ListView, Moderator, QueryCache, Reporter,
    ReporterAction, ReporterStatus, Role, Viewer,
};
use std::path::Path;

/// Action names accepted on the command line.
pub const ACTIONS: [&str; 5] = ["verify", "unverify", "suspend", "activate", "delete"];

/// Parses an action name.
///
/// # Errors
///
/// Returns an error for an unknown action.
pub fn parse_action(name: &str) -> Result<ReporterAction> {
    let action = match name {
        "verify" => ReporterAction::Verify,
        "unverify" => ReporterAction::Unverify,
        "suspend" => ReporterAction::Suspend,
        "activate" => ReporterAction::Activate,
        "delete" => ReporterAction::Delete,
        other => bail!("Unknown reporter action '{other}'"),
    };
    Ok(action)
}

/// Loads every reporter matching the filters, page by page.
///
/// # Errors
///
/// Returns an error for an unknown status, an invalid page size, or a
/// failed page.
pub fn collect(
    backend: &mut FixtureBackend,
    status: Option<&str>,
    verified: Option<bool>,
    config: &Config,
) -> Result<Vec<Reporter>> {
    let mut filters = Filters::new();
    if let Some(status) = status {
        if status != "all" {
            status.parse::<ReporterStatus>()?;
        }
        filters.insert("status", status);
    }
    if let Some(verified) = verified {
        filters.insert("verified", verified.to_string());
    }

    let mut view: ListView<Reporter> = ListView::new(QueryCache::shared(), filters, config)?;
    while view.has_more() {
        if view.load_next(backend).is_none() {
            break;
        }
        if let Some(err) = view.error() {
            bail!("Failed to load reporters: {err}");
        }
    }
    Ok(view.items().to_vec())
}

/// Applies `action` to reporter `id` on the backend.
///
/// # Errors
///
/// Returns `NotFound` for an unknown reporter, `InvalidTransition` if a
/// guard rejects the action, or the backend's error.
pub fn apply(
    backend: &mut FixtureBackend,
    id: &str,
    action: ReporterAction,
    viewer: Viewer,
) -> samachar_core::Result<Acknowledgement<Reporter>> {
    let account = backend
        .reporter(id)
        .cloned()
        .ok_or_else(|| Error::NotFound(format!("reporter {id}")))?;
    let mut cache = QueryCache::new();
    Moderator::new(viewer, &mut cache).transition(&account, &action, backend)
}

/// Lists reporters from the fixture.
///
/// # Errors
///
/// Returns an error if the role is insufficient or the fixture cannot be
/// read.
pub fn list(
    fixture_path: &Path,
    status: Option<String>,
    verified: Option<bool>,
    role: Role,
    config: &Config,
    formatter: &dyn OutputFormatter,
) -> Result<()> {
    authorize(role, Role::Admin)?;
    let fixture = Fixture::load(fixture_path)
        .with_context(|| format!("Failed to read fixture {}", fixture_path.display()))?;
    let mut backend = FixtureBackend::new(fixture);
    let reporters = collect(&mut backend, status.as_deref(), verified, config)?;
    println!("{}", formatter.format_reporters(&reporters));
    Ok(())
}

/// Moderates a reporter account and writes the fixture back.
///
/// # Errors
///
/// Returns an error if the role is insufficient, the transition is
/// rejected, or the fixture cannot be read or written.
pub fn execute(
    fixture_path: &Path,
    id: &str,
    action: ReporterAction,
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
        Acknowledgement::Updated(account) => println!("{}", formatter.format_reporter(&account)),
        Acknowledgement::Removed => println!("{}", formatter.format_removed("reporter", id)),
    }
    Ok(())
}
