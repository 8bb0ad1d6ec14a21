// Rust guideline compliant 2026-10-14

//! Implementation of the `smc moderate` command.

use super::authorize;
use crate::{Fixture, FixtureBackend, OutputFormatter};
use anyhow::{bail, Context, Result};
use samachar_core::{
    Acknowledgement, ContentItem, Error, Moderator, PostAction, PostPatch, QueryCache, Role,
    Viewer,
};
use std::path::Path;

/// Action names accepted on the command line.
pub const ACTIONS: [&str; 5] = ["approve", "reject", "verify", "delete", "update"];

/// Parses an action name, attaching the patch for `update`.
///
/// # Errors
///
/// Returns an error for an unknown action, or for `update` without any
/// field to change.
pub fn parse_action(
    name: &str,
    title: Option<String>,
    category: Option<String>,
) -> Result<PostAction> {
    let action = match name {
        "approve" => PostAction::Approve,
        "reject" => PostAction::Reject,
        "verify" => PostAction::Verify,
        "delete" => PostAction::Delete,
        "update" => {
            if title.is_none() && category.is_none() {
                bail!("update requires --title or --category");
            }
            PostAction::Update(PostPatch { title, category })
        }
        other => bail!("Unknown action '{other}'"),
    };
    Ok(action)
}

/// Applies `action` to post `id` on the backend.
///
/// # Errors
///
/// Returns `NotFound` for an unknown post, `InvalidTransition` if a guard
/// rejects the action, or the backend's error.
pub fn apply(
    backend: &mut FixtureBackend,
    id: &str,
    action: &PostAction,
    viewer: Viewer,
) -> samachar_core::Result<Acknowledgement<ContentItem>> {
    let item = backend
        .post(id)
        .cloned()
        .ok_or_else(|| Error::NotFound(format!("post {id}")))?;
    let mut cache = QueryCache::new();
    Moderator::new(viewer, &mut cache).transition(&item, action, backend)
}

/// Moderates a post in the fixture and writes the fixture back.
///
/// # Errors
///
/// Returns an error if the role is insufficient, the transition is
/// rejected, or the fixture cannot be read or written.
pub fn execute(
    fixture_path: &Path,
    id: &str,
    action: PostAction,
    role: Role,
    formatter: &dyn OutputFormatter,
) -> Result<()> {
    let viewer = authorize(role, Role::Admin)?;
    let fixture = Fixture::load(fixture_path)
        .with_context(|| format!("Failed to read fixture {}", fixture_path.display()))?;
    let mut backend = FixtureBackend::new(fixture);

    let ack = apply(&mut backend, id, &action, viewer)?;
    backend
        .into_fixture()
        .save(fixture_path)
        .with_context(|| format!("Failed to write fixture {}", fixture_path.display()))?;

    match ack {
        Acknowledgement::Updated(post) => println!("{}", formatter.format_post(&post)),
        Acknowledgement::Removed => println!("{}", formatter.format_removed("post", id)),
    }
    Ok(())
}
