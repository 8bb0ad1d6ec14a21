// Rust guideline compliant 2026-10-14

//! Moderation state machine for posts and reporters.
//!
//! Post transitions (admin only):
//!
//! - Pending → Approved (approve)
//! - Approved → Approved + verified (verify, only if not yet verified)
//! - Pending/Approved → Rejected (reject)
//! - Any → removed (delete)
//! - Any → same status (update)
//!
//! Local state changes only after the server acknowledges a transition.
//! A transition rejected by a guard never reaches the server.

use crate::cache::QueryCache;
use crate::models::{
    ContentItem, Identified, ModerationStatus, Reporter, ReporterStatus, Role, Viewer,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{info, warn};

/// Editable fields of a post.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostPatch {
    /// New headline.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// New category key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// Moderation action on a post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostAction {
    /// Publish a pending post.
    Approve,
    /// Reject a pending or approved post.
    Reject,
    /// Mark an approved post as verified.
    Verify,
    /// Delete the post.
    Delete,
    /// Edit the post without changing its status.
    Update(PostPatch),
}

impl PostAction {
    /// Returns the action name.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Approve => "approve",
            Self::Reject => "reject",
            Self::Verify => "verify",
            Self::Delete => "delete",
            Self::Update(_) => "update",
        }
    }
}

impl fmt::Display for PostAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Moderation action on a reporter account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReporterAction {
    /// Mark the reporter as verified.
    Verify,
    /// Withdraw verification.
    Unverify,
    /// Block the account.
    Suspend,
    /// Allow the account to post.
    Activate,
    /// Delete the account.
    Delete,
}

impl ReporterAction {
    /// Returns the action name.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Verify => "verify",
            Self::Unverify => "unverify",
            Self::Suspend => "suspend",
            Self::Activate => "activate",
            Self::Delete => "delete",
        }
    }
}

impl fmt::Display for ReporterAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cache entries made stale by a transition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Invalidation {
    /// Entries filtered by any of these `(key, value)` pairs are dropped.
    pub filters: Vec<(String, String)>,
    /// Entries holding this item are dropped.
    pub item_id: Option<String>,
}

impl Invalidation {
    /// Plan that drops every entry holding `id`.
    #[must_use]
    pub fn for_item(id: &str) -> Self {
        Self {
            filters: Vec::new(),
            item_id: Some(id.to_string()),
        }
    }

    /// Adds a `(key, value)` filter pair to the plan.
    #[must_use]
    pub fn filter(mut self, key: &str, value: &str) -> Self {
        let pair = (key.to_string(), value.to_string());
        if !value.is_empty() && !self.filters.contains(&pair) {
            self.filters.push(pair);
        }
        self
    }
}

/// Server acknowledgment of a transition.
#[derive(Debug, Clone, PartialEq)]
pub enum Acknowledgement<T> {
    /// The server returned the updated item.
    Updated(T),
    /// The server confirmed deletion.
    Removed,
}

/// Items governed by a moderation state machine.
pub trait Moderated: Identified + Clone {
    /// Actions that may be applied to the item.
    type Action: fmt::Display + fmt::Debug;

    /// Checks the source-state guard for `action`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidTransition` if the item's current state does not
    /// allow `action`.
    fn check(&self, action: &Self::Action) -> Result<()>;

    /// Returns the cache entries `action` makes stale.
    fn invalidation(&self, action: &Self::Action) -> Invalidation;

    /// Minimum role allowed to apply `action`.
    fn required_role(_action: &Self::Action) -> Role {
        Role::Admin
    }
}

/// Mutation endpoints of the remote API.
///
/// Each call is one remote request. Implementations map non-success
/// responses with [`Error::from_status`]; a timeout must surface as
/// `Transport` so the caller re-queries before retrying.
pub trait ModerationApi<T: Moderated> {
    /// Sends `action` for the item with `id`.
    ///
    /// # Errors
    ///
    /// Returns `Transport`, `Validation` or `NotFound` from the server.
    fn submit(&mut self, id: &str, action: &T::Action) -> Result<Acknowledgement<T>>;
}

impl ModerationStatus {
    /// Checks if `action` is valid from this status.
    ///
    /// # Arguments
    ///
    /// * `action` - Requested action
    /// * `is_verified` - Whether the post is already verified
    ///
    /// # Errors
    ///
    /// Returns `InvalidTransition` if the action is not allowed.
    pub fn can_apply(&self, action: &PostAction, is_verified: bool) -> Result<()> {
        match (self, action) {
            (_, PostAction::Delete) | (_, PostAction::Update(_)) => Ok(()),
            (ModerationStatus::Pending, PostAction::Approve) => Ok(()),
            (ModerationStatus::Approved, PostAction::Verify) => {
                if is_verified {
                    Err(Error::InvalidTransition(
                        "Post is already verified".to_string(),
                    ))
                } else {
                    Ok(())
                }
            }
            (ModerationStatus::Pending | ModerationStatus::Approved, PostAction::Reject) => Ok(()),
            _ => Err(Error::InvalidTransition(format!(
                "Cannot {} a {} post",
                action, self
            ))),
        }
    }

    /// Returns the status-changing actions valid from this status.
    ///
    /// `update` is always valid and therefore not listed.
    #[must_use]
    pub fn valid_actions(&self, is_verified: bool) -> Vec<PostAction> {
        let mut actions = Vec::new();
        match self {
            ModerationStatus::Pending => {
                actions.push(PostAction::Approve);
                actions.push(PostAction::Reject);
            }
            ModerationStatus::Approved => {
                if !is_verified {
                    actions.push(PostAction::Verify);
                }
                actions.push(PostAction::Reject);
            }
            ModerationStatus::Rejected => {}
        }
        actions.push(PostAction::Delete);
        actions
    }
}

impl Moderated for ContentItem {
    type Action = PostAction;

    fn check(&self, action: &PostAction) -> Result<()> {
        self.status.can_apply(action, self.is_verified)
    }

    fn invalidation(&self, action: &PostAction) -> Invalidation {
        let plan = Invalidation::for_item(&self.id);
        match action {
            PostAction::Approve => plan
                .filter("status", ModerationStatus::Pending.as_str())
                .filter("status", ModerationStatus::Approved.as_str()),
            PostAction::Verify => plan.filter("verified", "false").filter("verified", "true"),
            PostAction::Reject => plan
                .filter("status", self.status.as_str())
                .filter("status", ModerationStatus::Rejected.as_str()),
            PostAction::Delete => plan,
            PostAction::Update(patch) => {
                let plan = plan.filter("category", &self.category);
                match &patch.category {
                    Some(category) => plan.filter("category", category),
                    None => plan,
                }
            }
        }
    }
}

impl ReporterStatus {
    /// Checks if `action` is valid from this status.
    ///
    /// # Errors
    ///
    /// Returns `InvalidTransition` if the action is not allowed.
    pub fn can_apply(&self, action: ReporterAction, is_verified: bool) -> Result<()> {
        let allowed = match action {
            ReporterAction::Delete => true,
            ReporterAction::Verify => !is_verified,
            ReporterAction::Unverify => is_verified,
            ReporterAction::Suspend => *self != ReporterStatus::Suspended,
            ReporterAction::Activate => *self != ReporterStatus::Active,
        };
        if allowed {
            Ok(())
        } else {
            Err(Error::InvalidTransition(format!(
                "Cannot {} a {}{} reporter",
                action,
                if is_verified { "verified " } else { "" },
                self
            )))
        }
    }
}

impl Moderated for Reporter {
    type Action = ReporterAction;

    fn check(&self, action: &ReporterAction) -> Result<()> {
        self.status.can_apply(*action, self.is_verified)
    }

    fn invalidation(&self, action: &ReporterAction) -> Invalidation {
        let plan = Invalidation::for_item(&self.id);
        match action {
            ReporterAction::Verify | ReporterAction::Unverify => {
                plan.filter("verified", "false").filter("verified", "true")
            }
            ReporterAction::Suspend => plan
                .filter("status", self.status.as_str())
                .filter("status", ReporterStatus::Suspended.as_str()),
            ReporterAction::Activate => plan
                .filter("status", self.status.as_str())
                .filter("status", ReporterStatus::Active.as_str()),
            ReporterAction::Delete => plan,
        }
    }
}

/// Applies guarded transitions and invalidates the cache on acknowledgment.
pub struct Moderator<'a, T> {
    viewer: Viewer,
    cache: &'a mut QueryCache<T>,
}

impl<'a, T: Moderated> Moderator<'a, T> {
    /// Creates a moderator acting as `viewer`.
    pub fn new(viewer: Viewer, cache: &'a mut QueryCache<T>) -> Self {
        Self { viewer, cache }
    }

    /// Runs both guards without contacting the server.
    ///
    /// # Returns
    ///
    /// The invalidation plan the transition would apply.
    ///
    /// # Errors
    ///
    /// Returns `InvalidTransition` if the viewer's role or the item's
    /// state forbids `action`.
    pub fn plan(&self, item: &T, action: &T::Action) -> Result<Invalidation> {
        let required = T::required_role(action);
        if self.viewer.role < required {
            return Err(Error::InvalidTransition(format!(
                "{} requires role {}, viewer is {}",
                action, required, self.viewer.role
            )));
        }
        item.check(action)?;
        Ok(item.invalidation(action))
    }

    /// Applies `action` to `item` through `api`.
    ///
    /// # Arguments
    ///
    /// * `item` - Current local copy of the item
    /// * `action` - Requested action
    /// * `api` - Mutation endpoints
    ///
    /// # Returns
    ///
    /// The server's acknowledgment.
    ///
    /// # Errors
    ///
    /// Returns `InvalidTransition` without any remote call if a guard
    /// fails, or the server's error if the call fails. The cache is only
    /// invalidated after a successful acknowledgment.
    pub fn transition<A>(
        &mut self,
        item: &T,
        action: &T::Action,
        api: &mut A,
    ) -> Result<Acknowledgement<T>>
    where
        A: ModerationApi<T> + ?Sized,
    {
        let plan = match self.plan(item, action) {
            Ok(plan) => plan,
            Err(err) => {
                warn!(id = item.id(), action = %action, error = %err, "transition rejected");
                return Err(err);
            }
        };

        let ack = api.submit(item.id(), action)?;
        let invalidated = self.cache.apply(&plan);
        info!(id = item.id(), action = %action, invalidated, "transition acknowledged");
        Ok(ack)
    }
}

/// Status counts shown on the moderation dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ModerationStats {
    /// Posts awaiting review.
    pub pending: usize,
    /// Published posts.
    pub approved: usize,
    /// Rejected posts.
    pub rejected: usize,
    /// Verified posts.
    pub verified: usize,
    /// All posts.
    pub total: usize,
}

impl ModerationStats {
    /// Counts statuses over `items`.
    #[must_use]
    pub fn from_items(items: &[ContentItem]) -> Self {
        items.iter().fold(Self::default(), |mut stats, item| {
            match item.status {
                ModerationStatus::Pending => stats.pending += 1,
                ModerationStatus::Approved => stats.approved += 1,
                ModerationStatus::Rejected => stats.rejected += 1,
            }
            if item.is_verified {
                stats.verified += 1;
            }
            stats.total += 1;
            stats
        })
    }
}
