// Rust guideline compliant 2026-10-14

//! Core data models for Samachar.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;
use std::fmt;

/// Items that carry a stable unique identifier.
pub trait Identified {
    /// Returns the item's unique ID.
    fn id(&self) -> &str;
}

/// Ordered filter set defining one logical list.
///
/// Empty values mean "no filter" and are never stored, so `status=""` and a
/// missing `status` key describe the same list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Filters(BTreeMap<String, String>);

impl Filters {
    /// Creates an empty filter set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the filter set with `key` set to `value`.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Sets `key` to `value`, or removes the key when `value` is empty.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        if value.trim().is_empty() {
            self.0.remove(&key);
        } else {
            self.0.insert(key, value);
        }
    }

    /// Returns the value for `key`, if set.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Whether `key` is set to exactly `value`.
    #[must_use]
    pub fn matches(&self, key: &str, value: &str) -> bool {
        self.get(key) == Some(value)
    }

    /// Iterates over `(key, value)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Whether no filters are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Stable identity of a [`ListQuery`] (format: qk-XXXXXXXXXXXXXXXX).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct QueryKey(String);

impl QueryKey {
    /// Returns the key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single page request against a remote list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    filters: Filters,
    page: u32,
    page_size: u32,
}

impl ListQuery {
    /// Creates a new query.
    ///
    /// # Arguments
    ///
    /// * `filters` - Filter set of the list
    /// * `page` - 1-based page number
    /// * `page_size` - Items per page
    ///
    /// # Errors
    ///
    /// Returns `InvalidQuery` if `page` or `page_size` is zero.
    pub fn new(filters: Filters, page: u32, page_size: u32) -> crate::Result<Self> {
        if page == 0 {
            return Err(crate::Error::InvalidQuery(
                "page must be at least 1".to_string(),
            ));
        }
        if page_size == 0 {
            return Err(crate::Error::InvalidQuery(
                "page size must be greater than 0".to_string(),
            ));
        }
        Ok(Self {
            filters,
            page,
            page_size,
        })
    }

    /// Filter set of the query.
    #[must_use]
    pub fn filters(&self) -> &Filters {
        &self.filters
    }

    /// Requested page number.
    #[must_use]
    pub fn page(&self) -> u32 {
        self.page
    }

    /// Requested page size.
    #[must_use]
    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Computes the stable identity of this query.
    ///
    /// Filters are hashed in key order, so insertion order never changes the key.
    #[must_use]
    pub fn key(&self) -> QueryKey {
        let mut hasher = Sha256::new();
        for (key, value) in self.filters.iter() {
            hasher.update(key.as_bytes());
            hasher.update([0x1f]);
            hasher.update(value.as_bytes());
            hasher.update([0x1e]);
        }
        hasher.update(self.page.to_le_bytes());
        hasher.update(self.page_size.to_le_bytes());

        let hex = format!("{:x}", hasher.finalize());
        QueryKey(format!("qk-{}", &hex[..16]))
    }
}

/// One page of results from the remote list source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListPage<T> {
    /// Items in server order.
    #[serde(alias = "posts", default = "Vec::new")]
    pub items: Vec<T>,
    /// Whether another page exists after this one.
    #[serde(default)]
    pub has_more: bool,
    /// Page number this result answers.
    #[serde(alias = "currentPage", default)]
    pub page: u32,
}

impl<T> ListPage<T> {
    /// Creates a new page.
    #[must_use]
    pub fn new(items: Vec<T>, has_more: bool, page: u32) -> Self {
        Self {
            items,
            has_more,
            page,
        }
    }

    /// Whether the page holds an item with `id`.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool
    where
        T: Identified,
    {
        self.items.iter().any(|item| item.id() == id)
    }
}

/// Moderation status of a submitted post.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModerationStatus {
    /// Awaiting admin review.
    #[default]
    Pending,
    /// Published.
    Approved,
    /// Rejected by an admin.
    Rejected,
}

impl ModerationStatus {
    /// Returns the wire name used in filters and payloads.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }
}

impl fmt::Display for ModerationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ModerationStatus {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "approved" => Ok(Self::Approved),
            "rejected" => Ok(Self::Rejected),
            _ => Err(crate::Error::InvalidQuery(format!(
                "invalid moderation status: {s}"
            ))),
        }
    }
}

/// A news post as returned by the remote API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentItem {
    /// Unique identifier.
    #[serde(alias = "_id")]
    pub id: String,
    /// Headline.
    #[serde(default)]
    pub title: String,
    /// Category key (see [`crate::Category`]).
    #[serde(default)]
    pub category: String,
    /// Moderation status.
    #[serde(default)]
    pub status: ModerationStatus,
    /// Whether an admin verified the post. Only meaningful once approved.
    #[serde(default)]
    pub is_verified: bool,
    /// Shown in the breaking-news ticker.
    #[serde(default)]
    pub is_breaking: bool,
    /// Creation time, set by the server.
    pub created_at: DateTime<Utc>,
}

impl Identified for ContentItem {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Account status of a reporter.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReporterStatus {
    /// Registered, not yet activated.
    #[default]
    Pending,
    /// Allowed to submit posts.
    Active,
    /// Blocked by an admin.
    Suspended,
}

impl ReporterStatus {
    /// Returns the wire name used in filters and payloads.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Active => "active",
            Self::Suspended => "suspended",
        }
    }
}

impl fmt::Display for ReporterStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ReporterStatus {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "active" => Ok(Self::Active),
            "suspended" => Ok(Self::Suspended),
            _ => Err(crate::Error::InvalidQuery(format!(
                "invalid reporter status: {s}"
            ))),
        }
    }
}

/// A registered reporter account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reporter {
    /// Unique identifier.
    #[serde(alias = "_id")]
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Contact email.
    #[serde(default)]
    pub email: String,
    /// Contact phone number.
    #[serde(default)]
    pub mobile: String,
    /// Account status.
    #[serde(default)]
    pub status: ReporterStatus,
    /// Whether an admin verified the reporter's identity.
    #[serde(default)]
    pub is_verified: bool,
    /// Number of published articles.
    #[serde(default)]
    pub articles: u32,
}

impl Identified for Reporter {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Role of the current viewer.
///
/// Roles are ranked: `Guest < Reporter < Admin`.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Anonymous reader.
    #[default]
    Guest,
    /// Logged-in reporter.
    Reporter,
    /// Site administrator.
    Admin,
}

impl Role {
    /// Returns the wire name of the role.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Guest => "guest",
            Self::Reporter => "reporter",
            Self::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "guest" | "user" => Ok(Self::Guest),
            "reporter" => Ok(Self::Reporter),
            "admin" => Ok(Self::Admin),
            _ => Err(crate::Error::InvalidQuery(format!("invalid role: {s}"))),
        }
    }
}

/// Read-only snapshot of the current viewer.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewer {
    /// Viewer role.
    pub role: Role,
}

impl Viewer {
    /// Creates a viewer with `role`.
    #[must_use]
    pub fn new(role: Role) -> Self {
        Self { role }
    }
}

/// Snapshot of the external session provider.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    /// Whether the session has finished loading.
    pub ready: bool,
    /// Logged-in viewer, if any.
    pub viewer: Option<Viewer>,
}

impl Session {
    /// A session that is still loading.
    #[must_use]
    pub fn loading() -> Self {
        Self {
            ready: false,
            viewer: None,
        }
    }

    /// A resolved session for `viewer`.
    #[must_use]
    pub fn resolved(viewer: Viewer) -> Self {
        Self {
            ready: true,
            viewer: Some(viewer),
        }
    }

    /// A resolved session with nobody logged in.
    #[must_use]
    pub fn anonymous() -> Self {
        Self {
            ready: true,
            viewer: None,
        }
    }

    /// Returns the effective viewer once the session is ready.
    ///
    /// A ready session without a logged-in viewer resolves to a guest.
    #[must_use]
    pub fn viewer(&self) -> Option<Viewer> {
        if self.ready {
            Some(self.viewer.unwrap_or_default())
        } else {
            None
        }
    }
}
