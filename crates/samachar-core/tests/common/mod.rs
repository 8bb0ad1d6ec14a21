// Rust guideline compliant 2026-10-14

//! Shared fixtures for samachar-core integration tests.

#![allow(dead_code)]

use chrono::{Duration, TimeZone, Utc};
use samachar_core::{
    Acknowledgement, ContentItem, Error, ListPage, ListQuery, ListSource, ModerationApi,
    ModerationStatus, PostAction, Reporter, ReporterAction, ReporterStatus, Result,
};
use std::collections::{HashMap, VecDeque};

/// Builds a post with a deterministic creation time.
pub fn post(id: &str, status: ModerationStatus) -> ContentItem {
    let base = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
    ContentItem {
        id: id.to_string(),
        title: format!("Title {id}"),
        category: "mumbai".to_string(),
        status,
        is_verified: false,
        is_breaking: false,
        created_at: base + Duration::minutes(id.len() as i64),
    }
}

/// Builds `count` approved posts named `{prefix}-{n}`.
pub fn posts(prefix: &str, start: usize, count: usize) -> Vec<ContentItem> {
    (start..start + count)
        .map(|n| post(&format!("{prefix}-{n}"), ModerationStatus::Approved))
        .collect()
}

/// Builds a page.
pub fn page(items: Vec<ContentItem>, has_more: bool, number: u32) -> ListPage<ContentItem> {
    ListPage::new(items, has_more, number)
}

/// Builds a reporter.
pub fn reporter(id: &str, status: ReporterStatus, is_verified: bool) -> Reporter {
    Reporter {
        id: id.to_string(),
        name: format!("Reporter {id}"),
        email: format!("{id}@example.com"),
        mobile: "9800000000".to_string(),
        status,
        is_verified,
        articles: 3,
    }
}

/// List source that replays scripted responses and records every query.
#[derive(Default)]
pub struct ScriptedSource {
    pub responses: VecDeque<Result<ListPage<ContentItem>>>,
    pub calls: Vec<ListQuery>,
}

impl ScriptedSource {
    pub fn new(responses: Vec<Result<ListPage<ContentItem>>>) -> Self {
        Self {
            responses: responses.into(),
            calls: Vec::new(),
        }
    }
}

impl ListSource<ContentItem> for ScriptedSource {
    fn fetch(&mut self, query: &ListQuery) -> Result<ListPage<ContentItem>> {
        self.calls.push(query.clone());
        self.responses
            .pop_front()
            .unwrap_or_else(|| Err(Error::Transport("no scripted response".to_string())))
    }
}

/// Mutation endpoints backed by an in-memory table.
#[derive(Default)]
pub struct RecordingApi {
    pub posts: HashMap<String, ContentItem>,
    pub reporters: HashMap<String, Reporter>,
    pub calls: Vec<(String, String)>,
    pub fail_next: Option<Error>,
}

impl RecordingApi {
    pub fn with_posts(items: &[ContentItem]) -> Self {
        Self {
            posts: items.iter().map(|p| (p.id.clone(), p.clone())).collect(),
            ..Self::default()
        }
    }

    pub fn with_reporters(items: &[Reporter]) -> Self {
        Self {
            reporters: items.iter().map(|r| (r.id.clone(), r.clone())).collect(),
            ..Self::default()
        }
    }
}

impl ModerationApi<ContentItem> for RecordingApi {
    fn submit(&mut self, id: &str, action: &PostAction) -> Result<Acknowledgement<ContentItem>> {
        self.calls.push((id.to_string(), action.to_string()));
        if let Some(err) = self.fail_next.take() {
            return Err(err);
        }
        if matches!(action, PostAction::Delete) {
            return self
                .posts
                .remove(id)
                .map(|_| Acknowledgement::Removed)
                .ok_or_else(|| Error::NotFound(id.to_string()));
        }

        let post = self
            .posts
            .get_mut(id)
            .ok_or_else(|| Error::NotFound(id.to_string()))?;
        match action {
            PostAction::Approve => post.status = ModerationStatus::Approved,
            PostAction::Reject => post.status = ModerationStatus::Rejected,
            PostAction::Verify => post.is_verified = true,
            PostAction::Update(patch) => {
                if let Some(title) = &patch.title {
                    post.title = title.clone();
                }
                if let Some(category) = &patch.category {
                    post.category = category.clone();
                }
            }
            PostAction::Delete => {}
        }
        Ok(Acknowledgement::Updated(post.clone()))
    }
}

impl ModerationApi<Reporter> for RecordingApi {
    fn submit(&mut self, id: &str, action: &ReporterAction) -> Result<Acknowledgement<Reporter>> {
        self.calls.push((id.to_string(), action.to_string()));
        if let Some(err) = self.fail_next.take() {
            return Err(err);
        }
        if *action == ReporterAction::Delete {
            return self
                .reporters
                .remove(id)
                .map(|_| Acknowledgement::Removed)
                .ok_or_else(|| Error::NotFound(id.to_string()));
        }

        let reporter = self
            .reporters
            .get_mut(id)
            .ok_or_else(|| Error::NotFound(id.to_string()))?;
        match action {
            ReporterAction::Verify => reporter.is_verified = true,
            ReporterAction::Unverify => reporter.is_verified = false,
            ReporterAction::Suspend => reporter.status = ReporterStatus::Suspended,
            ReporterAction::Activate => reporter.status = ReporterStatus::Active,
            ReporterAction::Delete => {}
        }
        Ok(Acknowledgement::Updated(reporter.clone()))
    }
}
