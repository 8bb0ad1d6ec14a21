// Rust guideline compliant 2026-10-14

//! JSON fixture standing in for the remote API.
//!
//! A fixture file holds `{ "posts": [...], "reporters": [...],
//! "epapers": [...] }` in the
//! wire format of the news API. [`FixtureBackend`] answers paged list
//! queries and mutation calls against it the way the server does:
//! filtering, newest-first ordering, page slicing and `hasMore`.

use chrono::NaiveDate;
use samachar_core::{
    Acknowledgement, Category, ContentItem, EPaper, EPaperAction, EPaperSource, Error, ListPage,
    ListQuery, ListSource, ModerationApi, ModerationStatus, PostAction, Reporter, ReporterAction,
    ReporterStatus, Result,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Contents of a fixture file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Fixture {
    /// Posts, in any order.
    #[serde(default)]
    pub posts: Vec<ContentItem>,
    /// Reporter accounts.
    #[serde(default)]
    pub reporters: Vec<Reporter>,
    /// Dated e-paper editions.
    #[serde(default)]
    pub epapers: Vec<EPaper>,
}

impl Fixture {
    /// Loads a fixture file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid JSON.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Writes the fixture back as pretty JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}

/// In-memory server over a [`Fixture`].
#[derive(Debug, Default)]
pub struct FixtureBackend {
    fixture: Fixture,
    requests: usize,
}

impl FixtureBackend {
    /// Creates a backend serving `fixture`.
    #[must_use]
    pub fn new(fixture: Fixture) -> Self {
        Self {
            fixture,
            requests: 0,
        }
    }

    /// Current server-side data.
    #[must_use]
    pub fn fixture(&self) -> &Fixture {
        &self.fixture
    }

    /// Consumes the backend, returning the server-side data.
    #[must_use]
    pub fn into_fixture(self) -> Fixture {
        self.fixture
    }

    /// Number of requests served, list and mutation alike.
    #[must_use]
    pub fn requests(&self) -> usize {
        self.requests
    }

    /// Finds a post by id.
    #[must_use]
    pub fn post(&self, id: &str) -> Option<&ContentItem> {
        self.fixture.posts.iter().find(|p| p.id == id)
    }

    /// Finds a reporter by id.
    #[must_use]
    pub fn reporter(&self, id: &str) -> Option<&Reporter> {
        self.fixture.reporters.iter().find(|r| r.id == id)
    }

    /// Finds an e-paper edition by id.
    #[must_use]
    pub fn epaper(&self, id: &str) -> Option<&EPaper> {
        self.fixture.epapers.iter().find(|e| e.id == id)
    }
}

fn post_matches(post: &ContentItem, query: &ListQuery) -> bool {
    let filters = query.filters();
    if let Some(status) = filters.get("status") {
        if status != "all" && status != post.status.as_str() {
            return false;
        }
    }
    if let Some(category) = filters.get("category") {
        let accepted = match category.parse::<Category>() {
            Ok(known) => known.accepts(&post.category),
            Err(_) => category.eq_ignore_ascii_case(&post.category),
        };
        if !accepted {
            return false;
        }
    }
    if let Some(verified) = filters.get("verified") {
        if verified.parse::<bool>().ok() != Some(post.is_verified) {
            return false;
        }
    }
    if let Some(breaking) = filters.get("breaking") {
        if breaking.parse::<bool>().ok() != Some(post.is_breaking) {
            return false;
        }
    }
    if let Some(search) = filters.get("search") {
        if !post.title.to_lowercase().contains(&search.to_lowercase()) {
            return false;
        }
    }
    let created = post.created_at.date_naive();
    if parse_date(filters.get("startDate")).is_some_and(|start| created < start) {
        return false;
    }
    if parse_date(filters.get("endDate")).is_some_and(|end| created > end) {
        return false;
    }
    true
}

/// Parses a `YYYY-MM-DD` filter value. Malformed dates are ignored.
fn parse_date(value: Option<&str>) -> Option<NaiveDate> {
    value.and_then(|v| NaiveDate::parse_from_str(v, "%Y-%m-%d").ok())
}

fn reporter_matches(reporter: &Reporter, query: &ListQuery) -> bool {
    let filters = query.filters();
    if let Some(status) = filters.get("status") {
        if status != "all" && status != reporter.status.as_str() {
            return false;
        }
    }
    if let Some(verified) = filters.get("verified") {
        if verified.parse::<bool>().ok() != Some(reporter.is_verified) {
            return false;
        }
    }
    true
}

fn epaper_matches(edition: &EPaper, query: &ListQuery) -> bool {
    let filters = query.filters();
    if let Some(active) = filters.get("active") {
        if active.parse::<bool>().ok() != Some(edition.is_active) {
            return false;
        }
    }
    if parse_date(filters.get("date")).is_some_and(|date| edition.date != date) {
        return false;
    }
    true
}

fn slice_page<T: Clone>(matching: &[T], query: &ListQuery) -> ListPage<T> {
    let size = query.page_size() as usize;
    let start = (query.page() as usize - 1).saturating_mul(size);
    let end = start.saturating_add(size).min(matching.len());
    let items = if start < matching.len() {
        matching[start..end].to_vec()
    } else {
        Vec::new()
    };
    ListPage::new(items, end < matching.len(), query.page())
}

impl ListSource<ContentItem> for FixtureBackend {
    fn fetch(&mut self, query: &ListQuery) -> Result<ListPage<ContentItem>> {
        self.requests += 1;
        let mut matching: Vec<ContentItem> = self
            .fixture
            .posts
            .iter()
            .filter(|p| post_matches(p, query))
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        debug!(
            page = query.page(),
            matching = matching.len(),
            "serving post page"
        );
        Ok(slice_page(&matching, query))
    }
}

impl ListSource<Reporter> for FixtureBackend {
    fn fetch(&mut self, query: &ListQuery) -> Result<ListPage<Reporter>> {
        self.requests += 1;
        let matching: Vec<Reporter> = self
            .fixture
            .reporters
            .iter()
            .filter(|r| reporter_matches(r, query))
            .cloned()
            .collect();
        Ok(slice_page(&matching, query))
    }
}

impl ListSource<EPaper> for FixtureBackend {
    fn fetch(&mut self, query: &ListQuery) -> Result<ListPage<EPaper>> {
        self.requests += 1;
        let mut matching: Vec<EPaper> = self
            .fixture
            .epapers
            .iter()
            .filter(|e| epaper_matches(e, query))
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(slice_page(&matching, query))
    }
}

impl EPaperSource for FixtureBackend {
    fn by_date(&mut self, date: NaiveDate) -> Result<Option<EPaper>> {
        self.requests += 1;
        // An active edition wins over an inactive one for the same date.
        let found = self
            .fixture
            .epapers
            .iter()
            .filter(|e| e.date == date)
            .max_by_key(|e| e.is_active)
            .cloned();
        debug!(%date, found = found.is_some(), "serving e-paper lookup");
        Ok(found)
    }
}

impl ModerationApi<ContentItem> for FixtureBackend {
    fn submit(&mut self, id: &str, action: &PostAction) -> Result<Acknowledgement<ContentItem>> {
        self.requests += 1;
        let index = self
            .fixture
            .posts
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| Error::from_status(404, format!("post {id}")))?;

        if let PostAction::Update(patch) = action {
            if patch.title.as_deref().is_some_and(|t| t.trim().is_empty()) {
                return Err(Error::from_status(422, "title must not be empty"));
            }
            if let Some(category) = &patch.category {
                category.parse::<Category>().map_err(|_| {
                    Error::from_status(422, format!("unknown category {category}"))
                })?;
            }
        }

        let post = &mut self.fixture.posts[index];
        match action {
            PostAction::Approve => post.status = ModerationStatus::Approved,
            PostAction::Reject => post.status = ModerationStatus::Rejected,
            PostAction::Verify => post.is_verified = true,
            PostAction::Update(patch) => {
                if let Some(title) = &patch.title {
                    post.title = title.clone();
                }
                if let Some(category) = &patch.category {
                    post.category = category.to_lowercase();
                }
            }
            PostAction::Delete => {
                self.fixture.posts.remove(index);
                return Ok(Acknowledgement::Removed);
            }
        }
        Ok(Acknowledgement::Updated(post.clone()))
    }
}

impl ModerationApi<Reporter> for FixtureBackend {
    fn submit(&mut self, id: &str, action: &ReporterAction) -> Result<Acknowledgement<Reporter>> {
        self.requests += 1;
        let index = self
            .fixture
            .reporters
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| Error::from_status(404, format!("reporter {id}")))?;

        let reporter = &mut self.fixture.reporters[index];
        match action {
            ReporterAction::Verify => reporter.is_verified = true,
            ReporterAction::Unverify => reporter.is_verified = false,
            ReporterAction::Suspend => reporter.status = ReporterStatus::Suspended,
            ReporterAction::Activate => reporter.status = ReporterStatus::Active,
            ReporterAction::Delete => {
                self.fixture.reporters.remove(index);
                return Ok(Acknowledgement::Removed);
            }
        }
        Ok(Acknowledgement::Updated(reporter.clone()))
    }
}

impl ModerationApi<EPaper> for FixtureBackend {
    fn submit(&mut self, id: &str, action: &EPaperAction) -> Result<Acknowledgement<EPaper>> {
        self.requests += 1;
        let index = self
            .fixture
            .epapers
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| Error::from_status(404, format!("e-paper {id}")))?;

        let edition = &mut self.fixture.epapers[index];
        match action {
            EPaperAction::Activate => edition.is_active = true,
            EPaperAction::Deactivate => edition.is_active = false,
            EPaperAction::Delete => {
                self.fixture.epapers.remove(index);
                return Ok(Acknowledgement::Removed);
            }
        }
        Ok(Acknowledgement::Updated(edition.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};
    use samachar_core::{Filters, PostPatch};

    fn item(id: &str, category: &str, minutes: i64) -> ContentItem {
        ContentItem {
            id: id.to_string(),
            title: format!("Khabar {id}"),
            category: category.to_string(),
            status: ModerationStatus::Approved,
            is_verified: false,
            is_breaking: false,
            created_at: Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap()
                + Duration::minutes(minutes),
        }
    }

    fn backend() -> FixtureBackend {
        FixtureBackend::new(Fixture {
            posts: vec![
                item("a", "mumbai", 1),
                item("b", "tech", 2),
                item("c", "Mumbai", 3),
            ],
            reporters: Vec::new(),
            epapers: vec![
                edition("e-1", 1, false),
                edition("e-2", 1, true),
                edition("e-3", 2, true),
            ],
        })
    }

    fn edition(id: &str, day: u32, active: bool) -> EPaper {
        EPaper {
            id: id.to_string(),
            date: NaiveDate::from_ymd_opt(2026, 1, day).unwrap(),
            pdf_url: format!("http://cdn.example.com/{id}.pdf"),
            thumbnail_url: String::new(),
            is_active: active,
        }
    }

    #[test]
    fn test_newest_first_and_has_more() {
        let mut backend = backend();
        let query = ListQuery::new(Filters::new(), 1, 2).unwrap();
        let page: ListPage<ContentItem> = backend.fetch(&query).unwrap();
        let ids: Vec<&str> = page.items.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "b"]);
        assert!(page.has_more);

        let query = ListQuery::new(Filters::new(), 2, 2).unwrap();
        let page: ListPage<ContentItem> = backend.fetch(&query).unwrap();
        assert_eq!(page.items.len(), 1);
        assert!(!page.has_more);
    }

    #[test]
    fn test_category_filter_is_case_insensitive() {
        let mut backend = backend();
        let query = ListQuery::new(Category::Mumbai.filters(), 1, 10).unwrap();
        let page: ListPage<ContentItem> = backend.fetch(&query).unwrap();
        assert_eq!(page.items.len(), 2);

        let query = ListQuery::new(Category::Home.filters(), 1, 10).unwrap();
        let page: ListPage<ContentItem> = backend.fetch(&query).unwrap();
        assert_eq!(page.items.len(), 3);
    }

    #[test]
    fn test_date_range_filter() {
        let mut backend = backend();
        let mut late = item("d", "tech", 60 * 24 * 3);
        late.title = "Later".to_string();
        backend.fixture.posts.push(late);

        let filters = Filters::new().with("startDate", "2026-01-02");
        let query = ListQuery::new(filters, 1, 10).unwrap();
        let page: ListPage<ContentItem> = backend.fetch(&query).unwrap();
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].id, "d");

        let filters = Filters::new().with("endDate", "2026-01-01");
        let query = ListQuery::new(filters, 1, 10).unwrap();
        let page: ListPage<ContentItem> = backend.fetch(&query).unwrap();
        assert_eq!(page.items.len(), 3);
    }

    #[test]
    fn test_page_past_end_is_empty() {
        let mut backend = backend();
        let query = ListQuery::new(Filters::new(), 5, 10).unwrap();
        let page: ListPage<ContentItem> = backend.fetch(&query).unwrap();
        assert!(page.items.is_empty());
        assert!(!page.has_more);
    }

    #[test]
    fn test_update_with_empty_title_rejected() {
        let mut backend = backend();
        let action = PostAction::Update(PostPatch {
            title: Some("  ".to_string()),
            category: None,
        });
        let result = ModerationApi::<ContentItem>::submit(&mut backend, "a", &action);
        assert!(matches!(result, Err(Error::Validation(_))));
        assert_eq!(backend.post("a").unwrap().title, "Khabar a");
    }

    #[test]
    fn test_breaking_filter() {
        let mut backend = backend();
        backend.fixture.posts[1].is_breaking = true;
        let query = ListQuery::new(Filters::new().with("breaking", "true"), 1, 10).unwrap();
        let page: ListPage<ContentItem> = backend.fetch(&query).unwrap();
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].id, "b");
    }

    #[test]
    fn test_epaper_lookup_prefers_active_edition() {
        let mut backend = backend();
        let date = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        let found = backend.by_date(date).unwrap().unwrap();
        assert_eq!(found.id, "e-2");

        let missing = NaiveDate::from_ymd_opt(2026, 1, 9).unwrap();
        assert!(backend.by_date(missing).unwrap().is_none());
    }

    #[test]
    fn test_epaper_listing_newest_first() {
        let mut backend = backend();
        let query = ListQuery::new(Filters::new(), 1, 10).unwrap();
        let page: ListPage<EPaper> = backend.fetch(&query).unwrap();
        assert_eq!(page.items[0].id, "e-3");

        let query = ListQuery::new(Filters::new().with("active", "false"), 1, 10).unwrap();
        let page: ListPage<EPaper> = backend.fetch(&query).unwrap();
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].id, "e-1");
    }

    #[test]
    fn test_unknown_post_is_not_found() {
        let mut backend = backend();
        let result = ModerationApi::<ContentItem>::submit(&mut backend, "zz", &PostAction::Approve);
        assert!(matches!(result, Err(Error::NotFound(_))));
    }
}
