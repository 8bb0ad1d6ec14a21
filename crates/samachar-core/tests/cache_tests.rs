// Rust guideline compliant 2026-10-14

//! Unit tests for the query cache.

mod common;

use common::{page, post, posts};
use samachar_core::{ContentItem, Filters, Invalidation, ListQuery, ModerationStatus, QueryCache};

fn query(filters: Filters, number: u32) -> ListQuery {
    ListQuery::new(filters, number, 10).unwrap()
}

fn pending() -> Filters {
    Filters::new().with("status", "pending")
}

#[test]
fn test_get_on_empty_cache_is_absent() {
    let cache: QueryCache<ContentItem> = QueryCache::new();
    assert!(cache.get(&query(pending(), 1)).is_none());
    assert!(cache.is_empty());
}

#[test]
fn test_put_then_get() {
    let mut cache = QueryCache::new();
    cache.put(query(pending(), 1), page(posts("p", 0, 3), true, 1));

    let cached = cache.get(&query(pending(), 1)).expect("Entry should be cached");
    assert_eq!(cached.items.len(), 3);
    assert!(cache.get(&query(pending(), 2)).is_none());
}

#[test]
fn test_put_overwrites_same_identity() {
    let mut cache = QueryCache::new();
    cache.put(query(pending(), 1), page(posts("a", 0, 3), true, 1));
    cache.put(query(pending(), 1), page(posts("b", 0, 1), false, 1));

    assert_eq!(cache.len(), 1);
    let cached = cache.get(&query(pending(), 1)).unwrap();
    assert_eq!(cached.items[0].id, "b-0");
    assert!(!cached.has_more);
}

#[test]
fn test_invalidate_by_predicate() {
    let mut cache = QueryCache::new();
    cache.put(query(pending(), 1), page(posts("p", 0, 2), true, 1));
    cache.put(query(pending(), 2), page(posts("p", 2, 2), false, 2));
    cache.put(
        query(Filters::new().with("status", "approved"), 1),
        page(posts("a", 0, 2), false, 1),
    );

    let removed = cache.invalidate(|filters| filters.matches("status", "pending"));
    assert_eq!(removed, 2);
    assert_eq!(cache.len(), 1);
    assert!(cache.get(&query(pending(), 1)).is_none());
}

#[test]
fn test_invalidate_containing_item() {
    let mut cache = QueryCache::new();
    cache.put(query(Filters::new(), 1), page(posts("x", 0, 3), true, 1));
    cache.put(query(pending(), 1), page(posts("x", 2, 2), false, 1));
    cache.put(query(pending(), 2), page(posts("y", 0, 2), false, 2));

    let removed = cache.invalidate_containing("x-2");
    assert_eq!(removed, 2);
    assert!(cache.get(&query(pending(), 2)).is_some());
}

#[test]
fn test_apply_plan_matches_filters_or_item() {
    let mut cache = QueryCache::new();
    let tech = Filters::new().with("category", "tech");
    cache.put(query(pending(), 1), page(vec![post("a", ModerationStatus::Pending)], false, 1));
    cache.put(
        query(Filters::new().with("status", "approved"), 1),
        page(vec![post("b", ModerationStatus::Approved)], false, 1),
    );
    cache.put(query(tech.clone(), 1), page(vec![post("c", ModerationStatus::Approved)], false, 1));
    cache.put(query(Filters::new(), 1), page(vec![post("c", ModerationStatus::Approved)], false, 1));

    let plan = Invalidation::for_item("a")
        .filter("status", "pending")
        .filter("status", "approved");
    assert_eq!(cache.apply(&plan), 2);
    assert!(cache.get(&query(tech, 1)).is_some());
    assert!(cache.get(&query(Filters::new(), 1)).is_some());
}

#[test]
fn test_in_flight_dedup() {
    let mut cache: QueryCache<ContentItem> = QueryCache::new();
    let q = query(pending(), 1);

    assert!(cache.begin_fetch(&q), "First caller issues the request");
    assert!(!cache.begin_fetch(&q), "Second caller joins");
    assert!(cache.is_in_flight(&q));

    cache.finish_fetch(&q);
    assert!(!cache.is_in_flight(&q));
    assert!(cache.begin_fetch(&q));
}

#[test]
fn test_entries_never_expire_without_invalidation() {
    let mut cache = QueryCache::new();
    cache.put(query(pending(), 1), page(posts("p", 0, 1), false, 1));
    for _ in 0..100 {
        assert!(cache.get(&query(pending(), 1)).is_some());
    }
    cache.clear();
    assert!(cache.is_empty());
}
