// Rust guideline compliant 2026-10-14

//! Property-based tests for the incremental loader.
//!
//! These tests validate ordering, uniqueness and request sequencing across
//! arbitrary page sequences.

mod common;

use common::{page, post};
use proptest::prelude::*;
use samachar_core::{ContentItem, Filters, IncrementalLoader, ModerationStatus};
use std::collections::HashSet;

/// Generates a sequence of pages whose IDs are drawn from a small pool,
/// so overlap between pages is common.
fn arb_pages() -> impl Strategy<Value = Vec<Vec<u8>>> {
    prop::collection::vec(prop::collection::vec(0u8..40, 0..8), 1..8)
}

fn to_items(ids: &[u8]) -> Vec<ContentItem> {
    ids.iter()
        .map(|id| post(&format!("id-{id}"), ModerationStatus::Approved))
        .collect()
}

proptest! {
    /// For any sequence of resolved pages under one filter set, the
    /// accumulated list has unique IDs and equals the concatenation of all
    /// pages in request order with repeats removed.
    #[test]
    fn prop_accumulation_is_ordered_and_unique(pages in arb_pages()) {
        let mut loader = IncrementalLoader::new(Filters::new(), 8).unwrap();
        let last = pages.len() - 1;

        for (index, ids) in pages.iter().enumerate() {
            let request = loader.load_next().expect("Loader should issue while pages remain");
            prop_assert_eq!(request.query.page() as usize, index + 1);
            loader
                .complete(request.ticket, Ok(page(to_items(ids), index < last, 0)))
                .unwrap();
        }

        let mut seen = HashSet::new();
        let expected: Vec<String> = pages
            .iter()
            .flatten()
            .map(|id| format!("id-{id}"))
            .filter(|id| seen.insert(id.clone()))
            .collect();
        let actual: Vec<String> = loader.items().iter().map(|p| p.id.clone()).collect();
        prop_assert_eq!(actual, expected);
        prop_assert!(loader.load_next().is_none());
    }

    /// For any number of repeated calls while a request is outstanding,
    /// only the first call issues a request.
    #[test]
    fn prop_load_next_while_loading_issues_once(extra_calls in 1usize..20) {
        let mut loader: IncrementalLoader<ContentItem> =
            IncrementalLoader::new(Filters::new(), 10).unwrap();
        let mut issued = 0;
        for _ in 0..=extra_calls {
            if loader.load_next().is_some() {
                issued += 1;
            }
        }
        prop_assert_eq!(issued, 1);
    }

    /// For any filter change while a request is in flight, the old
    /// response never reaches the new list.
    #[test]
    fn prop_superseded_response_is_discarded(old_ids in prop::collection::vec(0u8..40, 1..8)) {
        let mut loader = IncrementalLoader::new(Filters::new().with("category", "mumbai"), 8).unwrap();
        let old = loader.load_next().unwrap();
        loader.set_filters(Filters::new().with("category", "tech"));

        prop_assert!(loader.complete(old.ticket, Ok(page(to_items(&old_ids), true, 1))).is_err());
        prop_assert!(loader.items().is_empty());
    }
}
