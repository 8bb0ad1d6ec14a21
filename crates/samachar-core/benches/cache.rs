// Rust guideline compliant 2026-10-14

use chrono::{TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use samachar_core::{
    Category, ContentItem, Filters, IncrementalLoader, Invalidation, ListPage, ListQuery,
    ModerationStatus, QueryCache,
};

fn build_items(prefix: &str, count: usize) -> Vec<ContentItem> {
    let base = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
    (0..count)
        .map(|i| ContentItem {
            id: format!("{prefix}-{i}"),
            title: format!("Post {i}"),
            category: Category::ALL[i % Category::ALL.len()].key().to_string(),
            status: ModerationStatus::Approved,
            is_verified: i % 3 == 0,
            is_breaking: false,
            created_at: base + chrono::Duration::minutes(i as i64),
        })
        .collect()
}

fn build_cache(queries: usize) -> (QueryCache<ContentItem>, Vec<ListQuery>) {
    let mut cache = QueryCache::new();
    let mut keys = Vec::with_capacity(queries);
    for i in 0..queries {
        let category = Category::ALL[i % Category::ALL.len()];
        let status = if i % 2 == 0 { "approved" } else { "pending" };
        let filters = category.filters().with("status", status);
        let page = u32::try_from(i / 12 + 1).unwrap();
        let query = ListQuery::new(filters, page, 10).unwrap();
        cache.put(
            query.clone(),
            ListPage::new(build_items(&format!("q{i}"), 10), true, page),
        );
        keys.push(query);
    }
    (cache, keys)
}

fn bench_query_key(c: &mut Criterion) {
    let query = ListQuery::new(
        Filters::new()
            .with("category", "mumbai")
            .with("status", "approved")
            .with("search", "मुंबई"),
        4,
        10,
    )
    .unwrap();
    c.bench_function("query_key", |b| b.iter(|| black_box(query.key())));
}

fn bench_get(c: &mut Criterion) {
    let (cache, keys) = build_cache(1000);
    c.bench_function("cache_get_1000", |b| {
        b.iter(|| {
            for key in keys.iter().step_by(50) {
                black_box(cache.get(key));
            }
        })
    });
}

fn bench_apply_invalidation(c: &mut Criterion) {
    let plan = Invalidation::for_item("q7-3")
        .filter("status", "pending")
        .filter("status", "approved");
    c.bench_function("cache_apply_1000", |b| {
        b.iter_batched(
            || build_cache(1000).0,
            |mut cache| black_box(cache.apply(&plan)),
            BatchSize::SmallInput,
        )
    });
}

fn bench_loader_accumulate(c: &mut Criterion) {
    let pages: Vec<ListPage<ContentItem>> = (0..50)
        .map(|p| ListPage::new(build_items(&format!("p{p}"), 10), p < 49, p + 1))
        .collect();
    c.bench_function("loader_500_items", |b| {
        b.iter_batched(
            || pages.clone(),
            |pages| {
                let mut loader = IncrementalLoader::new(Filters::new(), 10).unwrap();
                for page in pages {
                    if let Some(request) = loader.load_next() {
                        let _ = loader.complete(request.ticket, Ok(page));
                    }
                }
                black_box(loader.items().len())
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(
    benches,
    bench_query_key,
    bench_get,
    bench_apply_invalidation,
    bench_loader_accumulate
);
criterion_main!(benches);
