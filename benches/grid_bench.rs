//! Benchmarks for the GridStore view pipeline

use chrono::{Duration, TimeZone, Utc};
use criterion::{criterion_group, criterion_main, Criterion};

use gridstore::sample::{article_columns, Article};
use gridstore::{filter, sort, ColumnFilter, FilterState, SortState};

/// Build a synthetic collection of `n` articles
fn collection(n: usize) -> Vec<Article> {
    let base = Utc
        .with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
        .single()
        .unwrap_or_default();

    (0..n)
        .map(|i| {
            let created = base + Duration::hours(i as i64);
            Article {
                id: i as i64 + 1,
                title: format!("Article number {}", i),
                author: if i % 3 == 0 { "Mara Voss" } else { "Jon Arve" }.to_string(),
                category_ids: vec![(i % 7) as i64],
                cover_image: format!("/media/covers/{}.jpg", i),
                views: ((i * 37) % 10_000) as u64,
                published: i % 2 == 0,
                published_at: (i % 2 == 0).then_some(created),
                created_at: created,
                updated_at: created,
            }
        })
        .collect()
}

fn view_benchmarks(c: &mut Criterion) {
    let rows = collection(10_000);
    let columns = article_columns();

    let query_state = FilterState::new().with_query("mara");
    c.bench_function("filter_query_10k", |b| {
        b.iter(|| filter::apply(&rows, &columns, &query_state))
    });

    let combined_state = FilterState::new()
        .with_query("article")
        .with_column("published", ColumnFilter::Equals("true".to_string()));
    c.bench_function("filter_combined_10k", |b| {
        b.iter(|| filter::apply(&rows, &columns, &combined_state))
    });

    let sort_state = SortState::desc("views");
    c.bench_function("sort_views_desc_10k", |b| {
        b.iter(|| sort::apply(rows.clone(), &columns, &sort_state))
    });
}

criterion_group!(benches, view_benchmarks);
criterion_main!(benches);
