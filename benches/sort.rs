// benches/sort.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use radio_dash::{
    record::Record,
    sort::{self, SortState},
    specs::matches::ALL_MATCHES,
};

fn synthetic_matches(n: usize) -> Vec<Record> {
    // Deterministic spread with plenty of ties and some absent listeners
    (0..n)
        .map(|i| {
            let day = 1 + (i * 7) % 28;
            let month = 1 + (i * 5) % 12;
            let r = Record::new()
                .with("date", format!("20{:02}-{month:02}-{day:02}", 18 + i % 8).as_str())
                .with("match_name", format!("Team {} - Team {}", i % 18, (i * 3) % 18).as_str())
                .with("result", ["W", "D", "L"][i % 3]);
            if i % 11 == 0 { r } else { r.with("listeners", ((i * 7919) % 40_000) as i64) }
        })
        .collect()
}

fn bench_sort(c: &mut Criterion) {
    let records = synthetic_matches(10_000);

    for (name, state) in [
        ("sort_listeners_desc", SortState::desc("listeners")),
        ("sort_media_value_desc", SortState::desc("mediaValue")),
        ("sort_date_asc", SortState::asc("date")),
        ("sort_match_name_asc", SortState::asc("match_name")),
    ] {
        c.bench_function(name, |b| {
            b.iter(|| {
                let ix = sort::sort_indices(black_box(&records), &ALL_MATCHES, black_box(&state));
                black_box(ix.len())
            })
        });
    }
}

criterion_group!(benches, bench_sort);
criterion_main!(benches);
