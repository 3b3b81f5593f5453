use criterion::{black_box, criterion_group, criterion_main, Criterion};

use sitesift::testing::{sample_pages, sample_store};
use sitesift::{build_index, search};

fn bench_build_index(c: &mut Criterion) {
    let store = sample_store();
    let pages = sample_pages();

    c.bench_function("build_index", |b| {
        b.iter(|| build_index(black_box(&store), black_box("es"), black_box(&pages)));
    });
}

fn bench_search(c: &mut Criterion) {
    let store = sample_store();
    let pages = sample_pages();
    let index = build_index(&store, "es", &pages);

    c.bench_function("search_content_hit", |b| {
        b.iter(|| search(black_box(&index), black_box("nube")));
    });

    c.bench_function("search_accented_query", |b| {
        b.iter(|| search(black_box(&index), black_box("búsqueda")));
    });

    c.bench_function("search_miss", |b| {
        b.iter(|| search(black_box(&index), black_box("nonexistent")));
    });
}

criterion_group!(benches, bench_build_index, bench_search);
criterion_main!(benches);
