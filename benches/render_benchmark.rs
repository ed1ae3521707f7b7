use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use yobatis_docs::{pages::usage, shell, Route, Router};

fn render_document_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_document");

    for route in Route::ALL {
        group.bench_with_input(BenchmarkId::from_parameter(route.segment()), &route, |b, &route| {
            let router = Router::from(route);
            b.iter(|| shell::render_document(black_box(&router), "Yobatis"));
        });
    }

    group.finish();
}

fn render_usage_benchmark(c: &mut Criterion) {
    c.bench_function("render_usage_page", |b| {
        b.iter(|| usage::render(black_box(usage::entries())).to_html());
    });
}

fn render_json_benchmark(c: &mut Criterion) {
    c.bench_function("render_usage_json", |b| {
        b.iter(|| serde_json::to_vec(&shell::render_json(black_box(&Router::from(Route::Usage)))));
    });
}

fn route_resolve_benchmark(c: &mut Criterion) {
    let paths = [
        "/",
        "/usage",
        "/code-intro/",
        "/config?tab=xml#generator",
        "/some/unknown/deep/path",
    ];

    c.bench_function("route_resolve", |b| {
        b.iter(|| {
            for path in paths {
                black_box(Route::resolve(black_box(path)));
            }
        });
    });
}

criterion_group!(
    benches,
    render_document_benchmark,
    render_usage_benchmark,
    render_json_benchmark,
    route_resolve_benchmark
);
criterion_main!(benches);
