use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use markme_render::Renderer;
use markme_store::sample::EXAMPLE_CONTENT;
use markme_transform::transform;

/// Inputs that make a backtracking matcher blow up.
fn pathological(size: usize) -> Vec<(&'static str, String)> {
    vec![
        ("stars", "*".repeat(size)),
        ("underscores", "_a".repeat(size / 2)),
        ("open_brackets", "[".repeat(size)),
        ("unclosed_links", "[a](".repeat(size / 4)),
        ("backticks", "`".repeat(size)),
        ("list_lines", "* a\n".repeat(size / 4)),
    ]
}

fn bench_render_sample(c: &mut Criterion) {
    let renderer = Renderer::default();
    c.bench_function("render_sample", |b| {
        b.iter(|| black_box(renderer.render(black_box(EXAMPLE_CONTENT))));
    });
    c.bench_function("transform_sample", |b| {
        b.iter(|| black_box(transform(black_box(EXAMPLE_CONTENT))));
    });
}

fn bench_render_pathological(c: &mut Criterion) {
    let renderer = Renderer::default();
    let mut group = c.benchmark_group("render_pathological");

    for size in [1_000usize, 10_000] {
        for (name, input) in pathological(size) {
            group.bench_with_input(BenchmarkId::new(name, size), &input, |b, input| {
                b.iter(|| black_box(renderer.render(black_box(input))));
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_render_sample, bench_render_pathological);
criterion_main!(benches);
