// Generation benchmarks
//
// Measures the two synthesis paths: planning an outline and drafting the
// complete document. Both are pure in-memory template work, so regressions
// here point at string assembly, not I/O.
//
// Run with: cargo bench

use blogsmith_mcp::content::generate_complete_blog_post;
use blogsmith_mcp::model::{AudienceLevel, BlogPostFields, DesiredLength};
use blogsmith_mcp::outline::build_outline;
use blogsmith_mcp::validator::validate_blog_post;
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn bench_outline(c: &mut Criterion) {
    let mut group = c.benchmark_group("outline");

    for length in [
        DesiredLength::Short,
        DesiredLength::Medium,
        DesiredLength::Long,
    ] {
        group.bench_with_input(
            BenchmarkId::new("build", format!("{length:?}")),
            &length,
            |b, &length| {
                b.iter(|| {
                    black_box(build_outline(
                        black_box("Distributed Tracing"),
                        AudienceLevel::Intermediate,
                        vec!["opentelemetry".to_string(), "jaeger".to_string()],
                        length,
                    ))
                });
            },
        );
    }

    group.finish();
}

fn bench_complete_post(c: &mut Criterion) {
    let mut group = c.benchmark_group("complete_post");

    for length in [DesiredLength::Short, DesiredLength::Long] {
        let outline = build_outline(
            "Distributed Tracing",
            AudienceLevel::Intermediate,
            vec!["opentelemetry".to_string()],
            length,
        )
        .expect("outline");

        group.bench_with_input(
            BenchmarkId::new("draft", format!("{length:?}")),
            &outline,
            |b, outline| {
                b.iter(|| {
                    let mut rng = StdRng::seed_from_u64(42);
                    black_box(generate_complete_blog_post(
                        black_box(outline),
                        None,
                        &mut rng,
                    ))
                });
            },
        );
    }

    group.finish();
}

fn bench_validation(c: &mut Criterion) {
    let outline = build_outline(
        "Distributed Tracing",
        AudienceLevel::Intermediate,
        vec!["opentelemetry".to_string()],
        DesiredLength::Long,
    )
    .expect("outline");
    let mut rng = StdRng::seed_from_u64(42);
    let post = generate_complete_blog_post(&outline, None, &mut rng).expect("post");
    let fields: BlogPostFields = (&post).into();

    c.bench_function("validate_full_post", |b| {
        b.iter(|| black_box(validate_blog_post(black_box(&fields))));
    });
}

criterion_group!(
    benches,
    bench_outline,
    bench_complete_post,
    bench_validation
);
criterion_main!(benches);
