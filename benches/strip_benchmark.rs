use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use logscrub::stripper::Markers;
use logscrub::{Strategy, Stripper};

fn generate_test_content(lines: usize, calls_per_100_lines: usize) -> String {
    let mut content = Vec::new();
    let every = 100 / calls_per_100_lines;

    for i in 0..lines {
        if i % every == 0 {
            content.push(format!("  console.log('step {}', value_{});", i, i));
        } else if i % every == every / 2 {
            content.push(format!("  console.log('state {}', {{", i));
            content.push(format!("    id: item_{}.id,", i));
            content.push("    tags: item.tags.map((t) => t.name),".to_string());
            content.push("  });".to_string());
        } else if i % 17 == 0 {
            content.push(format!("  console.error('failed {}', err);", i));
        } else {
            content.push(format!("  const var_{} = compute({});", i, i));
        }
    }

    content.join("\n")
}

fn benchmark_strip(c: &mut Criterion) {
    let mut group = c.benchmark_group("strip_content");

    for strategy in [Strategy::Paren, Strategy::Brace, Strategy::Line] {
        let stripper = Stripper::default().with_strategy(strategy);
        for size in [100, 1000, 10000].iter() {
            let content = generate_test_content(*size, 10);
            group.bench_with_input(
                BenchmarkId::new(strategy.as_str(), size),
                &content,
                |b, content| {
                    b.iter(|| stripper.strip_content(black_box(content)));
                },
            );
        }
    }

    group.finish();
}

fn benchmark_clean_input(c: &mut Criterion) {
    let stripper = Stripper::default();
    let content = generate_test_content(10000, 10).replace("console.log", "logger.info");

    c.bench_function("strip_content_no_marker", |b| {
        b.iter(|| stripper.strip_content(black_box(&content)));
    });
}

fn benchmark_classify(c: &mut Criterion) {
    let markers = Markers::default();
    let lines = [
        "  const total = items.reduce((a, b) => a + b, 0);",
        "  console.log('total', total);",
        "  console.log('a'); console.warn('b');",
    ];

    c.bench_function("markers_classify", |b| {
        b.iter(|| {
            for line in &lines {
                black_box(markers.classify(black_box(line)));
            }
        });
    });
}

criterion_group!(benches, benchmark_strip, benchmark_clean_input, benchmark_classify);
criterion_main!(benches);
