use char_generators::{
    generate_with_options, render_dispatch_body, render_private_artifact, ArgumentValue,
    CancellationToken, DeclarationEntry, DeclarationSet, GenerationTarget, GeneratorOptions,
    DEFAULT_MARKER, DEFAULT_OPTIMIZE_FOR,
};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn benchmark_dispatch_body(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch_body");

    for size in [10, 50, 95].iter() {
        let characters: Vec<char> = DEFAULT_OPTIMIZE_FOR.chars().take(*size).collect();
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| render_dispatch_body(black_box(&characters)))
        });
    }
    group.finish();
}

fn benchmark_private_artifact(c: &mut Criterion) {
    let target = GenerationTarget::new("Tokenizer", "App.Text");

    c.bench_function("private_artifact_default_set", |b| {
        b.iter(|| render_private_artifact(black_box(&target)))
    });
}

fn benchmark_generation_pass(c: &mut Criterion) {
    let mut group = c.benchmark_group("generation_pass");
    let options = GeneratorOptions::new().with_embed_attribute(false);

    for size in [1, 10, 100].iter() {
        let set = (0..*size).fold(DeclarationSet::new(), |set, i| {
            set.with_declaration(
                DeclarationEntry::new(&format!("Type{}", i))
                    .in_scope("Bench")
                    .with_attribute(DEFAULT_MARKER, [("OptimizeFor", ArgumentValue::from(""))]),
            )
        });

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| generate_with_options(black_box(&set), &options, &CancellationToken::new()))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    benchmark_dispatch_body,
    benchmark_private_artifact,
    benchmark_generation_pass
);
criterion_main!(benches);
