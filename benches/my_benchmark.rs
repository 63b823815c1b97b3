use criterion::{black_box, criterion_group, criterion_main, Criterion};
use test_utils::generate_text_lines;
use wordcount_bench::{
    count_words_concurrent, count_words_parallel, count_words_sequential, DEFAULT_NUM_WORKERS,
};

fn benchmark_count_strategies(c: &mut Criterion) {
    let lines = generate_text_lines(2_000, 100);

    c.bench_function("count_words_sequential", |b| {
        b.iter(|| count_words_sequential(black_box(&lines)))
    });

    c.bench_function("count_words_concurrent", |b| {
        b.iter(|| count_words_concurrent(black_box(&lines), black_box(DEFAULT_NUM_WORKERS)))
    });

    c.bench_function("count_words_parallel", |b| {
        b.iter(|| count_words_parallel(black_box(&lines), black_box(DEFAULT_NUM_WORKERS)))
    });
}

criterion_group!(benches, benchmark_count_strategies);
criterion_main!(benches);
