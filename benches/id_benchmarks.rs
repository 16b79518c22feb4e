use criterion::{criterion_group, criterion_main, Criterion};
use driftflake::{IdGenerator, IdGeneratorOptions, SharedIdGenerator};
use std::hint::black_box;

pub fn layout_comparison(c: &mut Criterion) {
    let mut group = c.benchmark_group("Layout Comparison");

    // More sequence bits means fewer borrowed ticks under a tight loop
    for &(worker_bits, seq_bits) in &[(6u8, 6u8), (10, 8), (10, 12), (6, 16)] {
        let options = IdGeneratorOptions::builder()
            .worker_id(1)
            .worker_id_bit_length(worker_bits)
            .seq_bit_length(seq_bits)
            .build()
            .unwrap();

        group.bench_function(
            format!("worker_{}_seq_{}", worker_bits, seq_bits),
            |b| {
                let mut generator = IdGenerator::with_options(options).unwrap();
                b.iter(|| {
                    black_box(generator.next_id());
                });
            },
        );
    }

    group.finish();
}

pub fn component_extraction_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("Component Extraction");
    let mut generator = IdGenerator::new(1).unwrap();
    let id = generator.next_id();

    group.bench_function("decompose", |b| {
        b.iter(|| {
            black_box(generator.extract.decompose(black_box(id)));
        });
    });

    group.finish();
}

pub fn shared_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("Shared");

    for &thread_count in &[2, 4, 8] {
        group.bench_function(format!("threads/{}", thread_count), |b| {
            let shared = SharedIdGenerator::new(IdGenerator::new(1).unwrap());
            b.iter(|| {
                let handles: Vec<_> = (0..thread_count)
                    .map(|_| {
                        let shared = shared.clone();
                        std::thread::spawn(move || {
                            black_box(shared.next_id());
                        })
                    })
                    .collect();

                for handle in handles {
                    handle.join().unwrap();
                }
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    layout_comparison,
    shared_benchmarks,
    component_extraction_benchmarks
);
criterion_main!(benches);
