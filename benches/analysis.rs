use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use hypotest::analysis::{f_test_variance_ratio, levene_test, paired_t_test, two_sample_t_test};
use hypotest::batch::Batch;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};
use rand_xoshiro::Xoshiro256PlusPlus;

fn normal_sample(seed: u64, n: usize) -> Vec<f64> {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    let normal = Normal::new(50.0, 5.0).unwrap();
    (0..n).map(|_| normal.sample(&mut rng)).collect()
}

fn bench_tests(c: &mut Criterion) {
    let mut group = c.benchmark_group("tests");
    for n in [30usize, 1_000, 100_000] {
        let a = normal_sample(1, n);
        let b = normal_sample(2, n);

        group.bench_with_input(BenchmarkId::new("welch", n), &n, |bench, _| {
            bench.iter(|| black_box(two_sample_t_test(black_box(&a), black_box(&b))));
        });
        group.bench_with_input(BenchmarkId::new("paired", n), &n, |bench, _| {
            bench.iter(|| black_box(paired_t_test(black_box(&a), black_box(&b))));
        });
        group.bench_with_input(BenchmarkId::new("f_test", n), &n, |bench, _| {
            bench.iter(|| black_box(f_test_variance_ratio(black_box(&a), black_box(&b))));
        });
        group.bench_with_input(BenchmarkId::new("levene", n), &n, |bench, _| {
            bench.iter(|| black_box(levene_test(black_box(&a), black_box(&b))));
        });
    }
    group.finish();
}

fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch");
    group.sample_size(20);
    group.bench_function("three_reports_x16", |bench| {
        let a = normal_sample(3, 5_000);
        let b = normal_sample(4, 5_000);
        bench.iter(|| {
            let mut batch = Batch::new();
            for i in 0..16 {
                let (a, b) = (a.clone(), b.clone());
                batch = batch.job(format!("job-{}", i), move |an| match i % 3 {
                    0 => an.independent_groups("independent", &a, &b).map(Into::into),
                    1 => an.paired_groups("paired", &a, &b).map(Into::into),
                    _ => an.variance_groups("variance", &a, &b).map(Into::into),
                });
            }
            black_box(batch.run())
        });
    });
    group.finish();
}

criterion_group!(benches, bench_tests, bench_batch);
criterion_main!(benches);
