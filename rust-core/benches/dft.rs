use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use harmonic_dft::spectrum::{zero_pad, DftEngine};
use harmonic_dft::{generate, AnalyzerConfig, SignalParameters, Tone};
use std::f64::consts::PI;

fn two_tone(n: usize) -> Vec<f64> {
    (0..n)
        .map(|i| {
            let t = i as f64 / 1000.0;
            (2.0 * PI * 5.0 * t).sin() + 0.7 * (2.0 * PI * 10.0 * t).sin()
        })
        .collect()
}

fn bench_direct_dft(c: &mut Criterion) {
    let mut group = c.benchmark_group("direct_dft");
    for n in [256usize, 1024, 2048] {
        let padded = zero_pad(&two_tone(n));
        let engine = DftEngine::new(padded.len());
        group.bench_with_input(BenchmarkId::new("loop", n), &padded, |b, signal| {
            b.iter(|| engine.transform(black_box(signal)))
        });
    }
    group.finish();
}

fn bench_kernel_matrix(c: &mut Criterion) {
    let mut group = c.benchmark_group("kernel_matrix_dft");
    group.sample_size(10);
    for n in [256usize, 1024] {
        let padded = zero_pad(&two_tone(n));
        let engine = DftEngine::new(padded.len());
        group.bench_with_input(BenchmarkId::new("dense", n), &padded, |b, signal| {
            b.iter(|| engine.transform_matrix(black_box(signal)))
        });
    }
    group.finish();
}

fn bench_pipeline(c: &mut Criterion) {
    let params = SignalParameters::new(
        1000,
        1000,
        Tone::new(1.0, 5.0, 0.0),
        Tone::new(0.7, 10.0, 0.0),
    )
    .expect("valid parameters");
    let config = AnalyzerConfig::default();

    c.bench_function("generate_n1000", |b| {
        b.iter(|| generate(black_box(&params), &config))
    });
}

criterion_group!(benches, bench_direct_dft, bench_kernel_matrix, bench_pipeline);
criterion_main!(benches);
