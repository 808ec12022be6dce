//! Benchmarks for the encode / decode / learn cycle.

use adaptive_sdr::config::{EncodeParams, InitConfig, LearnParams};
use adaptive_sdr::kernel::{seeded_source, AdaptiveEncoder};
use adaptive_sdr::Autoencoder;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

const INPUT_SIZE: usize = 64;

fn input() -> Vec<f32> {
    (0..INPUT_SIZE).map(|i| (i as f32 * 0.37).sin() * 0.5 + 0.5).collect()
}

fn encoder(sdr_size: usize) -> AdaptiveEncoder {
    let mut rng = seeded_source(0, "bench");
    AdaptiveEncoder::create(&InitConfig::new(sdr_size, INPUT_SIZE), &mut rng)
        .expect("valid bench config")
}

fn benchmark_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");
    let x = input();
    let params = EncodeParams::default();

    for sdr_size in [64, 256, 1024] {
        let mut enc = encoder(sdr_size);
        let mut sdr = Vec::new();
        group.bench_with_input(BenchmarkId::from_parameter(sdr_size), &sdr_size, |b, _| {
            b.iter(|| enc.encode(black_box(&x), &mut sdr, &params))
        });
    }
    group.finish();
}

fn benchmark_decode(c: &mut Criterion) {
    let mut enc = encoder(256);
    let x = input();
    let mut sdr = Vec::new();
    let mut recon = Vec::new();
    enc.encode(&x, &mut sdr, &EncodeParams::default());

    c.bench_function("decode_256", |b| {
        b.iter(|| enc.decode(black_box(&sdr), &mut recon))
    });
}

fn benchmark_learn(c: &mut Criterion) {
    let mut enc = encoder(256);
    let x = input();
    let mut sdr = Vec::new();
    let mut recon = Vec::new();
    enc.encode(&x, &mut sdr, &EncodeParams::default());
    enc.decode(&sdr, &mut recon);
    let params = LearnParams::default();

    c.bench_function("learn_256", |b| {
        b.iter(|| enc.learn(black_box(&x), black_box(&recon), &params))
    });
}

fn benchmark_step(c: &mut Criterion) {
    let mut rng = seeded_source(0, "bench");
    let mut ae = Autoencoder::new(
        &InitConfig::new(256, INPUT_SIZE),
        EncodeParams::default(),
        LearnParams::default(),
        &mut rng,
    )
    .expect("valid bench config");
    let x = input();

    c.bench_function("autoencoder_step_256", |b| {
        b.iter(|| ae.step(black_box(&x)))
    });
}

criterion_group!(
    benches,
    benchmark_encode,
    benchmark_decode,
    benchmark_learn,
    benchmark_step
);
criterion_main!(benches);
