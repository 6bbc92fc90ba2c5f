//! Coefficient derivation benchmarks.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lib_dsp::kernel::WindowedSincKernel;
use lib_dsp::quantize::interleave;
use lib_dsp::sampler::sample_family;
use lib_dsp::stability::StabilityReport;
use lib_types::derivative::DerivativeOrder;

fn bench_derivation(c: &mut Criterion) {
    let mut group = c.benchmark_group("derivation");
    let kernel = WindowedSincKernel::new();

    group.bench_function("evaluate_k3", |b| {
        b.iter(|| kernel.evaluate(DerivativeOrder::Third, black_box(2.5)));
    });

    group.bench_function("sample_family", |b| {
        b.iter(|| sample_family(black_box(&kernel)));
    });

    let family = sample_family(&kernel).expect("fixed kernel samples are finite");
    group.bench_function("analyze", |b| {
        b.iter(|| StabilityReport::analyze(black_box(&family)));
    });

    group.bench_function("interleave", |b| {
        b.iter(|| interleave(black_box(&family)));
    });

    group.finish();
}

criterion_group!(benches, bench_derivation);
criterion_main!(benches);
