use fenvprobe::{probe, run, Report, Variant};

fn test_probe_finite() {
    black_box(probe(black_box(10000.0)).unwrap());
}

fn test_probe_special() {
    for n in [0.0, f32::INFINITY, f32::NAN, -0.5] {
        black_box(probe(black_box(n)).unwrap());
    }
}

fn test_report() {
    let res = probe(100.0).unwrap();
    black_box(Report::new(&res, true).to_string());
}

fn test_run() {
    let mut out = Vec::new();
    run(Variant::WithClassification, &mut out).unwrap();
    black_box(out);
}

use criterion::{black_box, criterion_group, criterion_main, Criterion};

pub fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("test_probe_finite", |b| b.iter(test_probe_finite));
    c.bench_function("test_probe_special", |b| b.iter(test_probe_special));
    c.bench_function("test_report", |b| b.iter(test_report));
    c.bench_function("test_run", |b| b.iter(test_run));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
