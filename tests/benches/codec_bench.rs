use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use dsa_der::prelude::*;
use dsa_der_tests::vectors::*;
use dsa_der_tests::dsa1024_parameters;

fn bench_domain_parameters(c: &mut Criterion) {
    let mut group = c.benchmark_group("Dss-Parms");
    let attrs = dsa1024_parameters();
    let der = unhex(DSA1024_PARAMS_DER);

    group.bench_function("encode", |b| {
        b.iter(|| encode_domain_parameters(black_box(&attrs)).unwrap());
    });
    group.bench_function("decode", |b| {
        b.iter(|| decode_domain_parameters(black_box(&der)).unwrap());
    });

    group.finish();
}

fn bench_signature(c: &mut Criterion) {
    let mut group = c.benchmark_group("Dss-Sig-Value");

    // SHA-1, SHA-224 and SHA-256 sized components
    for width in [20usize, 28, 32].iter() {
        let raw = vec![0xa5u8; 2 * *width];
        let der = encode_signature(&raw).unwrap();

        group.bench_with_input(BenchmarkId::new("encode", width), width, |b, _| {
            b.iter(|| encode_signature(black_box(&raw)).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("decode", width), width, |b, &w| {
            b.iter(|| decode_signature_with_width(black_box(&der), w).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_domain_parameters, bench_signature);
criterion_main!(benches);
