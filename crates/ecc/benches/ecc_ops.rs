//! Benchmarks for secp256k1 point arithmetic and ECDSA
//!
//! These measure the schoolbook big-integer backend end to end: scalar
//! multiplication dominates signing, verification and key derivation.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use wallet_bigint::BigInt;
use wallet_ecc::secp256k1;

/// Benchmark point operations
fn bench_point_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("point_operations");
    let curve = secp256k1();
    let g = curve.generator().unwrap();
    let two_g = g.double();

    group.bench_function("point_add", |b| b.iter(|| black_box(&g + &two_g)));
    group.bench_function("point_double", |b| b.iter(|| black_box(g.double())));

    for bits in [64usize, 128, 256] {
        let k = BigInt::random(bits, bits).unwrap();
        group.bench_with_input(BenchmarkId::new("scalar_multiply", bits), &k, |b, k| {
            b.iter(|| black_box(g.multiply(k)))
        });
    }

    let compressed = two_g.to_compressed();
    group.bench_function("decompress", |b| {
        b.iter(|| black_box(curve.decode_point(&compressed).unwrap()))
    });

    group.finish();
}

/// Benchmark ECDSA signing and verification
fn bench_ecdsa(c: &mut Criterion) {
    let mut group = c.benchmark_group("ecdsa");
    group.sample_size(10);
    let curve = secp256k1();
    let private_key = curve.generate_private_key().unwrap();
    let public_key = curve.public_key(&private_key).unwrap();
    let digest = [0x42u8; 32];
    let signature = curve.sign(&digest, &private_key).unwrap();

    group.bench_function("sign", |b| {
        b.iter(|| black_box(curve.sign(&digest, &private_key).unwrap()))
    });
    group.bench_function("verify", |b| {
        b.iter(|| black_box(curve.verify(&digest, &public_key, &signature).unwrap()))
    });
    group.bench_function("public_key", |b| {
        b.iter(|| black_box(curve.public_key(&private_key).unwrap()))
    });

    group.finish();
}

/// Benchmark the modular primitives under the curve code
fn bench_modular(c: &mut Criterion) {
    let mut group = c.benchmark_group("modular");
    let p = secp256k1().p().clone();
    let x = BigInt::random(255, 255).unwrap();
    let e = &p - &BigInt::two();

    group.bench_function("mod_inverse", |b| b.iter(|| black_box(x.mod_inverse(&p).unwrap())));
    group.bench_function("mod_pow", |b| b.iter(|| black_box(x.mod_pow(&e, &p).unwrap())));
    group.bench_function("is_probable_prime", |b| b.iter(|| black_box(p.is_probable_prime())));

    group.finish();
}

criterion_group!(benches, bench_point_operations, bench_ecdsa, bench_modular);
criterion_main!(benches);
