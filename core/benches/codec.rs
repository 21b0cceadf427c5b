use std::collections::{BTreeMap, HashMap};

use bytestream_core::{from_bytes, InputStream, OutputStream, StreamConfig};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn sample_ints() -> Vec<u32> {
    (0..4096u32).map(|i| i.wrapping_mul(2_654_435_761)).collect()
}

fn sample_nested() -> HashMap<i32, BTreeMap<i32, String>> {
    (0..64)
        .map(|outer| {
            let inner = (0..16).map(|k| (k, format!("value-{outer}-{k}"))).collect();
            (outer, inner)
        })
        .collect()
}

fn encode_with(config: StreamConfig, ints: &[u32]) -> Vec<u8> {
    let mut out = OutputStream::with_config(config);
    out.write(ints);
    out.into_vec()
}

fn bench_encode_ints(c: &mut Criterion) {
    let ints = sample_ints();
    let each = StreamConfig::default().with_bulk_scalar_copy(false);
    c.bench_function("codec/encode_vec_u32_bulk", |b| {
        b.iter(|| black_box(encode_with(StreamConfig::default(), black_box(&ints))));
    });
    c.bench_function("codec/encode_vec_u32_each", |b| {
        b.iter(|| black_box(encode_with(each, black_box(&ints))));
    });
}

fn bench_decode_ints(c: &mut Criterion) {
    let wire = encode_with(StreamConfig::default(), &sample_ints());
    let each = StreamConfig::default().with_bulk_scalar_copy(false);
    c.bench_function("codec/decode_vec_u32_bulk", |b| {
        b.iter(|| {
            let decoded = from_bytes::<Vec<u32>>(black_box(&wire)).expect("decode should succeed");
            black_box(decoded);
        });
    });
    c.bench_function("codec/decode_vec_u32_each", |b| {
        b.iter(|| {
            let mut input = InputStream::with_config(black_box(&wire), each);
            let decoded = input.decode::<Vec<u32>>().expect("decode should succeed");
            black_box(decoded);
        });
    });
}

fn bench_nested_map(c: &mut Criterion) {
    let value = sample_nested();
    let wire = bytestream_core::to_bytes(&value);
    c.bench_function("codec/encode_nested_map", |b| {
        b.iter(|| black_box(bytestream_core::to_bytes(black_box(&value))));
    });
    c.bench_function("codec/decode_nested_map", |b| {
        b.iter(|| {
            let decoded = from_bytes::<HashMap<i32, BTreeMap<i32, String>>>(black_box(&wire))
                .expect("decode should succeed");
            black_box(decoded);
        });
    });
}

criterion_group!(benches, bench_encode_ints, bench_decode_ints, bench_nested_map);
criterion_main!(benches);
