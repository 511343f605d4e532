use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

fn payload(len: usize, zero_stride: usize) -> Vec<u8> {
    (0..len)
        .map(|i| {
            if zero_stride != 0 && i % zero_stride == 0 {
                0
            } else {
                (i % 255 + 1) as u8
            }
        })
        .collect()
}

fn bench_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("cobs");
    let cases = [
        ("non_zero_4k", payload(4096, 0)),
        ("sparse_zeros_4k", payload(4096, 64)),
        ("dense_zeros_4k", payload(4096, 2)),
    ];

    for (name, raw) in &cases {
        group.throughput(Throughput::Bytes(raw.len() as u64));
        group.bench_function(format!("encode/{}", name), |b| {
            b.iter(|| cobs::encode(black_box(raw)));
        });
        let encoded = cobs::encode(raw);
        group.bench_function(format!("decode/{}", name), |b| {
            b.iter(|| cobs::decode(black_box(&encoded)).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_codec);
criterion_main!(benches);
