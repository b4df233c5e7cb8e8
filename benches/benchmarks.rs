use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use zb8::{compress, decompress};

const PAYLOAD_LEN: usize = 1 << 20;

// Deterministic payloads, no RNG dependency in the harness
fn sparse_payload(len: usize) -> Vec<u8> {
    let mut state = 0x5EEDu64;
    (0..len)
        .map(|_| {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            // roughly 1 in 150 bytes nonzero
            if state % 150 == 0 {
                (state >> 32) as u8 | 1
            } else {
                0
            }
        })
        .collect()
}

fn random_payload(len: usize) -> Vec<u8> {
    let mut state = 0xBADC_0FFEu64;
    (0..len)
        .map(|_| {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            (state >> 56) as u8
        })
        .collect()
}

fn bench_compress(c: &mut Criterion) {
    let mut group = c.benchmark_group("compress");
    group.throughput(Throughput::Bytes(PAYLOAD_LEN as u64));

    for (name, payload) in [
        ("all_zero", vec![0u8; PAYLOAD_LEN]),
        ("sparse", sparse_payload(PAYLOAD_LEN)),
        ("random", random_payload(PAYLOAD_LEN)),
    ] {
        let mut frame = Vec::new();
        group.bench_function(name, |b| {
            b.iter(|| {
                compress(black_box(&payload), &mut frame);
                black_box(frame.len())
            })
        });
    }
    group.finish();
}

fn bench_decompress(c: &mut Criterion) {
    let mut group = c.benchmark_group("decompress");
    group.throughput(Throughput::Bytes(PAYLOAD_LEN as u64));

    for (name, payload) in [
        ("all_zero", vec![0u8; PAYLOAD_LEN]),
        ("sparse", sparse_payload(PAYLOAD_LEN)),
        ("random", random_payload(PAYLOAD_LEN)),
    ] {
        let mut frame = Vec::new();
        compress(&payload, &mut frame);
        let mut restored = Vec::new();
        group.bench_function(name, |b| {
            b.iter(|| {
                decompress(black_box(&frame), &mut restored).unwrap();
                black_box(restored.len())
            })
        });
    }
    group.finish();
}

fn bench_roundtrip(c: &mut Criterion) {
    let payload = sparse_payload(PAYLOAD_LEN);
    let mut group = c.benchmark_group("roundtrip");
    group.throughput(Throughput::Bytes(PAYLOAD_LEN as u64));
    group.bench_function("sparse", |b| {
        let mut frame = Vec::new();
        let mut restored = Vec::new();
        b.iter(|| {
            compress(black_box(&payload), &mut frame);
            decompress(&frame, &mut restored).unwrap();
            black_box(restored.len())
        })
    });
    group.finish();
}

criterion_group!(benches, bench_compress, bench_decompress, bench_roundtrip);
criterion_main!(benches);
