//! Criterion micro-benchmarks for allocator operations.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput};
use regolith::alloc::RegionMut;
use regolith_bench::{formatted_region, fragmented_region};

fn bench_reserve_free_churn(c: &mut Criterion) {
    let mut group = c.benchmark_group("reserve_free_churn");
    for payload in [16u32, 256, 4096] {
        group.throughput(Throughput::Bytes(u64::from(payload)));
        group.bench_with_input(
            BenchmarkId::from_parameter(payload),
            &payload,
            |b, &payload| {
                let mut region = formatted_region(64 * 1024);
                let mut heap = RegionMut::bind(region.bytes_mut()).unwrap();
                b.iter(|| {
                    let atom = heap.reserve(payload).unwrap();
                    heap.free(atom).unwrap();
                });
            },
        );
    }
    group.finish();
}

fn bench_first_fit_under_fragmentation(c: &mut Criterion) {
    c.bench_function("first_fit_fragmented_64k", |b| {
        b.iter_batched(
            || fragmented_region(64 * 1024, 48),
            |mut region| {
                let mut heap = RegionMut::bind(region.bytes_mut()).unwrap();
                // Larger than every hole: scans the full chain, then fails
                // or lands in the tail span.
                let _ = heap.reserve(8 * 1024);
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_resize_relocation(c: &mut Criterion) {
    c.bench_function("resize_relocate_4k", |b| {
        b.iter_batched(
            || {
                let mut region = formatted_region(64 * 1024);
                let mut heap = RegionMut::bind(region.bytes_mut()).unwrap();
                let atom = heap.reserve(4 * 1024).unwrap();
                heap.reserve(16).unwrap(); // fence
                drop(heap);
                (region, atom)
            },
            |(mut region, atom)| {
                let mut heap = RegionMut::bind(region.bytes_mut()).unwrap();
                heap.resize(atom, 8 * 1024).unwrap();
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(
    benches,
    bench_reserve_free_churn,
    bench_first_fit_under_fragmentation,
    bench_resize_relocation
);
criterion_main!(benches);
