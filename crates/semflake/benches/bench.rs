use core::hint::black_box;
use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use semflake::{IdGenStatus, SemanticSnowflake, SnowflakeGenerator, SnowflakeId, TimeSource};
use std::{thread::scope, time::Instant};

struct FixedMockTime {
    millis: u64,
}

impl TimeSource<u64> for FixedMockTime {
    fn current_millis(&self) -> u64 {
        self.millis
    }
}

// Number of IDs generated per benchmark iteration (per-thread for
// multi-threaded).
const TOTAL_IDS: usize = 4096;

/// Benchmarks the hot path where every poll is `Ready` (one full millisecond
/// of sequence on a frozen clock).
fn bench_poll_hot_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("generator/poll/fixed");
    group.throughput(Throughput::Elements(TOTAL_IDS as u64));

    group.bench_function(format!("elems/{TOTAL_IDS}"), |b| {
        b.iter_custom(|iters| {
            let start = Instant::now();

            for _ in 0..iters {
                // Start one tick behind so the first poll rolls over.
                let generator = SnowflakeGenerator::with_time(0, FixedMockTime { millis: 1 });
                for _ in 0..TOTAL_IDS {
                    match generator.poll_id() {
                        IdGenStatus::Ready { id } => {
                            black_box(id);
                        }
                        IdGenStatus::Pending { .. } => unreachable!(),
                    }
                }
            }

            start.elapsed()
        });
    });

    group.finish();
}

/// Benchmarks the blocking path against the real clock, including spins on
/// sequence exhaustion.
fn bench_next_wallclock(c: &mut Criterion) {
    let mut group = c.benchmark_group("generator/next/monotonic");
    group.throughput(Throughput::Elements(TOTAL_IDS as u64));

    let generator = SnowflakeGenerator::new(1);
    group.bench_function(format!("elems/{TOTAL_IDS}"), |b| {
        b.iter(|| {
            for _ in 0..TOTAL_IDS {
                black_box(generator.next_id());
            }
        });
    });

    group.finish();
}

/// Benchmarks contention on one generator shared by several threads.
fn bench_next_threaded(c: &mut Criterion) {
    const THREADS: usize = 4;

    let mut group = c.benchmark_group("generator/next/threaded");
    group.throughput(Throughput::Elements((TOTAL_IDS * THREADS) as u64));

    group.bench_function(format!("threads/{THREADS}/elems/{TOTAL_IDS}"), |b| {
        b.iter_custom(|iters| {
            let generator = SnowflakeGenerator::new(1);
            let start = Instant::now();

            for _ in 0..iters {
                scope(|s| {
                    for _ in 0..THREADS {
                        let generator = generator.clone();
                        s.spawn(move || {
                            for _ in 0..TOTAL_IDS {
                                black_box(generator.next_id());
                            }
                        });
                    }
                });
            }

            start.elapsed()
        });
    });

    group.finish();
}

fn bench_semantic_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("semantic");
    group.throughput(Throughput::Elements(1));

    let triple = SemanticSnowflake::new(340_524_230_265, 50, 100);
    group.bench_function("encode", |b| b.iter(|| black_box(black_box(triple).encode())));

    let id = SnowflakeId::from_raw(2_856_524_282_194_824_821);
    group.bench_function("decode", |b| {
        b.iter(|| black_box(SemanticSnowflake::decode(black_box(id))))
    });

    group.finish();
}

fn bench_wire_form(c: &mut Criterion) {
    let mut group = c.benchmark_group("wire");
    group.throughput(Throughput::Elements(1));

    let id = SnowflakeId::from_raw(2_856_524_282_194_824_821);
    group.bench_function("to_wire_form", |b| {
        b.iter(|| black_box(black_box(id).to_wire_form()))
    });

    let wire = id.to_wire_form();
    group.bench_function("from_wire_form", |b| {
        b.iter(|| black_box(SnowflakeId::from_wire_form(black_box(wire.as_str()))))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_poll_hot_path,
    bench_next_wallclock,
    bench_next_threaded,
    bench_semantic_codec,
    bench_wire_form,
);
criterion_main!(benches);
