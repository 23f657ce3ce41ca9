use core::hint::black_box;
use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use flake::{
    BASE64_SIZE, BasicFlakeGenerator, Flake, FlakeGenerator, NanoClock, SmallRandom,
    ThreadFlakeGenerator, ThreadRandom, TimeSource, flake, flake_string,
};
use std::{
    sync::{Arc, Barrier},
    thread::scope,
    time::Instant,
};

struct FixedMockTime {
    nanos: u64,
}

impl TimeSource for FixedMockTime {
    fn current_nanos(&self) -> u64 {
        self.nanos
    }
}

// Number of IDs generated per benchmark iteration (per-thread for
// multi-threaded).
const TOTAL_IDS: usize = 4096;

/// Benchmarks a single generator on one thread.
fn bench_generator<G>(c: &mut Criterion, group_name: &str, generator_factory: impl Fn() -> G)
where
    G: FlakeGenerator,
{
    let mut group = c.benchmark_group(group_name);
    group.throughput(Throughput::Elements(TOTAL_IDS as u64));

    group.bench_function(format!("elems/{}", TOTAL_IDS), |b| {
        b.iter_custom(|iters| {
            let start = Instant::now();

            for _ in 0..iters {
                let generator = generator_factory();
                for _ in 0..TOTAL_IDS {
                    black_box(generator.next_flake());
                }
            }

            start.elapsed()
        });
    });

    group.finish();
}

/// Benchmarks the thread-local generator with every thread generating at once.
fn bench_thread_local_threaded(c: &mut Criterion, group_name: &str) {
    let mut group = c.benchmark_group(group_name);

    for thread_count in [1, 2, 4, 8, 16] {
        group.throughput(Throughput::Elements((TOTAL_IDS * thread_count) as u64));
        group.bench_function(
            format!("elems/{}/threads/{}", TOTAL_IDS, thread_count),
            |b| {
                b.iter_custom(|iters| {
                    let start = Instant::now();

                    for _ in 0..iters {
                        let barrier = Arc::new(Barrier::new(thread_count + 1));
                        scope(|s| {
                            for _ in 0..thread_count {
                                let barrier = Arc::clone(&barrier);
                                s.spawn(move || {
                                    barrier.wait();
                                    for _ in 0..TOTAL_IDS {
                                        black_box(flake());
                                    }
                                });
                            }
                            barrier.wait();
                        });
                    }

                    start.elapsed()
                });
            },
        );
    }

    group.finish();
}

fn benchmark_mock_sequential_thread_random(c: &mut Criterion) {
    bench_generator(c, "mock/sequential/thread_random", || {
        BasicFlakeGenerator::new(FixedMockTime { nanos: 1 }, ThreadRandom)
    });
}

fn benchmark_mock_sequential_small_random(c: &mut Criterion) {
    bench_generator(c, "mock/sequential/small_random", || {
        BasicFlakeGenerator::new(FixedMockTime { nanos: 1 }, SmallRandom::seed_from_u64(1))
    });
}

fn benchmark_nano_sequential_thread_random(c: &mut Criterion) {
    bench_generator(c, "nano/sequential/thread_random", || {
        BasicFlakeGenerator::new(NanoClock::global(), ThreadRandom)
    });
}

fn benchmark_nano_sequential_small_random(c: &mut Criterion) {
    bench_generator(c, "nano/sequential/small_random", ThreadFlakeGenerator::default);
}

fn benchmark_nano_threaded_thread_local(c: &mut Criterion) {
    bench_thread_local_threaded(c, "nano/threaded/thread_local");
}

/// Benchmarks generating and base64-encoding each Flake, the path behind string
/// IDs.
fn benchmark_generate_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_encode");
    group.throughput(Throughput::Elements(TOTAL_IDS as u64));

    group.bench_function(format!("next_base64/elems/{}", TOTAL_IDS), |b| {
        b.iter_custom(|iters| {
            let start = Instant::now();

            for _ in 0..iters {
                let generator = ThreadFlakeGenerator::default();
                for _ in 0..TOTAL_IDS {
                    black_box(generator.next_base64());
                }
            }

            start.elapsed()
        });
    });

    group.bench_function(format!("flake_string/elems/{}", TOTAL_IDS), |b| {
        b.iter_custom(|iters| {
            let start = Instant::now();

            for _ in 0..iters {
                for _ in 0..TOTAL_IDS {
                    black_box(flake_string());
                }
            }

            start.elapsed()
        });
    });

    group.finish();
}

fn benchmark_clock_read(c: &mut Criterion) {
    let clock = NanoClock::global();
    c.bench_function("clock/now_nanos", |b| b.iter(|| black_box(clock.now_nanos())));
}

fn benchmark_encode(c: &mut Criterion) {
    let id = flake();
    let mut group = c.benchmark_group("encode");
    group.bench_function("base64", |b| b.iter(|| black_box(black_box(id).encode())));
    group.bench_function("base64/buf", |b| {
        let mut buf = [0_u8; BASE64_SIZE];
        b.iter(|| {
            black_box(black_box(id).encode_to_buf(&mut buf));
        });
    });
    group.bench_function("hex", |b| b.iter(|| black_box(black_box(id).to_hex())));
    group.finish();
}

fn benchmark_decode(c: &mut Criterion) {
    let encoded = flake().encode();
    let s = encoded.as_str();
    let mut group = c.benchmark_group("decode");
    group.bench_function("base64", |b| b.iter(|| black_box(Flake::decode(black_box(s)))));
    group.bench_function("base64/invalid", |b| {
        b.iter(|| black_box(Flake::parse(black_box("not-a-flake"))))
    });
    group.finish();
}

criterion_group!(
    benches,
    // Mock clock
    benchmark_mock_sequential_thread_random,
    benchmark_mock_sequential_small_random,
    // Nano clock
    benchmark_nano_sequential_thread_random,
    benchmark_nano_sequential_small_random,
    benchmark_nano_threaded_thread_local,
    benchmark_clock_read,
    // Generate + encode
    benchmark_generate_encode,
    // Encodings
    benchmark_encode,
    benchmark_decode,
);
criterion_main!(benches);
