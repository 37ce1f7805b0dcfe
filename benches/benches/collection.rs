use criterion::{black_box, criterion_group, criterion_main, Criterion};
use flexfail_core::{ErrorCollector, Raised, Strategy};
use std::thread;
use std::time::Duration;

fn reject_odd(n: u64) -> Result<u64, Raised<u64>> {
    if n % 2 == 1 {
        return Err(Raised::flex(n));
    }
    Ok(n / 2)
}

fn benchmark_sequential(c: &mut Criterion) {
    let mut group = c.benchmark_group("sequential");
    group.measurement_time(Duration::from_secs(5));

    for strategy in [Strategy::Skip, Strategy::TryAll] {
        group.bench_function(strategy.as_str(), |b| {
            b.iter(|| {
                let collector = ErrorCollector::with_fn(reject_odd, strategy);
                let outputs = collector.run_all(0..1_000).unwrap_or_default();
                black_box((outputs.len(), collector.len_errors()))
            })
        });
    }

    group.finish();
}

fn benchmark_contended(c: &mut Criterion) {
    let mut group = c.benchmark_group("contended");
    group.measurement_time(Duration::from_secs(5));

    group.bench_function("try_all_8_threads", |b| {
        b.iter(|| {
            let collector = ErrorCollector::with_fn(reject_odd, Strategy::TryAll);
            thread::scope(|s| {
                for worker in 0..8u64 {
                    let collector = &collector;
                    s.spawn(move || {
                        for n in 0..500 {
                            let _ = collector.call(worker * 1_000 + n);
                        }
                    });
                }
            });
            black_box(collector.len_errors())
        })
    });

    group.finish();
}

criterion_group!(benches, benchmark_sequential, benchmark_contended);
criterion_main!(benches);
