use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use pprof::criterion::{Output, PProfProfiler};
use remotedata::RemoteData;
use remotedata_tests::laws::{classify, halve_if_even};

fn bench_combinators(criterion: &mut Criterion) {
    let mut test_cases = Vec::new();

    for size in [1_000, 100_000] {
        let values: Vec<RemoteData<String, i32>> = (0..size).map(classify).collect();
        test_cases.push((size, values));
    }

    let mut group = criterion.benchmark_group("transform a batch of remote values");

    for (size, values) in test_cases.iter() {
        group.bench_with_input(
            BenchmarkId::new("match by hand", size),
            values,
            |b, values| {
                b.iter(|| {
                    values
                        .iter()
                        .map(|r| match r {
                            RemoteData::Success(x) if x % 2 == 0 => Some(x / 2),
                            _ => None,
                        })
                        .filter(Option::is_some)
                        .count()
                })
            },
        );

        group.bench_with_input(
            BenchmarkId::new("flat_map chain", size),
            values,
            |b, values| {
                b.iter(|| {
                    values
                        .iter()
                        .map(|r| r.clone().flat_map(halve_if_even).get_or_none())
                        .filter(Option::is_some)
                        .count()
                })
            },
        );

        group.bench_with_input(
            BenchmarkId::new("map2 over adjacent pairs", size),
            values,
            |b, values| {
                b.iter(|| {
                    values
                        .windows(2)
                        .map(|w| RemoteData::map2(w[0].clone(), w[1].clone(), |a, b| a ^ b))
                        .filter(RemoteData::is_success)
                        .count()
                })
            },
        );
    }
    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .with_profiler(
            PProfProfiler::new(100, Output::Flamegraph(None))
        );
    targets = bench_combinators
}
criterion_main!(benches);
