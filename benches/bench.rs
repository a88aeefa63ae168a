use criterion::async_executor::FuturesExecutor;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use futures_lite::future::yield_now;
use keyed_futures::prelude::*;

use std::collections::HashMap;

/// Resolve to `n` after yielding `n % 8` times, so completions interleave.
async fn countdown(n: usize) -> Result<usize, ()> {
    for _ in 0..n % 8 {
        yield_now().await;
    }
    Ok(n)
}

fn keys(len: usize) -> Vec<String> {
    (0..len).map(|n| format!("key-{n}")).collect()
}

fn vec_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("compare keyed all");
    for i in [10, 100, 1000].iter() {
        group.bench_with_input(BenchmarkId::new("keyed-futures", i), i, |b, i| {
            b.to_async(FuturesExecutor).iter(|| async {
                let ops: HashMap<_, _> = keys(*i)
                    .into_iter()
                    .enumerate()
                    .map(|(n, key)| (key, move || countdown(n)))
                    .collect();
                let output = ops.all().await.unwrap();
                assert_eq!(output.len(), *i);
            })
        });
        group.bench_with_input(BenchmarkId::new("futures-rs", i), i, |b, i| {
            b.to_async(FuturesExecutor).iter(|| async {
                let keys = keys(*i);
                let futs = (0..*i).map(countdown);
                let values = futures::future::try_join_all(futs).await.unwrap();
                let output: HashMap<_, _> = keys.into_iter().zip(values).collect();
                assert_eq!(output.len(), *i);
            })
        });
    }
    group.finish();
}

fn vec_all_settled(c: &mut Criterion) {
    let mut group = c.benchmark_group("compare keyed all_settled");
    for i in [10, 100, 1000].iter() {
        group.bench_with_input(BenchmarkId::new("keyed-futures", i), i, |b, i| {
            b.to_async(FuturesExecutor).iter(|| async {
                let ops: Vec<_> = keys(*i)
                    .into_iter()
                    .enumerate()
                    .map(|(n, key)| (key, move || countdown(n)))
                    .collect();
                let output = ops.all_settled().await;
                assert_eq!(output.len(), *i);
            })
        });
        group.bench_with_input(BenchmarkId::new("futures-rs", i), i, |b, i| {
            b.to_async(FuturesExecutor).iter(|| async {
                let keys = keys(*i);
                let futs = (0..*i).map(countdown);
                let values = futures::future::join_all(futs).await;
                let output: Vec<_> = keys.into_iter().zip(values).collect();
                assert_eq!(output.len(), *i);
            })
        });
    }
    group.finish();
}

criterion_group!(benches, vec_all, vec_all_settled);
criterion_main!(benches);
