// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for notification store operations.
//!
//! Measures the performance of:
//! - Enqueueing past the visible limit (eviction path)
//! - A full enqueue → dismiss → timer removal cycle
//! - Broadcasting to many observers

use criterion::{criterion_group, criterion_main, Criterion};
use relief_toast::domain::queue::{RemovalDelay, VisibleLimit};
use relief_toast::notifications::{Store, StoreConfig, Toast};
use std::hint::black_box;
use std::time::Duration;
use tokio::time::Instant;

fn store(max_visible: usize) -> Store {
    Store::new(StoreConfig::new(
        VisibleLimit::new(max_visible),
        RemovalDelay::from_millis(1_000),
    ))
}

/// Benchmark enqueueing into a full store, which evicts on every call.
fn bench_enqueue_with_eviction(c: &mut Criterion) {
    let mut group = c.benchmark_group("notification_store");

    let store = store(10);
    for _ in 0..10 {
        store.enqueue(Toast::new().title("warmup"));
    }

    group.bench_function("enqueue_evicting", |b| {
        b.iter(|| {
            black_box(store.enqueue(Toast::new().title("Alert Created")));
        });
    });

    group.finish();
}

/// Benchmark the whole lifecycle of one notification.
fn bench_lifecycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("notification_store");

    let store = store(3);
    group.bench_function("enqueue_dismiss_remove", |b| {
        b.iter(|| {
            let handle = store.enqueue(Toast::new().title("Mood logged"));
            handle.dismiss();
            black_box(store.tick_at(Instant::now() + Duration::from_secs(2)));
        });
    });

    group.finish();
}

/// Benchmark broadcast cost with many subscribed observers.
fn bench_broadcast(c: &mut Criterion) {
    let mut group = c.benchmark_group("notification_store");

    let store = store(3);
    let subscriptions: Vec<_> = (0..64)
        .map(|_| {
            store.subscribe(|toasts| {
                black_box(toasts.len());
            })
        })
        .collect();

    group.bench_function("broadcast_64_observers", |b| {
        b.iter(|| {
            black_box(store.enqueue(Toast::new().title("Subscription Successful")));
        });
    });

    group.finish();
    drop(subscriptions);
}

criterion_group!(
    benches,
    bench_enqueue_with_eviction,
    bench_lifecycle,
    bench_broadcast
);
criterion_main!(benches);
