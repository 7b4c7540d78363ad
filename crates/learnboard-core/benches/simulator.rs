//! Benchmarks for the metrics simulator and notification queue.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use learnboard_core::{
    Category, NotificationCenter, NotificationSpec, SeededRng, Snapshot,
};

fn bench_snapshot_step(c: &mut Criterion) {
    c.bench_function("snapshot_step", |b| {
        let mut rng = SeededRng::new(42);
        let mut snapshot = Snapshot::initial();
        b.iter(|| {
            snapshot = black_box(&snapshot).step(&mut rng);
        });
    });
}

fn bench_notification_churn(c: &mut Criterion) {
    c.bench_function("notification_churn_100", |b| {
        b.iter(|| {
            let mut center = NotificationCenter::new();
            for i in 0..100u32 {
                let id = center.notify(
                    NotificationSpec::new(Category::Info, "title", "body").duration_ms(1000 + i),
                );
                if i % 2 == 0 {
                    center.dismiss(id);
                }
            }
            center.advance(2000);
            black_box(center.len())
        });
    });
}

criterion_group!(benches, bench_snapshot_step, bench_notification_churn);
criterion_main!(benches);
