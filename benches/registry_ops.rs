//! Registry operation benchmarks
//!
//! Run with: cargo bench --bench registry_ops

use codex::{Codex, Thing, ThingId};
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use std::sync::Arc;

struct Item {
    id: ThingId,
}

impl Thing for Item {
    fn id(&self) -> ThingId {
        self.id
    }
}

fn populated(n: usize) -> (Codex, Vec<ThingId>) {
    let codex = Codex::builder().notify_on_drop(false).build();
    let ids = (0..n).map(|_| codex.spawn(|id| Item { id }).id).collect();
    (codex, ids)
}

fn bench_spawn(c: &mut Criterion) {
    let codex = Codex::builder().notify_on_drop(false).build();
    c.bench_function("codex/spawn", |b| {
        b.iter(|| black_box(codex.spawn(|id| Item { id })))
    });
}

fn bench_get(c: &mut Criterion) {
    let (codex, ids) = populated(10_000);
    let mut i = 0;
    c.bench_function("codex/get_hit", |b| {
        b.iter(|| {
            i = (i + 1) % ids.len();
            black_box(codex.get(ids[i]))
        })
    });
    c.bench_function("codex/get_miss", |b| {
        let missing = ThingId::new();
        b.iter(|| black_box(codex.get(missing)))
    });
}

fn bench_remove(c: &mut Criterion) {
    c.bench_function("codex/remove_1000", |b| {
        b.iter_batched(
            || populated(1_000),
            |(codex, ids)| {
                for id in ids {
                    codex.remove(id);
                }
                codex
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_typed_get(c: &mut Criterion) {
    let (codex, ids) = populated(1_000);
    c.bench_function("codex/get_as", |b| {
        b.iter(|| black_box(codex.get_as::<Item>(ids[0]).map(|item| Arc::strong_count(&item))))
    });
}

criterion_group!(benches, bench_spawn, bench_get, bench_remove, bench_typed_get);
criterion_main!(benches);
