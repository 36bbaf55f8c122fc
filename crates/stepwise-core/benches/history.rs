use criterion::{black_box, criterion_group, criterion_main, Criterion};
use stepwise_core::{Reward, Step, StepHistory};

fn bench_push_with_eviction(c: &mut Criterion) {
    c.bench_function("history_push_evicting", |b| {
        let mut history = StepHistory::new(128).unwrap();
        let mut i = 0u64;
        b.iter(|| {
            let mut step = Step::new(i, i + 1);
            step.add_reward(Reward(1.0));
            black_box(history.push(step));
            i += 1;
        });
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let mut history = StepHistory::new(128).unwrap();
    for i in 0..128u64 {
        history.push(Step::new(i, i));
    }
    c.bench_function("history_snapshot_128", |b| {
        b.iter(|| black_box(history.snapshot_excluding_last()));
    });
}

criterion_group!(benches, bench_push_with_eviction, bench_snapshot);
criterion_main!(benches);
