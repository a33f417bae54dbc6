//! Stepping throughput, serial vs parallel.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use life_engine::{Automaton, Rule, StepStrategy};

fn bench_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("step");

    for size in [64, 256, 1024] {
        for strategy in StepStrategy::all() {
            let mut automaton = Automaton::with_rule(size, size, Rule::conway())
                .unwrap()
                .with_strategy(strategy);
            automaton.randomize(0.3, 0xC0FFEE).unwrap();

            group.bench_with_input(
                BenchmarkId::new(strategy.name(), format!("{}x{}", size, size)),
                &size,
                |b, _| {
                    b.iter(|| {
                        black_box(&mut automaton).step();
                    });
                },
            );
        }
    }

    group.finish();
}

fn bench_glider_demo(c: &mut Criterion) {
    // The classic 40x20 glider run, ten thousand generations.
    c.bench_function("glider_40x20_10k", |b| {
        b.iter(|| {
            let mut automaton = Automaton::with_rule(40, 20, Rule::conway()).unwrap();
            automaton.seed_pattern("glider", (0, 18)).unwrap();
            automaton.step_n(black_box(10_000));
            automaton.live_cell_count()
        });
    });
}

criterion_group!(benches, bench_step, bench_glider_demo);
criterion_main!(benches);
