use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use lifelike::{Rule, Simulation, initialize};

fn bench_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("step");
    for size in [64, 256, 1024] {
        let board = initialize(size, size, 0.3, 1).expect("board");

        group.bench_with_input(BenchmarkId::new("serial", size), &board, |b, board| {
            b.iter_batched(
                || Simulation::from_board(board.clone(), Rule::CONWAY),
                |mut sim| {
                    sim.step();
                    sim.take()
                },
                BatchSize::LargeInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("parallel", size), &board, |b, board| {
            b.iter_batched(
                || Simulation::from_board(board.clone(), Rule::CONWAY),
                |mut sim| {
                    sim.step_parallel();
                    sim.take()
                },
                BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_step);
criterion_main!(benches);
