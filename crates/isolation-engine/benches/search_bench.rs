use criterion::{black_box, criterion_group, criterion_main, Criterion};
use isolation_core::{GameState, Isolation, Player};
use isolation_engine::{search, Heuristic, SearchContext, TieBreak};

fn opened() -> Isolation {
    let start = Isolation::default();
    let first = start.legal_actions()[40];
    let after_first = start.apply(&first);
    let second = after_first.legal_actions()[60];
    after_first.apply(&second)
}

fn search_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("alphabeta");
    group.sample_size(10);

    let position = opened();
    let board = *position.dims();

    for heuristic in [Heuristic::BaseScore, Heuristic::CombinedScore] {
        for depth in [3u32, 5] {
            group.bench_function(format!("{heuristic}_depth_{depth}"), |b| {
                b.iter(|| {
                    let mut ctx = SearchContext::new(&heuristic, &board, Player::One);
                    search(&mut ctx, black_box(&position), depth, TieBreak::NonStrict)
                })
            });
        }
    }

    group.bench_function("evaluate_combined", |b| {
        b.iter(|| {
            isolation_engine::combined_score(black_box(&position), Player::One, &board)
        })
    });

    group.finish();
}

criterion_group!(benches, search_benchmarks);
criterion_main!(benches);
