use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use tictactoe_engine::SessionRng;
use tictactoe_engine::tictactoe::{best_move, Board, Difficulty, GameStatus, Mark};

fn bench_hard_full_game() {
    let mut board = Board::new();
    let mut session_rng = SessionRng::new(0);

    while board.evaluate() == GameStatus::InProgress {
        let mark = board.next_mark();
        match best_move(&board, mark, Difficulty::Hard, &mut session_rng) {
            Ok(chosen) => {
                if board.place(chosen.position, mark).is_err() {
                    break;
                }
            }
            Err(_) => break,
        }
    }
}

fn bench_single_move_empty(difficulty: Difficulty) {
    let board = Board::new();
    let mut session_rng = SessionRng::new(0);
    let _ = best_move(black_box(&board), Mark::X, difficulty, &mut session_rng);
}

fn bench_single_move_mid_game() {
    let mut board = Board::new();
    for (index, mark) in [(4, Mark::X), (0, Mark::O), (8, Mark::X)] {
        let _ = board.apply_move(index, mark);
    }
    let mut session_rng = SessionRng::new(0);
    let _ = best_move(black_box(&board), Mark::O, Difficulty::Hard, &mut session_rng);
}

fn minimax_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimax");

    group.bench_function("hard_full_game", |b| b.iter(bench_hard_full_game));

    for difficulty in Difficulty::ALL {
        group.bench_function(format!("single_move_empty_{}", difficulty), |b| {
            b.iter(|| bench_single_move_empty(difficulty))
        });
    }

    group.bench_function("single_move_mid_game", |b| {
        b.iter(bench_single_move_mid_game)
    });

    group.finish();
}

criterion_group!(benches, minimax_bench);
criterion_main!(benches);
