use std::collections::HashSet;

use tui_snake::core::{GameConfig, GameState, SimpleRng};
use tui_snake::types::{Collision, Direction, GameAction, GameEvent, Phase};

/// Scripted driver: pseudo-random turns, restart whenever a game ends.
fn drive(gs: &mut GameState, script_seed: u32, steps: usize, mut check: impl FnMut(&GameState)) {
    let mut script = SimpleRng::new(script_seed);
    gs.start();
    for _ in 0..steps {
        if script.next_range(3) == 0 {
            let d = Direction::ALL[script.next_range(4) as usize];
            gs.apply_action(GameAction::Turn(d));
        }
        gs.tick();
        check(gs);
        if gs.phase() == Phase::Over {
            gs.start();
        }
    }
}

fn assert_invariants(gs: &GameState) {
    let config = gs.config();
    let cells: Vec<_> = gs.snake().cells().collect();

    // Length tracks food eaten.
    assert_eq!(
        cells.len() as u32,
        1 + gs.score() / config.food_points,
        "length/score mismatch"
    );

    // Every live cell is on the board and on the grid, and no two overlap.
    // A wall hit leaves the body where it was.
    let mut seen = HashSet::new();
    for &c in &cells {
        assert!(config.contains(c), "{c:?} off board");
        assert!(config.is_aligned(c), "{c:?} off grid");
        assert!(seen.insert(c), "{c:?} duplicated");
    }

    // Consecutive cells are one grid step apart.
    for pair in cells.windows(2) {
        let dx = (pair[0].x - pair[1].x).abs();
        let dy = (pair[0].y - pair[1].y).abs();
        assert_eq!(dx + dy, config.cell_size);
    }

    if let Some(food) = gs.food() {
        assert!(config.contains(food) && config.is_aligned(food));
        assert!(!gs.snake().contains(food), "food under the snake");
    }
}

#[test]
fn invariants_hold_under_random_play() {
    for seed in 1..=8 {
        let mut gs = GameState::with_config(GameConfig::small(), seed);
        drive(&mut gs, seed * 31, 2_000, assert_invariants);
    }
}

#[test]
fn invariants_hold_on_default_board() {
    let mut gs = GameState::new(2024);
    drive(&mut gs, 99, 3_000, assert_invariants);
}

#[test]
fn same_seed_and_inputs_replay_identically() {
    let mut a = GameState::new(777);
    let mut b = GameState::new(777);
    let mut frames_a = Vec::new();
    let mut frames_b = Vec::new();

    drive(&mut a, 5, 1_500, |gs| frames_a.push(gs.snapshot()));
    drive(&mut b, 5, 1_500, |gs| frames_b.push(gs.snapshot()));

    assert_eq!(frames_a, frames_b);
}

#[test]
fn different_seeds_place_food_differently() {
    let foods: HashSet<_> = (1..=16).map(|s| GameState::new(s).food()).collect();
    assert!(foods.len() > 1);
}

#[test]
fn every_game_ends_with_exactly_one_game_over() {
    let mut gs = GameState::with_config(GameConfig::small(), 3);
    let mut script = SimpleRng::new(11);
    gs.start();
    let _ = gs.take_events();

    let mut games_over = 0;
    let mut ticks = 0;
    while games_over < 5 && ticks < 10_000 {
        if script.next_range(2) == 0 {
            gs.apply_action(GameAction::Turn(Direction::ALL[script.next_range(4) as usize]));
        }
        gs.tick();
        ticks += 1;

        let events = gs.take_events();
        let overs = events
            .iter()
            .filter(|e| matches!(e, GameEvent::GameOver { .. }))
            .count();
        assert!(overs <= 1);

        if let Some(GameEvent::GameOver { final_score, cause }) = events
            .iter()
            .find(|e| matches!(e, GameEvent::GameOver { .. }))
            .copied()
        {
            assert_eq!(gs.phase(), Phase::Over);
            assert_eq!(final_score, gs.score());
            assert_ne!(cause, Collision::BoardFull);
            // Nothing moves after the end.
            let before = gs.snapshot();
            assert!(!gs.tick());
            assert_eq!(gs.snapshot(), before);

            games_over += 1;
            gs.start();
            let _ = gs.take_events();
        }
    }
    assert_eq!(games_over, 5);
}

#[test]
fn game_ids_increase_across_restarts() {
    let mut gs = GameState::new(1);
    let mut ids = Vec::new();
    for _ in 0..3 {
        gs.start();
        ids.push(gs.game_id());
        while gs.phase() != Phase::Over {
            gs.tick();
        }
    }
    assert_eq!(ids, vec![1, 2, 3]);
}
