use cube_four::{Coordinate, GameEngine, GameStatus, Player, CELL_COUNT};
use proptest::prelude::*;
use rand::{rngs::SmallRng, seq::IndexedRandom, Rng, SeedableRng};

/// Play up to `max_moves` random legal moves.
fn random_engine(seed: u64, max_moves: usize) -> GameEngine {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut engine = GameEngine::new();
    for _ in 0..max_moves {
        let legal = engine.legal_cells();
        match legal.choose(&mut rng) {
            Some(&cell) => assert!(engine.attempt_placement(cell, None)),
            None => break,
        }
    }
    engine
}

fn assert_invariants(engine: &GameEngine) -> Result<(), TestCaseError> {
    let pieces = engine.pieces();
    prop_assert!(pieces.len() <= CELL_COUNT);
    for (i, piece) in pieces.iter().enumerate() {
        prop_assert_eq!(piece.player, Player::for_ply(i));
        prop_assert!(piece.coord.in_bounds(4));
        if piece.coord.y > 0 {
            let below = piece.coord.below();
            prop_assert!(pieces[..i].iter().any(|p| p.coord == below));
        }
        prop_assert!(pieces[..i].iter().all(|p| p.coord != piece.coord));
        prop_assert_eq!(engine.piece_at(piece.coord), Some(piece.player));
    }
    let total = engine.occupancy(Player::Red).count_ones() + engine.occupancy(Player::Yellow).count_ones();
    prop_assert_eq!(total, pieces.len());
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Random legal play never breaks the match invariants
    #[test]
    fn random_play_keeps_invariants(seed in any::<u64>(), moves in 0..=CELL_COUNT) {
        let engine = random_engine(seed, moves);
        assert_invariants(&engine)?;
        let status = engine.compute_status();
        if status == GameStatus::Playing {
            prop_assert_eq!(engine.current_turn(), Player::for_ply(engine.move_count()));
        } else {
            prop_assert!(engine.legal_cells().is_empty());
        }
        if let Some(winner) = status.winner() {
            let lines = engine.winning_lines_for(status);
            prop_assert!(!lines.is_empty());
            for line in lines {
                prop_assert!(line.cells().iter().all(|&c| engine.piece_at(c) == Some(winner)));
            }
        }
    }

    /// Rejected placements leave the state untouched
    #[test]
    fn rejected_placement_is_noop(
        seed in any::<u64>(),
        moves in 0..40usize,
        x in -1..5i32,
        y in -1..5i32,
        z in -1..5i32,
    ) {
        let mut engine = random_engine(seed, moves);
        let before = engine.snapshot();
        let target = Coordinate::new(x, y, z);
        if !engine.attempt_placement(target, None) {
            prop_assert_eq!(engine.snapshot(), before);
        } else {
            prop_assert_eq!(engine.move_count(), before.pieces.len() + 1);
            prop_assert_eq!(engine.last_piece().map(|p| p.coord), Some(target));
        }
    }

    /// Undo restores exactly the previous snapshot, and status is recomputed
    #[test]
    fn undo_restores_previous_state(seed in any::<u64>(), moves in 1..=CELL_COUNT) {
        let mut rng = SmallRng::seed_from_u64(seed.wrapping_add(1));
        let mut engine = random_engine(seed, moves - 1);
        if engine.compute_status() != GameStatus::Playing {
            return Ok(());
        }
        let before = engine.snapshot();
        let legal = engine.legal_cells();
        let cell = legal[rng.random_range(0..legal.len())];
        prop_assert!(engine.attempt_placement(cell, None));
        engine.undo_last();
        prop_assert_eq!(engine.snapshot(), before);
        prop_assert_eq!(engine.compute_status(), GameStatus::Playing);
    }

    /// Replaying the recorded history rebuilds the same match
    #[test]
    fn history_replay_roundtrip(seed in any::<u64>(), moves in 0..=CELL_COUNT) {
        let engine = random_engine(seed, moves);
        let history: Vec<Coordinate> = engine.pieces().iter().map(|p| p.coord).collect();
        let rebuilt = GameEngine::from_history(&history).unwrap();
        prop_assert_eq!(rebuilt.snapshot(), engine.snapshot());
    }
}
