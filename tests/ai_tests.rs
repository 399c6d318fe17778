//! Opponent behavior tests: tier guarantees through the game API.

use connect_cube::ai::heuristic::best_scored;
use connect_cube::ai::minimax::best_move;
use connect_cube::board::Board;
use connect_cube::core::{Difficulty, Side};
use connect_cube::{CellRef, GameConfig, GameState, MoveOutcome, Reason, SearchConfig};

fn game(difficulty: Difficulty, size: usize, seed: u64) -> GameState {
    GameState::new(GameConfig::flat(size).with_difficulty(difficulty).with_seed(seed)).unwrap()
}

/// Play the given player cells, letting the opponent answer each one.
fn replay(difficulty: Difficulty, player: &[usize]) -> GameState {
    let mut state = game(difficulty, 3, 11);
    for &cell in player {
        assert!(state.apply_player_move(CellRef::Flat(cell)).is_applied());
        state.play_opponent_turn().unwrap();
    }
    state
}

// =============================================================================
// Hard
// =============================================================================

/// Try every player move from `state`; fail if any line of play ends in a
/// player win.
fn explore(state: &GameState, games: &mut usize) {
    let board = state.board().unwrap();
    for cell in board.empty_cells() {
        let mut next = state.clone();
        match next.apply_player_move(CellRef::Flat(cell)) {
            MoveOutcome::AppliedWithResult(result) => {
                assert_ne!(result.winner(), Some(Side::Player), "player won after {:?}", next.history());
                *games += 1;
            }
            MoveOutcome::Applied => match next.play_opponent_turn().unwrap() {
                MoveOutcome::AppliedWithResult(_) => *games += 1,
                MoveOutcome::Applied => explore(&next, games),
                MoveOutcome::Rejected(reason) => panic!("opponent move rejected: {}", reason),
            },
            MoveOutcome::Rejected(reason) => panic!("player move rejected: {}", reason),
        }
    }
}

#[test]
fn test_hard_never_loses_on_3x3() {
    let mut games = 0;
    explore(&game(Difficulty::Hard, 3, 5), &mut games);
    assert!(games > 0);
}

#[test]
fn test_hard_blocks_then_wins() {
    let mut state = game(Difficulty::Hard, 3, 2);
    state.apply_player_move(CellRef::Flat(0));
    state.apply_opponent_move(CellRef::Flat(3));
    state.apply_player_move(CellRef::Flat(1));

    // X X . / O . . / . . .  -> the block at 2 is forced
    let decision = state.decide_opponent_move().unwrap();
    assert_eq!(decision.cell, CellRef::Flat(2));
    assert!(decision.reason.is_search());

    state.apply_opponent_move(CellRef::Flat(2));
    state.apply_player_move(CellRef::Flat(6));
    state.apply_opponent_move(CellRef::Flat(4));
    state.apply_player_move(CellRef::Flat(8));

    // X X O / O O . / X . X  -> winning at 5 beats blocking at 7
    assert_eq!(state.compute_opponent_move().unwrap(), CellRef::Flat(5));
}

#[test]
fn test_hard_is_deterministic() {
    let mut state = replay(Difficulty::Hard, &[0]);
    state.apply_player_move(CellRef::Flat(8));
    let copy = state.clone();
    assert_eq!(state.compute_opponent_move().unwrap(), copy.compute_opponent_move().unwrap());
    assert_eq!(state.compute_opponent_move().unwrap(), state.compute_opponent_move().unwrap());
}

#[test]
fn test_best_move_prefers_faster_win() {
    // Opponent can win now at 2, or later elsewhere
    let board = Board::parse("OO. XX. X..").unwrap();
    let result = best_move(&board, Side::Opponent, 3, &SearchConfig::default());
    assert_eq!(result.cell, Some(2));
    assert!(result.score > 0);
    assert!(result.stats.nodes > 0);
}

// =============================================================================
// Medium
// =============================================================================

#[test]
fn test_medium_opens_in_center() {
    for seed in 0..10 {
        let mut state = game(Difficulty::Medium, 3, seed);
        state.apply_player_move(CellRef::Flat(0));
        let decision = state.decide_opponent_move().unwrap();
        assert_eq!(decision.cell, CellRef::Flat(4));
        assert!(decision.reason.is_center());
    }
}

#[test]
fn test_medium_blocks_on_larger_board() {
    let config = GameConfig::flat(5)
        .with_win_length(4)
        .with_difficulty(Difficulty::Medium)
        .with_seed(9);
    let mut state = GameState::new(config).unwrap();
    for (player, opponent) in [(0, 20), (1, 24)] {
        state.apply_player_move(CellRef::Flat(player));
        state.apply_opponent_move(CellRef::Flat(opponent));
    }
    state.apply_player_move(CellRef::Flat(2));

    let decision = state.decide_opponent_move().unwrap();
    assert_eq!(decision.cell, CellRef::Flat(3));
    assert!(decision.reason.is_block());
}

#[test]
fn test_medium_without_threats_scores_cells() {
    let mut state = game(Difficulty::Medium, 5, 9);
    state.apply_player_move(CellRef::Flat(12));
    let decision = state.decide_opponent_move().unwrap();
    assert!(decision.reason.is_heuristic());
}

#[test]
fn test_medium_heuristic_picks_from_best_set() {
    for seed in 0..10 {
        let mut state = game(Difficulty::Medium, 4, seed);
        state.apply_player_move(CellRef::Flat(5));
        let decision = state.decide_opponent_move().unwrap();
        assert!(decision.reason.is_heuristic());

        let board = state.board().unwrap();
        let (_, best) = best_scored(board, Side::Opponent, 4).unwrap();
        assert!(best.contains(&decision.cell.as_flat().unwrap()));
    }
}

#[test]
fn test_hard_on_4x4_uses_tactics() {
    let mut state = game(Difficulty::Hard, 4, 1);
    state.apply_player_move(CellRef::Flat(0));
    let decision = state.decide_opponent_move().unwrap();
    assert!(!decision.reason.is_search());
}

// =============================================================================
// Easy
// =============================================================================

#[test]
fn test_easy_varies_with_seed() {
    let picks: std::collections::HashSet<CellRef> = (0..30)
        .map(|seed| {
            let mut state = game(Difficulty::Easy, 5, seed);
            state.apply_player_move(CellRef::Flat(12));
            let decision = state.decide_opponent_move().unwrap();
            assert_eq!(decision.reason, Reason::Random);
            decision.cell
        })
        .collect();
    assert!(picks.len() > 1);
    assert!(!picks.contains(&CellRef::Flat(12)));
}

// =============================================================================
// Cube
// =============================================================================

#[test]
fn test_cube_opponent_never_searches() {
    let config = GameConfig::cube(3).with_difficulty(Difficulty::Hard).with_seed(4);
    let mut state = GameState::new(config).unwrap();
    state.apply_player_move("front:4".parse().unwrap());
    let decision = state.decide_opponent_move().unwrap();
    assert!(!decision.reason.is_search());
    assert!(decision.cell.as_cube().is_some());
}

#[test]
fn test_cube_easy_prefers_active_face() {
    use connect_cube::topology::Face;

    for seed in 0..10 {
        let config = GameConfig::cube(3).with_difficulty(Difficulty::Easy).with_seed(seed);
        let mut state = GameState::new(config).unwrap();
        state.apply_player_move("front:4".parse().unwrap());
        assert_eq!(state.active_face(), Face::Front);
        state.set_active_face(Face::Top).unwrap();
        let cell = state.compute_opponent_move().unwrap().as_cube().unwrap();
        assert_eq!(cell.face, Face::Top);
    }
}
