//! Flat-board win detection tests.

use connect_cube::board::Board;
use connect_cube::core::{Mark, Side};
use connect_cube::rules::{detect_flat, GameResult};
use connect_cube::topology::{FlatTopology, Heading, Topology};
use connect_cube::{CellRef, GameConfig, GameState, MoveOutcome};
use proptest::prelude::*;

fn board_with(size: usize, cells: &[usize], mark: Mark) -> Board {
    let mut board = Board::new(size);
    for &cell in cells {
        board.set(cell, mark);
    }
    board
}

// =============================================================================
// Exact Lines
// =============================================================================

#[test]
fn test_every_row_offset_is_detected_exactly() {
    for size in 3..=7 {
        for k in 3..=size {
            for row in 0..size {
                for offset in 0..=size - k {
                    let line: Vec<usize> = (offset..offset + k).map(|c| row * size + c).collect();
                    let board = board_with(size, &line, Mark::Opponent);

                    let result = detect_flat(&board, k).expect("row should win");
                    assert!(result.is_winner(Side::Opponent));
                    assert_eq!(result.line(), line.as_slice(), "size {} k {} row {} offset {}", size, k, row, offset);
                }
            }
        }
    }
}

#[test]
fn test_every_column_offset_is_detected_exactly() {
    for size in 3..=7 {
        for k in 3..=size {
            for col in 0..size {
                for offset in 0..=size - k {
                    let line: Vec<usize> = (offset..offset + k).map(|r| r * size + col).collect();
                    let board = board_with(size, &line, Mark::Player);

                    let result = detect_flat(&board, k).expect("column should win");
                    assert_eq!(result.line(), line.as_slice());
                }
            }
        }
    }
}

#[test]
fn test_diagonals_at_boundary() {
    // K = size leaves exactly one start per diagonal
    for size in 3..=7 {
        let main: Vec<usize> = (0..size).map(|i| i * size + i).collect();
        let result = detect_flat(&board_with(size, &main, Mark::Player), size).unwrap();
        assert_eq!(result.line(), main.as_slice());

        let anti: Vec<usize> = (0..size).map(|i| i * size + (size - 1 - i)).collect();
        let result = detect_flat(&board_with(size, &anti, Mark::Player), size).unwrap();
        assert_eq!(result.line(), anti.as_slice());
    }
}

// =============================================================================
// No False Positives
// =============================================================================

#[test]
fn test_short_run_with_blocker_never_wins() {
    for size in 3..=7 {
        for k in 3..=size {
            let run: Vec<usize> = (0..k - 1).collect();
            let mut board = board_with(size, &run, Mark::Player);
            assert_eq!(detect_flat(&board, k), None, "size {} k {}", size, k);

            board.set(k - 1, Mark::Opponent);
            assert_eq!(detect_flat(&board, k), None, "size {} k {} blocked", size, k);
        }
    }
}

#[test]
fn test_mixed_full_row_is_not_a_win() {
    let board = Board::parse("XXOX .... .... ....").unwrap();
    assert_eq!(detect_flat(&board, 4), None);
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn test_player_completes_top_row() {
    // [X, X, _, O, _, _, _, _, _], player to move at 2
    let mut game = GameState::new(GameConfig::flat(3).with_seed(1)).unwrap();
    assert!(game.apply_player_move(CellRef::Flat(0)).is_applied());
    assert!(game.apply_opponent_move(CellRef::Flat(3)).is_applied());
    assert!(game.apply_player_move(CellRef::Flat(1)).is_applied());
    assert!(game.apply_opponent_move(CellRef::Flat(8)).is_applied());

    let outcome = game.apply_player_move(CellRef::Flat(2));
    let MoveOutcome::AppliedWithResult(result) = outcome else {
        panic!("expected a win, got {:?}", outcome);
    };
    assert_eq!(result.winner(), Some(Side::Player));
    assert_eq!(result.line(), &[CellRef::Flat(0), CellRef::Flat(1), CellRef::Flat(2)]);
}

#[test]
fn test_full_board_tie() {
    let board = Board::parse("XOXX OXOO XOXX OXOO").unwrap();
    assert_eq!(detect_flat(&board, 4), Some(GameResult::Tie));
}

// =============================================================================
// Properties
// =============================================================================

fn arb_board() -> impl Strategy<Value = (Board, usize)> {
    (3usize..=7).prop_flat_map(|size| {
        (
            prop::collection::vec(prop_oneof![Just(Mark::Empty), Just(Mark::Player), Just(Mark::Opponent)], size * size),
            3..=size,
        )
            .prop_map(move |(cells, k)| (Board::from_marks(size, cells), k))
    })
}

proptest! {
    #[test]
    fn prop_reported_line_is_a_real_run((board, k) in arb_board()) {
        if let Some(GameResult::Winner { side, line }) = detect_flat(&board, k) {
            let topo = FlatTopology::new(board.size());
            prop_assert_eq!(line.len(), k);
            for &cell in &line {
                prop_assert_eq!(board.get(cell), Some(side.mark()));
            }
            let heading = Heading::LINES
                .into_iter()
                .find(|&h| topo.step(line[0], h).map(|(c, _)| c) == Some(line[1]));
            prop_assert!(heading.is_some());
            let heading = heading.unwrap();
            for pair in line.windows(2) {
                prop_assert_eq!(topo.step(pair[0], heading).map(|(c, _)| c), Some(pair[1]));
            }
        }
    }

    #[test]
    fn prop_tie_only_on_full_board((board, k) in arb_board()) {
        if detect_flat(&board, k) == Some(GameResult::Tie) {
            prop_assert!(board.is_full());
        }
    }
}
