//! Turn state machine for a single game.
//!
//! ## Phases
//!
//! ```text
//! AwaitingPlayerMove -> AwaitingOpponentMove -> AwaitingPlayerMove ...
//!          \                     \
//!           +-> GameOver          +-> GameOver
//! ```
//!
//! The opponent's move is computed (`compute_opponent_move`, pure) and
//! applied (`apply_opponent_move`) separately so a presentation delay can
//! sit between the two.
//!
//! ## Rejections
//!
//! Moves in the wrong phase, on occupied or nonexistent cells, or after the
//! game ended are returned as `MoveOutcome::Rejected` and leave the state
//! untouched.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::ai::{Decision, MoveSelector};
use crate::board::{Board, CellRef, CubeBoard};
use crate::core::{Error, GameConfig, GameRng, IllegalMove, Mark, Result, Side, Variant};
use crate::rules::{GameResult, Surface};
use crate::topology::{CubeTopology, Face};

/// Where the game is in its turn cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::IsVariant)]
pub enum Phase {
    AwaitingPlayerMove,
    AwaitingOpponentMove,
    GameOver,
}

impl Phase {
    /// Side on turn, `None` once the game is over.
    #[must_use]
    pub fn turn(self) -> Option<Side> {
        match self {
            Phase::AwaitingPlayerMove => Some(Side::Player),
            Phase::AwaitingOpponentMove => Some(Side::Opponent),
            Phase::GameOver => None,
        }
    }
}

/// What happened to a submitted move.
#[derive(Clone, Debug, PartialEq, Eq, derive_more::IsVariant)]
pub enum MoveOutcome {
    /// Placed; play continues.
    Applied,
    /// Placed, and it ended the game.
    AppliedWithResult(GameResult<CellRef>),
    /// Refused; nothing changed.
    Rejected(IllegalMove),
}

/// One applied move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveRecord {
    /// 1-based move number.
    pub ply: u32,
    pub side: Side,
    pub cell: CellRef,
}

/// The board of either variant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Playfield {
    Flat(Board),
    Cube(CubeBoard),
}

impl Playfield {
    /// Empty playfield for a configuration.
    #[must_use]
    pub fn new(variant: Variant, size: usize) -> Self {
        match variant {
            Variant::Flat => Playfield::Flat(Board::new(size)),
            Variant::Cube => Playfield::Cube(CubeBoard::new(size)),
        }
    }

    /// Mark at a cell, `None` if the cell is not on this playfield.
    #[must_use]
    pub fn get(&self, cell: CellRef) -> Option<Mark> {
        match (self, cell) {
            (Playfield::Flat(board), CellRef::Flat(index)) => board.get(index),
            (Playfield::Cube(cube), CellRef::Cube(cell)) => cube.get(cell),
            _ => None,
        }
    }

    fn place(&mut self, cell: CellRef, side: Side) -> std::result::Result<(), IllegalMove> {
        match (self, cell) {
            (Playfield::Flat(board), CellRef::Flat(index)) => board.place(index, side),
            (Playfield::Cube(cube), CellRef::Cube(cell)) => cube.place(cell, side),
            _ => Err(IllegalMove::OutOfRange(cell)),
        }
    }

    /// Winner, tie, or `None` while play continues.
    #[must_use]
    pub fn detect(&self, win_length: usize) -> Option<GameResult<CellRef>> {
        match self {
            Playfield::Flat(board) => board.detect(win_length).map(|r| r.map(CellRef::Flat)),
            Playfield::Cube(cube) => cube.detect(win_length).map(|r| r.map(CellRef::Cube)),
        }
    }

    #[must_use]
    pub fn is_blank(&self) -> bool {
        match self {
            Playfield::Flat(board) => board.is_blank(),
            Playfield::Cube(cube) => cube.is_blank(),
        }
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        match self {
            Playfield::Flat(board) => board.is_full(),
            Playfield::Cube(cube) => cube.is_full(),
        }
    }
}

impl std::fmt::Display for Playfield {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Playfield::Flat(board) => write!(f, "{}", board),
            Playfield::Cube(cube) => write!(f, "{}", cube),
        }
    }
}

/// Complete state of one game.
///
/// Cloning is cheap apart from the board: move history is a persistent
/// vector.
#[derive(Clone, Debug)]
pub struct GameState {
    config: GameConfig,
    field: Playfield,
    phase: Phase,
    result: Option<GameResult<CellRef>>,
    active_face: Face,
    history: Vector<MoveRecord>,
    rng: GameRng,
}

impl GameState {
    /// Start a game. Uses `config.seed` if set, otherwise OS entropy.
    pub fn new(config: GameConfig) -> Result<Self> {
        let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        Self::with_rng(config, rng)
    }

    /// Start a game drawing opponent randomness from `rng`.
    ///
    /// Fails on out-of-range parameters, and on a cube whose seam table
    /// does not validate.
    pub fn with_rng(config: GameConfig, rng: GameRng) -> Result<Self> {
        config.validate()?;
        if config.variant == Variant::Cube {
            CubeTopology::new(config.size).validate()?;
        }

        debug!(
            variant = %config.variant,
            size = config.size,
            win_length = config.win_length,
            difficulty = %config.difficulty,
            seed = rng.seed(),
            "game started"
        );

        Ok(Self {
            field: Playfield::new(config.variant, config.size),
            config,
            phase: Phase::AwaitingPlayerMove,
            result: None,
            active_face: Face::Front,
            history: Vector::new(),
            rng,
        })
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn field(&self) -> &Playfield {
        &self.field
    }

    /// The flat board, if this is a flat game.
    #[must_use]
    pub fn board(&self) -> Option<&Board> {
        match &self.field {
            Playfield::Flat(board) => Some(board),
            Playfield::Cube(_) => None,
        }
    }

    /// The cube, if this is a cube game.
    #[must_use]
    pub fn cube(&self) -> Option<&CubeBoard> {
        match &self.field {
            Playfield::Flat(_) => None,
            Playfield::Cube(cube) => Some(cube),
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Final result once the game is over.
    #[must_use]
    pub fn result(&self) -> Option<&GameResult<CellRef>> {
        self.result.as_ref()
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.phase.is_game_over()
    }

    /// Check if no mark has been placed yet.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.history.is_empty()
    }

    /// Face the player is looking at. Always `Front` on a flat game.
    #[must_use]
    pub fn active_face(&self) -> Face {
        self.active_face
    }

    /// Applied moves, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    #[must_use]
    pub fn rng(&self) -> &GameRng {
        &self.rng
    }

    // === Moves ===

    /// Place the player's mark.
    pub fn apply_player_move(&mut self, cell: CellRef) -> MoveOutcome {
        self.apply(Side::Player, cell)
    }

    /// Place the opponent's mark, normally the cell from
    /// [`compute_opponent_move`](Self::compute_opponent_move).
    pub fn apply_opponent_move(&mut self, cell: CellRef) -> MoveOutcome {
        self.apply(Side::Opponent, cell)
    }

    /// The opponent's chosen cell for the current position.
    ///
    /// Pure: the random stream is derived from the game seed and the move
    /// number, so repeated calls on the same state agree.
    pub fn compute_opponent_move(&self) -> Result<CellRef> {
        self.decide_opponent_move().map(|decision| decision.cell)
    }

    /// Like [`compute_opponent_move`](Self::compute_opponent_move), with
    /// the reason for the choice.
    pub fn decide_opponent_move(&self) -> Result<Decision<CellRef>> {
        match self.phase {
            Phase::AwaitingOpponentMove => {}
            Phase::GameOver => return Err(IllegalMove::GameOver.into()),
            Phase::AwaitingPlayerMove => return Err(IllegalMove::WrongTurn(Side::Opponent).into()),
        }

        let selector = MoveSelector::new(self.config.difficulty, self.config.win_length);
        let mut rng = self.rng.for_context(&self.history.len());

        let decision = match &self.field {
            Playfield::Flat(board) => selector.select(board, 0, &mut rng).map(|d| d.map(CellRef::Flat)),
            Playfield::Cube(cube) => selector
                .select(cube, self.active_face.index(), &mut rng)
                .map(|d| d.map(CellRef::Cube)),
        };

        // Unreachable while the phase is consistent: a full board ends the game
        decision.ok_or(Error::IllegalMove(IllegalMove::GameOver))
    }

    /// Compute and apply the opponent's move in one step.
    pub fn play_opponent_turn(&mut self) -> Result<MoveOutcome> {
        let cell = self.compute_opponent_move()?;
        Ok(self.apply_opponent_move(cell))
    }

    /// Focus a cube face. Random opponent picks prefer this face.
    pub fn set_active_face(&mut self, face: Face) -> Result<()> {
        if self.config.variant != Variant::Cube {
            return Err(Error::InvalidParameters("a flat board has no faces".into()));
        }
        self.active_face = face;
        Ok(())
    }

    fn apply(&mut self, side: Side, cell: CellRef) -> MoveOutcome {
        let refused = match self.phase.turn() {
            None => Some(IllegalMove::GameOver),
            Some(turn) if turn != side => Some(IllegalMove::WrongTurn(side)),
            Some(_) => self.field.place(cell, side).err(),
        };
        if let Some(reason) = refused {
            warn!(%side, %cell, %reason, "move rejected");
            return MoveOutcome::Rejected(reason);
        }

        let ply = self.history.len() as u32 + 1;
        self.history.push_back(MoveRecord { ply, side, cell });
        self.follow_move(side, cell);
        debug!(%side, %cell, ply, "move applied");

        match self.field.detect(self.config.win_length) {
            Some(result) => {
                info!(winner = ?result.winner(), line = ?result.line(), plies = ply, "game over");
                self.phase = Phase::GameOver;
                self.result = Some(result.clone());
                MoveOutcome::AppliedWithResult(result)
            }
            None => {
                self.phase = match side {
                    Side::Player => Phase::AwaitingOpponentMove,
                    Side::Opponent => Phase::AwaitingPlayerMove,
                };
                MoveOutcome::Applied
            }
        }
    }

    /// Keep the active face on the action.
    fn follow_move(&mut self, side: Side, cell: CellRef) {
        let (Some(cell), Playfield::Cube(cube)) = (cell.as_cube(), &self.field) else {
            return;
        };
        let follow = match side {
            Side::Player => true,
            Side::Opponent => cell.face != self.active_face && cube.face(self.active_face).is_full(),
        };
        if follow {
            self.active_face = cell.face;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Difficulty;
    use crate::topology::CubeCell;

    fn flat_game() -> GameState {
        GameState::new(GameConfig::flat(3).with_seed(7)).unwrap()
    }

    #[test]
    fn test_new_game() {
        let game = flat_game();
        assert_eq!(game.phase(), Phase::AwaitingPlayerMove);
        assert!(game.is_blank());
        assert!(game.result().is_none());
        assert!(game.board().is_some());
        assert!(game.cube().is_none());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let err = GameState::new(GameConfig::flat(3).with_win_length(4)).unwrap_err();
        assert!(matches!(err, Error::InvalidParameters(_)));
    }

    #[test]
    fn test_turn_cycle() {
        let mut game = flat_game();
        assert_eq!(game.apply_player_move(CellRef::Flat(0)), MoveOutcome::Applied);
        assert_eq!(game.phase(), Phase::AwaitingOpponentMove);

        assert_eq!(
            game.apply_player_move(CellRef::Flat(1)),
            MoveOutcome::Rejected(IllegalMove::WrongTurn(Side::Player))
        );

        assert_eq!(game.apply_opponent_move(CellRef::Flat(4)), MoveOutcome::Applied);
        assert_eq!(game.phase(), Phase::AwaitingPlayerMove);
        assert_eq!(game.history().len(), 2);
        assert_eq!(game.history()[1], MoveRecord { ply: 2, side: Side::Opponent, cell: CellRef::Flat(4) });
    }

    #[test]
    fn test_rejections_leave_state_unchanged() {
        let mut game = flat_game();
        game.apply_player_move(CellRef::Flat(0));
        game.apply_opponent_move(CellRef::Flat(4));
        let before = game.field().clone();

        assert_eq!(
            game.apply_player_move(CellRef::Flat(4)),
            MoveOutcome::Rejected(IllegalMove::Occupied(CellRef::Flat(4)))
        );
        assert_eq!(
            game.apply_player_move(CellRef::Flat(9)),
            MoveOutcome::Rejected(IllegalMove::OutOfRange(CellRef::Flat(9)))
        );
        let cube_cell = CellRef::Cube(CubeCell::new(Face::Front, 1));
        assert_eq!(
            game.apply_player_move(cube_cell),
            MoveOutcome::Rejected(IllegalMove::OutOfRange(cube_cell))
        );

        assert_eq!(game.field(), &before);
        assert_eq!(game.phase(), Phase::AwaitingPlayerMove);
        assert_eq!(game.history().len(), 2);
    }

    #[test]
    fn test_win_ends_game() {
        let mut game = flat_game();
        game.apply_player_move(CellRef::Flat(0));
        game.apply_opponent_move(CellRef::Flat(3));
        game.apply_player_move(CellRef::Flat(1));
        game.apply_opponent_move(CellRef::Flat(4));

        let outcome = game.apply_player_move(CellRef::Flat(2));
        let MoveOutcome::AppliedWithResult(result) = outcome else {
            panic!("expected a result, got {:?}", outcome);
        };
        assert!(result.is_winner(Side::Player));
        assert_eq!(result.line(), &[CellRef::Flat(0), CellRef::Flat(1), CellRef::Flat(2)]);
        assert!(game.is_over());

        assert_eq!(
            game.apply_opponent_move(CellRef::Flat(5)),
            MoveOutcome::Rejected(IllegalMove::GameOver)
        );
        assert!(game.compute_opponent_move().is_err());
    }

    #[test]
    fn test_compute_requires_opponent_turn() {
        let game = flat_game();
        assert_eq!(
            game.compute_opponent_move(),
            Err(Error::IllegalMove(IllegalMove::WrongTurn(Side::Opponent)))
        );
    }

    #[test]
    fn test_compute_is_pure() {
        let config = GameConfig::flat(5).with_win_length(4).with_difficulty(Difficulty::Easy).with_seed(11);
        let mut game = GameState::new(config).unwrap();
        game.apply_player_move(CellRef::Flat(12));

        let first = game.compute_opponent_move().unwrap();
        let second = game.compute_opponent_move().unwrap();
        assert_eq!(first, second);
        assert_eq!(game.history().len(), 1);
        assert_eq!(game.field().get(first), Some(Mark::Empty));
    }

    #[test]
    fn test_cube_active_face_follows_player() {
        let mut game = GameState::new(GameConfig::cube(3).with_seed(1)).unwrap();
        assert_eq!(game.active_face(), Face::Front);

        game.apply_player_move(CellRef::Cube(CubeCell::new(Face::Top, 4)));
        assert_eq!(game.active_face(), Face::Top);

        // Opponent lands elsewhere while top has space: focus stays
        game.apply_opponent_move(CellRef::Cube(CubeCell::new(Face::Left, 0)));
        assert_eq!(game.active_face(), Face::Top);
    }

    #[test]
    fn test_set_active_face() {
        let mut cube = GameState::new(GameConfig::cube(4).with_seed(1)).unwrap();
        assert!(cube.set_active_face(Face::Bottom).is_ok());
        assert_eq!(cube.active_face(), Face::Bottom);

        let mut flat = flat_game();
        assert!(flat.set_active_face(Face::Bottom).is_err());
        assert_eq!(flat.active_face(), Face::Front);
    }

    #[test]
    fn test_play_opponent_turn() {
        let mut game = GameState::new(GameConfig::flat(3).with_difficulty(Difficulty::Hard).with_seed(5)).unwrap();
        game.apply_player_move(CellRef::Flat(0));
        assert_eq!(game.play_opponent_turn(), Ok(MoveOutcome::Applied));
        assert_eq!(game.field().get(CellRef::Flat(4)), Some(Mark::Opponent));
        assert_eq!(game.phase(), Phase::AwaitingPlayerMove);
    }
}
