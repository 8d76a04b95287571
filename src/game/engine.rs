use std::time::Duration;

use log::info;
use thiserror::Error;

use crate::alpha_beta_searcher::{SearchContext, SearchError};
use crate::board::coord::Coord;
use crate::board::ending::{game_ending, required_moves, GameEnding, DEFAULT_MOVE_LIMIT};
use crate::board::error::BoardError;
use crate::board::side::Side;
use crate::board::Board;
use crate::moves::{has_legal_moves, legal_moves, Move, Turn};
use crate::turn_selector::select_turn;

/// Core engine configuration
#[derive(Clone)]
pub struct EngineConfig {
    pub search_depth: u8,
    pub move_limit: u32,
    pub computer_side: Side,
    pub starting_position: Board,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            search_depth: 6,
            move_limit: DEFAULT_MOVE_LIMIT,
            computer_side: Side::Triangle,
            starting_position: Board::starting_position(),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("illegal move: {error}")]
    Illegal { error: BoardError },
    #[error("that piece has already moved this turn")]
    PieceAlreadyMoved,
    #[error("it is not your turn")]
    NotYourTurn,
    #[error("{side} has no legal moves")]
    NoLegalMoves { side: Side },
    #[error("search error: {error}")]
    Search { error: SearchError },
    #[error("the game is over")]
    GameOver,
}

/// Where the acting side stands after one of its moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnProgress {
    MovesRemaining(usize),
    TurnComplete,
    GameOver(GameEnding),
}

/// Game state and runtime info
#[derive(Clone)]
struct GameState {
    board: Board,
    side_to_move: Side,
    required_this_turn: usize,
    current_turn: Turn,
    last_turn: Option<(Side, Turn)>,
}

impl GameState {
    fn new(board: Board) -> Self {
        let side_to_move = Side::Triangle;
        Self {
            board,
            side_to_move,
            required_this_turn: required_moves(&board, side_to_move),
            current_turn: Turn::new(),
            last_turn: None,
        }
    }

    /// Cells where pieces moved earlier this turn now stand.
    fn moved_pieces(&self) -> impl Iterator<Item = Coord> + '_ {
        self.current_turn.iter().map(|m| m.to)
    }
}

/// Owns the game in progress: applies human moves, asks the search for computer turns
/// and keeps track of whose turn it is.
pub struct Engine {
    state: GameState,
    computer_side: Side,
    move_limit: u32,
    search_context: SearchContext,
}

impl Default for Engine {
    fn default() -> Self {
        Self::with_config(EngineConfig::default())
    }
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            state: GameState::new(config.starting_position),
            computer_side: config.computer_side,
            move_limit: config.move_limit,
            search_context: SearchContext::with_config(
                config.search_depth,
                config.move_limit,
                true,
            ),
        }
    }

    pub fn board(&self) -> &Board {
        &self.state.board
    }

    pub fn side_to_move(&self) -> Side {
        self.state.side_to_move
    }

    /// Starts a fresh turn for `side`, dropping any moves of the turn in progress.
    pub fn set_side_to_move(&mut self, side: Side) {
        self.state.current_turn.clear();
        self.state.side_to_move = side;
        self.state.required_this_turn = required_moves(&self.state.board, side);
    }

    pub fn computer_side(&self) -> Side {
        self.computer_side
    }

    /// Moves the acting side still owes this turn.
    pub fn moves_remaining(&self) -> usize {
        self.state
            .required_this_turn
            .saturating_sub(self.state.current_turn.len())
    }

    pub fn last_turn(&self) -> Option<(Side, &Turn)> {
        self.state
            .last_turn
            .as_ref()
            .map(|(side, turn)| (*side, turn))
    }

    /// Moves made so far in the turn in progress.
    pub fn current_turn(&self) -> &Turn {
        &self.state.current_turn
    }

    /// Single moves the acting side may make now, excluding pieces that already moved.
    pub fn get_valid_moves(&self) -> Vec<Move> {
        let moved: Vec<Coord> = self.state.moved_pieces().collect();
        legal_moves(&self.state.board, self.state.side_to_move)
            .into_iter()
            .filter(|m| !moved.contains(&m.from))
            .collect()
    }

    /// The game result, if the game is over. A position where neither side can move is a
    /// draw.
    pub fn check_game_over(&self) -> Option<GameEnding> {
        let board = &self.state.board;
        game_ending(board, self.move_limit).or_else(|| {
            let blocked = Side::ALL.iter().all(|&side| !has_legal_moves(board, side));
            blocked.then_some(GameEnding::Draw)
        })
    }

    /// Hands the turn to the other side if the acting side cannot move at all. Returns the
    /// side that had to pass.
    pub fn pass_if_blocked(&mut self) -> Option<Side> {
        let side = self.state.side_to_move;
        if self.check_game_over().is_some() || has_legal_moves(&self.state.board, side) {
            return None;
        }
        info!("{} has no legal moves and passes", side);
        self.end_turn();
        Some(side)
    }

    /// Validates and applies one move for the human side.
    pub fn apply_human_move(&mut self, game_move: Move) -> Result<TurnProgress, EngineError> {
        if self.check_game_over().is_some() {
            return Err(EngineError::GameOver);
        }
        if self.state.side_to_move == self.computer_side {
            return Err(EngineError::NotYourTurn);
        }
        self.apply_move(game_move)
    }

    /// Asks the search for the acting side's turn without applying it.
    pub fn compute_computer_turn(&mut self) -> Result<Turn, EngineError> {
        if self.check_game_over().is_some() {
            return Err(EngineError::GameOver);
        }

        let side = self.state.side_to_move;
        select_turn(&mut self.search_context, &self.state.board, side).map_err(
            |error| match error {
                SearchError::NoAvailableMoves => EngineError::NoLegalMoves { side },
                error => EngineError::Search { error },
            },
        )
    }

    /// Computes the acting side's turn and applies it move by move, stopping early if the
    /// game ends. Returns the moves that were played.
    pub fn make_computer_turn(&mut self) -> Result<Turn, EngineError> {
        let turn = self.compute_computer_turn()?;
        let mut played = Turn::new();

        for game_move in turn {
            played.push(game_move);
            match self.apply_move(game_move)? {
                TurnProgress::MovesRemaining(_) => continue,
                TurnProgress::TurnComplete | TurnProgress::GameOver(_) => break,
            }
        }

        // A single-move fallback can leave the turn open; the computer never adds to it.
        if !self.state.current_turn.is_empty() {
            self.end_turn();
        }

        Ok(played)
    }

    pub fn get_search_stats(&self) -> SearchStats {
        SearchStats {
            positions_searched: self.search_context.searched_position_count(),
            depth: self.search_context.search_depth(),
            last_score: self.search_context.last_score(),
            last_search_duration: self.search_context.last_search_duration(),
            tt_hits: self.search_context.tt_hits(),
            cutoffs: self.search_context.cutoff_count(),
            evaluations: self.search_context.evaluation_count(),
        }
    }

    // Private helper methods

    fn apply_move(&mut self, game_move: Move) -> Result<TurnProgress, EngineError> {
        if self.state.moved_pieces().any(|c| c == game_move.from) {
            return Err(EngineError::PieceAlreadyMoved);
        }

        let side = self.state.side_to_move;
        let captured = self
            .state
            .board
            .apply_move(side, game_move)
            .map_err(|error| EngineError::Illegal { error })?;
        self.state.current_turn.push(game_move);

        if !captured.is_empty() {
            info!("{} plays {} capturing {} piece(s)", side, game_move, captured.len());
        }

        if let Some(ending) = self.check_game_over() {
            info!("game over: {}", ending);
            self.finish_turn();
            return Ok(TurnProgress::GameOver(ending));
        }

        let remaining = self.moves_remaining();
        if remaining == 0 || self.get_valid_moves().is_empty() {
            self.end_turn();
            return Ok(TurnProgress::TurnComplete);
        }

        Ok(TurnProgress::MovesRemaining(remaining))
    }

    /// Records the turn in progress as the last turn played.
    fn finish_turn(&mut self) {
        let turn = std::mem::take(&mut self.state.current_turn);
        if !turn.is_empty() {
            self.state.last_turn = Some((self.state.side_to_move, turn));
        }
    }

    fn end_turn(&mut self) {
        self.finish_turn();
        self.set_side_to_move(self.state.side_to_move.opposite());
    }
}

/// Search performance statistics
#[derive(Debug, Clone)]
pub struct SearchStats {
    pub positions_searched: usize,
    pub depth: u8,
    pub last_score: Option<i32>,
    pub last_search_duration: Option<Duration>,
    pub tt_hits: usize,
    pub cutoffs: usize,
    pub evaluations: usize,
}
