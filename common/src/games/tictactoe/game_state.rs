use std::collections::HashSet;

use super::board::Board;
use super::errors::{GameConfigError, MoveError};
use super::rotation::PlayerRotation;
use super::types::{GameStatus, Move, Player, Position, WinningCombo};
use super::win_detector::{find_winning_combo, winning_combos};

pub const DEFAULT_BOARD_SIZE: usize = 3;

/// Board, turn and winner state for one game session.
///
/// Callers gate every [`GameEngine::process_move`] on
/// [`GameEngine::is_valid_move`], then query [`GameEngine::has_winner`]
/// before [`GameEngine::is_tied`], and call [`GameEngine::toggle_player`]
/// only while the game continues. [`GameEngine::play`] runs that whole
/// sequence for one click.
#[derive(Debug, Clone)]
pub struct GameEngine {
    rotation: PlayerRotation,
    board: Board,
    winning_combos: Vec<WinningCombo>,
    has_winner: bool,
    winner_combo: Option<WinningCombo>,
}

impl GameEngine {
    pub fn new(players: Vec<Player>, board_size: usize) -> Result<Self, GameConfigError> {
        if board_size < 1 {
            return Err(GameConfigError::InvalidBoardSize(board_size));
        }
        if players.len() < 2 {
            return Err(GameConfigError::NotEnoughPlayers(players.len()));
        }

        validate_labels(&players)?;

        Ok(Self {
            rotation: PlayerRotation::new(players),
            board: Board::new(board_size),
            winning_combos: winning_combos(board_size),
            has_winner: false,
            winner_combo: None,
        })
    }

    pub fn with_default_size(players: Vec<Player>) -> Result<Self, GameConfigError> {
        Self::new(players, DEFAULT_BOARD_SIZE)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn board_size(&self) -> usize {
        self.board.size()
    }

    pub fn players(&self) -> &[Player] {
        self.rotation.players()
    }

    pub fn current_player(&self) -> &Player {
        self.rotation.current()
    }

    /// Coordinates of the line that won, empty while there is no winner.
    pub fn winner_combo(&self) -> &[Position] {
        self.winner_combo.as_deref().unwrap_or(&[])
    }

    pub fn winning_combos(&self) -> &[WinningCombo] {
        &self.winning_combos
    }

    /// True while nobody has won and the target cell exists and is empty.
    /// Turn order and ties are not checked here.
    pub fn is_valid_move(&self, mv: &Move) -> bool {
        let cell_is_free = self
            .board
            .get(mv.row, mv.col)
            .is_some_and(|cell| cell.is_empty());
        !self.has_winner && cell_is_free
    }

    /// Stores `mv` and re-checks every combo. Does not advance the turn.
    pub fn process_move(&mut self, mv: Move) {
        debug_assert!(self.is_valid_move(&mv), "process_move called with an invalid move");

        if !self.board.place(mv) {
            return;
        }

        if let Some(combo) = find_winning_combo(&self.board, &self.winning_combos) {
            self.has_winner = true;
            self.winner_combo = Some(combo.clone());
        }
    }

    pub fn has_winner(&self) -> bool {
        self.has_winner
    }

    pub fn is_tied(&self) -> bool {
        !self.has_winner && self.board.is_full()
    }

    pub fn status(&self) -> GameStatus {
        if self.has_winner() {
            GameStatus::Won
        } else if self.is_tied() {
            GameStatus::Tied
        } else {
            GameStatus::InProgress
        }
    }

    /// The player whose label fills the winning combo.
    pub fn winner(&self) -> Option<&Player> {
        let first = *self.winner_combo().first()?;
        let label = self.board.label_at(first)?;
        self.players().iter().find(|player| player.label() == label)
    }

    pub fn toggle_player(&mut self) {
        self.rotation.advance();
    }

    /// Empties every cell and forgets the winner. The current player is kept.
    pub fn reset(&mut self) {
        self.board.clear();
        self.has_winner = false;
        self.winner_combo = None;
    }

    /// Places the current player's mark at `(row, col)` and passes the turn
    /// on if the game is still going.
    pub fn play(&mut self, row: usize, col: usize) -> Result<GameStatus, MoveError> {
        if self.has_winner {
            return Err(MoveError::GameOver);
        }
        if !self.board.is_in_bounds(row, col) {
            return Err(MoveError::OutOfBounds);
        }

        let mv = Move::new(row, col, self.current_player().label());
        if !self.is_valid_move(&mv) {
            return Err(MoveError::CellOccupied);
        }

        self.process_move(mv);

        let status = self.status();
        if status == GameStatus::InProgress {
            self.toggle_player();
        }
        Ok(status)
    }
}

fn validate_labels(players: &[Player]) -> Result<(), GameConfigError> {
    let mut seen_labels = HashSet::new();
    for player in players {
        if player.label().chars().count() != 1 {
            return Err(GameConfigError::InvalidLabel {
                player: player.name().to_string(),
            });
        }
        if !seen_labels.insert(player.label()) {
            return Err(GameConfigError::DuplicateLabel(player.label().to_string()));
        }
    }
    Ok(())
}
