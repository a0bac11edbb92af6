mod board;
mod errors;
mod game_state;
mod rotation;
mod types;
mod win_detector;

pub use board::Board;
pub use errors::{GameConfigError, MoveError};
pub use game_state::{DEFAULT_BOARD_SIZE, GameEngine};
pub use rotation::PlayerRotation;
pub use types::{GameStatus, Move, Player, Position, WinningCombo};
pub use win_detector::{find_winning_combo, is_winning_combo, winning_combos};
