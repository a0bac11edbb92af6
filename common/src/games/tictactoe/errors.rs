#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameConfigError {
    InvalidBoardSize(usize),
    NotEnoughPlayers(usize),
    InvalidLabel { player: String },
    DuplicateLabel(String),
}

impl std::fmt::Display for GameConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameConfigError::InvalidBoardSize(size) => {
                write!(f, "Board size must be at least 1, got {}", size)
            }
            GameConfigError::NotEnoughPlayers(count) => {
                write!(f, "At least 2 players are required, got {}", count)
            }
            GameConfigError::InvalidLabel { player } => {
                write!(f, "Player {} must have a single-character label", player)
            }
            GameConfigError::DuplicateLabel(label) => {
                write!(f, "Label {} is used by more than one player", label)
            }
        }
    }
}

impl std::error::Error for GameConfigError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    GameOver,
    OutOfBounds,
    CellOccupied,
}

impl std::fmt::Display for MoveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveError::GameOver => write!(f, "Game is already over"),
            MoveError::OutOfBounds => write!(f, "Position out of bounds"),
            MoveError::CellOccupied => write!(f, "Cell is already marked"),
        }
    }
}

impl std::error::Error for MoveError {}
