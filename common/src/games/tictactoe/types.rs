#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// One candidate line of `board_size` coordinates.
pub type WinningCombo = Vec<Position>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Tied,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    label: String,
    display_color: String,
}

impl Player {
    pub fn new(
        name: impl Into<String>,
        label: impl Into<String>,
        display_color: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            display_color: display_color.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Opaque to the engine, only the presentation layer interprets it.
    pub fn display_color(&self) -> &str {
        &self.display_color
    }
}

/// A mark at a board coordinate. An empty label marks an unoccupied cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Move {
    pub row: usize,
    pub col: usize,
    pub label: String,
}

impl Move {
    pub fn new(row: usize, col: usize, label: impl Into<String>) -> Self {
        Self {
            row,
            col,
            label: label.into(),
        }
    }

    pub fn empty(row: usize, col: usize) -> Self {
        Self {
            row,
            col,
            label: String::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.label.is_empty()
    }

    pub fn position(&self) -> Position {
        Position::new(self.row, self.col)
    }
}
