use super::types::{Move, Position};

/// Square grid of moves. Every cell keeps its own coordinates, only the
/// label changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Vec<Move>>,
}

impl Board {
    pub fn new(size: usize) -> Self {
        let cells = (0..size)
            .map(|row| (0..size).map(|col| Move::empty(row, col)).collect())
            .collect();
        Self { size, cells }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&Move> {
        self.cells.get(row).and_then(|cells| cells.get(col))
    }

    pub fn label_at(&self, position: Position) -> Option<&str> {
        self.get(position.row, position.col).map(|mv| mv.label.as_str())
    }

    pub fn is_in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size
    }

    /// Stores `mv` at its own coordinates. Returns false when out of range.
    pub fn place(&mut self, mv: Move) -> bool {
        match self.cells.get_mut(mv.row).and_then(|cells| cells.get_mut(mv.col)) {
            Some(cell) => {
                *cell = mv;
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        for (row, cells) in self.cells.iter_mut().enumerate() {
            for (col, cell) in cells.iter_mut().enumerate() {
                *cell = Move::empty(row, col);
            }
        }
    }

    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|cell| !cell.is_empty()))
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Move]> {
        self.cells.iter().map(|row| row.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_cells_match_their_coordinates() {
        let board = Board::new(4);
        for (row, cells) in board.rows().enumerate() {
            assert_eq!(cells.len(), 4);
            for (col, cell) in cells.iter().enumerate() {
                assert_eq!(cell, &Move::empty(row, col));
            }
        }
    }

    #[test]
    fn test_place_out_of_bounds_is_rejected() {
        let mut board = Board::new(3);
        assert!(!board.place(Move::new(3, 0, "X")));
        assert!(!board.place(Move::new(0, 7, "X")));
        assert!(board.get(3, 0).is_none());
        assert_eq!(board, Board::new(3));
    }

    #[test]
    fn test_clear_restores_empty_cells() {
        let mut board = Board::new(3);
        assert!(board.place(Move::new(1, 1, "X")));
        assert!(board.place(Move::new(2, 0, "O")));
        assert_eq!(board.label_at(Position::new(1, 1)), Some("X"));

        board.clear();

        assert_eq!(board, Board::new(3));
    }

    #[test]
    fn test_is_full() {
        let mut board = Board::new(2);
        board.place(Move::new(0, 0, "X"));
        board.place(Move::new(0, 1, "O"));
        board.place(Move::new(1, 0, "X"));
        assert!(!board.is_full());
        board.place(Move::new(1, 1, "O"));
        assert!(board.is_full());
    }
}
