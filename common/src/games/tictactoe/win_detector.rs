use std::collections::HashSet;

use super::board::Board;
use super::types::{Position, WinningCombo};

/// All candidate lines for a `size` board: rows, then columns, then the
/// main diagonal, then the anti-diagonal. Always `2 * size + 2` combos.
pub fn winning_combos(size: usize) -> Vec<WinningCombo> {
    let rows = (0..size).map(|row| (0..size).map(|col| Position::new(row, col)).collect());
    let columns = (0..size).map(|col| (0..size).map(|row| Position::new(row, col)).collect());
    let main_diagonal = (0..size).map(|i| Position::new(i, i)).collect();
    let anti_diagonal = (0..size).map(|i| Position::new(i, size - 1 - i)).collect();

    rows.chain(columns)
        .chain([main_diagonal, anti_diagonal])
        .collect()
}

/// A combo wins when its cells hold exactly one distinct label and that
/// label is not empty.
pub fn is_winning_combo(board: &Board, combo: &[Position]) -> bool {
    let labels: HashSet<&str> = combo
        .iter()
        .map(|&position| board.label_at(position).unwrap_or(""))
        .collect();

    labels.len() == 1 && !labels.contains("")
}

pub fn find_winning_combo<'a>(board: &Board, combos: &'a [WinningCombo]) -> Option<&'a WinningCombo> {
    combos.iter().find(|combo| is_winning_combo(board, combo))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Move;

    fn positions(coords: &[(usize, usize)]) -> Vec<Position> {
        coords.iter().map(|&(row, col)| Position::new(row, col)).collect()
    }

    #[test]
    fn test_combo_count_and_order() {
        let combos = winning_combos(3);
        assert_eq!(combos.len(), 8);
        assert_eq!(combos[0], positions(&[(0, 0), (0, 1), (0, 2)]));
        assert_eq!(combos[2], positions(&[(2, 0), (2, 1), (2, 2)]));
        assert_eq!(combos[3], positions(&[(0, 0), (1, 0), (2, 0)]));
        assert_eq!(combos[5], positions(&[(0, 2), (1, 2), (2, 2)]));
        assert_eq!(combos[6], positions(&[(0, 0), (1, 1), (2, 2)]));
        assert_eq!(combos[7], positions(&[(0, 2), (1, 1), (2, 0)]));
    }

    #[test]
    fn test_combo_count_for_other_sizes() {
        assert_eq!(winning_combos(1).len(), 4);
        assert_eq!(winning_combos(5).len(), 12);
        assert!(winning_combos(5).iter().all(|combo| combo.len() == 5));
    }

    #[test]
    fn test_two_marks_and_a_gap_is_not_a_win() {
        let mut board = Board::new(3);
        board.place(Move::new(0, 0, "X"));
        board.place(Move::new(0, 1, "X"));
        let top_row = positions(&[(0, 0), (0, 1), (0, 2)]);
        assert!(!is_winning_combo(&board, &top_row));
    }

    #[test]
    fn test_mixed_labels_are_not_a_win() {
        let mut board = Board::new(3);
        board.place(Move::new(0, 0, "X"));
        board.place(Move::new(0, 1, "O"));
        board.place(Move::new(0, 2, "X"));
        let top_row = positions(&[(0, 0), (0, 1), (0, 2)]);
        assert!(!is_winning_combo(&board, &top_row));
    }

    #[test]
    fn test_empty_line_is_not_a_win() {
        let board = Board::new(3);
        assert!(find_winning_combo(&board, &winning_combos(3)).is_none());
    }

    #[test]
    fn test_find_returns_first_combo_in_order() {
        let mut board = Board::new(3);
        for col in 0..3 {
            board.place(Move::new(0, col, "X"));
        }
        for row in 1..3 {
            board.place(Move::new(row, 0, "X"));
        }
        let combos = winning_combos(3);
        let found = find_winning_combo(&board, &combos);
        assert_eq!(found, Some(&positions(&[(0, 0), (0, 1), (0, 2)])));
    }

    #[test]
    fn test_anti_diagonal_win() {
        let mut board = Board::new(3);
        board.place(Move::new(0, 2, "O"));
        board.place(Move::new(1, 1, "O"));
        board.place(Move::new(2, 0, "O"));
        let combos = winning_combos(3);
        assert_eq!(
            find_winning_combo(&board, &combos),
            Some(&positions(&[(0, 2), (1, 1), (2, 0)]))
        );
    }
}
