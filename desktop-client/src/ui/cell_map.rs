use std::collections::HashMap;

use eframe::egui;
use tictactoe_common::games::tictactoe::Position;

/// Widget ids of the grid cells and the board coordinates they stand for.
pub struct CellMap {
    ids: Vec<Vec<egui::Id>>,
    positions: HashMap<egui::Id, Position>,
}

impl CellMap {
    pub fn new(board_size: usize) -> Self {
        let ids: Vec<Vec<egui::Id>> = (0..board_size)
            .map(|row| {
                (0..board_size)
                    .map(|col| egui::Id::new(("tictactoe_cell", row, col)))
                    .collect()
            })
            .collect();

        let positions = ids
            .iter()
            .enumerate()
            .flat_map(|(row, cells)| {
                cells
                    .iter()
                    .enumerate()
                    .map(move |(col, &id)| (id, Position::new(row, col)))
            })
            .collect();

        Self { ids, positions }
    }

    pub fn id(&self, row: usize, col: usize) -> Option<egui::Id> {
        self.ids.get(row).and_then(|cells| cells.get(col)).copied()
    }

    pub fn position(&self, id: egui::Id) -> Option<Position> {
        self.positions.get(&id).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_cell_has_its_own_id() {
        let map = CellMap::new(3);
        assert_eq!(map.positions.len(), 9);
        for row in 0..3 {
            for col in 0..3 {
                let id = map.id(row, col).unwrap();
                assert_eq!(map.position(id), Some(Position::new(row, col)));
            }
        }
    }

    #[test]
    fn test_unknown_ids_and_cells() {
        let map = CellMap::new(3);
        assert_eq!(map.id(3, 0), None);
        assert_eq!(map.position(egui::Id::new("menu_bar")), None);
    }
}
