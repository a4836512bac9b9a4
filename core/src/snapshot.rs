use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Detached, player-visible copy of a board. Unrevealed mines are indistinguishable
/// from any other hidden cell.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub size: Coord2,
    pub mine_count: CellCount,
    pub flag_count: CellCount,
    pub status: GameStatus,
    pub cells: Array2<CellView>,
}

impl Snapshot {
    pub fn from_board(board: &Board) -> Self {
        let size = (board.rows(), board.cols());
        let cells = board.grid().map(Cell::view);

        Self {
            size,
            mine_count: board.mine_count(),
            flag_count: board.flag_count(),
            status: board.status(),
            cells,
        }
    }

    /// `None` outside the board.
    pub fn view_at(&self, coords: Coord2) -> Option<CellView> {
        self.cells.get(nd_index(coords)).copied()
    }

    pub fn mines_left(&self) -> i64 {
        i64::from(self.mine_count) - i64::from(self.flag_count)
    }
}
