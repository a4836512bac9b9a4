use serde::{Deserialize, Serialize};

use crate::{Coord, Coord2};

/// One grid position. Only the board mutates cells; everyone else reads them.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Cell {
    row: Coord,
    col: Coord,
    is_mine: bool,
    is_flagged: bool,
    is_revealed: bool,
    surrounding_mines: u8,
}

impl Cell {
    pub(crate) fn new((row, col): Coord2, is_mine: bool, surrounding_mines: u8) -> Self {
        Self {
            row,
            col,
            is_mine,
            is_flagged: false,
            is_revealed: false,
            surrounding_mines,
        }
    }

    pub const fn coords(&self) -> Coord2 {
        (self.row, self.col)
    }

    pub const fn row(&self) -> Coord {
        self.row
    }

    pub const fn col(&self) -> Coord {
        self.col
    }

    /// Raw mine bit. Presentation layers should go through [`Cell::view`] instead,
    /// which hides mines until they are revealed.
    pub const fn is_mine(&self) -> bool {
        self.is_mine
    }

    pub const fn is_flagged(&self) -> bool {
        self.is_flagged
    }

    pub const fn is_revealed(&self) -> bool {
        self.is_revealed
    }

    /// Number of mines among the up-to-8 neighbors, zero for mine cells.
    pub const fn surrounding_mines(&self) -> u8 {
        self.surrounding_mines
    }

    pub const fn view(&self) -> CellView {
        match (self.is_revealed, self.is_mine, self.is_flagged) {
            (true, true, _) => CellView::Mine,
            (true, false, _) => CellView::Revealed(self.surrounding_mines),
            (false, _, true) => CellView::Flagged,
            (false, _, false) => CellView::Hidden,
        }
    }

    pub(crate) fn reveal(&mut self) {
        self.is_revealed = true;
    }

    pub(crate) fn toggle_flag(&mut self) -> bool {
        self.is_flagged = !self.is_flagged;
        self.is_flagged
    }
}

/// Player-visible state of a cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellView {
    #[default]
    Hidden,
    Flagged,
    Revealed(u8),
    Mine,
}

impl CellView {
    pub const fn is_unrevealed(self) -> bool {
        matches!(self, Self::Hidden | Self::Flagged)
    }
}
