use core::fmt;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - Playing -> Won
/// - Playing -> Lost
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    Playing,
    Won,
    Lost,
}

impl GameStatus {
    pub const fn is_playing(self) -> bool {
        matches!(self, Self::Playing)
    }

    /// Indicates the game has ended and no moves can be made anymore
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Playing => "playing",
            Self::Won => "won",
            Self::Lost => "lost",
        })
    }
}

/// Grid of cells with its mines placed, plus the derived game status.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Board {
    config: GameConfig,
    grid: Array2<Cell>,
    revealed_count: CellCount,
    flagged_count: CellCount,
    status: GameStatus,
    triggered_mine: Option<Coord2>,
}

impl Board {
    /// Random board; fails with `InvalidConfiguration` unless at least one cell stays safe.
    pub fn new(rows: Coord, cols: Coord, mines: CellCount) -> Result<Self> {
        let config = GameConfig::new(rows, cols, mines)?;
        Ok(Self::with_placer(config, RandomPlacer::from_entropy()))
    }

    pub fn with_placer(config: GameConfig, placer: impl MinePlacer) -> Self {
        Self::from_layout(placer.place(&config))
    }

    pub fn from_layout(layout: MineLayout) -> Self {
        let config = layout.game_config();
        let grid = Array2::from_shape_fn(nd_index(config.size()), |(row, col)| {
            let coords = (row as Coord, col as Coord);
            if layout.contains_mine(coords) {
                Cell::new(coords, true, 0)
            } else {
                Cell::new(coords, false, layout.adjacent_mine_count(coords))
            }
        });

        Self {
            config,
            grid,
            revealed_count: 0,
            flagged_count: 0,
            status: GameStatus::Playing,
            triggered_mine: None,
        }
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn rows(&self) -> Coord {
        self.config.rows()
    }

    pub fn cols(&self) -> Coord {
        self.config.cols()
    }

    pub fn mine_count(&self) -> CellCount {
        self.config.mines()
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        self.status.is_finished()
    }

    pub fn cell(&self, coords: Coord2) -> Result<&Cell> {
        let coords = self.config.validate_coords(coords)?;
        Ok(&self.grid[nd_index(coords)])
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.grid.iter()
    }

    pub(crate) fn grid(&self) -> &Array2<Cell> {
        &self.grid
    }

    pub fn flag_count(&self) -> CellCount {
        self.flagged_count
    }

    /// How many mines have not been flagged yet, negative when over-flagged
    pub fn mines_left(&self) -> i64 {
        i64::from(self.config.mines()) - i64::from(self.flagged_count)
    }

    /// Safe cells revealed so far.
    pub fn revealed_count(&self) -> CellCount {
        self.revealed_count
    }

    /// The mine whose reveal lost the game.
    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    pub fn reveal_cell(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        use RevealOutcome::*;

        let coords = self.config.validate_coords(coords)?;
        if !self.status.is_playing() {
            return Ok(NoChange);
        }

        let cell = &mut self.grid[nd_index(coords)];
        if cell.is_revealed() || cell.is_flagged() {
            return Ok(NoChange);
        }
        cell.reveal();
        let (is_mine, surrounding_mines) = (cell.is_mine(), cell.surrounding_mines());

        if is_mine {
            self.triggered_mine = Some(coords);
            self.status = GameStatus::Lost;
            log::debug!("Mine hit at {:?}, game lost", coords);
            return Ok(HitMine);
        }

        self.revealed_count += 1;
        log::debug!("Reveal cell at {:?}, mine count: {}", coords, surrounding_mines);
        if surrounding_mines == 0 {
            self.flood_reveal(coords);
        }

        if self.revealed_count == self.config.safe_cells() {
            self.status = GameStatus::Won;
            log::debug!("All safe cells revealed, game won");
            Ok(Won)
        } else {
            Ok(Revealed)
        }
    }

    /// Opens everything reachable from a zero-count cell through other zero-count cells.
    /// Cells are marked revealed when pushed, so each one is handled at most once.
    fn flood_reveal(&mut self, origin: Coord2) {
        let mut to_visit = vec![origin];

        while let Some(coords) = to_visit.pop() {
            for pos in neighbors(coords, self.config.size()) {
                let neighbor = &mut self.grid[nd_index(pos)];
                if neighbor.is_revealed() || neighbor.is_flagged() || neighbor.is_mine() {
                    continue;
                }

                neighbor.reveal();
                self.revealed_count += 1;
                log::trace!(
                    "Flood revealed cell at {:?}, mine count: {}",
                    pos,
                    neighbor.surrounding_mines()
                );

                if neighbor.surrounding_mines() == 0 {
                    to_visit.push(pos);
                }
            }
        }
    }

    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<FlagOutcome> {
        let coords = self.config.validate_coords(coords)?;
        if !self.status.is_playing() {
            return Ok(FlagOutcome::NoChange);
        }

        let cell = &mut self.grid[nd_index(coords)];
        if cell.is_revealed() {
            return Ok(FlagOutcome::NoChange);
        }

        Ok(if cell.toggle_flag() {
            self.flagged_count += 1;
            FlagOutcome::Flagged
        } else {
            self.flagged_count -= 1;
            FlagOutcome::Unflagged
        })
    }

    /// Shows every mine after a loss; safe cells and the status stay as they are.
    pub fn reveal_all_mines(&mut self) {
        for cell in self.grid.iter_mut().filter(|cell| cell.is_mine()) {
            cell.reveal();
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from_board(self)
    }
}
