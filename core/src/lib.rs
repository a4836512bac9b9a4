use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Deserializer, Serialize};

pub use board::*;
pub use cell::*;
pub use error::*;
pub use game::*;
pub use generator::*;
pub use snapshot::*;
pub use types::*;

mod board;
mod cell;
mod error;
mod game;
mod generator;
mod snapshot;
mod types;

/// Board dimensions and mine count, validated on construction.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GameConfig {
    rows: Coord,
    cols: Coord,
    mines: CellCount,
}

impl GameConfig {
    pub(crate) const fn new_unchecked(rows: Coord, cols: Coord, mines: CellCount) -> Self {
        Self { rows, cols, mines }
    }

    /// Rejects empty boards and boards without at least one safe cell.
    pub fn new(rows: Coord, cols: Coord, mines: CellCount) -> Result<Self> {
        let config = Self::new_unchecked(rows, cols, mines);
        if rows == 0 || cols == 0 || mines >= config.total_cells() {
            return Err(GameError::InvalidConfiguration { rows, cols, mines });
        }
        Ok(config)
    }

    pub const fn rows(&self) -> Coord {
        self.rows
    }

    pub const fn cols(&self) -> Coord {
        self.cols
    }

    pub const fn mines(&self) -> CellCount {
        self.mines
    }

    pub const fn size(&self) -> Coord2 {
        (self.rows, self.cols)
    }

    pub const fn total_cells(&self) -> CellCount {
        self.rows as CellCount * self.cols as CellCount
    }

    pub const fn safe_cells(&self) -> CellCount {
        self.total_cells() - self.mines
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let (row, col) = coords;
        if row < self.rows && col < self.cols {
            Ok(coords)
        } else {
            Err(GameError::OutOfBounds { row, col })
        }
    }
}

/// Deserialized configs go through the same validation as [`GameConfig::new`].
impl<'de> Deserialize<'de> for GameConfig {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> core::result::Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Fields {
            rows: Coord,
            cols: Coord,
            mines: CellCount,
        }

        let Fields { rows, cols, mines } = Fields::deserialize(deserializer)?;
        Self::new(rows, cols, mines).map_err(serde::de::Error::custom)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new_unchecked(10, 10, 15)
    }
}

/// Where the mines are. Always leaves at least one safe cell.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MineLayout {
    mine_mask: Array2<bool>,
    mine_count: CellCount,
}

impl MineLayout {
    pub(crate) fn from_mine_mask(mine_mask: Array2<bool>) -> Self {
        let mine_count = mine_mask.iter().filter(|&&is_mine| is_mine).count() as CellCount;
        Self {
            mine_mask,
            mine_count,
        }
    }

    /// Builds a layout with mines at exactly the given positions; duplicates collapse.
    pub fn from_mine_coords((rows, cols): Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        // validates the dimensions alone, the mine count is checked below
        GameConfig::new(rows, cols, 0)?;
        let mut mine_mask: Array2<bool> = Array2::default(nd_index((rows, cols)));

        for &(row, col) in mine_coords {
            if row >= rows || col >= cols {
                return Err(GameError::OutOfBounds { row, col });
            }
            mine_mask[nd_index((row, col))] = true;
        }

        let layout = Self::from_mine_mask(mine_mask);
        GameConfig::new(rows, cols, layout.mine_count)?;
        Ok(layout)
    }

    pub fn game_config(&self) -> GameConfig {
        let (rows, cols) = self.size();
        GameConfig::new_unchecked(rows, cols, self.mine_count)
    }

    pub fn size(&self) -> Coord2 {
        let (rows, cols) = self.mine_mask.dim();
        (rows as Coord, cols as Coord)
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self[coords]
    }

    pub fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        neighbors(coords, self.size())
            .filter(|&pos| self[pos])
            .count() as u8
    }

    pub fn iter_mines(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.mine_mask
            .indexed_iter()
            .filter(|&(_, &is_mine)| is_mine)
            .map(|((row, col), _)| (row as Coord, col as Coord))
    }
}

impl Index<Coord2> for MineLayout {
    type Output = bool;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.mine_mask[nd_index(coords)]
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FlagOutcome {
    NoChange,
    Flagged,
    Unflagged,
}

impl FlagOutcome {
    /// Whether this outcome could have caused an update to the board
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    HitMine,
    Won,
}

impl RevealOutcome {
    /// Whether this outcome could have caused an update to the board
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            NoChange => false,
            Revealed => true,
            HitMine => true,
            Won => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_rejects_degenerate_boards() {
        assert_eq!(
            GameConfig::new(0, 5, 0),
            Err(GameError::InvalidConfiguration {
                rows: 0,
                cols: 5,
                mines: 0
            })
        );
        assert!(GameConfig::new(5, 0, 0).is_err());
    }

    #[test]
    fn config_requires_a_safe_cell() {
        assert!(GameConfig::new(3, 3, 9).is_err());
        assert!(GameConfig::new(3, 3, 10).is_err());
        let config = GameConfig::new(3, 3, 8).unwrap();
        assert_eq!(config.safe_cells(), 1);
        assert_eq!(config.total_cells(), 9);
    }

    #[test]
    fn largest_board_counts_every_cell() {
        let config = GameConfig::new(Coord::MAX, Coord::MAX, 1).unwrap();
        assert_eq!(config.total_cells(), 65_535 * 65_535);
        assert_eq!(config.safe_cells(), 65_535 * 65_535 - 1);
    }

    #[test]
    fn config_validates_coords() {
        let config = GameConfig::new(2, 4, 1).unwrap();
        assert_eq!(config.validate_coords((1, 3)), Ok((1, 3)));
        assert_eq!(
            config.validate_coords((2, 0)),
            Err(GameError::OutOfBounds { row: 2, col: 0 })
        );
        assert_eq!(
            config.validate_coords((0, 4)),
            Err(GameError::OutOfBounds { row: 0, col: 4 })
        );
    }

    #[test]
    fn deserialized_config_is_validated() {
        let full = serde_json::from_str::<GameConfig>(r#"{"rows":2,"cols":2,"mines":4}"#);
        let err = full.unwrap_err().to_string();
        assert!(err.contains("Invalid configuration"), "{}", err);

        assert!(serde_json::from_str::<GameConfig>(r#"{"rows":3,"cols":3,"mines":9}"#).is_err());
        assert!(serde_json::from_str::<GameConfig>(r#"{"rows":0,"cols":3,"mines":0}"#).is_err());

        let config = GameConfig::new(4, 5, 6).unwrap();
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(json, r#"{"rows":4,"cols":5,"mines":6}"#);
        assert_eq!(serde_json::from_str::<GameConfig>(&json).unwrap(), config);
    }

    #[test]
    fn default_config_is_bootstrap_board() {
        let config = GameConfig::default();
        assert_eq!(config.size(), (10, 10));
        assert_eq!(config.mines(), 15);
    }

    #[test]
    fn layout_collapses_duplicate_mines() {
        let layout = MineLayout::from_mine_coords((3, 3), &[(0, 0), (0, 0), (2, 1)]).unwrap();
        assert_eq!(layout.mine_count(), 2);
        assert_eq!(layout.iter_mines().collect::<Vec<_>>(), vec![(0, 0), (2, 1)]);
    }

    #[test]
    fn layout_rejects_bad_input() {
        assert_eq!(
            MineLayout::from_mine_coords((2, 2), &[(2, 0)]),
            Err(GameError::OutOfBounds { row: 2, col: 0 })
        );
        assert!(matches!(
            MineLayout::from_mine_coords((1, 2), &[(0, 0), (0, 1)]),
            Err(GameError::InvalidConfiguration { .. })
        ));
        assert!(MineLayout::from_mine_coords((0, 2), &[]).is_err());
    }

    #[test]
    fn adjacent_counts_follow_fixed_layout() {
        let layout = MineLayout::from_mine_coords((3, 4), &[(0, 0), (1, 2)]).unwrap();
        assert_eq!(layout.adjacent_mine_count((0, 1)), 2);
        assert_eq!(layout.adjacent_mine_count((1, 1)), 2);
        assert_eq!(layout.adjacent_mine_count((2, 3)), 1);
        assert_eq!(layout.adjacent_mine_count((2, 0)), 0);
        assert_eq!(layout.adjacent_mine_count((0, 3)), 1);
    }

    #[test]
    fn outcomes_report_updates() {
        assert!(!RevealOutcome::NoChange.has_update());
        assert!(RevealOutcome::HitMine.has_update());
        assert!(!FlagOutcome::NoChange.has_update());
        assert!(FlagOutcome::Unflagged.has_update());
    }
}
