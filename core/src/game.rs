use crate::*;

/// Owns the current board and the bookkeeping around finished games.
#[derive(Clone, Debug, PartialEq)]
pub struct Game {
    board: Board,
    game_over: bool,
}

impl Game {
    pub fn new(rows: Coord, cols: Coord, mines: CellCount) -> Result<Self> {
        Ok(Self::from_board(Board::new(rows, cols, mines)?))
    }

    /// Board with a reproducible mine layout.
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self::from_board(Board::with_placer(config, RandomPlacer::new(seed)))
    }

    pub fn from_board(board: Board) -> Self {
        Self {
            board,
            game_over: false,
        }
    }

    /// Starts over on a fresh random board. An invalid configuration leaves the
    /// current game untouched.
    pub fn reset(&mut self, rows: Coord, cols: Coord, mines: CellCount) -> Result<()> {
        let board = Board::new(rows, cols, mines)?;
        self.replace_board(board);
        Ok(())
    }

    /// Starts over with the dimensions and mine count of the current board.
    pub fn restart(&mut self) {
        let config = self.board.config();
        self.replace_board(Board::with_placer(config, RandomPlacer::from_entropy()));
    }

    pub fn replace_board(&mut self, board: Board) {
        log::debug!(
            "New {}x{} board with {} mines",
            board.rows(),
            board.cols(),
            board.mine_count()
        );
        self.board = board;
        self.game_over = false;
    }

    /// Read access for presentation layers; all changes go through `Game`.
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> GameStatus {
        self.board.status()
    }

    pub fn reveal_cell(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        let outcome = self.board.reveal_cell(coords)?;
        if outcome == RevealOutcome::HitMine {
            self.game_over = true;
            self.board.reveal_all_mines();
            log::debug!("Game over, all mines revealed");
        }
        Ok(outcome)
    }

    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<FlagOutcome> {
        self.board.toggle_flag(coords)
    }

    /// Set once a reveal hits a mine, cleared by the next reset.
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }
}
