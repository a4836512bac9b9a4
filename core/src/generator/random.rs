use super::*;
use ndarray::Array2;

/// Uniform placement without replacement, reproducible from its seed.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomPlacer {
    seed: u64,
}

impl RandomPlacer {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Picks a fresh seed; it is logged so the board can be replayed.
    pub fn from_entropy() -> Self {
        let seed = rand::random();
        log::debug!("placement seed: {}", seed);
        Self::new(seed)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl MinePlacer for RandomPlacer {
    fn place(self, config: &GameConfig) -> MineLayout {
        use rand::prelude::*;
        use rand::seq::index;

        let cols = usize::from(config.cols());
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut mine_mask: Array2<bool> = Array2::default(nd_index(config.size()));

        // sampling indices is bounded even when nearly every cell is a mine
        let places = index::sample(
            &mut rng,
            config.total_cells() as usize,
            config.mines() as usize,
        );
        for place in places {
            mine_mask[[place / cols, place % cols]] = true;
        }

        let layout = MineLayout::from_mine_mask(mine_mask);
        log::debug!(
            "placed {} mines on {}x{} board",
            layout.mine_count(),
            config.rows(),
            config.cols()
        );
        layout
    }
}
