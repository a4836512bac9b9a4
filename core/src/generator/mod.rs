use crate::*;
pub use random::*;

mod random;

/// Decides where the mines of a new board go.
pub trait MinePlacer {
    fn place(self, config: &GameConfig) -> MineLayout;
}
