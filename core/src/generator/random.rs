use rand::prelude::*;
use rand::rngs::SmallRng;

use super::*;

/// Uniform placement by rejection sampling, the first revealed cell is never drawn as a mine.
#[derive(Clone, Debug)]
pub struct RandomMineFieldGenerator {
    rng: SmallRng,
}

impl RandomMineFieldGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl MineFieldGenerator for RandomMineFieldGenerator {
    fn generate(&mut self, config: BoardConfig, first: CellIndex) -> MineField {
        let geometry = config.geometry();
        let mut field = MineField::empty(geometry);
        let total_cells = config.total_cells();

        // terminates because validated configs keep at least two cells free
        let mut placed = 0;
        while placed < config.mines {
            let index: CellIndex = self.rng.random_range(0..total_cells);
            if index != first && field.plant(index) {
                placed += 1;
            }
        }

        log::debug!(
            "Placed {} mines on {}x{} board, first reveal at {:?}",
            placed,
            config.width,
            config.height,
            geometry.coords(first)
        );
        field
    }
}
