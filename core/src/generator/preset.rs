use alloc::vec::Vec;

use super::*;

/// Replays a known layout, used for tests and for reproducing reported boards.
///
/// A first reveal on a preset mine moves that mine to the first free cell in index order, so the first click stays
/// safe.
#[derive(Clone, Debug, PartialEq)]
pub struct PresetMineFieldGenerator {
    config: BoardConfig,
    mines: Vec<CellIndex>,
}

impl PresetMineFieldGenerator {
    pub fn new(config: BoardConfig, mines: &[CellIndex]) -> Result<Self> {
        let field = MineField::from_mines(config.geometry(), mines)?;
        if field.mine_count() != config.mines {
            return Err(GameError::MineCountMismatch {
                actual: field.mine_count(),
                expected: config.mines,
            });
        }
        Ok(Self {
            config,
            mines: mines.to_vec(),
        })
    }
}

impl MineFieldGenerator for PresetMineFieldGenerator {
    fn check(&self, config: BoardConfig) -> Result<()> {
        if config == self.config {
            Ok(())
        } else {
            Err(GameError::ConfigMismatch)
        }
    }

    fn generate(&mut self, config: BoardConfig, first: CellIndex) -> MineField {
        let geometry = config.geometry();
        let mut field = MineField::empty(geometry);
        let mut displaced = false;

        for &index in &self.mines {
            if index == first {
                displaced = true;
            } else {
                field.plant(index);
            }
        }

        if displaced {
            let mines = &self.mines;
            let replacement = (0..geometry.cell_count())
                .find(|&index| index != first && !mines.contains(&index));
            if let Some(replacement) = replacement {
                log::warn!(
                    "First reveal at {} was a preset mine, moved to {}",
                    first,
                    replacement
                );
                field.plant(replacement);
            }
        }

        field
    }
}
