#![no_std]

extern crate alloc;

use core::ops::BitOr;
use serde::{Deserialize, Serialize};

pub use board::*;
pub use engine::*;
pub use error::*;
pub use flags::*;
pub use generator::*;
pub use geometry::*;
pub use minefield::*;
pub use tile::*;
pub use types::*;

mod board;
mod chord;
mod engine;
mod error;
mod flags;
mod generator;
mod geometry;
mod minefield;
mod reveal;
mod tile;
mod types;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    pub width: Coord,
    pub height: Coord,
    pub mines: CellCount,
}

impl BoardConfig {
    /// The 30 by 30 board with 150 mines.
    pub const STANDARD: Self = Self::new_unchecked(30, 30, 150);

    pub const fn new_unchecked(width: Coord, height: Coord, mines: CellCount) -> Self {
        Self {
            width,
            height,
            mines,
        }
    }

    /// Validates that rejection sampling around the first reveal can always finish.
    pub fn new(width: Coord, height: Coord, mines: CellCount) -> Result<Self> {
        Self::new_unchecked(width, height, mines).validate()
    }

    pub fn validate(self) -> Result<Self> {
        let cells = self.total_cells();
        if cells == 0 {
            return Err(GameError::EmptyBoard);
        }
        if self.mines == 0 {
            return Err(GameError::NoMines);
        }
        if self.mines >= cells.saturating_sub(1) {
            return Err(GameError::TooManyMines {
                mines: self.mines,
                cells,
            });
        }
        Ok(self)
    }

    /// Same board, different mine count. Not validated.
    pub const fn with_mines(self, mines: CellCount) -> Self {
        Self { mines, ..self }
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.width, self.height)
    }

    pub const fn geometry(&self) -> BoardGeometry {
        BoardGeometry::new(self.width, self.height)
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Outcome of revealing one or more cells.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    HitMine(CellIndex),
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

/// Merges outcomes when several cells are revealed at once, the first mine hit wins.
impl BitOr for RevealOutcome {
    type Output = RevealOutcome;

    fn bitor(self, rhs: Self) -> Self::Output {
        use RevealOutcome::*;
        match (self, rhs) {
            (HitMine(index), _) => HitMine(index),
            (_, HitMine(index)) => HitMine(index),
            (Revealed, _) => Revealed,
            (_, Revealed) => Revealed,
            (NoChange, NoChange) => NoChange,
        }
    }
}
