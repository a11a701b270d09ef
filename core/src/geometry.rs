use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::*;

/// Up to eight neighbor indices, kept inline.
pub type Neighbors = SmallVec<[CellIndex; 8]>;

/// Neighbor offsets in visiting order: the left column top to bottom, then the bottom cell, the right column
/// bottom to top, and finally the top cell.
const DISPLACEMENTS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
];

/// Index arithmetic over a row-major grid, no wraparound between rows or columns.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardGeometry {
    width: Coord,
    height: Coord,
}

impl BoardGeometry {
    pub const fn new(width: Coord, height: Coord) -> Self {
        Self { width, height }
    }

    pub const fn width(&self) -> Coord {
        self.width
    }

    pub const fn height(&self) -> Coord {
        self.height
    }

    pub const fn cell_count(&self) -> CellCount {
        mult(self.width, self.height)
    }

    pub const fn contains(&self, index: CellIndex) -> bool {
        index < self.cell_count()
    }

    pub fn coords(&self, index: CellIndex) -> Coord2 {
        let width = CellIndex::from(self.width);
        // both fit: x < width and y < height for any contained index
        ((index % width) as Coord, (index / width) as Coord)
    }

    pub fn index_of(&self, (x, y): Coord2) -> Option<CellIndex> {
        if x < self.width && y < self.height {
            Some(CellIndex::from(y) * CellIndex::from(self.width) + CellIndex::from(x))
        } else {
            None
        }
    }

    /// `[row, column]` position of `index` inside an `ndarray` grid of this shape.
    pub fn nd_index(&self, index: CellIndex) -> [usize; 2] {
        self.coords(index).to_nd_index()
    }

    /// Shape of an `ndarray` grid for this board.
    pub fn nd_shape(&self) -> [usize; 2] {
        [self.height.into(), self.width.into()]
    }

    pub fn neighbors(&self, index: CellIndex) -> Neighbors {
        let center = self.coords(index);
        DISPLACEMENTS
            .iter()
            .filter_map(|&delta| self.apply_delta(center, delta))
            .collect()
    }

    /// Applies `delta` to `coords`, returning an index only when it remains in bounds.
    fn apply_delta(&self, (x, y): Coord2, (dx, dy): (i8, i8)) -> Option<CellIndex> {
        let next_x = x.checked_add_signed(dx)?;
        let next_y = y.checked_add_signed(dy)?;
        self.index_of((next_x, next_y))
    }
}
