use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Mine positions and per-cell adjacent mine counts.
///
/// Mine cells carry a neighbor count too; it is never shown because the mine takes precedence.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MineField {
    geometry: BoardGeometry,
    mines: Array2<bool>,
    adjacent: Array2<u8>,
    count: CellCount,
}

impl MineField {
    /// A field without mines, every cell a zero.
    pub fn empty(geometry: BoardGeometry) -> Self {
        Self {
            geometry,
            mines: Array2::default(geometry.nd_shape()),
            adjacent: Array2::zeros(geometry.nd_shape()),
            count: 0,
        }
    }

    pub fn from_mines(geometry: BoardGeometry, mines: &[CellIndex]) -> Result<Self> {
        let mut field = Self::empty(geometry);
        for &index in mines {
            if !geometry.contains(index) {
                return Err(GameError::InvalidIndex(index));
            }
            if !field.plant(index) {
                return Err(GameError::DuplicateMine(index));
            }
        }
        Ok(field)
    }

    /// Marks `index` as a mine and bumps its neighbors, returns `false` if it already was one.
    pub(crate) fn plant(&mut self, index: CellIndex) -> bool {
        let pos = self.geometry.nd_index(index);
        if self.mines[pos] {
            return false;
        }
        self.mines[pos] = true;
        self.count += 1;
        for neighbor in self.geometry.neighbors(index) {
            let count = &mut self.adjacent[self.geometry.nd_index(neighbor)];
            *count = (*count + 1).min(8);
        }
        true
    }

    pub fn geometry(&self) -> BoardGeometry {
        self.geometry
    }

    pub fn mine_count(&self) -> CellCount {
        self.count
    }

    pub fn contains_mine(&self, index: CellIndex) -> bool {
        self.mines[self.geometry.nd_index(index)]
    }

    /// Neighbor mine count, also tracked for mine cells.
    pub fn adjacent_mines(&self, index: CellIndex) -> u8 {
        self.adjacent[self.geometry.nd_index(index)]
    }

    pub fn true_value(&self, index: CellIndex) -> TrueValue {
        if self.contains_mine(index) {
            TrueValue::Mine
        } else {
            TrueValue::Clear(self.adjacent_mines(index))
        }
    }

    pub fn iter_mines(&self) -> impl Iterator<Item = CellIndex> + '_ {
        (0..self.geometry.cell_count()).filter(|&index| self.contains_mine(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_follow_planted_mines() {
        let geometry = BoardGeometry::new(3, 3);
        let field = MineField::from_mines(geometry, &[0, 8]).unwrap();

        assert_eq!(field.mine_count(), 2);
        assert_eq!(field.true_value(0), TrueValue::Mine);
        assert_eq!(field.true_value(4), TrueValue::Clear(2));
        assert_eq!(field.true_value(2), TrueValue::Clear(0));
        assert_eq!(field.true_value(1), TrueValue::Clear(1));
        // mines keep their own count internally
        assert_eq!(field.adjacent_mines(0), 0);
    }

    #[test]
    fn mine_surrounded_by_mines_counts_them() {
        let geometry = BoardGeometry::new(3, 3);
        let field = MineField::from_mines(geometry, &[0, 1, 2, 3, 4, 5, 6, 7, 8]).unwrap();
        assert_eq!(field.adjacent_mines(4), 8);
        assert_eq!(field.adjacent_mines(0), 3);
    }

    #[test]
    fn from_mines_rejects_bad_layouts() {
        let geometry = BoardGeometry::new(3, 3);
        assert_eq!(
            MineField::from_mines(geometry, &[9]),
            Err(GameError::InvalidIndex(9))
        );
        assert_eq!(
            MineField::from_mines(geometry, &[4, 4]),
            Err(GameError::DuplicateMine(4))
        );
    }
}
