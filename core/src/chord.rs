use crate::*;

impl Board {
    /// Whether `index` shows a number matched by the flags around it.
    pub fn is_chordable(&self, index: CellIndex) -> bool {
        match self.cell(index).number() {
            Some(count) => count == self.count_neighbors(index, DisplayCell::is_flag),
            None => false,
        }
    }

    /// Reveals every hidden neighbor of a satisfied number, flagged neighbors are kept.
    ///
    /// A misplaced flag means one of the revealed neighbors is a mine, reported as [`RevealOutcome::HitMine`].
    pub fn open_all(&mut self, index: CellIndex) -> RevealOutcome {
        if !self.is_chordable(index) {
            return RevealOutcome::NoChange;
        }

        self.geometry()
            .neighbors(index)
            .into_iter()
            .map(|neighbor| self.reveal_single(neighbor))
            .fold(RevealOutcome::NoChange, core::ops::BitOr::bitor)
    }
}
