use alloc::collections::VecDeque;

use ndarray::Array2;

use crate::*;

impl Board {
    /// Reveals a hidden cell, cascading through zero cells. Flagged or revealed cells are left alone.
    pub fn reveal_single(&mut self, index: CellIndex) -> RevealOutcome {
        if !self.cell(index).is_unknown() {
            return RevealOutcome::NoChange;
        }

        let value = self.true_value(index);
        self.set_cell(index, value.into());
        log::debug!("Reveal cell {}: {:?}", index, value);

        match value {
            TrueValue::Mine => RevealOutcome::HitMine(index),
            TrueValue::Clear(0) => {
                self.reveal_region(index);
                RevealOutcome::Revealed
            }
            TrueValue::Clear(_) => RevealOutcome::Revealed,
        }
    }

    /// Flood-fills outwards from `start`, which is expanded whatever its value.
    ///
    /// Each cell is handled at most once per call; only zero cells seed further expansion and flagged cells are
    /// skipped, including a flagged `start`.
    pub fn reveal_region(&mut self, start: CellIndex) {
        if self.cell(start).is_flag() {
            return;
        }

        let geometry = self.geometry();
        self.reset_visited();

        self.visited[geometry.nd_index(start)] = true;
        let start_value = self.true_value(start);
        self.set_cell(start, start_value.into());

        let mut to_visit = VecDeque::from([start]);
        let mut revealed = 1;
        while let Some(cell) = to_visit.pop_front() {
            for neighbor in geometry.neighbors(cell) {
                let pos = geometry.nd_index(neighbor);
                if self.visited[pos] {
                    continue;
                }
                self.visited[pos] = true;

                if self.cell(neighbor).is_flag() {
                    log::trace!("Skipping flagged cell {}", neighbor);
                    continue;
                }

                let value = self.true_value(neighbor);
                self.set_cell(neighbor, value.into());
                revealed += 1;

                if value == TrueValue::Clear(0) {
                    to_visit.push_back(neighbor);
                }
            }
        }

        log::trace!("Flood-fill from {} touched {} cells", start, revealed);
    }

    fn reset_visited(&mut self) {
        let shape = self.geometry().nd_shape();
        if self.visited.shape() == shape {
            self.visited.fill(false);
        } else {
            self.visited = Array2::default(shape);
        }
    }
}
