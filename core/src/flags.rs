use serde::{Deserialize, Serialize};

use crate::*;

/// Running counts of flagged cells, split by whether a mine is underneath.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlagCounters {
    pub correct: CellCount,
    pub incorrect: CellCount,
}

impl FlagCounters {
    pub const fn total(self) -> CellCount {
        self.correct + self.incorrect
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FlagOutcome {
    NoChange,
    Flagged,
    Unflagged,
}

impl FlagOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

impl Board {
    /// Flags a hidden cell or removes an existing flag, revealed cells are left alone.
    pub fn toggle_flag(&mut self, index: CellIndex) -> FlagOutcome {
        let is_mine = self.field.contains_mine(index);
        match self.cell(index) {
            DisplayCell::Unknown => {
                self.set_cell(index, DisplayCell::Flag);
                if is_mine {
                    self.flags.correct += 1;
                } else {
                    self.flags.incorrect += 1;
                }
                FlagOutcome::Flagged
            }
            DisplayCell::Flag => {
                self.set_cell(index, DisplayCell::Unknown);
                if is_mine {
                    self.flags.correct -= 1;
                } else {
                    self.flags.incorrect -= 1;
                }
                FlagOutcome::Unflagged
            }
            DisplayCell::Revealed(_) => FlagOutcome::NoChange,
        }
    }

    /// Every mine carries a flag and no flag sits on a clear cell.
    pub fn all_mines_flagged(&self) -> bool {
        self.flags.correct == self.config().mines && self.flags.incorrect == 0
    }

    /// Mines minus placed flags, negative when over-flagged.
    pub fn mines_left(&self) -> i32 {
        i32::from(self.config().mines) - i32::from(self.flags.total())
    }
}
