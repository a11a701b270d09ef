use core::fmt;

use ndarray::{Array2, ArrayView2};
use serde::{Deserialize, Serialize};

use crate::*;

/// Grid state shared by the reveal, chord and flag operations.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Board {
    config: BoardConfig,
    pub(crate) field: MineField,
    pub(crate) display: Array2<DisplayCell>,
    /// Scratch set for region reveals, only meaningful inside one call.
    #[serde(skip, default)]
    pub(crate) visited: Array2<bool>,
    pub(crate) flags: FlagCounters,
}

impl Board {
    pub fn new(config: BoardConfig) -> Self {
        let geometry = config.geometry();
        Self {
            config,
            field: MineField::empty(geometry),
            display: Array2::default(geometry.nd_shape()),
            visited: Array2::default(geometry.nd_shape()),
            flags: FlagCounters::default(),
        }
    }

    /// Hides every cell and forgets the mine field.
    pub fn clear(&mut self) {
        self.field = MineField::empty(self.geometry());
        self.display.fill(DisplayCell::Unknown);
        self.visited.fill(false);
        self.flags = FlagCounters::default();
    }

    /// Installs a freshly placed mine field, flag counters start over.
    pub(crate) fn install(&mut self, field: MineField) {
        self.field = field;
        self.flags = FlagCounters::default();
    }

    pub fn config(&self) -> BoardConfig {
        self.config
    }

    pub fn geometry(&self) -> BoardGeometry {
        self.config.geometry()
    }

    pub fn field(&self) -> &MineField {
        &self.field
    }

    pub fn flags(&self) -> FlagCounters {
        self.flags
    }

    pub fn cell(&self, index: CellIndex) -> DisplayCell {
        self.display[self.geometry().nd_index(index)]
    }

    pub fn true_value(&self, index: CellIndex) -> TrueValue {
        self.field.true_value(index)
    }

    /// Display grid indexed `[row, column]`.
    pub fn display(&self) -> ArrayView2<'_, DisplayCell> {
        self.display.view()
    }

    /// Renderer codes in cell index order.
    pub fn display_codes(&self) -> impl Iterator<Item = u8> + '_ {
        self.display.iter().map(|cell| cell.code())
    }

    pub(crate) fn set_cell(&mut self, index: CellIndex, cell: DisplayCell) {
        let pos = self.geometry().nd_index(index);
        self.display[pos] = cell;
    }

    pub(crate) fn count_neighbors(&self, index: CellIndex, pred: impl Fn(DisplayCell) -> bool) -> u8 {
        self.geometry()
            .neighbors(index)
            .into_iter()
            .filter(|&neighbor| pred(self.cell(neighbor)))
            .count() as u8
    }

    /// Shows every cell's true value except correctly flagged mines.
    ///
    /// Incorrect flags are demoted to their number, so the flag counters keep matching the grid.
    pub(crate) fn finalize(&mut self) {
        for index in 0..self.geometry().cell_count() {
            let value = self.field.true_value(index);
            match (self.cell(index), value) {
                (DisplayCell::Flag, TrueValue::Mine) => {}
                (DisplayCell::Flag, TrueValue::Clear(_)) => {
                    self.flags.incorrect -= 1;
                    self.set_cell(index, value.into());
                }
                _ => self.set_cell(index, value.into()),
            }
        }
    }
}

/// Compares what the board holds between calls, the reveal scratch set is left out.
impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.config == other.config
            && self.field == other.field
            && self.display == other.display
            && self.flags == other.flags
    }
}

/// Rows of terminal glyphs.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.display.rows() {
            for cell in row {
                write!(f, "{cell}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
