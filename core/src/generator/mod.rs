use crate::*;
pub use preset::*;
pub use random::*;

mod preset;
mod random;

/// Places the mines of a new game once the first revealed cell is known.
pub trait MineFieldGenerator {
    /// Returns a field with exactly `config.mines` mines, none of them on `first`.
    fn generate(&mut self, config: BoardConfig, first: CellIndex) -> MineField;

    /// Rejects boards this generator cannot fill.
    fn check(&self, _config: BoardConfig) -> Result<()> {
        Ok(())
    }
}
