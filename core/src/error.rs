use thiserror::Error;

use crate::*;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Cell index {0} is outside the board")]
    InvalidIndex(CellIndex),
    #[error("Board must have at least one row and one column")]
    EmptyBoard,
    #[error("Board needs at least one mine")]
    NoMines,
    #[error("Too many mines: {mines} mines need more than {cells} cells")]
    TooManyMines { mines: CellCount, cells: CellCount },
    #[error("Mine layout has {actual} mines but the board expects {expected}")]
    MineCountMismatch { actual: CellCount, expected: CellCount },
    #[error("Mine at index {0} listed more than once")]
    DuplicateMine(CellIndex),
    #[error("Mine layout was built for a different board")]
    ConfigMismatch,
}

pub type Result<T> = core::result::Result<T, GameError>;
