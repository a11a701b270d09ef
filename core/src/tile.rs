use core::fmt;

use serde::{Deserialize, Serialize};

/// Ground truth of a cell, fixed once the mine field is placed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrueValue {
    Clear(u8),
    Mine,
}

/// What the player currently sees for a cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DisplayCell {
    #[default]
    Unknown,
    Flag,
    Revealed(TrueValue),
}

impl DisplayCell {
    pub const MINE_CODE: u8 = 9;
    pub const FLAG_CODE: u8 = 10;
    pub const UNKNOWN_CODE: u8 = 11;

    pub const fn is_unknown(self) -> bool {
        matches!(self, Self::Unknown)
    }

    pub const fn is_flag(self) -> bool {
        matches!(self, Self::Flag)
    }

    /// Adjacent mine count of a revealed clear cell.
    pub const fn number(self) -> Option<u8> {
        match self {
            Self::Revealed(TrueValue::Clear(count)) => Some(count),
            _ => None,
        }
    }

    /// Renderer code: `0..=8` for numbers, then mine, flag and unknown.
    pub const fn code(self) -> u8 {
        match self {
            Self::Revealed(TrueValue::Clear(count)) => count,
            Self::Revealed(TrueValue::Mine) => Self::MINE_CODE,
            Self::Flag => Self::FLAG_CODE,
            Self::Unknown => Self::UNKNOWN_CODE,
        }
    }
}

impl From<TrueValue> for DisplayCell {
    fn from(value: TrueValue) -> Self {
        Self::Revealed(value)
    }
}

/// Single-character terminal glyph.
impl fmt::Display for DisplayCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use fmt::Write;
        match self {
            Self::Unknown => f.write_char('#'),
            Self::Flag => f.write_char('F'),
            Self::Revealed(TrueValue::Mine) => f.write_char('*'),
            Self::Revealed(TrueValue::Clear(0)) => f.write_char('.'),
            Self::Revealed(TrueValue::Clear(count)) => write!(f, "{count}"),
        }
    }
}
