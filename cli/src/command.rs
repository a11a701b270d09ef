use std::str::FromStr;

use nightsweeper_core::Action;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    #[error("Empty command")]
    Empty,
    #[error("Unknown command {0:?}, expected r, f, c, n or q")]
    Unknown(String),
    #[error("Expected a column and a row")]
    MissingCoordinate,
    #[error("Invalid coordinate {0:?}")]
    InvalidCoordinate(String),
    #[error("Unexpected input {0:?}")]
    Trailing(String),
}

/// One line of player input.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Zero-based column and row, possibly off the board.
    Play { action: Action, x: u32, y: u32 },
    Restart,
    Quit,
}

impl FromStr for Command {
    type Err = ParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let name = words.next().ok_or(ParseError::Empty)?;

        let action = match name.to_ascii_lowercase().as_str() {
            "r" | "reveal" => Action::Reveal,
            "f" | "flag" => Action::ToggleFlag,
            "c" | "chord" => Action::Chord,
            "n" | "new" | "restart" => return expect_end(words, Command::Restart),
            "q" | "quit" => return expect_end(words, Command::Quit),
            _ => return Err(ParseError::Unknown(name.to_string())),
        };

        let x = coordinate(words.next())?;
        let y = coordinate(words.next())?;
        expect_end(words, Command::Play { action, x, y })
    }
}

fn coordinate(word: Option<&str>) -> Result<u32, ParseError> {
    let word = word.ok_or(ParseError::MissingCoordinate)?;
    word.parse()
        .map_err(|_| ParseError::InvalidCoordinate(word.to_string()))
}

fn expect_end<'a>(mut words: impl Iterator<Item = &'a str>, command: Command) -> Result<Command, ParseError> {
    match words.next() {
        None => Ok(command),
        Some(word) => Err(ParseError::Trailing(word.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_moves() {
        assert_eq!(
            "r 3 4".parse::<Command>(),
            Ok(Command::Play {
                action: Action::Reveal,
                x: 3,
                y: 4
            })
        );
        assert_eq!(
            "  FLAG 0 29 ".parse::<Command>(),
            Ok(Command::Play {
                action: Action::ToggleFlag,
                x: 0,
                y: 29
            })
        );
        assert_eq!(
            "c 300 1".parse::<Command>(),
            Ok(Command::Play {
                action: Action::Chord,
                x: 300,
                y: 1
            })
        );
    }

    #[test]
    fn parses_controls() {
        assert_eq!("n".parse::<Command>(), Ok(Command::Restart));
        assert_eq!("quit".parse::<Command>(), Ok(Command::Quit));
    }

    #[test]
    fn rejects_malformed_lines() {
        assert_eq!("".parse::<Command>(), Err(ParseError::Empty));
        assert_eq!("r 3".parse::<Command>(), Err(ParseError::MissingCoordinate));
        assert_eq!(
            "r x 3".parse::<Command>(),
            Err(ParseError::InvalidCoordinate("x".to_string()))
        );
        assert_eq!(
            "q now".parse::<Command>(),
            Err(ParseError::Trailing("now".to_string()))
        );
        assert_eq!(
            "jump".parse::<Command>(),
            Err(ParseError::Unknown("jump".to_string()))
        );
    }
}
