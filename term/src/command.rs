use std::str::FromStr;
use sweeper_core::{Coord, Coord2};
use thiserror::Error;

/// One line of player input.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Open(Coord2),
    Mark(Coord2),
    Exit,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Empty command")]
    Empty,
    #[error("Unknown action '{0}', expected O (open), M (mark) or X (exit)")]
    UnknownAction(char),
    #[error("Missing row letter")]
    MissingRow,
    #[error("Invalid row '{0}', expected a letter")]
    InvalidRow(char),
    #[error("Invalid column '{0}', expected a number")]
    InvalidColumn(String),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let input = input.trim().to_ascii_uppercase();
        let mut chars = input.chars();

        let action = chars.next().ok_or(CommandError::Empty)?;
        if action == 'X' && chars.as_str().is_empty() {
            return Ok(Command::Exit);
        }
        if action != 'O' && action != 'M' {
            return Err(CommandError::UnknownAction(action));
        }

        let row = match chars.next() {
            Some(letter @ 'A'..='Z') => letter as Coord - b'A',
            Some(other) => return Err(CommandError::InvalidRow(other)),
            None => return Err(CommandError::MissingRow),
        };

        let column = chars.as_str();
        if column.is_empty() || !column.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CommandError::InvalidColumn(column.to_owned()));
        }
        let column: Coord = column
            .parse()
            .map_err(|_| CommandError::InvalidColumn(column.to_owned()))?;

        Ok(match action {
            'O' => Command::Open((row, column)),
            _ => Command::Mark((row, column)),
        })
    }
}
