use std::fmt;
use sweeper_core::{Coord, Field, Tile, TileKind, TileState};
use thiserror::Error;

/// Rows are labelled with a single letter.
pub const MAX_ROWS: Coord = 26;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("At most 26 rows can be shown, field has {0}")]
    TooManyRows(Coord),
}

/// Text rendering of a field as the player sees it.
pub struct BoardView<'a>(&'a Field);

impl<'a> BoardView<'a> {
    pub fn new(field: &'a Field) -> Result<Self, BoardError> {
        if field.rows() > MAX_ROWS {
            return Err(BoardError::TooManyRows(field.rows()));
        }
        Ok(Self(field))
    }
}

fn glyph(tile: Tile) -> char {
    match (tile.state(), tile.kind()) {
        (TileState::Closed, _) => '-',
        (TileState::Marked, _) => 'M',
        (TileState::Open, TileKind::Mine) => 'X',
        (TileState::Open, TileKind::Clue(count)) => char::from(b'0' + count),
    }
}

impl fmt::Display for BoardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let field = self.0;
        let (rows, columns) = field.size();
        let width = (columns - 1).to_string().len();

        write!(f, " ")?;
        for column in 0..columns {
            write!(f, " {column:>width$}")?;
        }
        writeln!(f)?;

        for row in 0..rows {
            write!(f, "{}", char::from(b'A' + row))?;
            for column in 0..columns {
                let tile = field.tile((row, column)).map_err(|_| fmt::Error)?;
                write!(f, " {:>width$}", glyph(tile))?;
            }
            writeln!(f)?;
        }

        write!(f, "Remaining mines: {}", field.remaining_mine_count())
    }
}
