#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use error::*;
pub use field::*;
pub use generator::*;
pub use tile::*;
pub use types::*;

mod error;
mod field;
mod generator;
mod tile;
mod types;

/// Dimensions and mine count of a field, validated on construction.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldConfig {
    pub size: Coord2,
    pub mines: CellCount,
}

impl FieldConfig {
    pub fn new(rows: Coord, columns: Coord, mines: CellCount) -> Result<Self> {
        if rows == 0 || columns == 0 {
            return Err(GameError::EmptyField);
        }
        if mines > mult(rows, columns) {
            return Err(GameError::TooManyMines);
        }
        Ok(Self {
            size: (rows, columns),
            mines,
        })
    }

    pub const fn rows(&self) -> Coord {
        self.size.0
    }

    pub const fn columns(&self) -> Coord {
        self.size.1
    }

    pub const fn total_tiles(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }

    pub const fn safe_tiles(&self) -> CellCount {
        self.total_tiles() - self.mines
    }
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            size: (10, 10),
            mines: 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_rejects_empty_dimensions() {
        assert_eq!(FieldConfig::new(0, 5, 0), Err(GameError::EmptyField));
        assert_eq!(FieldConfig::new(5, 0, 0), Err(GameError::EmptyField));
    }

    #[test]
    fn config_rejects_more_mines_than_tiles() {
        assert_eq!(FieldConfig::new(3, 3, 10), Err(GameError::TooManyMines));
    }

    #[test]
    fn config_accepts_full_and_empty_minefields() {
        assert_eq!(FieldConfig::new(3, 3, 9).unwrap().safe_tiles(), 0);
        assert_eq!(FieldConfig::new(1, 1, 0).unwrap().safe_tiles(), 1);
    }

    #[test]
    fn default_config_matches_classic_console_game() {
        let config = FieldConfig::default();

        assert_eq!((config.rows(), config.columns()), (10, 10));
        assert_eq!(config.mines, 10);
    }
}
