use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;
pub use random::*;

mod random;

pub trait MinefieldGenerator {
    fn generate(self, config: FieldConfig) -> MineLayout;
}

/// Fixed placement of mines on a field.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MineLayout {
    mine_mask: Array2<bool>,
    mine_count: CellCount,
}

impl MineLayout {
    pub fn from_mine_mask(mine_mask: Array2<bool>) -> Self {
        let mine_count = mine_mask.iter().filter(|&&is_mine| is_mine).count() as CellCount;
        Self {
            mine_mask,
            mine_count,
        }
    }

    /// Builds a layout with mines exactly at `mine_coords`; duplicates count once.
    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        if size.0 == 0 || size.1 == 0 {
            return Err(GameError::EmptyField);
        }

        let mut mine_mask: Array2<bool> = Array2::default(size.to_nd_index());
        for &coords in mine_coords {
            if coords.0 >= size.0 || coords.1 >= size.1 {
                return Err(GameError::OutOfBounds);
            }
            mine_mask[coords.to_nd_index()] = true;
        }

        Ok(Self::from_mine_mask(mine_mask))
    }

    pub fn size(&self) -> Coord2 {
        grid_size(&self.mine_mask)
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self[coords]
    }

    pub fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        self.mine_mask
            .iter_neighbors(coords)
            .filter(|&pos| self[pos])
            .count() as u8
    }

    pub fn tile_kind(&self, coords: Coord2) -> TileKind {
        if self[coords] {
            TileKind::Mine
        } else {
            TileKind::Clue(self.adjacent_mine_count(coords))
        }
    }
}

impl Index<Coord2> for MineLayout {
    type Output = bool;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.mine_mask[coords.to_nd_index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_mine_coords_rejects_out_of_range_mine() {
        assert_eq!(
            MineLayout::from_mine_coords((2, 2), &[(2, 0)]),
            Err(GameError::OutOfBounds)
        );
    }

    #[test]
    fn from_mine_coords_counts_duplicates_once() {
        let layout = MineLayout::from_mine_coords((2, 2), &[(0, 0), (0, 0)]).unwrap();

        assert_eq!(layout.mine_count(), 1);
    }

    #[test]
    fn from_mine_mask_recounts_mines() {
        let mut mine_mask: Array2<bool> = Array2::default([1, 2]);
        mine_mask[[0, 1]] = true;

        let layout = MineLayout::from_mine_mask(mine_mask);
        let mut field = Field::from_layout(&layout);

        assert_eq!(layout.mine_count(), 1);
        assert!(!layout.contains_mine((0, 0)));
        assert_eq!(field.open_tile((0, 0)).unwrap(), RevealOutcome::Won);
        assert_eq!(field.state(), GameState::Solved);
    }

    #[test]
    fn adjacent_count_is_clipped_at_edges() {
        let layout = MineLayout::from_mine_coords((3, 3), &[(0, 0), (0, 2), (2, 1)]).unwrap();

        assert_eq!(layout.adjacent_mine_count((0, 1)), 2);
        assert_eq!(layout.adjacent_mine_count((1, 1)), 3);
        assert_eq!(layout.adjacent_mine_count((2, 2)), 1);
        assert_eq!(layout.tile_kind((0, 0)), TileKind::Mine);
        assert_eq!(layout.tile_kind((1, 0)), TileKind::Clue(2));
    }
}
