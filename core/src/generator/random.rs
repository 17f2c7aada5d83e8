use super::*;

/// Purely random placement: draws uniform `(row, column)` pairs with replacement and
/// keeps drawing until the requested number of distinct tiles hold a mine.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomMinefieldGenerator {
    seed: u64,
}

impl RandomMinefieldGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl MinefieldGenerator for RandomMinefieldGenerator {
    fn generate(self, config: FieldConfig) -> MineLayout {
        use rand::prelude::*;

        let (rows, columns) = config.size;
        let total_tiles = config.total_tiles();
        log::debug!(
            "Generating {}x{} minefield with {} mines, seed: {}",
            rows,
            columns,
            config.mines,
            self.seed
        );

        // optimize for full boards
        if config.mines >= total_tiles {
            if config.mines > total_tiles {
                log::warn!(
                    "Minefield already full, generated anyway, requested {} but only fits {}",
                    config.mines,
                    total_tiles
                );
            }
            return MineLayout::from_mine_mask(Array2::from_elem(config.size.to_nd_index(), true));
        }

        let mut mine_mask: Array2<bool> = Array2::default(config.size.to_nd_index());
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut mines_placed: CellCount = 0;
        let mut collisions: usize = 0;

        while mines_placed < config.mines {
            let coords: Coord2 = (rng.random_range(0..rows), rng.random_range(0..columns));
            let tile = &mut mine_mask[coords.to_nd_index()];
            if *tile {
                collisions += 1;
                continue;
            }
            *tile = true;
            mines_placed += 1;
        }
        log::trace!(
            "Placed {} mines after {} collisions",
            mines_placed,
            collisions
        );

        MineLayout {
            mine_mask,
            mine_count: mines_placed,
        }
    }
}
