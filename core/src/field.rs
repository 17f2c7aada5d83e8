use alloc::collections::VecDeque;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - Playing -> Solved
/// - Playing -> Failed
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    Playing,
    /// Every safe tile is open
    Solved,
    /// A mine was opened
    Failed,
}

impl GameState {
    /// Indicates the game has ended and no moves can be made anymore
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Solved | Self::Failed)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::Playing
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MarkOutcome {
    NoChange,
    Changed,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    HitMine,
    Won,
}

/// Playing field: owns every tile and the authoritative game state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "StoredField")]
pub struct Field {
    tiles: Array2<Tile>,
    mine_count: CellCount,
    open_count: CellCount,
    marked_count: CellCount,
    state: GameState,
    triggered_mine: Option<Coord2>,
}

/// Field as read back from a snapshot, checked before it becomes a [`Field`].
#[derive(Deserialize)]
struct StoredField {
    tiles: Array2<Tile>,
    mine_count: CellCount,
    open_count: CellCount,
    marked_count: CellCount,
    state: GameState,
    triggered_mine: Option<Coord2>,
}

impl TryFrom<StoredField> for Field {
    type Error = GameError;

    fn try_from(stored: StoredField) -> Result<Self> {
        let (rows, columns) = stored.tiles.dim();
        if rows == 0 || columns == 0 {
            return Err(GameError::EmptyField);
        }
        let max = usize::from(Coord::MAX);
        if rows > max || columns > max {
            return Err(GameError::InconsistentField);
        }

        let size = (rows as Coord, columns as Coord);
        let (mut mines, mut open, mut marked) = (0usize, 0usize, 0usize);
        for ((row, column), tile) in stored.tiles.indexed_iter() {
            match tile.kind() {
                TileKind::Mine => mines += 1,
                TileKind::Clue(value) => {
                    let adjacent = NeighborIter::new((row as Coord, column as Coord), size)
                        .filter(|pos| stored.tiles[pos.to_nd_index()].is_mine())
                        .count();
                    if usize::from(value) != adjacent {
                        return Err(GameError::InconsistentField);
                    }
                }
            }
            match tile.state() {
                TileState::Open => open += 1,
                TileState::Marked => marked += 1,
                TileState::Closed => {}
            }
        }
        if mines != usize::from(stored.mine_count)
            || open != usize::from(stored.open_count)
            || marked != usize::from(stored.marked_count)
        {
            return Err(GameError::InconsistentField);
        }

        let field = Self {
            tiles: stored.tiles,
            mine_count: stored.mine_count,
            open_count: stored.open_count,
            marked_count: stored.marked_count,
            state: stored.state,
            triggered_mine: stored.triggered_mine,
        };
        if let Some(coords) = field.triggered_mine {
            field.validate_coords(coords)?;
        }
        Ok(field)
    }
}

impl Field {
    /// Randomly generated field, reproducible for a given `seed`.
    pub fn new(rows: Coord, columns: Coord, mines: CellCount, seed: u64) -> Result<Self> {
        let config = FieldConfig::new(rows, columns, mines)?;
        Ok(Self::generate(config, RandomMinefieldGenerator::new(seed)))
    }

    pub fn generate(config: FieldConfig, generator: impl MinefieldGenerator) -> Self {
        Self::from_layout(&generator.generate(config))
    }

    pub fn from_layout(layout: &MineLayout) -> Self {
        let size = layout.size();
        let tiles = Array2::from_shape_fn(size.to_nd_index(), |(row, column)| {
            Tile::new(layout.tile_kind((row as Coord, column as Coord)))
        });
        Self {
            tiles,
            mine_count: layout.mine_count(),
            open_count: 0,
            marked_count: 0,
            state: Default::default(),
            triggered_mine: None,
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn size(&self) -> Coord2 {
        grid_size(&self.tiles)
    }

    pub fn rows(&self) -> Coord {
        self.size().0
    }

    pub fn columns(&self) -> Coord {
        self.size().1
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn total_tiles(&self) -> CellCount {
        self.tiles.len() as CellCount
    }

    /// The mine that ended the game, if one was opened.
    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size.0 && coords.1 < size.1 {
            Ok(coords)
        } else {
            Err(GameError::OutOfBounds)
        }
    }

    pub fn tile(&self, coords: Coord2) -> Result<Tile> {
        let coords = self.validate_coords(coords)?;
        Ok(self.tiles[coords.to_nd_index()])
    }

    /// Number of tiles currently in `state`.
    pub fn count_in_state(&self, state: TileState) -> CellCount {
        match state {
            TileState::Open => self.open_count,
            TileState::Marked => self.marked_count,
            TileState::Closed => self.total_tiles() - self.open_count - self.marked_count,
        }
    }

    /// How many mines have not been marked yet, never below zero.
    ///
    /// Only a hint: it does not check whether the marks are on mines.
    pub fn remaining_mine_count(&self) -> CellCount {
        self.mine_count.saturating_sub(self.marked_count)
    }

    /// Toggle a tile between closed and marked, open tiles are left alone.
    pub fn mark_tile(&mut self, coords: Coord2) -> Result<MarkOutcome> {
        use MarkOutcome::*;
        use TileState::*;

        let coords = self.validate_coords(coords)?;
        self.check_not_finished()?;

        let tile = &mut self.tiles[coords.to_nd_index()];
        Ok(match tile.state() {
            Closed => {
                tile.set_state(Marked);
                self.marked_count += 1;
                Changed
            }
            Marked => {
                tile.set_state(Closed);
                self.marked_count -= 1;
                Changed
            }
            Open => NoChange,
        })
    }

    /// Open a closed tile, flooding through connected zero clues.
    ///
    /// Marked and already open tiles are left alone.
    pub fn open_tile(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        use RevealOutcome::*;

        let coords = self.validate_coords(coords)?;

        let tile = self.tiles[coords.to_nd_index()];
        if tile.state() != TileState::Closed {
            return Ok(NoChange);
        }
        self.check_not_finished()?;

        self.set_open(coords);
        let outcome = match tile.kind() {
            TileKind::Mine => {
                self.triggered_mine = Some(coords);
                self.end_game(GameState::Failed);
                return Ok(HitMine);
            }
            TileKind::Clue(0) => {
                self.flood_open(coords);
                Revealed
            }
            TileKind::Clue(_) => Revealed,
        };

        if self.open_count == self.total_tiles() - self.mine_count {
            self.end_game(GameState::Solved);
            Ok(Won)
        } else {
            Ok(outcome)
        }
    }

    /// Opens every closed clue reachable from `origin` through zero clues.
    fn flood_open(&mut self, origin: Coord2) {
        let mut to_visit: VecDeque<Coord2> = self.closed_clue_neighbors(origin).collect();
        log::trace!(
            "Starting flood-fill from {:?}, initial neighbors: {:?}",
            origin,
            to_visit
        );

        while let Some(visit_coords) = to_visit.pop_front() {
            let tile = self.tiles[visit_coords.to_nd_index()];
            // queued more than once
            if tile.state() != TileState::Closed {
                continue;
            }

            self.set_open(visit_coords);
            log::trace!("Flood opened tile at {:?}: {:?}", visit_coords, tile.kind());

            if tile.kind() == TileKind::Clue(0) {
                to_visit.extend(self.closed_clue_neighbors(visit_coords));
            }
        }
    }

    fn closed_clue_neighbors(&self, coords: Coord2) -> impl Iterator<Item = Coord2> + '_ {
        self.tiles.iter_neighbors(coords).filter(|&pos| {
            let tile = self.tiles[pos.to_nd_index()];
            tile.state() == TileState::Closed && !tile.is_mine()
        })
    }

    fn set_open(&mut self, coords: Coord2) {
        self.tiles[coords.to_nd_index()].set_state(TileState::Open);
        self.open_count += 1;
    }

    fn end_game(&mut self, state: GameState) {
        if self.state.is_finished() {
            return;
        }
        log::debug!(
            "Game ended: {:?}, {} of {} tiles open",
            state,
            self.open_count,
            self.total_tiles()
        );
        self.state = state;
    }

    fn check_not_finished(&self) -> Result<()> {
        if self.state.is_finished() {
            Err(GameError::AlreadyEnded)
        } else {
            Ok(())
        }
    }
}
