use serde::{Deserialize, Serialize};

/// What a tile holds. Decided once at generation and never changed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TileKind {
    Mine,
    /// Number of mines in the surrounding 8 tiles.
    Clue(u8),
}

impl TileKind {
    pub const fn is_mine(self) -> bool {
        matches!(self, Self::Mine)
    }
}

/// Player-visible state of a tile.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileState {
    Closed,
    Marked,
    Open,
}

impl Default for TileState {
    fn default() -> Self {
        Self::Closed
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    kind: TileKind,
    state: TileState,
}

impl Tile {
    pub(crate) const fn new(kind: TileKind) -> Self {
        Self {
            kind,
            state: TileState::Closed,
        }
    }

    pub const fn kind(self) -> TileKind {
        self.kind
    }

    pub const fn state(self) -> TileState {
        self.state
    }

    pub const fn is_mine(self) -> bool {
        self.kind.is_mine()
    }

    pub(crate) fn set_state(&mut self, state: TileState) {
        self.state = state;
    }
}
