//! Fixed per-cell tile layout: which tile sprite each cell shows and how it is turned.

use tui_miner_core::CellIndex;

use crate::types::{Openings, SpriteId, TileShape, CELL_COUNT};

/// Tile placement for one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileLayout {
    pub shape: TileShape,
    /// Uses the pre-swapped tall atlas variant.
    pub tall: bool,
    /// Counter-clockwise quarter turns, `0..4`.
    pub quarter_turns: u8,
}

impl TileLayout {
    const fn new(shape: TileShape, tall: bool, quarter_turns: u8) -> Self {
        Self {
            shape,
            tall,
            quarter_turns,
        }
    }

    pub fn sprite(&self) -> SpriteId {
        SpriteId::Tile {
            shape: self.shape,
            tall: self.tall,
        }
    }

    /// Rotation in radians, counter-clockwise.
    pub fn rotation(&self) -> f32 {
        self.quarter_turns as f32 * std::f32::consts::FRAC_PI_2
    }

    /// Sides of the cell the drawn tile leaves open.
    pub fn openings(&self) -> Openings {
        self.shape.openings(self.quarter_turns)
    }
}

use TileShape::{Corner, Cross, DeadEnd, Straight, Tee};

#[rustfmt::skip]
const TILE_LAYOUT: [TileLayout; CELL_COUNT] = [
    // row 0
    TileLayout::new(DeadEnd, false, 0),
    TileLayout::new(Tee, true, 1),
    TileLayout::new(Tee, true, 1),
    TileLayout::new(Corner, true, 1),
    TileLayout::new(DeadEnd, true, 3),
    // row 1
    TileLayout::new(DeadEnd, true, 3),
    TileLayout::new(DeadEnd, true, 1),
    TileLayout::new(Tee, false, 2),
    TileLayout::new(Tee, false, 0),
    TileLayout::new(Straight, false, 0),
    // row 2
    TileLayout::new(Corner, true, 3),
    TileLayout::new(Straight, true, 1),
    TileLayout::new(Tee, false, 0),
    TileLayout::new(Corner, true, 3),
    TileLayout::new(Corner, false, 0),
    // row 3
    TileLayout::new(DeadEnd, true, 3),
    TileLayout::new(Corner, false, 2),
    TileLayout::new(Tee, true, 3),
    TileLayout::new(Tee, true, 1),
    TileLayout::new(Corner, true, 1),
    // row 4
    TileLayout::new(Straight, false, 0),
    TileLayout::new(Straight, false, 0),
    TileLayout::new(DeadEnd, true, 3),
    TileLayout::new(Straight, false, 0),
    TileLayout::new(DeadEnd, true, 1),
    // row 5
    TileLayout::new(Corner, true, 3),
    TileLayout::new(Tee, true, 3),
    TileLayout::new(Tee, true, 3),
    TileLayout::new(Tee, true, 3),
    TileLayout::new(DeadEnd, false, 2),
];

pub fn tile_layout(cell: CellIndex) -> TileLayout {
    TILE_LAYOUT[cell.as_usize()]
}
