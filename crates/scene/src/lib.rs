//! Scene presentation adapter.
//!
//! Turns a read-only [`GameState`] into an ordered list of abstract draw commands
//! (sprite, position, rotation). Any renderer can consume the list; the terminal
//! front-end in `tui-miner-term` is one of them.
//!
//! Draw order, back to front:
//!
//! 1. one tile per visited cell
//! 2. one rock per visited cell whose rock is still un-mined
//! 3. the player
//! 4. the message banner
//! 5. the treasure, once found
//!
//! # Example
//!
//! ```
//! use tui_miner_core::GameState;
//! use tui_miner_scene::render_list;
//! use tui_miner_types::SpriteId;
//!
//! let game = GameState::with_treasure_rock(0);
//! let list = render_list(&game);
//!
//! // Only the start cell has been visited.
//! assert_eq!(list.len(), 3);
//! assert_eq!(list[1].sprite, SpriteId::Player);
//! ```

pub mod atlas;
pub mod layout;

use arrayvec::ArrayVec;
use glam::Vec2;
use tui_miner_core::{cell_center, rocks, CellIndex, GameState};

pub use tui_miner_core as core;
pub use tui_miner_types as types;

pub use atlas::{sprite_info, SpriteInfo};
pub use layout::{tile_layout, TileLayout};

use crate::types::{SpriteId, BANNER_POSITION, CELL_COUNT, ROCK_COUNT};

/// Tiles, rocks, player, banner and treasure.
pub const MAX_DRAW_COMMANDS: usize = CELL_COUNT + ROCK_COUNT + 3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCommand {
    pub sprite: SpriteId,
    /// Sprite center in world units.
    pub position: Vec2,
    /// Counter-clockwise, in radians.
    pub rotation: f32,
}

impl DrawCommand {
    pub fn new(sprite: SpriteId, position: Vec2) -> Self {
        Self {
            sprite,
            position,
            rotation: 0.0,
        }
    }
}

pub type DrawList = ArrayVec<DrawCommand, 40>;

pub fn render_list(state: &GameState) -> DrawList {
    let mut list = DrawList::new();
    render_into(state, &mut list);
    list
}

/// Clear `out` and fill it with this frame's commands.
pub fn render_into(state: &GameState, out: &mut DrawList) {
    out.clear();

    for cell in CellIndex::all().filter(|&cell| state.is_visited(cell)) {
        let tile = tile_layout(cell);
        out.push(DrawCommand {
            sprite: tile.sprite(),
            position: cell_center(cell),
            rotation: tile.rotation(),
        });
    }

    // Rocks are numbered in cell order, so this keeps the cell order of the tiles.
    for (rock, cell) in rocks() {
        if state.is_visited(cell) && !state.is_mined(rock) {
            out.push(DrawCommand::new(SpriteId::Rock, cell_center(cell)));
        }
    }

    out.push(DrawCommand::new(SpriteId::Player, state.position()));
    out.push(DrawCommand::new(
        SpriteId::Banner(state.message()),
        BANNER_POSITION,
    ));

    let treasure = state.treasure();
    if treasure.found {
        out.push(DrawCommand::new(SpriteId::Treasure, treasure.position()));
    }
}
