//! Sprite atlas: texture region and on-screen half-extent of every sprite.
//!
//! The atlas is a 5x6 sheet. The top row holds the five tile shapes, the next row
//! the rock, player and treasure, and the bottom four rows one banner each.

use glam::Vec2;

use crate::types::{MessageKind, SpriteId, TileShape};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteInfo {
    /// Lower-left texture coordinate.
    pub min_uv: Vec2,
    /// Upper-right texture coordinate.
    pub max_uv: Vec2,
    /// Half-extent in world units before rotation.
    pub radius: Vec2,
}

impl SpriteInfo {
    const fn new(min_uv: Vec2, max_uv: Vec2, radius: Vec2) -> Self {
        Self {
            min_uv,
            max_uv,
            radius,
        }
    }
}

const TILE_ROW_MIN_V: f32 = 0.83333;
const ITEM_ROW_MIN_V: f32 = 0.66667;
const WIDE: Vec2 = Vec2::new(0.2, 0.14286);
const TALL: Vec2 = Vec2::new(0.14286, 0.2);
const BANNER: Vec2 = Vec2::new(1.0, 0.14286);

fn tile_column(shape: TileShape) -> f32 {
    match shape {
        TileShape::DeadEnd => 0.0,
        TileShape::Straight => 0.2,
        TileShape::Corner => 0.4,
        TileShape::Tee => 0.6,
        TileShape::Cross => 0.8,
    }
}

fn item(min_u: f32) -> SpriteInfo {
    SpriteInfo::new(
        Vec2::new(min_u, ITEM_ROW_MIN_V),
        Vec2::new(min_u + 0.2, TILE_ROW_MIN_V),
        WIDE,
    )
}

const BANNERS: [SpriteInfo; 4] = [
    SpriteInfo::new(Vec2::new(0.0, 0.5), Vec2::new(1.0, 0.66667), BANNER),
    SpriteInfo::new(Vec2::new(0.0, 0.33333), Vec2::new(1.0, 0.5), BANNER),
    SpriteInfo::new(Vec2::new(0.0, 0.16667), Vec2::new(1.0, 0.33333), BANNER),
    SpriteInfo::new(Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.16667), BANNER),
];

pub fn sprite_info(sprite: SpriteId) -> SpriteInfo {
    match sprite {
        SpriteId::Tile { shape, tall } => {
            let u = tile_column(shape);
            SpriteInfo::new(
                Vec2::new(u, TILE_ROW_MIN_V),
                Vec2::new(u + 0.2, 1.0),
                if tall { TALL } else { WIDE },
            )
        }
        SpriteId::Rock => item(0.0),
        SpriteId::Player => item(0.2),
        SpriteId::Treasure => item(0.4),
        SpriteId::Banner(kind) => BANNERS[kind.index() as usize],
    }
}

/// Every sprite the atlas defines, tiles first.
pub fn all_sprites() -> impl Iterator<Item = SpriteId> {
    let shapes = [
        TileShape::DeadEnd,
        TileShape::Straight,
        TileShape::Corner,
        TileShape::Tee,
        TileShape::Cross,
    ];
    let tiles = shapes
        .into_iter()
        .flat_map(|shape| [false, true].map(|tall| SpriteId::Tile { shape, tall }));
    let items = [SpriteId::Rock, SpriteId::Player, SpriteId::Treasure];
    let banners = MessageKind::ALL.map(SpriteId::Banner);
    tiles.chain(items).chain(banners)
}
