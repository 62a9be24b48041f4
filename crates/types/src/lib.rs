//! Shared types and constants for the tile miner.
//!
//! Everything here is plain data: grid dimensions, world-space geometry constants,
//! the input snapshot consumed by the update step, and the sprite identifiers emitted
//! by the scene adapter. No crate in the workspace needs anything heavier than this to
//! talk to another.
//!
//! # World space
//!
//! The playfield is a 5x6 grid of cells laid out in a `[-1, 1]` square viewport:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `GRID_COLUMNS` | 5 | cells per row |
//! | `GRID_ROWS` | 6 | rows, row 0 at the top |
//! | `COLUMN_PITCH` | 0.4 | cell width in world units |
//! | `ROW_PITCH` | 2/7 | cell height in world units |
//! | `GRID_TOP` | 1.0 | world y of the top edge of row 0 |
//! | `WALL_MARGIN` | 0.012 | how far past a cell center the player may lean into a wall |
//!
//! Below the grid a single banner row (centered at `BANNER_POSITION`) shows the active
//! message.
//!
//! # Examples
//!
//! ```
//! use tui_miner_types::{Direction, InputSnapshot, MessageKind, CELL_COUNT};
//!
//! let input = InputSnapshot::idle().with(Direction::Right);
//! assert!(input.is_pressed(Direction::Right));
//! assert!(!input.is_pressed(Direction::Left));
//!
//! assert_eq!(MessageKind::from_index(3), Some(MessageKind::TreasureHere));
//! assert_eq!(CELL_COUNT, 30);
//! ```

pub use glam::Vec2;

/// Cells per grid row.
pub const GRID_COLUMNS: u8 = 5;

/// Grid rows (row 0 is the top row).
pub const GRID_ROWS: u8 = 6;

/// Total number of cells.
pub const CELL_COUNT: usize = (GRID_COLUMNS as usize) * (GRID_ROWS as usize);

/// Number of rocks (one per minable cell).
pub const ROCK_COUNT: usize = 5;

/// Minable cells in rock order: rock `i` lives in `MINABLE_CELLS[i]`.
pub const MINABLE_CELLS: [u8; ROCK_COUNT] = [4, 5, 15, 22, 29];

/// Cell the player starts in.
pub const START_CELL: u8 = 12;

/// Player spawn position (center of the start cell).
pub const PLAYER_START: Vec2 = Vec2::new(0.0, 0.28571);

/// Player speed in world units per second.
pub const DEFAULT_PLAYER_SPEED: f32 = 1.0;

/// Width of one cell in world units.
pub const COLUMN_PITCH: f32 = 0.4;

/// Height of one cell in world units.
pub const ROW_PITCH: f32 = 2.0 / 7.0;

/// World y of the top edge of the grid.
pub const GRID_TOP: f32 = 1.0;

/// Half the grid width; the grid spans `[-GRID_HALF_WIDTH, GRID_HALF_WIDTH]` in x.
pub const GRID_HALF_WIDTH: f32 = 1.0;

/// Rows per world unit (`1 / ROW_PITCH`).
pub const ROW_SCALE: f32 = 3.5;

/// Columns per world unit (`1 / COLUMN_PITCH`).
pub const COLUMN_SCALE: f32 = 2.5;

/// Distance past a cell center the player may move towards a closed side.
pub const WALL_MARGIN: f32 = 0.012;

/// Where the message banner is drawn.
pub const BANNER_POSITION: Vec2 = Vec2::new(0.0, -0.85714);

/// Default frame budget of the terminal loop (~60 FPS).
pub const DEFAULT_FRAME_MS: u32 = 16;

/// Without key-release events, a held direction is dropped after this long
/// without a press or repeat.
pub const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u32 = 150;

/// Upper bound on fixed steps run in a single frame.
pub const MAX_SUBSTEPS: u32 = 8;

/// Movement directions, in the order the update step applies them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn opposite(&self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Rotate a quarter turn counter-clockwise (the sense of positive sprite rotation).
    ///
    /// ```
    /// use tui_miner_types::Direction;
    ///
    /// assert_eq!(Direction::Right.rotate_ccw(), Direction::Up);
    /// assert_eq!(Direction::Up.rotate_ccw(), Direction::Left);
    /// ```
    pub fn rotate_ccw(&self) -> Self {
        match self {
            Direction::Right => Direction::Up,
            Direction::Up => Direction::Left,
            Direction::Left => Direction::Down,
            Direction::Down => Direction::Right,
        }
    }

    /// Unit step in grid coordinates as `(d_row, d_column)`.
    pub fn grid_delta(&self) -> (i8, i8) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// Discrete actions produced by the input layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Hold a direction.
    Move(Direction),
    /// Mine the rock in the current cell (edge-triggered).
    Mine,
}

impl GameAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Move(Direction::Up) => "moveUp",
            GameAction::Move(Direction::Down) => "moveDown",
            GameAction::Move(Direction::Left) => "moveLeft",
            GameAction::Move(Direction::Right) => "moveRight",
            GameAction::Mine => "mine",
        }
    }
}

/// Per-tick input: which directions are held, whether mine was triggered this tick,
/// and whether the player asked to quit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct InputSnapshot {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub mine: bool,
    pub quit: bool,
}

impl InputSnapshot {
    /// No keys held, no action.
    pub fn idle() -> Self {
        Self::default()
    }

    /// Builder: hold `dir` as well.
    pub fn with(mut self, dir: Direction) -> Self {
        self.set(dir, true);
        self
    }

    /// Builder: trigger the mine action.
    pub fn mining(mut self) -> Self {
        self.mine = true;
        self
    }

    /// Builder: request quit.
    pub fn quitting(mut self) -> Self {
        self.quit = true;
        self
    }

    pub fn is_pressed(&self, dir: Direction) -> bool {
        match dir {
            Direction::Up => self.up,
            Direction::Down => self.down,
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }

    pub fn set(&mut self, dir: Direction, pressed: bool) {
        match dir {
            Direction::Up => self.up = pressed,
            Direction::Down => self.down = pressed,
            Direction::Left => self.left = pressed,
            Direction::Right => self.right = pressed,
        }
    }

    pub fn any_direction(&self) -> bool {
        self.up || self.down || self.left || self.right
    }
}

/// Banner shown under the grid.
///
/// - **Explore**: nothing of interest in this cell
/// - **RockHere**: an un-mined rock is here
/// - **MinedEmpty**: this rock was mined and held nothing
/// - **TreasureHere**: this rock held the treasure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MessageKind {
    #[default]
    Explore,
    RockHere,
    MinedEmpty,
    TreasureHere,
}

impl MessageKind {
    pub const ALL: [MessageKind; 4] = [
        MessageKind::Explore,
        MessageKind::RockHere,
        MessageKind::MinedEmpty,
        MessageKind::TreasureHere,
    ];

    /// Banner index (0..=3), matching the atlas banner order.
    pub fn index(&self) -> u8 {
        match self {
            MessageKind::Explore => 0,
            MessageKind::RockHere => 1,
            MessageKind::MinedEmpty => 2,
            MessageKind::TreasureHere => 3,
        }
    }

    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    /// Banner text.
    pub fn text(&self) -> &'static str {
        match self {
            MessageKind::Explore => "Explore the caves and look for rocks.",
            MessageKind::RockHere => "A rock is here. Press SPACE to mine it.",
            MessageKind::MinedEmpty => "You mined this rock. Nothing inside.",
            MessageKind::TreasureHere => "You found the treasure!",
        }
    }
}

/// Path tile artwork shapes.
///
/// Each shape has a set of open sides in its unrotated artwork; rotating the
/// sprite rotates the openings with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileShape {
    /// One opening (right).
    DeadEnd,
    /// Up and down.
    Straight,
    /// Up and left.
    Corner,
    /// Up, down and left.
    Tee,
    /// All four sides.
    Cross,
}

impl TileShape {
    pub fn base_openings(&self) -> Openings {
        match self {
            TileShape::DeadEnd => Openings::RIGHT,
            TileShape::Straight => Openings::UP.union(Openings::DOWN),
            TileShape::Corner => Openings::UP.union(Openings::LEFT),
            TileShape::Tee => Openings::UP.union(Openings::DOWN).union(Openings::LEFT),
            TileShape::Cross => Openings::ALL,
        }
    }

    /// Openings after `quarter_turns` counter-clockwise quarter turns.
    pub fn openings(&self, quarter_turns: u8) -> Openings {
        self.base_openings().rotated_ccw(quarter_turns)
    }
}

/// Set of open sides of a cell, as a bitmask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Openings(u8);

impl Openings {
    pub const NONE: Openings = Openings(0);
    pub const UP: Openings = Openings(0b0001);
    pub const DOWN: Openings = Openings(0b0010);
    pub const LEFT: Openings = Openings(0b0100);
    pub const RIGHT: Openings = Openings(0b1000);
    pub const ALL: Openings = Openings(0b1111);

    pub const fn union(self, other: Openings) -> Openings {
        Openings(self.0 | other.0)
    }

    pub fn of(dir: Direction) -> Openings {
        match dir {
            Direction::Up => Openings::UP,
            Direction::Down => Openings::DOWN,
            Direction::Left => Openings::LEFT,
            Direction::Right => Openings::RIGHT,
        }
    }

    pub fn contains(&self, dir: Direction) -> bool {
        self.0 & Openings::of(dir).0 != 0
    }

    pub fn count(&self) -> u32 {
        self.0.count_ones()
    }

    pub fn rotated_ccw(&self, quarter_turns: u8) -> Openings {
        let mut out = *self;
        for _ in 0..quarter_turns % 4 {
            let mut next = Openings::NONE;
            for dir in Direction::ALL {
                if out.contains(dir) {
                    next = next.union(Openings::of(dir.rotate_ccw()));
                }
            }
            out = next;
        }
        out
    }
}

/// Atlas sprite identifiers.
///
/// Tile sprites come in two atlas variants per shape. The wide one keeps the
/// cell's native aspect (drawn unrotated or half-turned); `tall` is pre-swapped for
/// quarter-turned placements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteId {
    Tile { shape: TileShape, tall: bool },
    Rock,
    Player,
    Treasure,
    Banner(MessageKind),
}

impl SpriteId {
    pub fn tile_shape(&self) -> Option<TileShape> {
        match self {
            SpriteId::Tile { shape, .. } => Some(*shape),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SpriteId::Tile { shape: TileShape::DeadEnd, tall: false } => "grid00",
            SpriteId::Tile { shape: TileShape::DeadEnd, tall: true } => "grid01",
            SpriteId::Tile { shape: TileShape::Straight, tall: false } => "grid10",
            SpriteId::Tile { shape: TileShape::Straight, tall: true } => "grid11",
            SpriteId::Tile { shape: TileShape::Corner, tall: false } => "grid20",
            SpriteId::Tile { shape: TileShape::Corner, tall: true } => "grid21",
            SpriteId::Tile { shape: TileShape::Tee, tall: false } => "grid30",
            SpriteId::Tile { shape: TileShape::Tee, tall: true } => "grid31",
            SpriteId::Tile { shape: TileShape::Cross, tall: false } => "grid40",
            SpriteId::Tile { shape: TileShape::Cross, tall: true } => "grid41",
            SpriteId::Rock => "rock",
            SpriteId::Player => "player",
            SpriteId::Treasure => "treasure",
            SpriteId::Banner(MessageKind::Explore) => "text0",
            SpriteId::Banner(MessageKind::RockHere) => "text1",
            SpriteId::Banner(MessageKind::MinedEmpty) => "text2",
            SpriteId::Banner(MessageKind::TreasureHere) => "text3",
        }
    }
}
