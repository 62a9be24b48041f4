//! Cell path table - the static movement bounds of every cell.
//!
//! The table encodes the maze. A side that opens onto a neighbor carries that
//! neighbor's center coordinate, so one tick can move the player at most into the
//! middle of the next cell. A closed side carries the cell center plus
//! [`WALL_MARGIN`](crate::types::WALL_MARGIN).
//!
//! An open side only lets the player through from the cell's corridor line, the
//! `WALL_MARGIN` band around the center across the direction of travel. Off that
//! line it stops them like a closed side, so a move that turns a corner mid-tick
//! can never cut through a wall into a diagonal cell.
//!
//! Open sides per cell:
//!
//! ```text
//!  0:R      1:LRD   2:LRD   3:LD    4:D
//!  5:D      6:U     7:UDR   8:UDL   9:UD
//! 10:UR    11:LR   12:UDL  13:UR   14:UL
//! 15:D     16:DR   17:LRU  18:LRD  19:LD
//! 20:UD    21:UD   22:D    23:UD   24:U
//! 25:UR    26:LRU  27:LRU  28:LRU  29:L
//! ```

use glam::Vec2;

use crate::grid::{cell_center, CellIndex};
use crate::types::{Direction, CELL_COUNT, WALL_MARGIN};

/// Float slack on the corridor-line test; table values are rounded to 5 places.
const LINE_SLACK: f32 = 1e-3;

/// World-coordinate limits the player may reach while occupying a cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellBounds {
    /// Maximum y.
    pub up: f32,
    /// Minimum y.
    pub down: f32,
    /// Minimum x.
    pub left: f32,
    /// Maximum x.
    pub right: f32,
}

impl CellBounds {
    /// Unconfigured bounds: wide enough to never block.
    pub const OPEN: CellBounds = CellBounds::new(10.0, -10.0, -10.0, 10.0);

    pub const fn new(up: f32, down: f32, left: f32, right: f32) -> Self {
        Self {
            up,
            down,
            left,
            right,
        }
    }

    /// Limit on the axis of `dir`, in the direction of `dir`.
    pub fn limit(&self, dir: Direction) -> f32 {
        match dir {
            Direction::Up => self.up,
            Direction::Down => self.down,
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }

    /// Move `distance` towards `dir`, stopping at the limit.
    pub fn step(&self, position: Vec2, dir: Direction, distance: f32) -> Vec2 {
        let mut p = position;
        match dir {
            Direction::Up => p.y = (p.y + distance).min(self.up),
            Direction::Down => p.y = (p.y - distance).max(self.down),
            Direction::Left => p.x = (p.x - distance).max(self.left),
            Direction::Right => p.x = (p.x + distance).min(self.right),
        }
        p
    }

    /// Pull `position` inside the bounds, axis by axis.
    pub fn clamp(&self, position: Vec2) -> Vec2 {
        Vec2::new(
            position.x.clamp(self.left, self.right),
            position.y.clamp(self.down, self.up),
        )
    }

    pub fn contains(&self, position: Vec2) -> bool {
        position.x >= self.left
            && position.x <= self.right
            && position.y >= self.down
            && position.y <= self.up
    }
}

impl Default for CellBounds {
    fn default() -> Self {
        Self::OPEN
    }
}

#[rustfmt::skip]
const CELL_PATHS: [CellBounds; CELL_COUNT] = [
    // row 0
    CellBounds::new(0.86914, 0.84514, -0.812, -0.4),
    CellBounds::new(0.86914, 0.57143, -0.8, 0.0),
    CellBounds::new(0.86914, 0.57143, -0.4, 0.4),
    CellBounds::new(0.86914, 0.57143, 0.0, 0.412),
    CellBounds::new(0.86914, 0.57143, 0.788, 0.812),
    // row 1
    CellBounds::new(0.58343, 0.28571, -0.812, -0.788),
    CellBounds::new(0.85714, 0.55943, -0.412, -0.388),
    CellBounds::new(0.85714, 0.28571, -0.012, 0.4),
    CellBounds::new(0.85714, 0.28571, 0.0, 0.412),
    CellBounds::new(0.85714, 0.28571, 0.788, 0.812),
    // row 2
    CellBounds::new(0.57143, 0.27371, -0.812, -0.4),
    CellBounds::new(0.29771, 0.27371, -0.8, 0.0),
    CellBounds::new(0.57143, 0.0, -0.4, 0.012),
    CellBounds::new(0.57143, 0.27371, 0.388, 0.8),
    CellBounds::new(0.57143, 0.27371, 0.4, 0.812),
    // row 3
    CellBounds::new(0.012, -0.28571, -0.812, -0.788),
    CellBounds::new(0.012, -0.28571, -0.412, 0.0),
    CellBounds::new(0.28571, -0.012, -0.4, 0.4),
    CellBounds::new(0.012, -0.28571, 0.0, 0.8),
    CellBounds::new(0.012, -0.28571, 0.4, 0.812),
    // row 4
    CellBounds::new(0.0, -0.57143, -0.812, -0.788),
    CellBounds::new(0.0, -0.57143, -0.412, -0.388),
    CellBounds::new(-0.27371, -0.57143, -0.012, 0.012),
    CellBounds::new(0.0, -0.57143, 0.388, 0.412),
    CellBounds::new(0.0, -0.29771, 0.788, 0.812),
    // row 5
    CellBounds::new(-0.28571, -0.58343, -0.812, -0.4),
    CellBounds::new(-0.28571, -0.58343, -0.8, 0.0),
    CellBounds::new(-0.28571, -0.58343, -0.4, 0.4),
    CellBounds::new(-0.28571, -0.58343, 0.0, 0.8),
    CellBounds::new(-0.55943, -0.58343, 0.4, 0.812),
];

/// Movement bounds of `cell`.
pub fn bounds(cell: CellIndex) -> CellBounds {
    CELL_PATHS[cell.as_usize()]
}

/// Whether the side of `cell` facing `dir` opens onto a neighbor.
pub fn is_open(cell: CellIndex, dir: Direction) -> bool {
    let center = cell_center(cell);
    let reach = match dir {
        Direction::Up => bounds(cell).up - center.y,
        Direction::Down => center.y - bounds(cell).down,
        Direction::Left => center.x - bounds(cell).left,
        Direction::Right => bounds(cell).right - center.x,
    };
    reach > 0.1
}

/// `position` lies on the corridor line that leads out of `cell` towards `dir`.
pub fn on_corridor_line(cell: CellIndex, position: Vec2, dir: Direction) -> bool {
    let center = cell_center(cell);
    let off = match dir {
        Direction::Up | Direction::Down => position.x - center.x,
        Direction::Left | Direction::Right => position.y - center.y,
    };
    off.abs() <= WALL_MARGIN + LINE_SLACK
}

/// Move `distance` from `position` towards `dir` while occupying `cell`.
///
/// Off the corridor line the side facing `dir` counts as closed. The result never
/// pulls the player backwards.
pub fn step_from(cell: CellIndex, position: Vec2, dir: Direction, distance: f32) -> Vec2 {
    let mut limits = bounds(cell);
    if !on_corridor_line(cell, position, dir) {
        let center = cell_center(cell);
        match dir {
            Direction::Up => limits.up = limits.up.min(center.y + WALL_MARGIN).max(position.y),
            Direction::Down => {
                limits.down = limits.down.max(center.y - WALL_MARGIN).min(position.y)
            }
            Direction::Left => {
                limits.left = limits.left.max(center.x - WALL_MARGIN).min(position.x)
            }
            Direction::Right => {
                limits.right = limits.right.min(center.x + WALL_MARGIN).max(position.x)
            }
        }
    }
    limits.step(position, dir, distance)
}
