//! Grid geometry - mapping between world space and the 30-cell index space.
//!
//! Pure functions only. Cells are numbered row-major from the top-left:
//!
//! ```text
//!  0  1  2  3  4
//!  5  6  7  8  9
//! 10 11 12 13 14
//! 15 16 17 18 19
//! 20 21 22 23 24
//! 25 26 27 28 29
//! ```

use glam::Vec2;

use crate::types::{
    Direction, CELL_COUNT, COLUMN_PITCH, COLUMN_SCALE, GRID_COLUMNS, GRID_HALF_WIDTH, GRID_ROWS,
    GRID_TOP, ROW_PITCH, ROW_SCALE,
};

/// Index of a grid cell, always in `0..CELL_COUNT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CellIndex(u8);

impl CellIndex {
    /// Returns `None` for indices outside the grid.
    pub fn new(index: u8) -> Option<Self> {
        if (index as usize) < CELL_COUNT {
            Some(Self(index))
        } else {
            None
        }
    }

    /// Caller guarantees `index < CELL_COUNT`.
    pub(crate) const fn from_raw(index: u8) -> Self {
        Self(index)
    }

    pub fn from_row_column(row: u8, column: u8) -> Option<Self> {
        if row >= GRID_ROWS || column >= GRID_COLUMNS {
            return None;
        }
        Some(Self(row * GRID_COLUMNS + column))
    }

    /// All cells in index order.
    pub fn all() -> impl Iterator<Item = CellIndex> {
        (0..CELL_COUNT as u8).map(CellIndex)
    }

    pub fn get(&self) -> u8 {
        self.0
    }

    /// Index usable for per-cell arrays.
    pub fn as_usize(&self) -> usize {
        self.0 as usize
    }

    pub fn row(&self) -> u8 {
        self.0 / GRID_COLUMNS
    }

    pub fn column(&self) -> u8 {
        self.0 % GRID_COLUMNS
    }

    /// Adjacent cell in `dir`, or `None` at the grid edge.
    pub fn neighbor(&self, dir: Direction) -> Option<CellIndex> {
        let (dr, dc) = dir.grid_delta();
        let row = self.row() as i8 + dr;
        let column = self.column() as i8 + dc;
        if row < 0 || column < 0 {
            return None;
        }
        Self::from_row_column(row as u8, column as u8)
    }
}

impl std::fmt::Display for CellIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Map a world position to the cell containing it.
///
/// Row and column saturate at the grid edges, so the result is always a valid
/// index even for positions the movement bounds would never allow.
pub fn cell_index(position: Vec2) -> CellIndex {
    let row = ((GRID_TOP - position.y) * ROW_SCALE).floor();
    let column = ((position.x + GRID_HALF_WIDTH) * COLUMN_SCALE).floor();

    let row = saturate(row, GRID_ROWS);
    let column = saturate(column, GRID_COLUMNS);
    CellIndex(row * GRID_COLUMNS + column)
}

fn saturate(v: f32, len: u8) -> u8 {
    if v.is_nan() || v < 0.0 {
        0
    } else if v >= len as f32 {
        len - 1
    } else {
        v as u8
    }
}

/// World position of a cell's center.
pub fn cell_center(cell: CellIndex) -> Vec2 {
    Vec2::new(
        -GRID_HALF_WIDTH + (cell.column() as f32 + 0.5) * COLUMN_PITCH,
        GRID_TOP - (cell.row() as f32 + 0.5) * ROW_PITCH,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PLAYER_START, START_CELL};

    fn cell(i: u8) -> CellIndex {
        CellIndex::new(i).unwrap()
    }

    #[test]
    fn test_player_start_is_in_center_cell() {
        assert_eq!(cell_index(PLAYER_START), cell(START_CELL));
        assert_eq!(START_CELL, 12);
        assert!((cell_center(cell(START_CELL)) - PLAYER_START).length() < 1e-4);
    }

    #[test]
    fn test_every_center_maps_back_to_its_cell() {
        for c in CellIndex::all() {
            assert_eq!(cell_index(cell_center(c)), c, "cell {c}");
        }
    }

    #[test]
    fn test_small_perturbations_inside_a_cell_are_stable() {
        let offsets = [-0.15, -0.05, 0.0, 0.05, 0.15];
        for c in CellIndex::all() {
            let center = cell_center(c);
            for dx in offsets {
                for dy in offsets {
                    // Stay clear of the edges: half pitch is 0.2 x 0.1428.
                    let p = center + Vec2::new(dx, dy * 0.9);
                    assert_eq!(cell_index(p), c, "cell {c} offset ({dx}, {dy})");
                }
            }
        }
    }

    #[test]
    fn test_known_centers() {
        assert_eq!(cell_index(Vec2::new(0.8, 0.85714)), cell(4));
        assert_eq!(cell_index(Vec2::new(-0.8, 0.57143)), cell(5));
        assert_eq!(cell_index(Vec2::new(-0.8, 0.0)), cell(15));
        assert_eq!(cell_index(Vec2::new(0.0, -0.28571)), cell(22));
        assert_eq!(cell_index(Vec2::new(0.8, -0.57143)), cell(29));
    }

    #[test]
    fn test_out_of_range_positions_saturate() {
        assert_eq!(cell_index(Vec2::new(-5.0, 5.0)), cell(0));
        assert_eq!(cell_index(Vec2::new(5.0, -5.0)), cell(29));
        assert_eq!(cell_index(Vec2::new(1.0, 0.0)), cell(19));
        assert_eq!(cell_index(Vec2::new(f32::NAN, f32::NAN)), cell(0));
    }

    #[test]
    fn test_neighbors_stop_at_edges() {
        assert_eq!(cell(0).neighbor(Direction::Up), None);
        assert_eq!(cell(0).neighbor(Direction::Left), None);
        assert_eq!(cell(0).neighbor(Direction::Right), Some(cell(1)));
        assert_eq!(cell(0).neighbor(Direction::Down), Some(cell(5)));
        assert_eq!(cell(29).neighbor(Direction::Down), None);
        assert_eq!(cell(29).neighbor(Direction::Right), None);
        assert_eq!(cell(4).neighbor(Direction::Right), None);
        assert_eq!(cell(12).neighbor(Direction::Up), Some(cell(7)));
    }

    #[test]
    fn test_index_bounds() {
        assert!(CellIndex::new(29).is_some());
        assert!(CellIndex::new(30).is_none());
        assert_eq!(CellIndex::all().count(), CELL_COUNT);
        assert_eq!(cell(13).row(), 2);
        assert_eq!(cell(13).column(), 3);
    }
}
