//! Minable cells and the rocks that sit in them.

use crate::grid::CellIndex;
use crate::types::{CELL_COUNT, MINABLE_CELLS, ROCK_COUNT};

/// Owning cell of each rock, in rock order.
pub(crate) const ROCK_CELLS: [CellIndex; ROCK_COUNT] = [
    CellIndex::from_raw(MINABLE_CELLS[0]),
    CellIndex::from_raw(MINABLE_CELLS[1]),
    CellIndex::from_raw(MINABLE_CELLS[2]),
    CellIndex::from_raw(MINABLE_CELLS[3]),
    CellIndex::from_raw(MINABLE_CELLS[4]),
];

/// Rock index for each cell (`None` for cells without a rock).
#[rustfmt::skip]
const CELL_ROCKS: [Option<u8>; CELL_COUNT] = [
    None,    None, None,    None, Some(0),
    Some(1), None, None,    None, None,
    None,    None, None,    None, None,
    Some(2), None, None,    None, None,
    None,    None, Some(3), None, None,
    None,    None, None,    None, Some(4),
];

/// The rock in `cell`, if the cell is minable.
pub fn rock_at(cell: CellIndex) -> Option<usize> {
    CELL_ROCKS[cell.as_usize()].map(usize::from)
}

/// Cell that holds `rock`. Rocks are numbered `0..ROCK_COUNT`.
pub fn rock_cell(rock: usize) -> Option<CellIndex> {
    ROCK_CELLS.get(rock).copied()
}

/// All rocks with their cells, in rock order.
pub fn rocks() -> impl Iterator<Item = (usize, CellIndex)> {
    ROCK_CELLS.into_iter().enumerate()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_agrees_with_minable_cells() {
        for (rock, &cell) in MINABLE_CELLS.iter().enumerate() {
            let cell = CellIndex::new(cell).unwrap();
            assert_eq!(rock_at(cell), Some(rock));
            assert_eq!(rock_cell(rock), Some(cell));
        }
        let minable = CellIndex::all().filter(|&c| rock_at(c).is_some()).count();
        assert_eq!(minable, ROCK_COUNT);
    }

    #[test]
    fn test_unknown_rock_has_no_cell() {
        assert_eq!(rock_cell(ROCK_COUNT), None);
        assert_eq!(rocks().count(), ROCK_COUNT);
    }
}
