//! Neighbor topology for bounded grids.
//!
//! Grids have hard edges: offsets that leave `[0, width) x [0, height)` are
//! dropped, never wrapped.

use std::collections::BTreeSet;

/// Number of neighbors in a Moore neighborhood.
pub const NEIGHBOR_COUNT: usize = 8;

/// Neighbor offsets as `(dcol, drow)`.
///
/// Position `k` in this table is the weight-vector index for that neighbor.
/// Edge filtering never renumbers the remaining offsets.
pub const NEIGHBOR_OFFSETS: [(isize, isize); NEIGHBOR_COUNT] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Cell coordinate. Orders row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    #[inline]
    pub const fn new(col: usize, row: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Coord {
    /// Converts `(col, row)`.
    fn from((col, row): (usize, usize)) -> Self {
        Self::new(col, row)
    }
}

/// A grid's live cells.
pub type LiveCells = BTreeSet<Coord>;

/// Grid extent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridBounds {
    pub width: usize,
    pub height: usize,
}

impl GridBounds {
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn contains(&self, coord: Coord) -> bool {
        coord.col < self.width && coord.row < self.height
    }

    /// Apply an offset, returning `None` when it leaves the grid.
    #[inline]
    pub fn offset(&self, coord: Coord, (dcol, drow): (isize, isize)) -> Option<Coord> {
        let col = coord.col.checked_add_signed(dcol)?;
        let row = coord.row.checked_add_signed(drow)?;
        let moved = Coord::new(col, row);
        self.contains(moved).then_some(moved)
    }

    /// In-bounds neighbors paired with their index in [`NEIGHBOR_OFFSETS`].
    #[inline]
    pub fn indexed_neighbors(&self, coord: Coord) -> impl Iterator<Item = (usize, Coord)> + '_ {
        NEIGHBOR_OFFSETS
            .iter()
            .enumerate()
            .filter_map(move |(k, &off)| self.offset(coord, off).map(|n| (k, n)))
    }

    /// In-bounds neighbors in [`NEIGHBOR_OFFSETS`] order.
    pub fn neighbors(&self, coord: Coord) -> impl Iterator<Item = Coord> + '_ {
        self.indexed_neighbors(coord).map(|(_, n)| n)
    }
}
