//! Character grids, neighbour offsets and distances
//!
//! Coordinates are `(row, col)` as `i64` so offsets can be added without casts at
//! every call site; [`Grid::get`] returns `None` for anything outside the grid.

use itertools::iproduct;

/// Up, right, down, left
pub const NEIGHBORS_4: [(i64, i64); 4] = [(-1, 0), (0, 1), (1, 0), (0, -1)];

/// The 4 orthogonal offsets plus the diagonals, clockwise from up-left
pub const NEIGHBORS_8: [(i64, i64); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
];

/// Manhattan distance between two points
pub fn manhattan(a: (i64, i64), b: (i64, i64)) -> u64 {
    a.0.abs_diff(b.0) + a.1.abs_diff(b.1)
}

/// Rectangular-ish grid of cells, one row per non-empty input line
///
/// Rows keep their own length, so ragged input is representable;
/// [`Grid::in_bounds`] checks against the actual row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T = char> {
    rows: Vec<Vec<T>>,
}

impl Grid<char> {
    /// Parse text into a grid of characters
    pub fn parse(text: &str) -> Self {
        Self {
            rows: super::text::lines(text)
                .map(|line| line.chars().collect())
                .collect(),
        }
    }
}

impl<T> Grid<T> {
    /// Build a grid from already-split rows
    pub fn from_rows(rows: Vec<Vec<T>>) -> Self {
        Self { rows }
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Length of the first row (0 for an empty grid)
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// Whether `(row, col)` names an existing cell
    pub fn in_bounds(&self, (row, col): (i64, i64)) -> bool {
        self.get((row, col)).is_some()
    }

    /// Cell at `(row, col)`, if any
    pub fn get(&self, (row, col): (i64, i64)) -> Option<&T> {
        let row = usize::try_from(row).ok()?;
        let col = usize::try_from(col).ok()?;
        self.rows.get(row)?.get(col)
    }

    /// In-bounds positions reached by applying each offset to `pos`
    pub fn neighbors<'a>(
        &'a self,
        pos: (i64, i64),
        offsets: &'a [(i64, i64)],
    ) -> impl Iterator<Item = (i64, i64)> + 'a {
        offsets
            .iter()
            .map(move |(dr, dc)| (pos.0 + dr, pos.1 + dc))
            .filter(|&p| self.in_bounds(p))
    }

    /// Every cell position, row by row
    pub fn positions(&self) -> impl Iterator<Item = (i64, i64)> + '_ {
        iproduct!(0..self.height(), 0..self.width())
            .map(|(row, col)| (row as i64, col as i64))
            .filter(|&p| self.in_bounds(p))
    }

    /// The rows as slices
    pub fn rows(&self) -> &[Vec<T>] {
        &self.rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "abc\ndef\n";

    #[test]
    fn test_parse_and_get() {
        let grid = Grid::parse(SAMPLE);
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.get((0, 0)), Some(&'a'));
        assert_eq!(grid.get((1, 2)), Some(&'f'));
        assert_eq!(grid.get((2, 0)), None);
        assert_eq!(grid.get((-1, 0)), None);
    }

    #[test]
    fn test_in_bounds_ragged() {
        let grid = Grid::parse("ab\nc\n");
        assert!(grid.in_bounds((0, 1)));
        assert!(!grid.in_bounds((1, 1)));
        assert!(!grid.in_bounds((0, -1)));
        assert_eq!(grid.positions().count(), 3);
    }

    #[test]
    fn test_neighbors_clipped_to_grid() {
        let grid = Grid::parse(SAMPLE);

        let corner: Vec<_> = grid.neighbors((0, 0), &NEIGHBORS_4).collect();
        assert_eq!(corner, vec![(0, 1), (1, 0)]);

        let all: Vec<_> = grid.neighbors((0, 1), &NEIGHBORS_8).collect();
        assert_eq!(all, vec![(0, 2), (1, 2), (1, 1), (1, 0), (0, 0)]);
    }

    #[test]
    fn test_offsets_are_unique_and_nonzero() {
        for offsets in [&NEIGHBORS_4[..], &NEIGHBORS_8[..]] {
            assert!(!offsets.contains(&(0, 0)));
            let mut sorted = offsets.to_vec();
            sorted.sort_unstable();
            sorted.dedup();
            assert_eq!(sorted.len(), offsets.len());
        }
    }

    #[test]
    fn test_manhattan() {
        assert_eq!(manhattan((0, 0), (3, 4)), 7);
        assert_eq!(manhattan((-2, 5), (2, -5)), 14);
        assert_eq!(manhattan((1, 1), (1, 1)), 0);
    }
}
