use super::bit_grid::{BitGrid, Chunk64};
use crate::error::{LifeError, Result};

/// Offsets of the eight Moore neighbors.
#[rustfmt::skip]
const NEIGHBOR_OFFSETS: [(i64, i64); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1, 0),           (1, 0),
    (-1, 1),  (0, 1),  (1, 1),
];

/// An integer (x, y) pair. Used both as an absolute grid address and as a
/// relative offset inside a pattern; any value is accepted and wrapped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Coordinate {
    pub x: i64,
    pub y: i64,
}

impl Coordinate {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

impl From<(i64, i64)> for Coordinate {
    fn from((x, y): (i64, i64)) -> Self {
        Self { x, y }
    }
}

/// Floor modulo of `coord` into `[0, size)`.
/// Every coordinate accessor in the crate normalizes through here.
#[inline]
pub fn wrap(coord: i64, size: usize) -> usize {
    debug_assert!(size > 0);
    coord.rem_euclid(size as i64) as usize
}

/// Reject dimensions that are zero, exceed the `i64` coordinate range, or
/// whose packed storage would not fit in a single allocation.
pub(crate) fn check_dimensions(width: usize, height: usize) -> Result<()> {
    let limit = i64::MAX as usize;
    let storage_fits = width
        .div_ceil(64)
        .checked_mul(height)
        .and_then(|chunks| chunks.checked_mul(std::mem::size_of::<Chunk64>()))
        .is_some_and(|bytes| bytes <= isize::MAX as usize);
    if width == 0 || height == 0 || width > limit || height > limit || !storage_fits {
        log::warn!("rejecting grid dimensions {}x{}", width, height);
        return Err(LifeError::InvalidDimension { width, height });
    }
    Ok(())
}

/// Toroidal binary grid with dimensions fixed at construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    cells: BitGrid,
}

impl Grid {
    /// Create a grid with all cells dead.
    ///
    /// Fails with [`LifeError::InvalidDimension`] if either side is zero,
    /// too large to address with an `i64` coordinate, or the cell count
    /// overflows the storage size.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        check_dimensions(width, height)?;
        Ok(Self {
            cells: BitGrid::new(width, height),
        })
    }

    pub const fn width(&self) -> usize {
        self.cells.dimensions().0
    }

    pub const fn height(&self) -> usize {
        self.cells.dimensions().1
    }

    pub const fn dimensions(&self) -> (usize, usize) {
        self.cells.dimensions()
    }

    /// Normalize an arbitrary coordinate into the grid.
    #[inline]
    pub fn normalize(&self, x: i64, y: i64) -> (usize, usize) {
        (wrap(x, self.width()), wrap(y, self.height()))
    }

    /// Cell state at (x, y), wrapping both axes.
    #[inline]
    pub fn get(&self, x: i64, y: i64) -> bool {
        let (x, y) = self.normalize(x, y);
        self.cells.get(x, y)
    }

    /// Overwrite the cell at (x, y), wrapping both axes.
    #[inline]
    pub fn set(&mut self, x: i64, y: i64, alive: bool) {
        let (x, y) = self.normalize(x, y);
        self.cells.set(x, y, alive);
    }

    /// Number of live cells among the eight toroidal neighbors, in `0..=8`.
    ///
    /// On grids narrower or shorter than three cells the same physical cell
    /// can appear under several offsets (or be the cell itself); each offset
    /// is counted independently.
    pub fn count_live_neighbors(&self, x: i64, y: i64) -> u8 {
        let (x, y) = self.normalize(x, y);
        self.count_neighbors_at(x, y)
    }

    /// Neighbor count for an already normalized coordinate.
    #[inline]
    pub(crate) fn count_neighbors_at(&self, x: usize, y: usize) -> u8 {
        let (x, y) = (x as i64, y as i64);
        NEIGHBOR_OFFSETS
            .iter()
            .filter(|&&(dx, dy)| self.get(x + dx, y + dy))
            .count() as u8
    }

    /// Cell state at an already normalized coordinate.
    #[inline]
    pub(crate) fn get_at(&self, x: usize, y: usize) -> bool {
        self.cells.get(x, y)
    }

    /// Independent copy of the current state.
    pub fn snapshot(&self) -> Grid {
        self.clone()
    }

    /// Total number of live cells.
    pub fn live_count(&self) -> usize {
        self.cells.count_alive()
    }

    /// Kill every cell.
    pub fn clear(&mut self) {
        self.cells.clear();
    }

    /// Iterate over all cells with their positions, row-major.
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, bool)> + '_ {
        let (width, height) = self.dimensions();
        (0..height)
            .flat_map(move |y| (0..width).map(move |x| (x, y)))
            .map(|(x, y)| (x, y, self.cells.get(x, y)))
    }

    /// Overwrite a cell at an already normalized coordinate.
    #[inline]
    pub(crate) fn set_at(&mut self, x: usize, y: usize, alive: bool) {
        self.cells.set(x, y, alive);
    }

    /// Storage rows for the parallel stepper: `chunk_width` chunks per row.
    pub(crate) fn rows_mut(&mut self) -> (usize, &mut [Chunk64]) {
        let chunk_width = self.cells.chunk_width();
        (chunk_width, self.cells.chunks_mut())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_negative_and_overflowing() {
        assert_eq!(wrap(-1, 10), 9);
        assert_eq!(wrap(-11, 10), 9);
        assert_eq!(wrap(10, 10), 0);
        assert_eq!(wrap(25, 10), 5);
        assert_eq!(wrap(i64::MIN, 7), i64::MIN.rem_euclid(7) as usize);
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert_eq!(
            Grid::new(0, 5),
            Err(LifeError::InvalidDimension { width: 0, height: 5 })
        );
        assert!(matches!(
            Grid::new(5, 0),
            Err(LifeError::InvalidDimension { .. })
        ));
    }

    #[test]
    fn test_oversized_dimensions_rejected() {
        // Chunk count overflows usize.
        assert_eq!(
            Grid::new(1 << 40, 1 << 40),
            Err(LifeError::InvalidDimension { width: 1 << 40, height: 1 << 40 })
        );
        // Past the i64 coordinate range.
        assert!(matches!(
            Grid::new(usize::MAX, 1),
            Err(LifeError::InvalidDimension { .. })
        ));
        // Chunk count fits but the byte size does not.
        assert!(check_dimensions(64, usize::MAX / 8).is_err());
        assert!(check_dimensions(40, 20).is_ok());
    }

    #[test]
    fn test_new_grid_is_dead() {
        let grid = Grid::new(7, 3).unwrap();
        assert_eq!(grid.dimensions(), (7, 3));
        assert_eq!(grid.live_count(), 0);
        assert!(grid.iter_cells().all(|(_, _, alive)| !alive));
    }

    #[test]
    fn test_get_set_wraps() {
        let mut grid = Grid::new(10, 5).unwrap();

        grid.set(-1, -1, true);
        assert!(grid.get(9, 4));
        assert!(grid.get(19, 9));

        grid.set(10, 5, true);
        assert!(grid.get(0, 0));
        assert_eq!(grid.live_count(), 2);

        grid.set(0, 0, false);
        assert!(!grid.get(0, 0));
        assert_eq!(grid.live_count(), 1);
    }

    #[test]
    fn test_count_neighbors_blinker() {
        let mut grid = Grid::new(10, 10).unwrap();
        grid.set(4, 5, true);
        grid.set(5, 5, true);
        grid.set(6, 5, true);

        assert_eq!(grid.count_live_neighbors(5, 5), 2);
        assert_eq!(grid.count_live_neighbors(5, 4), 3);
        assert_eq!(grid.count_live_neighbors(5, 6), 3);
        assert_eq!(grid.count_live_neighbors(0, 0), 0);
    }

    #[test]
    fn test_count_neighbors_across_edges() {
        let mut grid = Grid::new(8, 6).unwrap();
        grid.set(7, 5, true);
        grid.set(0, 5, true);
        grid.set(7, 0, true);

        // (0, 0) touches all three through the corner wrap.
        assert_eq!(grid.count_live_neighbors(0, 0), 3);
        assert_eq!(grid.count_live_neighbors(-8, 6), 3);
    }

    #[test]
    fn test_count_neighbors_full_grid() {
        let mut grid = Grid::new(4, 4).unwrap();
        for y in 0..4 {
            for x in 0..4 {
                grid.set(x, y, true);
            }
        }
        assert_eq!(grid.count_live_neighbors(2, 2), 8);
    }

    #[test]
    fn test_snapshot_is_independent() {
        let mut grid = Grid::new(5, 5).unwrap();
        grid.set(1, 1, true);

        let snapshot = grid.snapshot();
        grid.set(2, 2, true);

        assert!(snapshot.get(1, 1));
        assert!(!snapshot.get(2, 2));
        assert_eq!(snapshot.live_count(), 1);
    }

    #[test]
    fn test_iter_cells_row_major() {
        let mut grid = Grid::new(3, 2).unwrap();
        grid.set(2, 0, true);

        let order: Vec<_> = grid.iter_cells().map(|(x, y, _)| (x, y)).collect();
        assert_eq!(order, vec![(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1)]);
        assert_eq!(grid.iter_cells().filter(|c| c.2).count(), 1);
    }
}
