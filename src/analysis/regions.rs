//! Flood-fill detection of wall-enclosed rooms
//!
//! One analysis pass visits every cell exactly once, assigns room
//! identifiers in row-major discovery order, and records per-room sizes.
//! The result is derived state: it describes the grid as it was at analysis
//! time and must be rebuilt after any wall mutation.

use bitvec::prelude::*;
use ndarray::Array2;

use crate::spatial::direction::Direction;
use crate::spatial::grid::WallGrid;

/// Room identifier of a cell no analysis pass has assigned yet
pub const UNASSIGNED: u32 = 0;

/// Result of one region analysis pass
///
/// Holds the per-cell room identifiers, the room size table, and the two
/// summary figures (`room_count`, `max_area`). Room identifiers start at 1;
/// [`UNASSIGNED`] never appears in a completed map.
#[derive(Debug, Clone)]
pub struct RoomMap {
    /// Room identifier per cell, assigned in row-major discovery order
    ids: Array2<u32>,

    /// Cell count per room, indexed by identifier (index 0 is the sentinel)
    sizes: Vec<usize>,

    /// Number of rooms discovered in this pass
    room_count: usize,

    /// Largest room size found in this pass
    max_area: usize,
}

impl RoomMap {
    /// Partition the grid into rooms
    ///
    /// Iterative flood fill with an explicit stack and a visited bitmap
    /// indexed by linear cell index, so recursion depth never limits grid
    /// size. Cannot fail on a constructed [`WallGrid`]: traversal only
    /// follows neighbors the grid itself reports as in bounds.
    pub fn analyze(grid: &WallGrid) -> Self {
        let (rows, cols) = (grid.rows(), grid.cols());
        let mut ids = Array2::from_elem((rows, cols), UNASSIGNED);
        let mut visited: BitVec = bitvec![0; rows * cols];
        let mut sizes = vec![0usize];
        let mut stack: Vec<(usize, usize)> = Vec::new();

        let mut room_count = 0;
        let mut max_area = 0;

        for x in 0..rows {
            for y in 0..cols {
                if visited.get(x * cols + y).as_deref() == Some(&true) {
                    continue;
                }

                let id = sizes.len() as u32;
                let area = fill_room(grid, &mut ids, &mut visited, &mut stack, (x, y), id);

                sizes.push(area);
                room_count += 1;
                max_area = max_area.max(area);
            }
        }

        Self {
            ids,
            sizes,
            room_count,
            max_area,
        }
    }

    /// Number of rooms found by this pass
    pub const fn room_count(&self) -> usize {
        self.room_count
    }

    /// Size of the largest room found by this pass
    ///
    /// Ties between maximal rooms are not disambiguated; the area value
    /// itself is deterministic.
    pub const fn max_area(&self) -> usize {
        self.max_area
    }

    /// Room identifier of a cell, or `None` for out-of-bounds coordinates
    pub fn room_at(&self, x: usize, y: usize) -> Option<u32> {
        self.ids.get([x, y]).copied()
    }

    /// Cell count of a room (0 for unknown identifiers)
    pub fn area_of(&self, room: u32) -> usize {
        self.sizes.get(room as usize).copied().unwrap_or(0)
    }

    /// Cell count of the room containing a cell
    pub fn area_at(&self, x: usize, y: usize) -> Option<usize> {
        self.room_at(x, y).map(|room| self.area_of(room))
    }
}

/// Flood-fill one room from a start cell, returning its area
///
/// Marks every reachable cell visited and stamps it with `id`. The caller's
/// stack buffer is reused across rooms to avoid reallocation.
fn fill_room(
    grid: &WallGrid,
    ids: &mut Array2<u32>,
    visited: &mut BitVec,
    stack: &mut Vec<(usize, usize)>,
    start: (usize, usize),
    id: u32,
) -> usize {
    let cols = grid.cols();
    let mut area = 0;

    visited.set(start.0 * cols + start.1, true);
    stack.push(start);

    while let Some((x, y)) = stack.pop() {
        area += 1;
        if let Some(cell) = ids.get_mut([x, y]) {
            *cell = id;
        }

        for direction in Direction::ALL {
            let Some((nx, ny)) = grid.open_neighbor(x, y, direction) else {
                continue;
            };
            let index = nx * cols + ny;
            if visited.get(index).as_deref() == Some(&true) {
                continue;
            }
            visited.set(index, true);
            stack.push((nx, ny));
        }
    }

    area
}

#[cfg(test)]
mod tests {
    use super::{RoomMap, UNASSIGNED};
    use crate::spatial::direction::Direction;
    use crate::spatial::grid::WallGrid;

    #[test]
    fn test_identifiers_follow_scan_order() {
        // Vertical wall down the middle of a 2x2 grid: left room first
        let grid = WallGrid::with_walls(
            2,
            2,
            &[(0, 0, Direction::East), (1, 0, Direction::East)],
        )
        .unwrap();

        let map = RoomMap::analyze(&grid);
        assert_eq!(map.room_at(0, 0), Some(1));
        assert_eq!(map.room_at(1, 0), Some(1));
        assert_eq!(map.room_at(0, 1), Some(2));
        assert_eq!(map.room_at(1, 1), Some(2));
        assert_eq!(map.room_count(), 2);
    }

    #[test]
    fn test_no_cell_left_unassigned() {
        let grid = WallGrid::with_walls(3, 4, &[(1, 1, Direction::South)]).unwrap();
        let map = RoomMap::analyze(&grid);

        for x in 0..3 {
            for y in 0..4 {
                assert_ne!(map.room_at(x, y), Some(UNASSIGNED));
            }
        }
        assert_eq!(map.room_at(3, 0), None);
    }

    #[test]
    fn test_unknown_room_has_zero_area() {
        let grid = WallGrid::new(2, 2).unwrap();
        let map = RoomMap::analyze(&grid);

        assert_eq!(map.area_of(UNASSIGNED), 0);
        assert_eq!(map.area_of(99), 0);
        assert_eq!(map.area_of(1), 4);
    }
}
