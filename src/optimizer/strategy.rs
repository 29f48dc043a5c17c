//! Contract shared by the wall-removal search strategies

use crate::io::error::Result;
use crate::spatial::direction::Direction;
use crate::spatial::grid::WallGrid;

/// Outcome of a removal search: the wall whose removal merges the most area
///
/// The combined area is the sum of the two formerly-separate rooms adjacent
/// to the removed wall. Walls whose two sides already share a room are
/// redundant and never reported.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BestRemoval {
    /// Cell count of the merged room that removal would produce
    pub combined_area: usize,

    /// Cell owning the winning wall (row, col)
    pub cell: (usize, usize),

    /// Direction of the winning wall relative to its cell
    pub direction: Direction,
}

/// A removal search over all candidate walls
///
/// Implementations iterate cells row-major and directions in
/// [`Direction::ALL`] order with strict improvement, so any two strategies
/// agree not only on the combined area but on the winning position among
/// ties.
pub trait RemovalStrategy {
    /// Human-readable strategy name for reports and benchmarks
    fn name(&self) -> &'static str;

    /// Find the wall removal producing the largest combined room
    ///
    /// Candidates are (cell, direction) pairs where a wall currently exists
    /// and the neighbor is in bounds. Returns `Ok(None)` when no removable
    /// wall merges two rooms (fully open grid, 1x1 grid, or only redundant
    /// walls). The grid is left bit-for-bit identical to its pre-call state
    /// on every exit path.
    ///
    /// # Errors
    ///
    /// Propagates wall-store errors; these cannot occur for coordinates the
    /// search itself generates, so a constructed grid never observes one.
    fn find_best_removal(&self, grid: &mut WallGrid) -> Result<Option<BestRemoval>>;
}
