//! Wall store with guaranteed bidirectional consistency
//!
//! Walls are stored as a per-cell bitmask over the four cardinal directions.
//! Every mutation that touches an internal wall updates both adjacent cells
//! atomically, so the two sides of a wall can never disagree. The rest of
//! the engine depends on that invariant for correct connectivity results.

use ndarray::Array2;

use crate::io::configuration::MAX_GRID_DIMENSION;
use crate::io::error::{GridError, Result, invalid_parameter};
use crate::spatial::direction::Direction;

/// Rectangular grid of cells with directional walls
///
/// Dimensions are fixed at construction. The only mutating operations are
/// [`WallGrid::set_wall`] and [`WallGrid::toggle_wall`], both of which keep
/// the paired wall bit of the in-bounds neighbor consistent.
#[derive(Debug, Clone, PartialEq)]
pub struct WallGrid {
    /// Per-cell wall bitmask (one bit per [`Direction`])
    walls: Array2<u8>,

    /// Grid dimensions (rows, cols)
    dimensions: (usize, usize),
}

impl WallGrid {
    /// Create a grid with the given dimensions and no walls
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero or exceeds
    /// [`MAX_GRID_DIMENSION`].
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || rows > MAX_GRID_DIMENSION {
            return Err(invalid_parameter(
                "rows",
                &rows,
                &format!("must be between 1 and {MAX_GRID_DIMENSION}"),
            ));
        }
        if cols == 0 || cols > MAX_GRID_DIMENSION {
            return Err(invalid_parameter(
                "cols",
                &cols,
                &format!("must be between 1 and {MAX_GRID_DIMENSION}"),
            ));
        }

        Ok(Self {
            walls: Array2::zeros((rows, cols)),
            dimensions: (rows, cols),
        })
    }

    /// Create a grid and apply an ordered list of wall placements
    ///
    /// # Errors
    ///
    /// Returns an error for invalid dimensions or for any placement whose
    /// cell lies outside the grid. No placement is applied after the first
    /// rejected one.
    pub fn with_walls(rows: usize, cols: usize, walls: &[(usize, usize, Direction)]) -> Result<Self> {
        let mut grid = Self::new(rows, cols)?;
        for &(x, y, direction) in walls {
            grid.set_wall(x, y, direction)?;
        }
        Ok(grid)
    }

    /// Number of rows in the grid
    pub const fn rows(&self) -> usize {
        self.dimensions.0
    }

    /// Number of columns in the grid
    pub const fn cols(&self) -> usize {
        self.dimensions.1
    }

    /// Total number of cells in the grid
    pub const fn cell_count(&self) -> usize {
        self.rows() * self.cols()
    }

    /// Check whether a coordinate lies inside the grid
    pub const fn contains(&self, x: usize, y: usize) -> bool {
        x < self.rows() && y < self.cols()
    }

    /// In-bounds neighbor of a cell in the given direction, if any
    pub fn neighbor(&self, x: usize, y: usize, direction: Direction) -> Option<(usize, usize)> {
        if !self.contains(x, y) {
            return None;
        }

        let (dx, dy) = direction.offset();
        let nx = x as i32 + dx;
        let ny = y as i32 + dy;

        (nx >= 0 && (nx as usize) < self.rows() && ny >= 0 && (ny as usize) < self.cols())
            .then_some((nx as usize, ny as usize))
    }

    /// In-bounds neighbor reachable through a wall-free edge, if any
    ///
    /// The symmetry invariant guarantees that checking the near side of the
    /// edge is sufficient.
    pub fn open_neighbor(&self, x: usize, y: usize, direction: Direction) -> Option<(usize, usize)> {
        let (nx, ny) = self.neighbor(x, y, direction)?;
        (self.mask(x, y) & direction.bit() == 0).then_some((nx, ny))
    }

    /// Set the wall on a cell in the given direction
    ///
    /// If the neighbor in that direction is in bounds, its opposite wall bit
    /// is set in the same call. A boundary wall affects only the boundary
    /// cell.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfRange`] if `(x, y)` lies outside the grid;
    /// no state changes in that case.
    pub fn set_wall(&mut self, x: usize, y: usize, direction: Direction) -> Result<()> {
        self.check_bounds(x, y)?;

        if let Some(mask) = self.walls.get_mut([x, y]) {
            *mask |= direction.bit();
        }
        if let Some((nx, ny)) = self.neighbor(x, y, direction) {
            if let Some(mask) = self.walls.get_mut([nx, ny]) {
                *mask |= direction.opposite().bit();
            }
        }

        Ok(())
    }

    /// Toggle the wall on a cell in the given direction
    ///
    /// Targets the same pair of wall bits as [`WallGrid::set_wall`], so two
    /// identical toggles restore the grid bit-for-bit.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfRange`] if `(x, y)` lies outside the grid;
    /// no state changes in that case.
    pub fn toggle_wall(&mut self, x: usize, y: usize, direction: Direction) -> Result<()> {
        self.check_bounds(x, y)?;

        if let Some(mask) = self.walls.get_mut([x, y]) {
            *mask ^= direction.bit();
        }
        if let Some((nx, ny)) = self.neighbor(x, y, direction) {
            if let Some(mask) = self.walls.get_mut([nx, ny]) {
                *mask ^= direction.opposite().bit();
            }
        }

        Ok(())
    }

    /// Query whether a cell has a wall in the given direction
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfRange`] if `(x, y)` lies outside the grid.
    pub fn has_wall(&self, x: usize, y: usize, direction: Direction) -> Result<bool> {
        self.check_bounds(x, y)?;
        Ok(self.mask(x, y) & direction.bit() != 0)
    }

    /// The four wall-presence flags of a cell, in [`Direction::ALL`] order
    ///
    /// Read-only query intended for presentation consumers such as the
    /// layout renderer.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfRange`] if `(x, y)` lies outside the grid.
    pub fn wall_flags(&self, x: usize, y: usize) -> Result<[bool; 4]> {
        self.check_bounds(x, y)?;
        let mask = self.mask(x, y);
        Ok(Direction::ALL.map(|direction| mask & direction.bit() != 0))
    }

    /// Audit the bidirectional consistency invariant over the whole grid
    ///
    /// A failure indicates a construction bug in the wall store itself, not
    /// a caller error. Intended to fail loudly in tests.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::WallAsymmetry`] for the first mismatched edge.
    pub fn verify_symmetry(&self) -> Result<()> {
        for x in 0..self.rows() {
            for y in 0..self.cols() {
                for direction in Direction::ALL {
                    let Some((nx, ny)) = self.neighbor(x, y, direction) else {
                        continue;
                    };
                    let here = self.mask(x, y) & direction.bit() != 0;
                    let there = self.mask(nx, ny) & direction.opposite().bit() != 0;
                    if here != there {
                        return Err(GridError::WallAsymmetry { x, y, direction });
                    }
                }
            }
        }
        Ok(())
    }

    fn mask(&self, x: usize, y: usize) -> u8 {
        self.walls.get([x, y]).copied().unwrap_or(0)
    }

    const fn check_bounds(&self, x: usize, y: usize) -> Result<()> {
        if self.contains(x, y) {
            Ok(())
        } else {
            Err(GridError::OutOfRange {
                x,
                y,
                rows: self.rows(),
                cols: self.cols(),
            })
        }
    }
}

/// Scoped wall removal that restores the wall when the scope ends
///
/// Used by the brute-force removal strategy: the wall is toggled off on
/// entry and toggled back on by [`ToggleScope::restore`], or by `Drop` if
/// the measuring code exits early. Either way the grid leaves the scope
/// bit-for-bit identical to how it entered.
pub struct ToggleScope<'a> {
    grid: &'a mut WallGrid,
    x: usize,
    y: usize,
    direction: Direction,
    restored: bool,
}

impl<'a> ToggleScope<'a> {
    /// Toggle a wall off and arm the restore guard
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfRange`] if `(x, y)` lies outside the grid;
    /// the guard is not armed in that case.
    pub fn remove(grid: &'a mut WallGrid, x: usize, y: usize, direction: Direction) -> Result<Self> {
        grid.toggle_wall(x, y, direction)?;
        Ok(Self {
            grid,
            x,
            y,
            direction,
            restored: false,
        })
    }

    /// Read access to the grid with the wall removed
    pub fn grid(&self) -> &WallGrid {
        self.grid
    }

    /// Toggle the wall back on and disarm the guard
    ///
    /// # Errors
    ///
    /// Cannot fail in practice: the coordinates were validated when the
    /// scope was created. The `Result` exists so callers propagate instead
    /// of unwrapping.
    pub fn restore(mut self) -> Result<()> {
        self.restored = true;
        self.grid.toggle_wall(self.x, self.y, self.direction)
    }

    /// Grid coordinates and direction of the removed wall
    pub fn target(&self) -> (usize, usize, Direction) {
        (self.x, self.y, self.direction)
    }
}

impl Drop for ToggleScope<'_> {
    fn drop(&mut self) {
        if !self.restored {
            // Coordinates were validated on entry, so the reverse toggle
            // cannot fail.
            let _ = self.grid.toggle_wall(self.x, self.y, self.direction);
        }
    }
}
