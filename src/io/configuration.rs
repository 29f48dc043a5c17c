//! Engine constants and runtime configuration defaults

use crate::spatial::direction::Direction;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid dimension
pub const MAX_GRID_DIMENSION: usize = 10_000;

// Default values for configurable parameters
/// Default number of rows for the demo grid
pub const DEFAULT_ROWS: usize = 5;

/// Default number of columns for the demo grid
pub const DEFAULT_COLS: usize = 5;

/// Fixed seed for reproducible random layouts
pub const DEFAULT_SEED: u64 = 42;

/// Default probability that any internal edge carries a wall
pub const DEFAULT_WALL_DENSITY: f64 = 0.3;

/// The classic 5x5 castle floor plan used by the `--sample` demo
///
/// East walls first, then south walls, applied in order. Analyzes to six
/// rooms with a largest area of 12; the best single removal merges the
/// 12-cell and 9-cell rooms into 21 cells.
pub const SAMPLE_WALLS: &[(usize, usize, Direction)] = &[
    (0, 0, Direction::East),
    (0, 1, Direction::East),
    (1, 0, Direction::East),
    (1, 1, Direction::East),
    (1, 2, Direction::East),
    (2, 1, Direction::East),
    (2, 2, Direction::East),
    (2, 3, Direction::East),
    (3, 3, Direction::East),
    (0, 0, Direction::South),
    (0, 1, Direction::South),
    (1, 1, Direction::South),
    (1, 2, Direction::South),
    (2, 2, Direction::South),
    (2, 3, Direction::South),
    (3, 3, Direction::South),
    (3, 4, Direction::South),
];

/// Grid dimensions the sample floor plan is defined for
pub const SAMPLE_DIMENSIONS: (usize, usize) = (5, 5);
